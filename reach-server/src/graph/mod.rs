//! Read-only access to the station/route graph.
//!
//! The engine never talks to a concrete store directly; it consumes the
//! [`GraphDataAccess`] trait so it can run against the in-memory store,
//! a future relational backend, or a mock in tests.

mod feed;
mod memory;

pub use feed::{FeedError, load_feed, load_feed_str};
pub use memory::MemoryGraph;

use crate::domain::{Route, RouteId, RouteStop, Station, StationId};

/// Error from the underlying graph store.
#[derive(Debug, Clone, thiserror::Error)]
pub enum GraphError {
    /// The storage layer failed unexpectedly (connectivity, corruption).
    #[error("graph storage error: {message}")]
    Storage { message: String },
}

/// Read-only lookups over the transit graph.
///
/// Contract: pure reads, safe to call repeatedly and concurrently.
/// Implementations take `&self`; each query owns its own cache on top,
/// so no memoization is expected here.
#[allow(async_fn_in_trait)]
pub trait GraphDataAccess {
    /// Look up a station by id. Absent stations are `Ok(None)`.
    async fn station(&self, id: &StationId) -> Result<Option<Station>, GraphError>;

    /// All route stops touching a station, across every route.
    async fn route_stops_for_station(
        &self,
        id: &StationId,
    ) -> Result<Vec<RouteStop>, GraphError>;

    /// All stops of a route, ordered by position.
    async fn route_stops_for_route(&self, id: &RouteId) -> Result<Vec<RouteStop>, GraphError>;

    /// Route summary for result hydration. Absent routes are `Ok(None)`.
    async fn route_summary(&self, id: &RouteId) -> Result<Option<Route>, GraphError>;
}
