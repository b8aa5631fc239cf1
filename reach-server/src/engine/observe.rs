//! Telemetry port for the traversal.
//!
//! The BFS reports notable events through this trait instead of logging
//! inline, so the algorithm can be tested without log assertions and the
//! host can route events wherever it wants.

use tracing::{debug, warn};

use super::bfs::{TraversalOutcome, TraversalStats};

/// Observer for traversal events.
///
/// All methods default to no-ops; implementors override what they need.
/// Observers are shared by reference across await points, hence `Sync`.
pub trait TraversalObserver: Sync {
    /// The frontier has been seeded from the origin's routes.
    fn seeded(&self, _frontier_len: usize, _stations_marked: usize) {}

    /// A safety bound or the time budget stopped the traversal early.
    fn bound_exceeded(&self, _outcome: TraversalOutcome, _stats: &TraversalStats) {}

    /// The traversal finished (exhausted or bounded).
    fn finished(&self, _stats: &TraversalStats) {}
}

/// Default observer: structured `tracing` events.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingObserver;

impl TraversalObserver for TracingObserver {
    fn seeded(&self, frontier_len: usize, stations_marked: usize) {
        debug!(frontier_len, stations_marked, "reachability frontier seeded");
    }

    fn bound_exceeded(&self, outcome: TraversalOutcome, stats: &TraversalStats) {
        warn!(
            ?outcome,
            iterations = stats.iterations,
            peak_queue = stats.peak_queue,
            routes_expanded = stats.routes_expanded,
            "reachability traversal stopped early, returning partial result"
        );
    }

    fn finished(&self, stats: &TraversalStats) {
        debug!(
            ?stats.outcome,
            iterations = stats.iterations,
            peak_queue = stats.peak_queue,
            routes_expanded = stats.routes_expanded,
            "reachability traversal finished"
        );
    }
}

/// Observer that ignores everything. Useful in tests and benchmarks.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullObserver;

impl TraversalObserver for NullObserver {}
