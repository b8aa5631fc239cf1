//! Core domain types for the transit graph.
//!
//! Stations and routes form a bipartite graph: a route touches an
//! ordered sequence of stations, and a station may be touched by any
//! number of routes. All ids are opaque strings validated on entry.

mod route;
mod station;

pub use route::{InvalidRouteId, Route, RouteId, RouteStop};
pub use station::{InvalidStationId, Station, StationId, TransportMode, UnknownTransportMode};
