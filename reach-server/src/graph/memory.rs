//! In-memory graph store.
//!
//! Holds the full station/route graph with stop lists indexed both ways,
//! built once at startup (or by tests) and immutable afterwards, so
//! concurrent queries can read it without locking.

use std::collections::HashMap;

use crate::domain::{Route, RouteId, RouteStop, Station, StationId};

use super::{GraphDataAccess, GraphError};

/// Immutable in-memory implementation of [`GraphDataAccess`].
#[derive(Debug, Default)]
pub struct MemoryGraph {
    stations: HashMap<StationId, Station>,
    routes: HashMap<RouteId, Route>,

    /// Stops of each route, ordered by position.
    stops_by_route: HashMap<RouteId, Vec<RouteStop>>,

    /// All stops touching each station, across routes.
    stops_by_station: HashMap<StationId, Vec<RouteStop>>,
}

impl MemoryGraph {
    /// Create an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a station. Replaces any previous station with the same id.
    pub fn insert_station(&mut self, station: Station) {
        self.stations.insert(station.id.clone(), station);
    }

    /// Add a route with its ordered stop sequence.
    ///
    /// Positions are assigned from the order of `stops`. Replaces any
    /// previous route with the same id, including its stop rows.
    pub fn insert_route(&mut self, route: Route, stops: Vec<StationId>) {
        let route_id = route.id.clone();

        // Drop stale station-side rows if the route is being replaced.
        if self.routes.contains_key(&route_id) {
            for rows in self.stops_by_station.values_mut() {
                rows.retain(|rs| rs.route_id != route_id);
            }
        }

        let rows: Vec<RouteStop> = stops
            .into_iter()
            .enumerate()
            .map(|(position, station_id)| RouteStop {
                route_id: route_id.clone(),
                station_id,
                position: position as u32,
            })
            .collect();

        for row in &rows {
            self.stops_by_station
                .entry(row.station_id.clone())
                .or_default()
                .push(row.clone());
        }

        self.stops_by_route.insert(route_id.clone(), rows);
        self.routes.insert(route_id, route);
    }

    /// Number of stations in the graph.
    pub fn station_count(&self) -> usize {
        self.stations.len()
    }

    /// Number of routes in the graph.
    pub fn route_count(&self) -> usize {
        self.routes.len()
    }
}

impl GraphDataAccess for MemoryGraph {
    async fn station(&self, id: &StationId) -> Result<Option<Station>, GraphError> {
        Ok(self.stations.get(id).cloned())
    }

    async fn route_stops_for_station(
        &self,
        id: &StationId,
    ) -> Result<Vec<RouteStop>, GraphError> {
        Ok(self.stops_by_station.get(id).cloned().unwrap_or_default())
    }

    async fn route_stops_for_route(&self, id: &RouteId) -> Result<Vec<RouteStop>, GraphError> {
        Ok(self.stops_by_route.get(id).cloned().unwrap_or_default())
    }

    async fn route_summary(&self, id: &RouteId) -> Result<Option<Route>, GraphError> {
        Ok(self.routes.get(id).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::TransportMode;

    fn sid(s: &str) -> StationId {
        StationId::parse(s).unwrap()
    }

    fn rid(s: &str) -> RouteId {
        RouteId::parse(s).unwrap()
    }

    fn station(id: &str) -> Station {
        Station {
            id: sid(id),
            full_name: id.to_uppercase(),
            transport_mode: TransportMode::Bus,
            latitude: None,
            longitude: None,
        }
    }

    fn route(id: &str) -> Route {
        Route {
            id: rid(id),
            short_title: id.to_string(),
            full_title: format!("Route {id}"),
            transport_mode: TransportMode::Bus,
            route_info_url: None,
        }
    }

    fn sample() -> MemoryGraph {
        let mut graph = MemoryGraph::new();
        for s in ["a", "b", "c"] {
            graph.insert_station(station(s));
        }
        graph.insert_route(route("r1"), vec![sid("a"), sid("b"), sid("c")]);
        graph.insert_route(route("r2"), vec![sid("b"), sid("c")]);
        graph
    }

    #[tokio::test]
    async fn station_lookup() {
        let graph = sample();
        let found = graph.station(&sid("a")).await.unwrap();
        assert_eq!(found.unwrap().full_name, "A");

        let missing = graph.station(&sid("zzz")).await.unwrap();
        assert!(missing.is_none());
    }

    #[tokio::test]
    async fn route_stops_ordered_by_position() {
        let graph = sample();
        let stops = graph.route_stops_for_route(&rid("r1")).await.unwrap();
        let ids: Vec<&str> = stops.iter().map(|s| s.station_id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b", "c"]);
        let positions: Vec<u32> = stops.iter().map(|s| s.position).collect();
        assert_eq!(positions, vec![0, 1, 2]);
    }

    #[tokio::test]
    async fn stops_indexed_by_station() {
        let graph = sample();
        let stops = graph.route_stops_for_station(&sid("b")).await.unwrap();
        let mut routes: Vec<&str> = stops.iter().map(|s| s.route_id.as_str()).collect();
        routes.sort();
        assert_eq!(routes, vec!["r1", "r2"]);
    }

    #[tokio::test]
    async fn unknown_ids_yield_empty_lists() {
        let graph = sample();
        assert!(
            graph
                .route_stops_for_station(&sid("zzz"))
                .await
                .unwrap()
                .is_empty()
        );
        assert!(
            graph
                .route_stops_for_route(&rid("zzz"))
                .await
                .unwrap()
                .is_empty()
        );
        assert!(graph.route_summary(&rid("zzz")).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn reinserting_route_replaces_stops() {
        let mut graph = sample();
        graph.insert_route(route("r1"), vec![sid("a"), sid("b")]);

        let stops = graph.route_stops_for_route(&rid("r1")).await.unwrap();
        assert_eq!(stops.len(), 2);

        // c is no longer on r1, only on r2
        let at_c = graph.route_stops_for_station(&sid("c")).await.unwrap();
        let routes: Vec<&str> = at_c.iter().map(|s| s.route_id.as_str()).collect();
        assert_eq!(routes, vec!["r2"]);
    }
}
