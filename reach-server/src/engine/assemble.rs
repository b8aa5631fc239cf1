//! Result hydration.
//!
//! Turns the engine's transfer-count map into the full result: station
//! details plus the routes currently serving each station. Hydration is
//! best-effort: an id that no longer resolves (the store changed between
//! phases) is logged and dropped rather than failing the whole result.

use std::collections::HashMap;
use std::collections::HashSet;

use tracing::warn;

use crate::domain::{Route, RouteId, Station, StationId};
use crate::graph::GraphDataAccess;

/// A station in the final result.
#[derive(Debug, Clone)]
pub struct ReachableStation {
    pub station: Station,

    /// Minimum number of route changes needed from the origin.
    pub transfer_count: u32,

    /// Routes currently serving this station.
    pub routes: Vec<Route>,
}

/// The full answer to a reachability query.
#[derive(Debug, Clone)]
pub struct ReachabilityResult {
    pub origin: Station,
    pub max_transfers: u32,

    /// Unordered; each station appears at most once.
    pub reachable_stations: Vec<ReachableStation>,
}

/// Hydrates transfer-count maps into [`ReachabilityResult`]s.
pub struct ResultAssembler<'a, G> {
    graph: &'a G,
}

impl<'a, G: GraphDataAccess> ResultAssembler<'a, G> {
    /// Create an assembler over the given store.
    pub fn new(graph: &'a G) -> Self {
        Self { graph }
    }

    /// Hydrate the transfer map.
    ///
    /// Stations or routes that fail to resolve are dropped with a
    /// warning; the rest of the result is still returned.
    pub async fn assemble(
        &self,
        origin: Station,
        max_transfers: u32,
        transfers: &HashMap<StationId, u32>,
    ) -> ReachabilityResult {
        let mut reachable_stations = Vec::with_capacity(transfers.len());

        for (station_id, &transfer_count) in transfers {
            let station = match self.graph.station(station_id).await {
                Ok(Some(station)) => station,
                Ok(None) => {
                    warn!(%station_id, "reachable station missing from store, dropping");
                    continue;
                }
                Err(e) => {
                    warn!(%station_id, error = %e, "station hydration failed, dropping");
                    continue;
                }
            };

            let routes = self.serving_routes(station_id).await;

            reachable_stations.push(ReachableStation {
                station,
                transfer_count,
                routes,
            });
        }

        ReachabilityResult {
            origin,
            max_transfers,
            reachable_stations,
        }
    }

    /// Distinct resolvable routes touching a station.
    async fn serving_routes(&self, station_id: &StationId) -> Vec<Route> {
        let stops = match self.graph.route_stops_for_station(station_id).await {
            Ok(stops) => stops,
            Err(e) => {
                warn!(%station_id, error = %e, "serving-route lookup failed, omitting routes");
                return Vec::new();
            }
        };

        let mut seen: HashSet<RouteId> = HashSet::new();
        let mut routes = Vec::new();

        for stop in stops {
            if !seen.insert(stop.route_id.clone()) {
                continue;
            }
            match self.graph.route_summary(&stop.route_id).await {
                Ok(Some(route)) => routes.push(route),
                Ok(None) => {
                    warn!(route_id = %stop.route_id, "serving route missing from store, dropping");
                }
                Err(e) => {
                    warn!(route_id = %stop.route_id, error = %e, "route hydration failed, dropping");
                }
            }
        }

        routes
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::TransportMode;
    use crate::graph::MemoryGraph;

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
            transport_mode: TransportMode::Tram,
            latitude: None,
            longitude: None,
        }
    }

    fn route(id: &str) -> Route {
        Route {
            id: rid(id),
            short_title: id.to_string(),
            full_title: format!("Route {id}"),
            transport_mode: TransportMode::Tram,
            route_info_url: None,
        }
    }

    fn sample() -> MemoryGraph {
        let mut graph = MemoryGraph::new();
        for s in ["o", "a", "b"] {
            graph.insert_station(station(s));
        }
        graph.insert_route(route("r1"), vec![sid("o"), sid("a")]);
        graph.insert_route(route("r2"), vec![sid("a"), sid("b")]);
        graph
    }

    #[tokio::test]
    async fn hydrates_stations_and_routes() {
        let graph = sample();
        let assembler = ResultAssembler::new(&graph);

        let mut transfers = HashMap::new();
        transfers.insert(sid("a"), 0);
        transfers.insert(sid("b"), 1);

        let result = assembler.assemble(station("o"), 2, &transfers).await;

        assert_eq!(result.origin.id, sid("o"));
        assert_eq!(result.max_transfers, 2);
        assert_eq!(result.reachable_stations.len(), 2);

        let a = result
            .reachable_stations
            .iter()
            .find(|r| r.station.id == sid("a"))
            .unwrap();
        assert_eq!(a.transfer_count, 0);
        let mut route_ids: Vec<&str> = a.routes.iter().map(|r| r.id.as_str()).collect();
        route_ids.sort();
        assert_eq!(route_ids, vec!["r1", "r2"]);

        let b = result
            .reachable_stations
            .iter()
            .find(|r| r.station.id == sid("b"))
            .unwrap();
        assert_eq!(b.transfer_count, 1);
        assert_eq!(b.routes.len(), 1);
        assert_eq!(b.routes[0].id, rid("r2"));
    }

    #[tokio::test]
    async fn unresolvable_station_is_dropped_not_fatal() {
        let graph = sample();
        let assembler = ResultAssembler::new(&graph);

        let mut transfers = HashMap::new();
        transfers.insert(sid("a"), 0);
        // Present in the map but not in the store.
        transfers.insert(sid("ghost"), 1);

        let result = assembler.assemble(station("o"), 1, &transfers).await;

        assert_eq!(result.reachable_stations.len(), 1);
        assert_eq!(result.reachable_stations[0].station.id, sid("a"));
    }

    #[tokio::test]
    async fn empty_map_yields_empty_result() {
        let graph = sample();
        let assembler = ResultAssembler::new(&graph);

        let result = assembler.assemble(station("o"), 0, &HashMap::new()).await;
        assert!(result.reachable_stations.is_empty());
    }
}
