//! Per-query memoization of graph lookups.
//!
//! The BFS revisits the same routes and stations via many paths; this
//! cache makes each distinct `route_stops_for_station` and
//! `route_stops_for_route` call hit the store at most once per query.
//! It is created and discarded with the query, so no TTL or eviction is
//! needed: its size is bounded by the query's working set.

use std::collections::HashMap;
use std::sync::Arc;

use crate::domain::{RouteId, RouteStop, StationId};
use crate::graph::{GraphDataAccess, GraphError};

/// Hit/miss counts, exposed for observability and tests.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CacheStats {
    pub hits: usize,
    pub misses: usize,
}

/// Memoizing wrapper over a [`GraphDataAccess`] for one query execution.
pub struct TransferGraphCache<'a, G> {
    graph: &'a G,
    station_stops: HashMap<StationId, Arc<Vec<RouteStop>>>,
    route_stops: HashMap<RouteId, Arc<Vec<RouteStop>>>,
    stats: CacheStats,
}

impl<'a, G: GraphDataAccess> TransferGraphCache<'a, G> {
    /// Create a cache over the given store.
    pub fn new(graph: &'a G) -> Self {
        Self {
            graph,
            station_stops: HashMap::new(),
            route_stops: HashMap::new(),
            stats: CacheStats::default(),
        }
    }

    /// All route stops touching a station, memoized.
    pub async fn route_stops_for_station(
        &mut self,
        id: &StationId,
    ) -> Result<Arc<Vec<RouteStop>>, GraphError> {
        if let Some(stops) = self.station_stops.get(id) {
            self.stats.hits += 1;
            return Ok(Arc::clone(stops));
        }

        self.stats.misses += 1;
        let stops = Arc::new(self.graph.route_stops_for_station(id).await?);
        self.station_stops.insert(id.clone(), Arc::clone(&stops));
        Ok(stops)
    }

    /// All stops of a route, ordered, memoized.
    pub async fn route_stops_for_route(
        &mut self,
        id: &RouteId,
    ) -> Result<Arc<Vec<RouteStop>>, GraphError> {
        if let Some(stops) = self.route_stops.get(id) {
            self.stats.hits += 1;
            return Ok(Arc::clone(stops));
        }

        self.stats.misses += 1;
        let stops = Arc::new(self.graph.route_stops_for_route(id).await?);
        self.route_stops.insert(id.clone(), Arc::clone(&stops));
        Ok(stops)
    }

    /// Current hit/miss counts.
    pub fn stats(&self) -> CacheStats {
        self.stats
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Route, Station, TransportMode};
    use crate::graph::MemoryGraph;

    fn sid(s: &str) -> StationId {
        StationId::parse(s).unwrap()
    }

    fn rid(s: &str) -> RouteId {
        RouteId::parse(s).unwrap()
    }

    fn sample() -> MemoryGraph {
        let mut graph = MemoryGraph::new();
        for s in ["a", "b"] {
            graph.insert_station(Station {
                id: sid(s),
                full_name: s.to_uppercase(),
                transport_mode: TransportMode::Metro,
                latitude: None,
                longitude: None,
            });
        }
        graph.insert_route(
            Route {
                id: rid("r1"),
                short_title: "1".into(),
                full_title: "One".into(),
                transport_mode: TransportMode::Metro,
                route_info_url: None,
            },
            vec![sid("a"), sid("b")],
        );
        graph
    }

    #[tokio::test]
    async fn repeated_lookups_hit_cache() {
        let graph = sample();
        let mut cache = TransferGraphCache::new(&graph);

        let first = cache.route_stops_for_route(&rid("r1")).await.unwrap();
        let second = cache.route_stops_for_route(&rid("r1")).await.unwrap();

        assert_eq!(first, second);
        assert_eq!(cache.stats(), CacheStats { hits: 1, misses: 1 });
    }

    #[tokio::test]
    async fn station_and_route_caches_are_independent() {
        let graph = sample();
        let mut cache = TransferGraphCache::new(&graph);

        cache.route_stops_for_station(&sid("a")).await.unwrap();
        cache.route_stops_for_route(&rid("r1")).await.unwrap();
        cache.route_stops_for_station(&sid("a")).await.unwrap();
        cache.route_stops_for_route(&rid("r1")).await.unwrap();

        assert_eq!(cache.stats(), CacheStats { hits: 2, misses: 2 });
    }

    #[tokio::test]
    async fn empty_results_are_cached_too() {
        let graph = sample();
        let mut cache = TransferGraphCache::new(&graph);

        let stops = cache.route_stops_for_station(&sid("ghost")).await.unwrap();
        assert!(stops.is_empty());

        cache.route_stops_for_station(&sid("ghost")).await.unwrap();
        assert_eq!(cache.stats(), CacheStats { hits: 1, misses: 1 });
    }
}
