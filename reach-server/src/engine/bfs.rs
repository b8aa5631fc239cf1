//! Minimum-transfer reachability search.
//!
//! Breadth-first search over the bipartite station/route graph. The
//! single source of truth during the search is the visited map
//! `station id -> best transfer count`; an entry is only ever revised
//! downward. Each frontier entry remembers the route it arrived on so
//! expansion never re-boards that route, but no per-path route history
//! is kept.
//!
//! Reachability along a route is symmetric: every stop of a route is
//! zero transfers from every other stop, regardless of position.

use std::collections::{HashMap, VecDeque};
use std::time::Instant;

use crate::domain::{RouteId, RouteStop, StationId};
use crate::graph::{GraphDataAccess, GraphError};

use super::cache::{CacheStats, TransferGraphCache};
use super::config::EngineConfig;
use super::observe::{TracingObserver, TraversalObserver};

/// Error from the reachability engine.
#[derive(Debug, Clone, thiserror::Error)]
pub enum EngineError {
    /// The origin station does not exist in the graph.
    #[error("origin station not found: {0}")]
    OriginNotFound(StationId),

    /// The graph store failed unexpectedly.
    #[error(transparent)]
    Graph(#[from] GraphError),
}

/// A reachability request: origin plus a transfer budget.
///
/// Any `max_transfers` value is accepted; the engine's safety bounds
/// protect against runaway searches independently of it. Policy limits
/// (such as the HTTP layer's 0..=3 range) belong to the caller.
#[derive(Debug, Clone)]
pub struct ReachabilityQuery {
    /// Station the search starts from.
    pub origin: StationId,

    /// Maximum number of route changes allowed.
    pub max_transfers: u32,
}

impl ReachabilityQuery {
    /// Create a new query.
    pub fn new(origin: StationId, max_transfers: u32) -> Self {
        Self {
            origin,
            max_transfers,
        }
    }
}

/// How the traversal ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TraversalOutcome {
    /// The frontier drained normally; the result is complete.
    Exhausted,

    /// The iteration cap stopped the search; the result is partial.
    IterationBoundHit,

    /// The queue-size cap stopped the search; the result is partial.
    QueueBoundHit,

    /// The per-query time budget ran out; the result is partial.
    DeadlineHit,
}

impl TraversalOutcome {
    /// Whether the search was cut short by a safety bound.
    pub fn is_bounded(&self) -> bool {
        !matches!(self, TraversalOutcome::Exhausted)
    }
}

/// Statistics from one traversal.
#[derive(Debug, Clone, Copy)]
pub struct TraversalStats {
    /// Frontier entries dequeued.
    pub iterations: usize,

    /// Largest queue length observed.
    pub peak_queue: usize,

    /// Route expansions performed.
    pub routes_expanded: usize,

    /// Cache hit/miss counts for the query.
    pub cache: CacheStats,

    /// Terminal state of the search.
    pub outcome: TraversalOutcome,
}

/// Output of the engine: best transfer count per reachable station,
/// origin excluded, plus traversal statistics.
#[derive(Debug, Clone)]
pub struct Traversal {
    pub transfers: HashMap<StationId, u32>,
    pub stats: TraversalStats,
}

/// An immutable frontier entry awaiting expansion.
#[derive(Debug, Clone)]
struct FrontierEntry {
    station: StationId,
    transfers: u32,

    /// Route this entry was reached on; never re-boarded from here.
    via_route: RouteId,
}

const DEFAULT_OBSERVER: &TracingObserver = &TracingObserver;

/// The BFS core.
///
/// Borrows the graph and configuration for the duration of one or more
/// queries; each call to [`reachable`](Self::reachable) owns its own
/// cache and visited state, so one engine value can serve sequential
/// queries and separate engines can run concurrently over the same
/// store.
pub struct ReachabilityEngine<'a, G> {
    graph: &'a G,
    config: &'a EngineConfig,
    observer: &'a dyn TraversalObserver,
}

impl<'a, G: GraphDataAccess> ReachabilityEngine<'a, G> {
    /// Create an engine reporting through the default tracing observer.
    pub fn new(graph: &'a G, config: &'a EngineConfig) -> Self {
        Self {
            graph,
            config,
            observer: DEFAULT_OBSERVER,
        }
    }

    /// Create an engine with an explicit observer.
    pub fn with_observer(
        graph: &'a G,
        config: &'a EngineConfig,
        observer: &'a dyn TraversalObserver,
    ) -> Self {
        Self {
            graph,
            config,
            observer,
        }
    }

    /// Compute the minimum-transfer map from an origin.
    ///
    /// Returns every station reachable within `max_transfers` route
    /// changes, mapped to the smallest number of changes that reaches
    /// it. The origin itself is excluded. If a safety bound trips, the
    /// map computed so far is returned and the outcome records which
    /// bound was hit.
    pub async fn reachable(&self, query: &ReachabilityQuery) -> Result<Traversal, EngineError> {
        let origin = &query.origin;

        self.graph
            .station(origin)
            .await?
            .ok_or_else(|| EngineError::OriginNotFound(origin.clone()))?;

        let started = Instant::now();
        let deadline = self.config.time_budget.map(|budget| started + budget);

        let mut cache = TransferGraphCache::new(self.graph);
        let mut visited: HashMap<StationId, u32> = HashMap::new();
        let mut queue: VecDeque<FrontierEntry> = VecDeque::new();

        // The origin is marked visited at 0 so expansion never writes it;
        // it is stripped from the output below.
        visited.insert(origin.clone(), 0);

        // Seed: every stop of every route through the origin is reachable
        // without a transfer.
        let origin_stops = cache.route_stops_for_station(origin).await?;
        for route_id in distinct_routes(&origin_stops) {
            let stops = cache.route_stops_for_route(&route_id).await?;
            for stop in stops.iter() {
                if stop.station_id == *origin || visited.contains_key(&stop.station_id) {
                    continue;
                }
                visited.insert(stop.station_id.clone(), 0);
                queue.push_back(FrontierEntry {
                    station: stop.station_id.clone(),
                    transfers: 0,
                    via_route: route_id.clone(),
                });
            }
        }

        self.observer.seeded(queue.len(), visited.len() - 1);

        let mut iterations = 0usize;
        let mut peak_queue = queue.len();
        let mut routes_expanded = 0usize;
        let mut outcome = TraversalOutcome::Exhausted;

        'search: while let Some(entry) = queue.pop_front() {
            if let Some(deadline) = deadline
                && Instant::now() >= deadline
            {
                outcome = TraversalOutcome::DeadlineHit;
                break;
            }

            iterations += 1;
            if iterations > self.config.max_iterations {
                outcome = TraversalOutcome::IterationBoundHit;
                break;
            }

            // Entries at the budget stay in the result but are not expanded.
            if entry.transfers >= query.max_transfers {
                continue;
            }

            // Stale entry: this station was since reached more cheaply and
            // has been (or will be) expanded at the better cost.
            match visited.get(&entry.station) {
                Some(&best) if best < entry.transfers => continue,
                _ => {}
            }

            let next_transfers = entry.transfers + 1;

            let station_stops = cache.route_stops_for_station(&entry.station).await?;
            for route_id in distinct_routes(&station_stops) {
                if route_id == entry.via_route {
                    continue;
                }
                routes_expanded += 1;

                let stops = cache.route_stops_for_route(&route_id).await?;
                for stop in stops.iter() {
                    if stop.station_id == entry.station {
                        continue;
                    }

                    let improves = match visited.get(&stop.station_id) {
                        Some(&best) => best > next_transfers,
                        None => true,
                    };
                    if !improves {
                        continue;
                    }

                    visited.insert(stop.station_id.clone(), next_transfers);

                    if queue.len() >= self.config.max_queue_size {
                        outcome = TraversalOutcome::QueueBoundHit;
                        break 'search;
                    }
                    queue.push_back(FrontierEntry {
                        station: stop.station_id.clone(),
                        transfers: next_transfers,
                        via_route: route_id.clone(),
                    });
                    peak_queue = peak_queue.max(queue.len());
                }
            }
        }

        visited.remove(origin);

        let stats = TraversalStats {
            iterations,
            peak_queue,
            routes_expanded,
            cache: cache.stats(),
            outcome,
        };

        if outcome.is_bounded() {
            self.observer.bound_exceeded(outcome, &stats);
        }
        self.observer.finished(&stats);

        Ok(Traversal {
            transfers: visited,
            stats,
        })
    }
}

/// Distinct route ids in a stop list, in first-seen order.
fn distinct_routes(stops: &[RouteStop]) -> Vec<RouteId> {
    let mut seen = std::collections::HashSet::new();
    let mut routes = Vec::new();
    for stop in stops {
        if seen.insert(stop.route_id.clone()) {
            routes.push(stop.route_id.clone());
        }
    }
    routes
}
