//! The reachability engine.
//!
//! Answers "which stations can I reach from here with at most N
//! transfers?" via a bounded breadth-first search over the station/route
//! graph, then hydrates the answer into full station and route details.

mod assemble;
mod bfs;
mod cache;
mod config;
mod observe;


pub use assemble::{ReachabilityResult, ReachableStation, ResultAssembler};
pub use bfs::{
    EngineError, ReachabilityEngine, ReachabilityQuery, Traversal, TraversalOutcome,
    TraversalStats,
};
pub use cache::{CacheStats, TransferGraphCache};
pub use config::EngineConfig;
pub use observe::{NullObserver, TracingObserver, TraversalObserver};

use crate::graph::GraphDataAccess;

/// Run a full reachability query: traversal plus result assembly.
///
/// This is the one logical operation the surrounding system consumes.
/// Bound-limited traversals still succeed with a partial result; only a
/// missing origin or a store failure during traversal is an error.
pub async fn calculate_reachability<G: GraphDataAccess>(
    graph: &G,
    config: &EngineConfig,
    query: &ReachabilityQuery,
) -> Result<ReachabilityResult, EngineError> {
    let engine = ReachabilityEngine::new(graph, config);
    let traversal = engine.reachable(query).await?;

    // The engine validated the origin; a disappearing origin between the
    // phases is the same inconsistency as any other hydration miss.
    let origin = graph
        .station(&query.origin)
        .await?
        .ok_or_else(|| EngineError::OriginNotFound(query.origin.clone()))?;

    let assembler = ResultAssembler::new(graph);
    Ok(assembler
        .assemble(origin, query.max_transfers, &traversal.transfers)
        .await)
}
