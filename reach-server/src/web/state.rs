//! Application state for the web layer.

use std::sync::Arc;

use crate::engine::EngineConfig;
use crate::graph::MemoryGraph;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// The loaded transit graph.
    pub graph: Arc<MemoryGraph>,

    /// Engine safety-bound configuration.
    pub config: Arc<EngineConfig>,
}

impl AppState {
    /// Create a new app state.
    pub fn new(graph: MemoryGraph, config: EngineConfig) -> Self {
        Self {
            graph: Arc::new(graph),
            config: Arc::new(config),
        }
    }
}
