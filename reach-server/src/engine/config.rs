//! Engine configuration.

use std::time::Duration;

/// Safety bounds for a single reachability traversal.
///
/// Real transit graphs contain hub stations and cycles; the bounds force
/// early, graceful termination instead of letting a pathological query
/// run unbounded. Hitting a bound is not an error: the traversal stops
/// and returns what it has found so far.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// Maximum number of frontier entries dequeued before stopping.
    pub max_iterations: usize,

    /// Maximum queue length; enqueueing past this stops the traversal.
    pub max_queue_size: usize,

    /// Optional wall-clock budget per query, checked once per iteration.
    pub time_budget: Option<Duration>,
}

impl EngineConfig {
    /// Create a configuration with explicit bounds and no time budget.
    pub fn new(max_iterations: usize, max_queue_size: usize) -> Self {
        Self {
            max_iterations,
            max_queue_size,
            time_budget: None,
        }
    }

    /// Set a wall-clock budget for each query.
    pub fn with_time_budget(mut self, budget: Duration) -> Self {
        self.time_budget = Some(budget);
        self
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            max_iterations: 100_000,
            max_queue_size: 50_000,
            time_budget: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = EngineConfig::default();

        assert_eq!(config.max_iterations, 100_000);
        assert_eq!(config.max_queue_size, 50_000);
        assert!(config.time_budget.is_none());
    }

    #[test]
    fn custom_config() {
        let config = EngineConfig::new(500, 100).with_time_budget(Duration::from_millis(250));

        assert_eq!(config.max_iterations, 500);
        assert_eq!(config.max_queue_size, 100);
        assert_eq!(config.time_budget, Some(Duration::from_millis(250)));
    }
}
