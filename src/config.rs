use serde::{Deserialize, Serialize};

/// Frontier strategy used by [`PathFinder`](crate::PathFinder)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Strategy {
    /// Binary heap with lazy deletion
    #[default]
    PriorityQueue,
    /// Linear scan of unfinalized vertices
    Scan,
    /// Scan on graphs with at most `scan_threshold` vertices, heap otherwise
    Auto,
}

/// Configuration for path finding
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PathFinderConfig {
    pub strategy: Strategy,
    pub scan_threshold: usize,
}

impl Default for PathFinderConfig {
    fn default() -> Self {
        Self {
            strategy: Strategy::PriorityQueue,
            scan_threshold: 32,
        }
    }
}

impl PathFinderConfig {
    pub fn with_strategy(mut self, strategy: Strategy) -> Self {
        self.strategy = strategy;
        self
    }

    pub fn with_scan_threshold(mut self, scan_threshold: usize) -> Self {
        self.scan_threshold = scan_threshold;
        self
    }

    /// Strategy actually run for a graph with `vertex_count` vertices
    pub fn resolve(&self, vertex_count: usize) -> Strategy {
        match self.strategy {
            Strategy::Auto if vertex_count <= self.scan_threshold => Strategy::Scan,
            Strategy::Auto => Strategy::PriorityQueue,
            other => other,
        }
    }
}
