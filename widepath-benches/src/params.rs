//! Benchmark parameter types.

use std::fmt;

use widepath_core::RandomGraphConfig;

/// Parameters for a pipeline benchmark run.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct PipelineBenchParams {
    /// Number of nodes in the generated graph.
    pub node_count: usize,
    /// Number of edges in the generated graph.
    pub edge_count: usize,
}

impl PipelineBenchParams {
    /// Generator configuration for this run with the given seed.
    #[must_use]
    pub const fn graph_config(&self, seed: u64) -> RandomGraphConfig {
        RandomGraphConfig::new(self.node_count, self.edge_count, seed)
    }
}

impl fmt::Display for PipelineBenchParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "n={},m={}", self.node_count, self.edge_count)
    }
}
