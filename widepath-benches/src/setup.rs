//! Input preparation shared by the benchmarks.

use widepath_core::{
    BottleneckTable, EdgeWeightGraph, TreeGraph, generate, maximum_spanning_forest,
};

use crate::{error::BenchSetupError, params::PipelineBenchParams};

/// Precomputed artefacts for each pipeline stage of one benchmark size.
#[derive(Debug)]
pub struct StageInputs {
    /// Input text in the `N M` followed by `from to weight` format.
    pub input: Vec<u8>,
    /// Parsed graph.
    pub graph: EdgeWeightGraph,
    /// Maximum spanning forest of `graph`.
    pub forest: TreeGraph,
    /// Bottleneck table derived from `forest`.
    pub table: BottleneckTable,
}

impl StageInputs {
    /// Generates a graph for `params` and runs every stage once.
    ///
    /// # Errors
    /// Returns [`BenchSetupError`] if generation or any stage fails.
    pub fn prepare(params: &PipelineBenchParams, seed: u64) -> Result<Self, BenchSetupError> {
        let graph = generate(&params.graph_config(seed))?;
        let mut input = Vec::new();
        graph
            .write_input(&mut input)
            .map_err(BenchSetupError::Input)?;
        let forest = maximum_spanning_forest(&graph)?;
        let table = forest.bottlenecks()?;
        Ok(Self {
            input,
            graph,
            forest,
            table,
        })
    }
}
