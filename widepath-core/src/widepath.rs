//! Pipeline orchestration: read, span, propagate, serialise.
//!
//! Provides the [`Widepath`] runtime entry point and the [`SolveSummary`]
//! it reports after a run.

use std::{
    io::{Read, Write},
    num::NonZeroUsize,
};

use tracing::{Span, field, info, instrument, warn};

use crate::{
    Result,
    dot::render_dot,
    error::WidepathError,
    graph::EdgeWeightGraph,
    mst::maximum_spanning_forest,
    serializer::write_table,
    table::BottleneckTable,
    tokenizer::Tokenizer,
    tree::TreeGraph,
};

/// Entry point for running the widest-path pipeline.
///
/// # Examples
/// ```
/// use widepath_core::WidepathBuilder;
///
/// let widepath = WidepathBuilder::new().build()?;
/// let mut output = Vec::new();
/// let summary = widepath.run(&b"3 3\n0 1 5\n1 2 3\n0 2 1\n"[..], &mut output)?;
/// assert_eq!(output, b"0 5 3\n5 0 3\n3 3 0\n");
/// assert_eq!(summary.tree_edge_count(), 2);
/// # Ok::<(), widepath_core::WidepathError>(())
/// ```
#[derive(Debug, Clone)]
pub struct Widepath {
    read_buffer_size: NonZeroUsize,
}

/// The spanning forest of a graph together with its bottleneck table.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Solution {
    forest: TreeGraph,
    table: BottleneckTable,
}

impl Solution {
    /// Returns the maximum spanning forest.
    #[must_use]
    #[rustfmt::skip]
    pub fn forest(&self) -> &TreeGraph { &self.forest }

    /// Returns the all-pairs bottleneck table.
    #[must_use]
    #[rustfmt::skip]
    pub fn table(&self) -> &BottleneckTable { &self.table }

    /// Consumes the solution, returning the bottleneck table.
    #[must_use]
    pub fn into_table(self) -> BottleneckTable {
        self.table
    }
}

/// Counters describing a completed [`Widepath::run`].
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct SolveSummary {
    node_count: usize,
    edge_count: usize,
    tree_edge_count: usize,
    component_count: usize,
    bytes_written: usize,
}

impl SolveSummary {
    /// Returns the number of nodes declared by the input.
    #[must_use]
    #[rustfmt::skip]
    pub const fn node_count(&self) -> usize { self.node_count }

    /// Returns the number of edges read from the input.
    #[must_use]
    #[rustfmt::skip]
    pub const fn edge_count(&self) -> usize { self.edge_count }

    /// Returns the number of edges kept in the spanning forest.
    #[must_use]
    #[rustfmt::skip]
    pub const fn tree_edge_count(&self) -> usize { self.tree_edge_count }

    /// Returns the number of connected components.
    #[must_use]
    #[rustfmt::skip]
    pub const fn component_count(&self) -> usize { self.component_count }

    /// Returns the size of the rendered table in bytes.
    #[must_use]
    #[rustfmt::skip]
    pub const fn bytes_written(&self) -> usize { self.bytes_written }
}

impl Widepath {
    pub(crate) const fn new(read_buffer_size: NonZeroUsize) -> Self {
        Self { read_buffer_size }
    }

    /// Returns the capacity of the input read buffer.
    #[must_use]
    pub const fn read_buffer_size(&self) -> NonZeroUsize {
        self.read_buffer_size
    }

    /// Reads and validates a graph in the textual input format.
    ///
    /// # Errors
    /// Returns [`WidepathError::Graph`] when reading or validation fails.
    #[instrument(
        name = "core.read_graph",
        err,
        skip(self, reader),
        fields(
            read_buffer_size = self.read_buffer_size.get(),
            nodes = field::Empty,
            edges = field::Empty,
        ),
    )]
    pub fn load_graph<R: Read>(&self, reader: R) -> Result<EdgeWeightGraph> {
        let mut tokenizer = Tokenizer::with_capacity(reader, self.read_buffer_size);
        let graph = EdgeWeightGraph::read_from(&mut tokenizer)?;
        let span = Span::current();
        span.record("nodes", graph.node_count());
        span.record("edges", graph.edges().len());
        Ok(graph)
    }

    /// Builds the maximum spanning forest and its bottleneck table.
    ///
    /// A disconnected graph is not an error: cells between components hold
    /// [`UNREACHABLE`](crate::UNREACHABLE) and a warning is logged.
    ///
    /// The table is allocated before the forest is built, so a graph too
    /// large to tabulate fails fast.
    ///
    /// # Errors
    /// Returns [`WidepathError::Table`] when the `N x N` table cannot be
    /// allocated and [`WidepathError::Mst`] if the spanning-forest builder
    /// fails.
    pub fn solve_graph(&self, graph: &EdgeWeightGraph) -> Result<Solution> {
        let mut table = BottleneckTable::unreachable(graph.node_count())?;
        let forest = maximum_spanning_forest(graph)?;
        if forest.component_count() > 1 {
            warn!(
                components = forest.component_count(),
                "graph is disconnected; pairs across components are unreachable"
            );
        }
        propagate(&forest, &mut table);
        Ok(Solution { forest, table })
    }

    /// Reads a graph from `reader` and writes its bottleneck table to
    /// `writer` in one bulk write.
    ///
    /// # Errors
    /// Returns [`WidepathError::Graph`] for unreadable or invalid input,
    /// [`WidepathError::Table`] when the table cannot be allocated,
    /// [`WidepathError::Mst`] if the forest cannot be built and
    /// [`WidepathError::Serialize`] when the table cannot be written in
    /// full.
    #[instrument(
        name = "core.run",
        err,
        skip(self, reader, writer),
        fields(read_buffer_size = self.read_buffer_size.get()),
    )]
    pub fn run<R: Read, W: Write>(&self, reader: R, writer: W) -> Result<SolveSummary> {
        let graph = self.load_graph(reader)?;
        let solution = self.solve_graph(&graph)?;
        let bytes_written = write_table(solution.table(), writer)?;

        let summary = SolveSummary {
            node_count: graph.node_count(),
            edge_count: graph.edges().len(),
            tree_edge_count: solution.forest().edge_count(),
            component_count: solution.forest().component_count(),
            bytes_written,
        };
        info!(
            nodes = summary.node_count,
            edges = summary.edge_count,
            components = summary.component_count,
            bytes = summary.bytes_written,
            "bottleneck table complete"
        );
        Ok(summary)
    }

    /// Writes `graph` as a Graphviz document, overlaying its maximum
    /// spanning forest when `with_forest` is set.
    ///
    /// # Errors
    /// Returns [`WidepathError::Mst`] if the forest cannot be built and
    /// [`WidepathError::Io`] when `writer` fails.
    pub fn write_dot<W: Write>(
        &self,
        graph: &EdgeWeightGraph,
        with_forest: bool,
        writer: W,
    ) -> Result<()> {
        let forest = if with_forest {
            Some(maximum_spanning_forest(graph)?)
        } else {
            None
        };
        render_dot(graph, forest.as_ref(), writer).map_err(|source| WidepathError::Io {
            document: "graphviz document",
            source,
        })
    }
}

#[instrument(
    name = "core.bottlenecks",
    skip(forest, table),
    fields(nodes = forest.node_count(), tree_edges = forest.edge_count()),
)]
fn propagate(forest: &TreeGraph, table: &mut BottleneckTable) {
    forest.fill_bottlenecks(table);
}

/// Runs the pipeline with the default configuration.
///
/// # Errors
/// Returns the same errors as [`Widepath::run`].
///
/// # Examples
/// ```
/// let mut output = Vec::new();
/// widepath_core::solve(&b"2 1\n0 1 7\n"[..], &mut output)?;
/// assert_eq!(output, b"0 7\n7 0\n");
/// # Ok::<(), widepath_core::WidepathError>(())
/// ```
pub fn solve<R: Read, W: Write>(reader: R, writer: W) -> Result<SolveSummary> {
    Widepath::new(crate::DEFAULT_READ_BUFFER_SIZE).run(reader, writer)
}
