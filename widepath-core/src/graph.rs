//! Edge-list graph read from the textual input format.
//!
//! The input is `<nodeCount> <edgeCount>` followed by `edgeCount`
//! `<from> <to> <weight>` triples, all unsigned decimal integers separated by
//! spaces or newlines. Missing tokens read as `0`; node ids and weights are
//! validated before they reach the spanning-forest builder.

use std::io::{self, Read, Write};

use thiserror::Error;
use tracing::warn;

use crate::{error::define_error_codes, tokenizer::Tokenizer};

/// Upper bound on edges reserved up front, whatever the header claims.
const MAX_PREALLOCATED_EDGES: usize = 1 << 20;

/// Errors raised while building or reading an [`EdgeWeightGraph`].
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum GraphError {
    /// The input source failed.
    #[error("failed to read graph input: {source}")]
    Read {
        /// Underlying I/O failure.
        #[source]
        source: io::Error,
    },
    /// The declared node count cannot be backed by an `N x N` table.
    #[error("node count {node_count} is too large for an all-pairs table")]
    NodeCountTooLarge {
        /// Node count declared by the input.
        node_count: u64,
    },
    /// An edge endpoint was not in `0..node_count`.
    #[error("edge {edge_index} references node {node}, but node_count is {node_count}")]
    InvalidNodeId {
        /// Zero-based position of the edge in the input.
        edge_index: usize,
        /// The invalid endpoint.
        node: u64,
        /// Number of nodes in the graph.
        node_count: usize,
    },
    /// An edge weight did not fit a signed 32-bit integer.
    #[error("edge {edge_index} has weight {weight}, above the supported maximum {max}", max = i32::MAX)]
    WeightOutOfRange {
        /// Zero-based position of the edge in the input.
        edge_index: usize,
        /// The weight as read.
        weight: u64,
    },
    /// A caller supplied a negative weight.
    #[error("edge weight {weight} is negative")]
    NegativeWeight {
        /// The rejected weight.
        weight: i32,
    },
}

define_error_codes! {
    /// Stable codes describing [`GraphError`] variants.
    enum GraphErrorCode for GraphError {
        /// The input source failed.
        Read => Read { .. } => "GRAPH_READ_FAILURE",
        /// The declared node count cannot be backed by an `N x N` table.
        NodeCountTooLarge => NodeCountTooLarge { .. } => "GRAPH_NODE_COUNT_TOO_LARGE",
        /// An edge endpoint was not in `0..node_count`.
        InvalidNodeId => InvalidNodeId { .. } => "GRAPH_INVALID_NODE_ID",
        /// An edge weight did not fit a signed 32-bit integer.
        WeightOutOfRange => WeightOutOfRange { .. } => "GRAPH_WEIGHT_OUT_OF_RANGE",
        /// A caller supplied a negative weight.
        NegativeWeight => NegativeWeight { .. } => "GRAPH_NEGATIVE_WEIGHT",
    }
}

impl From<io::Error> for GraphError {
    fn from(source: io::Error) -> Self {
        Self::Read { source }
    }
}

/// An undirected weighted edge, stored in the direction it was read.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Edge {
    from: usize,
    to: usize,
    weight: i32,
}

impl Edge {
    /// Creates an edge between `from` and `to`.
    #[must_use]
    pub const fn new(from: usize, to: usize, weight: i32) -> Self {
        Self { from, to, weight }
    }

    /// Returns the endpoint the edge was read from.
    #[must_use]
    #[rustfmt::skip]
    pub const fn from(&self) -> usize { self.from }

    /// Returns the endpoint the edge was read to.
    #[must_use]
    #[rustfmt::skip]
    pub const fn to(&self) -> usize { self.to }

    /// Returns the edge weight.
    #[must_use]
    #[rustfmt::skip]
    pub const fn weight(&self) -> i32 { self.weight }

    /// Returns `true` when both endpoints coincide.
    #[must_use]
    pub const fn is_self_loop(&self) -> bool {
        self.from == self.to
    }
}

/// Node count plus the list of edges between nodes `0..node_count`.
///
/// # Examples
/// ```
/// use widepath_core::EdgeWeightGraph;
///
/// let mut graph = EdgeWeightGraph::new(3);
/// graph.add_edge(0, 1, 5)?;
/// graph.add_edge(1, 2, 3)?;
/// assert_eq!(graph.edges().len(), 2);
/// assert!(graph.add_edge(0, 3, 1).is_err());
/// # Ok::<(), widepath_core::GraphError>(())
/// ```
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct EdgeWeightGraph {
    node_count: usize,
    edges: Vec<Edge>,
}

impl EdgeWeightGraph {
    /// Creates a graph with `node_count` nodes and no edges.
    #[must_use]
    pub fn new(node_count: usize) -> Self {
        Self {
            node_count,
            edges: Vec::new(),
        }
    }

    /// Builds a graph from `(from, to, weight)` triples.
    ///
    /// # Errors
    /// Returns [`GraphError::InvalidNodeId`] or [`GraphError::NegativeWeight`]
    /// for the first offending triple.
    pub fn from_triples(
        node_count: usize,
        triples: impl IntoIterator<Item = (usize, usize, i32)>,
    ) -> Result<Self, GraphError> {
        let mut graph = Self::new(node_count);
        for (from, to, weight) in triples {
            graph.add_edge(from, to, weight)?;
        }
        Ok(graph)
    }

    /// Returns the number of nodes.
    #[must_use]
    #[rustfmt::skip]
    pub fn node_count(&self) -> usize { self.node_count }

    /// Returns the edges in insertion order.
    #[must_use]
    #[rustfmt::skip]
    pub fn edges(&self) -> &[Edge] { &self.edges }

    /// Appends an edge after validating its endpoints and weight.
    ///
    /// # Errors
    /// Returns [`GraphError::InvalidNodeId`] when an endpoint is not below
    /// [`Self::node_count`] and [`GraphError::NegativeWeight`] when `weight`
    /// is negative.
    pub fn add_edge(&mut self, from: usize, to: usize, weight: i32) -> Result<(), GraphError> {
        let edge_index = self.edges.len();
        for node in [from, to] {
            if node >= self.node_count {
                return Err(GraphError::InvalidNodeId {
                    edge_index,
                    node: node as u64,
                    node_count: self.node_count,
                });
            }
        }
        if weight < 0 {
            return Err(GraphError::NegativeWeight { weight });
        }
        self.edges.push(Edge::new(from, to, weight));
        Ok(())
    }

    /// Reads a graph in the textual input format.
    ///
    /// Reading stops early once the source is exhausted, or once a whole edge
    /// consumes no input because the cursor sits on a byte that is neither a
    /// digit nor a separator (a `\r`, a sign, a byte-order mark). Edges that
    /// would be parsed entirely from missing tokens are `0 0 0` self-loops
    /// and cannot change the result.
    ///
    /// # Errors
    /// Returns [`GraphError::Read`] when the source fails,
    /// [`GraphError::NodeCountTooLarge`] when the all-pairs table could not be
    /// addressed, [`GraphError::InvalidNodeId`] for endpoints outside
    /// `0..node_count`, and [`GraphError::WeightOutOfRange`] for weights above
    /// [`i32::MAX`].
    pub fn read_from<R: Read>(tokenizer: &mut Tokenizer<R>) -> Result<Self, GraphError> {
        let declared_nodes = tokenizer.read_unsigned()?;
        tokenizer.skip_separators()?;
        let declared_edges = tokenizer.read_unsigned()?;
        tokenizer.skip_separators()?;

        let node_count = checked_node_count(declared_nodes)?;
        let reserve = usize::try_from(declared_edges)
            .unwrap_or(usize::MAX)
            .min(MAX_PREALLOCATED_EDGES);
        let mut graph = Self {
            node_count,
            edges: Vec::with_capacity(reserve),
        };

        let mut read = 0u64;
        while read < declared_edges {
            if tokenizer.is_exhausted() {
                warn!(
                    declared_edges,
                    read_edges = read,
                    "input ended before the declared edge count"
                );
                break;
            }
            let start = tokenizer.consumed();
            let from = tokenizer.read_unsigned()?;
            tokenizer.skip_separators()?;
            let to = tokenizer.read_unsigned()?;
            tokenizer.skip_separators()?;
            let weight = tokenizer.read_unsigned()?;
            tokenizer.skip_separators()?;
            if tokenizer.consumed() == start {
                warn!(
                    declared_edges,
                    read_edges = read,
                    offset = start,
                    "input stalled on a byte that is neither a digit nor a separator"
                );
                break;
            }
            graph.push_raw(from, to, weight)?;
            read += 1;
        }

        Ok(graph)
    }

    /// Writes the graph back out in the textual input format.
    ///
    /// # Errors
    /// Returns any error raised by `writer`.
    pub fn write_input(&self, mut writer: impl Write) -> io::Result<()> {
        writeln!(writer, "{} {}", self.node_count, self.edges.len())?;
        for edge in &self.edges {
            writeln!(writer, "{} {} {}", edge.from, edge.to, edge.weight)?;
        }
        Ok(())
    }

    fn push_raw(&mut self, from: u64, to: u64, weight: u64) -> Result<(), GraphError> {
        let edge_index = self.edges.len();
        let from = self.checked_node(edge_index, from)?;
        let to = self.checked_node(edge_index, to)?;
        let weight =
            i32::try_from(weight).map_err(|_| GraphError::WeightOutOfRange { edge_index, weight })?;
        self.edges.push(Edge::new(from, to, weight));
        Ok(())
    }

    fn checked_node(&self, edge_index: usize, node: u64) -> Result<usize, GraphError> {
        usize::try_from(node)
            .ok()
            .filter(|&id| id < self.node_count)
            .ok_or(GraphError::InvalidNodeId {
                edge_index,
                node,
                node_count: self.node_count,
            })
    }
}

/// Accepts node counts whose `N x N` table of `i32` can be addressed.
fn checked_node_count(declared: u64) -> Result<usize, GraphError> {
    let too_large = GraphError::NodeCountTooLarge {
        node_count: declared,
    };
    let Ok(node_count) = usize::try_from(declared) else {
        return Err(too_large);
    };
    let table_bytes = node_count
        .checked_mul(node_count)
        .and_then(|cells| cells.checked_mul(size_of::<i32>()));
    match table_bytes {
        Some(bytes) if bytes <= isize::MAX.unsigned_abs() => Ok(node_count),
        _ => Err(too_large),
    }
}
