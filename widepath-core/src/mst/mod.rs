//! Maximum spanning forest construction.
//!
//! Kruskal's algorithm run over edges sorted by DESCENDING weight. By the cut
//! property the tree path between any two nodes of a maximum spanning tree
//! has the largest bottleneck of all paths between them in the original
//! graph, which is what the bottleneck table reports.

use tracing::{debug, instrument};

use crate::{
    disjoint_set::{DisjointSet, DisjointSetError},
    graph::{Edge, EdgeWeightGraph},
    tree::TreeGraph,
};

/// Errors returned while computing a maximum spanning forest.
#[derive(Clone, Debug, thiserror::Error, PartialEq)]
#[non_exhaustive]
pub enum MstError {
    /// The union-find structure rejected an operation, indicating a logic
    /// error or an unvalidated edge.
    #[error("disjoint set failure: {0}")]
    DisjointSet(#[from] DisjointSetError),
}

impl MstError {
    /// Returns a stable, machine-readable error code for the variant.
    #[must_use]
    pub const fn code(&self) -> MstErrorCode {
        match self {
            Self::DisjointSet(_) => MstErrorCode::DisjointSet,
        }
    }
}

/// Machine-readable error codes for [`MstError`].
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum MstErrorCode {
    /// The union-find structure rejected an operation.
    DisjointSet,
}

impl MstErrorCode {
    /// Returns the symbolic identifier for logging surfaces.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::DisjointSet => "MST_DISJOINT_SET",
        }
    }
}

/// Computes a maximum spanning forest with Kruskal's algorithm.
///
/// Edges are visited heaviest first; ties keep input order, so the result is
/// deterministic. Self-loops never join two partitions and are skipped
/// naturally. Selection stops as soon as a single partition remains.
///
/// # Errors
/// Returns [`MstError::DisjointSet`] if an edge references a node outside
/// the graph, which [`EdgeWeightGraph`] validation rules out.
///
/// # Examples
/// ```
/// use widepath_core::{EdgeWeightGraph, maximum_spanning_forest};
///
/// let graph = EdgeWeightGraph::from_triples(3, [(0, 1, 5), (1, 2, 3), (0, 2, 1)])?;
/// let forest = maximum_spanning_forest(&graph)?;
/// assert!(forest.is_tree());
/// assert_eq!(forest.edge_count(), 2);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[instrument(
    name = "core.mst",
    err,
    skip(graph),
    fields(nodes = graph.node_count(), edges = graph.edges().len()),
)]
pub fn maximum_spanning_forest(graph: &EdgeWeightGraph) -> Result<TreeGraph, MstError> {
    let node_count = graph.node_count();
    let mut forest = TreeGraph::new(node_count);
    let mut partitions = DisjointSet::new(node_count);

    if partitions.partition_count() > 1 {
        for edge in heaviest_first(graph.edges()) {
            let from_root = partitions.find(edge.from())?;
            let to_root = partitions.find(edge.to())?;
            if from_root == to_root {
                continue;
            }
            forest.insert(edge.from(), edge.to(), edge.weight());
            partitions.merge(from_root, to_root)?;
            if partitions.partition_count() == 1 {
                break;
            }
        }
    }

    forest.set_component_count(partitions.partition_count());
    debug!(
        tree_edges = forest.edge_count(),
        components = forest.component_count(),
        "spanning forest complete"
    );
    Ok(forest)
}

/// Orders edges by descending weight.
///
/// Reversing this to ascending would build a minimum spanning tree and
/// report narrowest paths instead.
fn heaviest_first(edges: &[Edge]) -> Vec<&Edge> {
    let mut ordered: Vec<&Edge> = edges.iter().collect();
    ordered.sort_by(|left, right| right.weight().cmp(&left.weight()));
    ordered
}

#[cfg(test)]
mod property;
