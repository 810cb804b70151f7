//! Adjacency-list spanning forest and the bottleneck propagator.
//!
//! Every forest edge is stored once per direction so a walk may start from
//! either endpoint. Because paths in a forest are unique, a single
//! depth-first walk per root visits each reachable node exactly once and the
//! running minimum at that node is its bottleneck.

use crate::{
    graph::Edge,
    table::{BottleneckTable, TableError},
};

/// Running minimum before any edge has been crossed.
const UNBOUNDED: i32 = i32::MAX;

/// One directed half of a forest edge.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct TreeEdge {
    to: usize,
    weight: i32,
}

impl TreeEdge {
    /// Returns the neighbouring node.
    #[must_use]
    #[rustfmt::skip]
    pub const fn to(&self) -> usize { self.to }

    /// Returns the edge weight.
    #[must_use]
    #[rustfmt::skip]
    pub const fn weight(&self) -> i32 { self.weight }
}

/// The spanning forest produced by
/// [`maximum_spanning_forest`](crate::maximum_spanning_forest).
///
/// When the input graph is connected the forest is a single tree.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TreeGraph {
    adjacency: Vec<Vec<TreeEdge>>,
    edge_count: usize,
    component_count: usize,
}

/// Pending visit on the explicit traversal stack.
#[derive(Clone, Copy)]
struct Visit {
    node: usize,
    arrived_from: Option<usize>,
    running_min: i32,
}

impl TreeGraph {
    pub(crate) fn new(node_count: usize) -> Self {
        Self {
            adjacency: vec![Vec::new(); node_count],
            edge_count: 0,
            component_count: node_count,
        }
    }

    /// Adds an undirected edge as two directed halves.
    pub(crate) fn insert(&mut self, from: usize, to: usize, weight: i32) {
        self.adjacency[from].push(TreeEdge { to, weight });
        self.adjacency[to].push(TreeEdge { to: from, weight });
        self.edge_count += 1;
    }

    pub(crate) fn set_component_count(&mut self, component_count: usize) {
        self.component_count = component_count;
    }

    /// Returns the number of nodes.
    #[must_use]
    #[rustfmt::skip]
    pub fn node_count(&self) -> usize { self.adjacency.len() }

    /// Returns the number of undirected forest edges.
    #[must_use]
    #[rustfmt::skip]
    pub fn edge_count(&self) -> usize { self.edge_count }

    /// Returns the number of connected components spanned by the forest.
    #[must_use]
    #[rustfmt::skip]
    pub fn component_count(&self) -> usize { self.component_count }

    /// Returns `true` when the forest spans a single connected component.
    #[must_use]
    pub fn is_tree(&self) -> bool {
        self.component_count == 1
    }

    /// Returns the forest neighbours of `node` in insertion order.
    ///
    /// Unknown nodes have no neighbours.
    #[must_use]
    pub fn neighbours(&self, node: usize) -> &[TreeEdge] {
        self.adjacency
            .get(node)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Returns each forest edge once, with `from < to`.
    #[must_use]
    pub fn edges(&self) -> Vec<Edge> {
        self.adjacency
            .iter()
            .enumerate()
            .flat_map(|(from, out)| {
                out.iter()
                    .filter(move |half| from < half.to)
                    .map(move |half| Edge::new(from, half.to, half.weight))
            })
            .collect()
    }

    /// Computes the bottleneck value for every ordered pair of nodes.
    ///
    /// Each node in turn roots a depth-first walk driven by an explicit
    /// stack, so path-shaped trees of any depth are safe. Pairs in different
    /// components keep [`UNREACHABLE`](crate::UNREACHABLE); the diagonal is `0`.
    ///
    /// # Examples
    /// ```
    /// use widepath_core::{EdgeWeightGraph, maximum_spanning_forest};
    ///
    /// let graph = EdgeWeightGraph::from_triples(3, [(0, 1, 5), (1, 2, 3), (0, 2, 1)])?;
    /// let table = maximum_spanning_forest(&graph)?.bottlenecks()?;
    /// assert_eq!(table.row(0), Some(&[0, 5, 3][..]));
    /// assert_eq!(table.row(2), Some(&[3, 3, 0][..]));
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    ///
    /// # Errors
    /// Returns [`TableError`] when the `N x N` table cannot be allocated.
    pub fn bottlenecks(&self) -> Result<BottleneckTable, TableError> {
        let mut table = BottleneckTable::unreachable(self.node_count())?;
        self.fill_bottlenecks(&mut table);
        Ok(table)
    }

    /// Writes every reachable pair into `table`, which must be freshly
    /// allocated for this forest's node count.
    pub(crate) fn fill_bottlenecks(&self, table: &mut BottleneckTable) {
        debug_assert_eq!(table.node_count(), self.node_count());
        let mut stack = Vec::new();
        for root in 0..self.node_count() {
            self.walk_from(root, &mut stack, |node, running_min| {
                table.set(root, node, running_min);
            });
            table.set(root, root, 0);
        }
    }

    /// Visits every node reachable from `root`, reporting the minimum edge
    /// weight crossed on the way there.
    fn walk_from(&self, root: usize, stack: &mut Vec<Visit>, mut record: impl FnMut(usize, i32)) {
        stack.push(Visit {
            node: root,
            arrived_from: None,
            running_min: UNBOUNDED,
        });
        while let Some(visit) = stack.pop() {
            record(visit.node, visit.running_min);
            for half in &self.adjacency[visit.node] {
                if Some(half.to) == visit.arrived_from {
                    continue;
                }
                stack.push(Visit {
                    node: half.to,
                    arrived_from: Some(visit.node),
                    running_min: visit.running_min.min(half.weight),
                });
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use rstest::rstest;

    use crate::table::UNREACHABLE;

    fn forest(node_count: usize, edges: &[(usize, usize, i32)]) -> TreeGraph {
        let mut tree = TreeGraph::new(node_count);
        for &(from, to, weight) in edges {
            tree.insert(from, to, weight);
        }
        tree
    }

    #[rstest]
    fn insert_links_both_directions() {
        let tree = forest(3, &[(2, 0, 8)]);
        assert_eq!(tree.neighbours(0), &[TreeEdge { to: 2, weight: 8 }]);
        assert_eq!(tree.neighbours(2), &[TreeEdge { to: 0, weight: 8 }]);
        assert!(tree.neighbours(1).is_empty());
        assert!(tree.neighbours(9).is_empty());
        assert_eq!(tree.edge_count(), 1);
        assert_eq!(tree.edges(), vec![Edge::new(0, 2, 8)]);
    }

    #[rstest]
    fn star_bottlenecks_take_the_narrower_spoke() {
        let tree = forest(4, &[(0, 1, 7), (0, 2, 3), (0, 3, 5)]);
        let table = tree.bottlenecks().expect("small tables allocate");
        assert_eq!(table.row(1), Some(&[7, 0, 3, 5][..]));
        assert_eq!(table.row(3), Some(&[5, 5, 3, 0][..]));
    }

    #[rstest]
    fn forest_pairs_across_components_are_unreachable() {
        let mut tree = forest(4, &[(0, 1, 2)]);
        tree.set_component_count(3);
        let table = tree.bottlenecks().expect("small tables allocate");
        assert_eq!(table.row(0), Some(&[0, 2, UNREACHABLE, UNREACHABLE][..]));
        assert_eq!(table.row(2), Some(&[UNREACHABLE, UNREACHABLE, 0, UNREACHABLE][..]));
        assert!(!tree.is_tree());
    }

    #[rstest]
    fn single_node_table_is_zero() {
        let table = TreeGraph::new(1).bottlenecks().expect("small tables allocate");
        assert_eq!(table.as_slice(), &[0]);
    }

    #[rstest]
    fn zero_weight_edges_are_distinguishable_from_unreachable() {
        let table = forest(2, &[(0, 1, 0)]).bottlenecks().expect("small tables allocate");
        assert_eq!(table.get(0, 1), Some(0));
        assert!(table.is_reachable(0, 1));
    }

    #[rstest]
    fn deep_paths_do_not_exhaust_the_call_stack() {
        let node_count = 100_000;
        let mut tree = TreeGraph::new(node_count);
        for node in 1..node_count {
            let weight = i32::try_from(node).expect("fits i32");
            tree.insert(node - 1, node, weight);
        }
        // Only the first root is walked; a full all-pairs table would be
        // 40 GB at this size.
        let mut visited = 0usize;
        let mut deepest_min = UNBOUNDED;
        tree.walk_from(0, &mut Vec::new(), |node, running_min| {
            visited += 1;
            if node == node_count - 1 {
                deepest_min = running_min;
            }
        });
        assert_eq!(visited, node_count);
        assert_eq!(deepest_min, 1);
    }

    #[rstest]
    fn path_of_two_thousand_nodes_fills_the_table() {
        let node_count = 2_000;
        let mut tree = TreeGraph::new(node_count);
        for node in 1..node_count {
            tree.insert(node - 1, node, 10);
        }
        let table = tree.bottlenecks().expect("small tables allocate");
        assert_eq!(table.get(0, node_count - 1), Some(10));
        assert_eq!(table.get(node_count - 1, 0), Some(10));
        assert!(table.as_slice().iter().all(|&cell| cell == 0 || cell == 10));
    }
}
