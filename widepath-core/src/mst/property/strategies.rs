//! Strategy builders for widest-path property tests.
//!
//! Graphs stay at eight nodes or fewer so the brute-force oracle remains
//! cheap. Weights are drawn from a narrow range to force frequent ties.

use proptest::prelude::*;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::EdgeWeightGraph;

/// Largest graph handed to the brute-force oracle.
pub(super) const MAX_ORACLE_NODES: usize = 8;

/// Generates small graphs, connected or not, with possible self-loops and
/// parallel edges.
pub(super) fn small_graph_strategy() -> impl Strategy<Value = EdgeWeightGraph> {
    (1..=MAX_ORACLE_NODES).prop_flat_map(|node_count| {
        prop::collection::vec((0..node_count, 0..node_count, 0..=20_i32), 0..=16).prop_map(
            move |triples| {
                EdgeWeightGraph::from_triples(node_count, triples)
                    .expect("strategy only yields in-range triples")
            },
        )
    })
}

/// Generates a connected graph from a seed: a random spanning path plus
/// `extra` random edges.
pub(super) fn seeded_connected_graph(seed: u64, node_count: usize, extra: usize) -> EdgeWeightGraph {
    let mut rng = SmallRng::seed_from_u64(seed);
    let mut order: Vec<usize> = (0..node_count).collect();
    for index in (1..node_count).rev() {
        order.swap(index, rng.gen_range(0..=index));
    }

    let mut graph = EdgeWeightGraph::new(node_count);
    for pair in order.windows(2) {
        graph
            .add_edge(pair[0], pair[1], rng.gen_range(0..=50))
            .expect("path endpoints are in range");
    }
    for _ in 0..extra {
        let from = rng.gen_range(0..node_count);
        let to = rng.gen_range(0..node_count);
        graph
            .add_edge(from, to, rng.gen_range(0..=50))
            .expect("random endpoints are in range");
    }
    graph
}
