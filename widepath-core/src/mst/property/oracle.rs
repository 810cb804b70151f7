//! Brute-force widest-path oracle.
//!
//! Enumerates every simple path between each pair of nodes and keeps the
//! best bottleneck. Exponential, so only suitable for graphs of a handful
//! of nodes.

use crate::{EdgeWeightGraph, UNREACHABLE};

/// Returns the widest-path value for every ordered pair, row-major.
pub(super) fn widest_paths(graph: &EdgeWeightGraph) -> Vec<i32> {
    let node_count = graph.node_count();
    let mut adjacency = vec![Vec::new(); node_count];
    for edge in graph.edges() {
        if edge.is_self_loop() {
            continue;
        }
        adjacency[edge.from()].push((edge.to(), edge.weight()));
        adjacency[edge.to()].push((edge.from(), edge.weight()));
    }

    let mut table = vec![UNREACHABLE; node_count * node_count];
    let mut on_path = vec![false; node_count];
    for source in 0..node_count {
        let row = &mut table[source * node_count..(source + 1) * node_count];
        explore(&adjacency, source, i32::MAX, &mut on_path, row);
        row[source] = 0;
    }
    table
}

fn explore(
    adjacency: &[Vec<(usize, i32)>],
    node: usize,
    bottleneck: i32,
    on_path: &mut [bool],
    row: &mut [i32],
) {
    row[node] = row[node].max(bottleneck);
    on_path[node] = true;
    for &(next, weight) in &adjacency[node] {
        if !on_path[next] {
            explore(adjacency, next, bottleneck.min(weight), on_path, row);
        }
    }
    on_path[node] = false;
}
