//! Graphviz rendering of an input graph and its spanning forest.
//!
//! Input edges are drawn black; forest edges are drawn again in red on top
//! of them so the selected tree stands out in the rendered image.

use std::io::{self, Write};

use crate::{graph::EdgeWeightGraph, tree::TreeGraph};

/// Writes `graph` as an undirected Graphviz document.
///
/// When `forest` is supplied each of its edges is emitted once more in red.
///
/// # Errors
/// Returns any error raised by `writer`.
///
/// # Examples
/// ```
/// use widepath_core::{EdgeWeightGraph, render_dot};
///
/// let graph = EdgeWeightGraph::from_triples(2, [(0, 1, 7)])?;
/// let mut out = Vec::new();
/// render_dot(&graph, None, &mut out)?;
/// let text = String::from_utf8(out)?;
/// assert!(text.starts_with("graph widepath {\n"));
/// assert!(text.contains("0 -- 1 [color=black,label=\"7\"];"));
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub fn render_dot(
    graph: &EdgeWeightGraph,
    forest: Option<&TreeGraph>,
    mut writer: impl Write,
) -> io::Result<()> {
    writeln!(writer, "graph widepath {{")?;
    for node in 0..graph.node_count() {
        writeln!(writer, "    {node};")?;
    }
    for edge in graph.edges() {
        writeln!(
            writer,
            "    {} -- {} [color=black,label=\"{}\"];",
            edge.from(),
            edge.to(),
            edge.weight()
        )?;
    }
    if let Some(forest) = forest {
        for edge in forest.edges() {
            writeln!(
                writer,
                "    {} -- {} [color=red,label=\"{}\"];",
                edge.from(),
                edge.to(),
                edge.weight()
            )?;
        }
    }
    writeln!(writer, "}}")?;
    writer.flush()
}
