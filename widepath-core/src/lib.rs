//! Widest-path (bottleneck) tables for weighted undirected graphs.
//!
//! The pipeline reads an edge list, keeps a maximum spanning forest with
//! Kruskal's algorithm, walks the forest from every node to fill an
//! all-pairs bottleneck table, and renders the table as text in one bulk
//! write.
#![cfg_attr(docsrs, feature(doc_cfg))]

mod builder;
mod disjoint_set;
mod dot;
mod error;
#[cfg(feature = "generator")]
#[cfg_attr(docsrs, doc(cfg(feature = "generator")))]
mod generator;
mod graph;
mod mst;
mod serializer;
mod table;
#[cfg(test)]
mod test_utils;
mod tokenizer;
mod tree;
mod widepath;

#[cfg(feature = "generator")]
pub use crate::generator::{GeneratorError, GeneratorErrorCode, RandomGraphConfig, generate};
pub use crate::{
    builder::WidepathBuilder,
    disjoint_set::{DisjointSet, DisjointSetError, DisjointSetErrorCode},
    dot::render_dot,
    error::{Result, WidepathError, WidepathErrorCode},
    graph::{Edge, EdgeWeightGraph, GraphError, GraphErrorCode},
    mst::{MstError, MstErrorCode, maximum_spanning_forest},
    serializer::{
        MAX_FORMATTED_LEN, SerializeError, SerializeErrorCode, encode_table, format_integer,
        write_table,
    },
    table::{BottleneckTable, TableError, TableErrorCode, UNREACHABLE},
    tokenizer::{DEFAULT_READ_BUFFER_SIZE, Tokenizer},
    tree::{TreeEdge, TreeGraph},
    widepath::{SolveSummary, Solution, Widepath, solve},
};
