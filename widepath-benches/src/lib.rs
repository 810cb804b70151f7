//! Benchmark support crate for widepath.
//!
//! Provides parameter types and setup helpers used by the Criterion
//! benchmarks for the pipeline stages: input parsing, maximum spanning
//! forest construction, bottleneck propagation and table serialization.

pub mod error;
pub mod params;
pub mod setup;
