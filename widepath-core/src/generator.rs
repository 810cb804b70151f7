//! Seeded random graph generation.
//!
//! Produces inputs for benchmarks, fuzzing and the `generate` command.
//! Generated graphs never contain self-loops or repeated
//! `(from, to, weight)` triples, and weights lie in `1..=max_weight`.

use std::collections::HashSet;

use rand::{Rng, SeedableRng, rngs::SmallRng};
use thiserror::Error;
use tracing::{debug, instrument};

use crate::{error::define_error_codes, graph::EdgeWeightGraph};

/// Upper bound on triples reserved up front in the deduplication set.
const MAX_PREALLOCATED_TRIPLES: usize = 1 << 20;

/// Parameters for [`generate`].
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct RandomGraphConfig {
    /// Number of nodes in the generated graph.
    pub node_count: usize,
    /// Number of edges to emit.
    pub edge_count: usize,
    /// Largest weight drawn; weights lie in `1..=max_weight`.
    pub max_weight: u64,
    /// Seed for the deterministic random number generator.
    pub seed: u64,
}

impl RandomGraphConfig {
    /// Creates a configuration whose maximum weight equals the edge count.
    ///
    /// # Examples
    /// ```
    /// use widepath_core::RandomGraphConfig;
    ///
    /// let config = RandomGraphConfig::new(10, 30, 7);
    /// assert_eq!(config.max_weight, 30);
    /// ```
    #[must_use]
    pub const fn new(node_count: usize, edge_count: usize, seed: u64) -> Self {
        Self {
            node_count,
            edge_count,
            max_weight: edge_count as u64,
            seed,
        }
    }
}

/// Errors raised by [`generate`].
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum GeneratorError {
    /// Edges were requested but fewer than two nodes exist.
    #[error("cannot place {edge_count} edges without self-loops on {node_count} nodes")]
    TooFewNodes {
        /// Requested node count.
        node_count: usize,
        /// Requested edge count.
        edge_count: usize,
    },
    /// Edges were requested with no admissible weights.
    #[error("max_weight must be at least 1 when edges are requested")]
    ZeroMaxWeight,
    /// More edges were requested than distinct triples exist.
    #[error("requested {edge_count} edges but only {available} distinct triples exist")]
    TooManyEdges {
        /// Requested edge count.
        edge_count: usize,
        /// Number of distinct `(from, to, weight)` triples available.
        available: u128,
    },
    /// The maximum weight does not fit a signed 32-bit integer.
    #[error("max_weight {max_weight} exceeds the supported maximum {max}", max = i32::MAX)]
    WeightOutOfRange {
        /// Requested maximum weight.
        max_weight: u64,
    },
}

define_error_codes! {
    /// Stable codes describing [`GeneratorError`] variants.
    enum GeneratorErrorCode for GeneratorError {
        /// Edges were requested but fewer than two nodes exist.
        TooFewNodes => TooFewNodes { .. } => "GENERATOR_TOO_FEW_NODES",
        /// Edges were requested with no admissible weights.
        ZeroMaxWeight => ZeroMaxWeight => "GENERATOR_ZERO_MAX_WEIGHT",
        /// More edges were requested than distinct triples exist.
        TooManyEdges => TooManyEdges { .. } => "GENERATOR_TOO_MANY_EDGES",
        /// The maximum weight does not fit a signed 32-bit integer.
        WeightOutOfRange => WeightOutOfRange { .. } => "GENERATOR_WEIGHT_OUT_OF_RANGE",
    }
}

/// Generates a random graph as described by `config`.
///
/// The same configuration always yields the same graph.
///
/// # Errors
/// Returns a [`GeneratorError`] when the configuration cannot be satisfied.
///
/// # Examples
/// ```
/// use widepath_core::{RandomGraphConfig, generate};
///
/// let graph = generate(&RandomGraphConfig::new(5, 8, 42))?;
/// assert_eq!(graph.node_count(), 5);
/// assert_eq!(graph.edges().len(), 8);
/// assert!(graph.edges().iter().all(|edge| !edge.is_self_loop()));
/// # Ok::<(), widepath_core::GeneratorError>(())
/// ```
#[instrument(
    name = "core.generate",
    err,
    skip(config),
    fields(
        nodes = config.node_count,
        edges = config.edge_count,
        max_weight = config.max_weight,
        seed = config.seed,
    ),
)]
pub fn generate(config: &RandomGraphConfig) -> Result<EdgeWeightGraph, GeneratorError> {
    let max_weight = validate(config)?;
    let mut graph = EdgeWeightGraph::new(config.node_count);
    if config.edge_count == 0 {
        return Ok(graph);
    }

    let mut rng = SmallRng::seed_from_u64(config.seed);
    let mut seen = HashSet::with_capacity(config.edge_count.min(MAX_PREALLOCATED_TRIPLES));
    while seen.len() < config.edge_count {
        let from = rng.gen_range(0..config.node_count);
        let to = rng.gen_range(0..config.node_count);
        let weight = rng.gen_range(1..=max_weight);
        if from == to || !seen.insert((from, to, weight)) {
            continue;
        }
        graph
            .add_edge(from, to, weight)
            .map_err(|_| GeneratorError::WeightOutOfRange {
                max_weight: config.max_weight,
            })?;
    }

    debug!(edges = graph.edges().len(), "random graph generated");
    Ok(graph)
}

fn validate(config: &RandomGraphConfig) -> Result<i32, GeneratorError> {
    let max_weight = i32::try_from(config.max_weight).map_err(|_| {
        GeneratorError::WeightOutOfRange {
            max_weight: config.max_weight,
        }
    })?;
    if config.edge_count == 0 {
        return Ok(max_weight);
    }
    if config.node_count < 2 {
        return Err(GeneratorError::TooFewNodes {
            node_count: config.node_count,
            edge_count: config.edge_count,
        });
    }
    if max_weight == 0 {
        return Err(GeneratorError::ZeroMaxWeight);
    }

    let nodes = config.node_count as u128;
    let available = nodes * (nodes - 1) * u128::from(config.max_weight);
    if config.edge_count as u128 > available {
        return Err(GeneratorError::TooManyEdges {
            edge_count: config.edge_count,
            available,
        });
    }
    Ok(max_weight)
}
