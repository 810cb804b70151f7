//! Benchmark setup error type.
//!
//! Aggregates the errors that may arise while preparing benchmark inputs so
//! that setup functions can propagate failures with `?` instead of using
//! `.expect()`.

use widepath_core::{GeneratorError, MstError, SerializeError, TableError, WidepathError};

/// Errors that may occur during benchmark setup.
#[derive(Debug, thiserror::Error)]
pub enum BenchSetupError {
    /// Random graph generation failed.
    #[error("graph generation failed: {0}")]
    Generator(#[from] GeneratorError),
    /// Spanning forest construction failed.
    #[error("MST computation failed: {0}")]
    Mst(#[from] MstError),
    /// Allocating the bottleneck table failed.
    #[error("table allocation failed: {0}")]
    Table(#[from] TableError),
    /// Rendering the table failed.
    #[error("table serialization failed: {0}")]
    Serialize(#[from] SerializeError),
    /// Building or running the pipeline failed.
    #[error("pipeline failed: {0}")]
    Widepath(#[from] WidepathError),
    /// Writing the generated graph as text failed.
    #[error("failed to render generated input: {0}")]
    Input(#[source] std::io::Error),
}
