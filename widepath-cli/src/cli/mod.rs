//! Command-line interface orchestration for widepath.
//!
//! The CLI solves graphs read from a file or stdin, renders them as
//! Graphviz documents, and generates random inputs.

mod commands;

pub use commands::{
    Cli, CliError, Command, DotCommand, ExecutionSummary, GenerateCommand, SolveCommand, run_cli,
};

#[cfg(test)]
mod test_helpers;
