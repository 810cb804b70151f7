//! Small helpers shared across CLI tests.
//!
//! The CLI unit tests write temporary graph files and drive commands against
//! in-memory streams. These helpers keep the test cases concise.

use std::fs;
use std::io;
use std::path::PathBuf;

use tempfile::TempDir;

use super::{Cli, CliError, Command, ExecutionSummary, run_cli};

pub(super) const TRIANGLE: &str = "3 3\n0 1 5\n1 2 3\n0 2 1\n";

pub(super) fn temp_dir() -> TempDir {
    match TempDir::new() {
        Ok(dir) => dir,
        Err(err) => panic!("failed to create temp dir: {err}"),
    }
}

pub(super) fn create_graph_file(dir: &TempDir, name: &str, contents: &str) -> io::Result<PathBuf> {
    let path = dir.path().join(name);
    fs::write(&path, contents)?;
    Ok(path)
}

/// Runs `command` with `stdin` as input and returns the summary and stdout.
pub(super) fn run_with_stdin(
    command: Option<Command>,
    stdin: &str,
) -> Result<(ExecutionSummary, String), CliError> {
    let mut stdout = Vec::new();
    let summary = run_cli(Cli { command }, stdin.as_bytes(), &mut stdout)?;
    Ok((
        summary,
        String::from_utf8(stdout).expect("CLI output is ASCII"),
    ))
}

pub(super) fn run_expecting_error(command: Option<Command>, stdin: &str, panic_msg: &str) -> CliError {
    match run_with_stdin(command, stdin) {
        Ok(_) => panic!("{panic_msg}"),
        Err(err) => err,
    }
}
