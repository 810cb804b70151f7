//! CLI entry point for the widepath bottleneck solver.
//!
//! Parses command-line arguments with clap, runs the selected command
//! against the process streams, and maps errors to exit codes. Logging goes
//! to stderr so the table on stdout stays a clean payload.

use std::io;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;

use tracing::{error, field};
use widepath_cli::{
    cli::{Cli, CliError, run_cli},
    logging::{self, LoggingError},
};

/// Parse CLI arguments and execute the command against stdin and stdout.
fn try_main() -> Result<()> {
    let cli = Cli::parse();
    let stdin = io::stdin();
    let stdout = io::stdout();
    run_cli(cli, stdin.lock(), stdout.lock()).context("failed to execute command")?;
    Ok(())
}

fn main() -> ExitCode {
    if let Err(err) = logging::init_logging() {
        report_logging_init_error(&err);
        return ExitCode::FAILURE;
    }

    if let Err(err) = try_main() {
        let (code, stage_code) = err
            .downcast_ref::<CliError>()
            .map_or((None, None), |cli_error| {
                (cli_error.core_code(), cli_error.stage_code())
            });

        error!(
            error = %format!("{err:#}"),
            code = code.map(field::display),
            stage_code = stage_code.map(field::display),
            "command execution failed"
        );
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}

#[expect(
    clippy::print_stderr,
    reason = "Emit one-off diagnostic before tracing is initialized"
)]
fn report_logging_init_error(err: &LoggingError) {
    eprintln!("failed to initialize logging: {err}");
}
