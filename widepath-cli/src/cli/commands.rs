//! Command implementations and argument parsing for the widepath CLI.

use std::fs::File;
use std::io::{self, BufWriter, Read, Write};
use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand};
use thiserror::Error;
use tracing::{Span, field, info, instrument};
use widepath_core::{
    DEFAULT_READ_BUFFER_SIZE, RandomGraphConfig, SolveSummary, WidepathBuilder, WidepathError,
    generate,
};

/// Top-level CLI options parsed by [`clap`].
///
/// Without a subcommand the binary reads a graph from stdin and writes its
/// bottleneck table to stdout.
#[derive(Debug, Parser, Clone, Default)]
#[command(
    name = "widepath",
    about = "Compute all-pairs widest-path (bottleneck) tables."
)]
pub struct Cli {
    /// Command to execute.
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Supported CLI commands.
#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    /// Compute the bottleneck table of a graph.
    Solve(SolveCommand),
    /// Render a graph and its maximum spanning forest as Graphviz.
    Dot(DotCommand),
    /// Emit a random graph in the input format.
    Generate(GenerateCommand),
}

/// Options accepted by the `solve` command.
#[derive(Debug, Args, Clone)]
pub struct SolveCommand {
    /// Graph to read (defaults to stdin).
    #[arg(long)]
    pub input: Option<PathBuf>,

    /// Destination for the table (defaults to stdout).
    #[arg(long)]
    pub output: Option<PathBuf>,

    /// Capacity of the input read buffer in bytes.
    #[arg(
        long = "read-buffer-size",
        default_value_t = DEFAULT_READ_BUFFER_SIZE.get(),
        value_parser = clap::value_parser!(usize),
    )]
    pub read_buffer_size: usize,
}

impl Default for SolveCommand {
    fn default() -> Self {
        Self {
            input: None,
            output: None,
            read_buffer_size: DEFAULT_READ_BUFFER_SIZE.get(),
        }
    }
}

/// Options accepted by the `dot` command.
#[derive(Debug, Args, Clone, Default)]
pub struct DotCommand {
    /// Graph to read (defaults to stdin).
    #[arg(long)]
    pub input: Option<PathBuf>,

    /// Destination for the document (defaults to stdout).
    #[arg(long)]
    pub output: Option<PathBuf>,

    /// Omit the maximum spanning forest overlay.
    #[arg(long = "no-tree")]
    pub no_tree: bool,
}

/// Options accepted by the `generate` command.
#[derive(Debug, Args, Clone)]
pub struct GenerateCommand {
    /// Number of nodes.
    #[arg(long)]
    pub nodes: usize,

    /// Number of edges.
    #[arg(long)]
    pub edges: usize,

    /// Largest edge weight (defaults to the edge count).
    #[arg(long = "max-weight")]
    pub max_weight: Option<u64>,

    /// Seed for the random number generator.
    #[arg(long, default_value_t = 0)]
    pub seed: u64,

    /// Destination for the graph (defaults to stdout).
    #[arg(long)]
    pub output: Option<PathBuf>,
}

/// Errors surfaced while executing CLI commands.
#[derive(Debug, Error)]
pub enum CliError {
    /// Opening, reading or writing a named file failed.
    #[error("failed to access `{path}`: {source}")]
    Io {
        /// Path that triggered the failure.
        path: PathBuf,
        /// Underlying operating system error.
        #[source]
        source: io::Error,
    },
    /// Writing to a standard stream failed.
    #[error("failed to write to {stream}: {source}")]
    Stream {
        /// Name of the stream.
        stream: &'static str,
        /// Underlying operating system error.
        #[source]
        source: io::Error,
    },
    /// Core pipeline failed.
    #[error(transparent)]
    Core(#[from] WidepathError),
}

impl CliError {
    /// Returns the stable code of the wrapped core error, when there is one.
    #[must_use]
    pub const fn core_code(&self) -> Option<&'static str> {
        match self {
            Self::Core(error) => Some(error.code().as_str()),
            Self::Io { .. } | Self::Stream { .. } => None,
        }
    }

    /// Returns the stable code of the failing pipeline stage, when known.
    #[must_use]
    pub const fn stage_code(&self) -> Option<&'static str> {
        match self {
            Self::Core(error) => error.stage_code(),
            Self::Io { .. } | Self::Stream { .. } => None,
        }
    }
}

/// Summarises the outcome of executing a CLI command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExecutionSummary {
    /// A bottleneck table was written.
    Solved(SolveSummary),
    /// A Graphviz document was written.
    Rendered {
        /// Nodes in the rendered graph.
        nodes: usize,
        /// Input edges in the rendered graph.
        edges: usize,
    },
    /// A random graph was written.
    Generated {
        /// Nodes in the generated graph.
        nodes: usize,
        /// Edges in the generated graph.
        edges: usize,
    },
}

/// Executes the CLI command represented by `cli`.
///
/// `stdin` and `stdout` stand in for the process streams whenever a command
/// has no `--input` or `--output` path.
///
/// # Errors
/// Returns [`CliError`] when a file cannot be accessed or the pipeline
/// fails.
///
/// # Examples
/// ```
/// use widepath_cli::cli::{Cli, ExecutionSummary, run_cli};
///
/// let mut stdout = Vec::new();
/// let summary = run_cli(Cli::default(), &b"2 1\n0 1 7\n"[..], &mut stdout)?;
/// assert_eq!(stdout, b"0 7\n7 0\n");
/// assert!(matches!(summary, ExecutionSummary::Solved(_)));
/// # Ok::<(), widepath_cli::cli::CliError>(())
/// ```
#[instrument(
    name = "cli.run",
    err,
    skip(cli, stdin, stdout),
    fields(command = field::Empty),
)]
pub fn run_cli<R: Read, W: Write>(
    cli: Cli,
    stdin: R,
    stdout: W,
) -> Result<ExecutionSummary, CliError> {
    let command = cli
        .command
        .unwrap_or_else(|| Command::Solve(SolveCommand::default()));
    let label = match &command {
        Command::Solve(_) => "solve",
        Command::Dot(_) => "dot",
        Command::Generate(_) => "generate",
    };
    Span::current().record("command", field::display(label));

    let summary = match command {
        Command::Solve(solve) => run_solve(solve, stdin, stdout)?,
        Command::Dot(dot) => run_dot(dot, stdin, stdout)?,
        Command::Generate(generate) => run_generate(generate, stdout)?,
    };
    info!(command = label, "command completed");
    Ok(summary)
}

#[instrument(
    name = "cli.solve",
    err,
    skip(command, stdin, stdout),
    fields(input = field::Empty, output = field::Empty, read_buffer_size = command.read_buffer_size),
)]
pub(super) fn run_solve<R: Read, W: Write>(
    command: SolveCommand,
    stdin: R,
    stdout: W,
) -> Result<ExecutionSummary, CliError> {
    record_paths(command.input.as_deref(), command.output.as_deref());
    let widepath = WidepathBuilder::new()
        .with_read_buffer_size(command.read_buffer_size)
        .build()?;
    let reader = open_input(command.input.as_deref(), stdin)?;
    let summary = match command.output.as_deref() {
        Some(path) => widepath.run(reader, create_file(path)?)?,
        None => widepath.run(reader, stdout)?,
    };
    info!(
        nodes = summary.node_count(),
        components = summary.component_count(),
        bytes = summary.bytes_written(),
        "solve completed"
    );
    Ok(ExecutionSummary::Solved(summary))
}

#[instrument(
    name = "cli.dot",
    err,
    skip(command, stdin, stdout),
    fields(input = field::Empty, output = field::Empty, tree = !command.no_tree),
)]
pub(super) fn run_dot<R: Read, W: Write>(
    command: DotCommand,
    stdin: R,
    stdout: W,
) -> Result<ExecutionSummary, CliError> {
    record_paths(command.input.as_deref(), command.output.as_deref());
    let widepath = WidepathBuilder::new().build()?;
    let graph = widepath.load_graph(open_input(command.input.as_deref(), stdin)?)?;
    match command.output.as_deref() {
        Some(path) => widepath.write_dot(&graph, !command.no_tree, create_file(path)?)?,
        None => widepath.write_dot(&graph, !command.no_tree, stdout)?,
    }
    Ok(ExecutionSummary::Rendered {
        nodes: graph.node_count(),
        edges: graph.edges().len(),
    })
}

#[instrument(
    name = "cli.generate",
    err,
    skip(command, stdout),
    fields(nodes = command.nodes, edges = command.edges, seed = command.seed, output = field::Empty),
)]
pub(super) fn run_generate<W: Write>(
    command: GenerateCommand,
    mut stdout: W,
) -> Result<ExecutionSummary, CliError> {
    record_paths(None, command.output.as_deref());
    let mut config = RandomGraphConfig::new(command.nodes, command.edges, command.seed);
    if let Some(max_weight) = command.max_weight {
        config.max_weight = max_weight;
    }
    let graph = generate(&config).map_err(WidepathError::from)?;

    match command.output.as_deref() {
        Some(path) => {
            let mut writer = BufWriter::new(create_file(path)?);
            graph
                .write_input(&mut writer)
                .and_then(|()| writer.flush())
                .map_err(|source| CliError::Io {
                    path: path.to_path_buf(),
                    source,
                })?;
        }
        None => {
            let mut writer = BufWriter::new(&mut stdout);
            graph
                .write_input(&mut writer)
                .and_then(|()| writer.flush())
                .map_err(|source| CliError::Stream {
                    stream: "stdout",
                    source,
                })?;
        }
    }
    Ok(ExecutionSummary::Generated {
        nodes: graph.node_count(),
        edges: graph.edges().len(),
    })
}

fn record_paths(input: Option<&Path>, output: Option<&Path>) {
    let span = Span::current();
    span.record("input", field::display(describe(input, "<stdin>")));
    span.record("output", field::display(describe(output, "<stdout>")));
}

fn describe(path: Option<&Path>, stream: &'static str) -> String {
    path.map_or_else(|| stream.to_owned(), |path| path.display().to_string())
}

/// Opens `path` for reading, or falls back to `stdin`.
pub(super) fn open_input<'a, R: Read + 'a>(
    path: Option<&Path>,
    stdin: R,
) -> Result<Box<dyn Read + 'a>, CliError> {
    match path {
        Some(path) => {
            let file = File::open(path).map_err(|source| CliError::Io {
                path: path.to_path_buf(),
                source,
            })?;
            Ok(Box::new(file))
        }
        None => Ok(Box::new(stdin)),
    }
}

fn create_file(path: &Path) -> Result<File, CliError> {
    File::create(path).map_err(|source| CliError::Io {
        path: path.to_path_buf(),
        source,
    })
}
