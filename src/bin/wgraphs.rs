//! wgraphs CLI: reads a graph and prints its analysis report as JSON.
//!
//! Usage:
//!   wgraphs [INPUT] [--format links|matrix|edgelist] [--directed]
//!           [--from A --to B] [--source S --sink T] [--max-candidates N]

use std::{
    io::{BufWriter, Write},
    path::PathBuf,
    process::ExitCode,
};

use clap::Parser;
use tracing::{debug, error};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};
use wgraphs::{algo::*, io::*, prelude::*};

/// Candidate permutations per Hamiltonian search unless overridden
const DEFAULT_MAX_CANDIDATES: u64 = 1_000_000;

#[derive(Parser, Debug)]
#[command(
    name = "wgraphs",
    version,
    about = "Analyse a weighted graph: connectivity, trails, shortest path, max flow, spanning tree"
)]
struct Cli {
    /// Graph file; reads stdin if omitted
    input: Option<PathBuf>,

    /// Input format
    #[arg(short, long, env = "WGRAPHS_FORMAT", default_value_t = FileFormat::Links)]
    format: FileFormat,

    /// Treat edges as directed
    #[arg(short, long, env = "WGRAPHS_DIRECTED")]
    directed: bool,

    /// Start of the shortest path
    #[arg(long, requires = "to")]
    from: Option<Node>,

    /// End of the shortest path
    #[arg(long, requires = "from")]
    to: Option<Node>,

    /// Source of the maximum flow
    #[arg(long, requires = "sink")]
    source: Option<Node>,

    /// Sink of the maximum flow
    #[arg(long, requires = "source")]
    sink: Option<Node>,

    /// Limits each Hamiltonian search to this many candidate permutations; 0 means unbounded
    #[arg(long, env = "WGRAPHS_MAX_CANDIDATES", default_value_t = DEFAULT_MAX_CANDIDATES)]
    max_candidates: u64,

    /// Indent the JSON output
    #[arg(long)]
    pretty: bool,

    /// Log at debug level unless RUST_LOG is set
    #[arg(short, long)]
    verbose: bool,
}

fn init_logging(verbose: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(if verbose { "wgraphs=debug" } else { "warn" }));

    // fails only if a subscriber is already installed
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .compact()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .try_init();
}

fn run(cli: &Cli) -> Result<(), GraphError> {
    let graph = match &cli.input {
        Some(path) => Graph::try_from_file(path, cli.format, cli.directed)?,
        None => Graph::try_from_reader(std::io::stdin().lock(), cli.format, cli.directed)?,
    };
    debug!(
        nodes = graph.count(),
        edges = graph.number_of_edges(),
        format = %cli.format,
        "graph loaded"
    );

    let mut analysis = Analysis::new();
    if let (Some(from), Some(to)) = (cli.from, cli.to) {
        analysis.set_shortest_path(from, to);
    }
    if let (Some(source), Some(sink)) = (cli.source, cli.sink) {
        analysis.set_max_flow(source, sink);
    }
    if cli.max_candidates > 0 {
        analysis.set_hamiltonian_budget(cli.max_candidates);
    }

    let report = analysis.run(&graph)?;

    let mut out = BufWriter::new(std::io::stdout().lock());
    if cli.pretty {
        serde_json::to_writer_pretty(&mut out, &report)?;
    } else {
        serde_json::to_writer(&mut out, &report)?;
    }
    writeln!(out)?;
    out.flush()?;
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(%err, "analysis failed");
            eprintln!("Error: {err}");
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn hamiltonian_budget_defaults_to_bounded() {
        let cli = Cli::try_parse_from(["wgraphs", "graph.json"]).unwrap();
        assert_eq!(cli.max_candidates, DEFAULT_MAX_CANDIDATES);

        let cli = Cli::try_parse_from(["wgraphs", "--max-candidates", "0"]).unwrap();
        assert_eq!(cli.max_candidates, 0);
    }

    #[test]
    fn endpoints_come_in_pairs() {
        assert!(Cli::try_parse_from(["wgraphs", "--from", "0"]).is_err());
        let cli = Cli::try_parse_from(["wgraphs", "--source", "0", "--sink", "3"]).unwrap();
        assert_eq!((cli.source, cli.sink), (Some(0), Some(3)));
    }
}
