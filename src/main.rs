//! taskgraph-layout CLI entry point.

use std::fs;
use std::io::{self, Read, Write};
use std::process;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use taskgraph_layout::{
    Algorithm, Direction, LayoutConfig, LayoutEngine, LayoutRequest, OrderingHeuristic,
};

/// Layered layout of a task-dependency graph, printed as JSON.
#[derive(Parser, Debug)]
#[command(
    name = "taskgraph-layout",
    about = "Layered layout of a task-dependency graph, printed as JSON"
)]
struct Cli {
    /// Input file: JSON request or edge list (reads from stdin if not provided)
    input: Option<String>,

    /// Layout direction (TB, BT, LR, RL)
    #[arg(short = 'd', long = "direction")]
    direction: Option<Direction>,

    /// Distance between layers
    #[arg(long = "layer-spacing")]
    layer_spacing: Option<f64>,

    /// Distance between nodes of one layer
    #[arg(long = "node-spacing")]
    node_spacing: Option<f64>,

    /// Placement strategy (auto, hierarchical, grid, simple)
    #[arg(short = 'a', long = "algorithm")]
    algorithm: Option<Algorithm>,

    /// Crossing reduction key (barycenter, median)
    #[arg(long = "ordering")]
    ordering: Option<OrderingHeuristic>,

    /// Cap on crossing reduction passes
    #[arg(long = "max-sweeps")]
    max_sweeps: Option<usize>,

    /// Pretty-print the JSON output
    #[arg(long = "pretty")]
    pretty: bool,

    /// Write output to this file instead of stdout
    #[arg(short = 'o', long = "output")]
    output: Option<String>,

    /// Log pipeline phases to stderr (-v debug, -vv trace)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    fn apply(&self, mut config: LayoutConfig) -> LayoutConfig {
        if let Some(direction) = self.direction {
            config.direction = direction;
        }
        if let Some(spacing) = self.layer_spacing {
            config.layer_spacing = spacing;
        }
        if let Some(spacing) = self.node_spacing {
            config.node_spacing = spacing;
        }
        if let Some(algorithm) = self.algorithm {
            config.algorithm = algorithm;
        }
        if let Some(ordering) = self.ordering {
            config.ordering = ordering;
        }
        if let Some(max_sweeps) = self.max_sweeps {
            config.max_sweeps = max_sweeps;
        }
        config
    }
}

fn init_logging(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn fail(message: impl std::fmt::Display) -> ! {
    eprintln!("error: {}", message);
    process::exit(1);
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    // Read input from file or stdin
    let text = if let Some(ref path) = cli.input {
        fs::read_to_string(path).unwrap_or_else(|e| fail(format!("cannot read '{}': {}", path, e)))
    } else {
        let mut buf = String::new();
        if let Err(e) = io::stdin().read_to_string(&mut buf) {
            fail(format!("cannot read stdin: {}", e));
        }
        buf
    };

    let request = LayoutRequest::parse(&text).unwrap_or_else(|e| fail(e));
    let config = request
        .config(LayoutConfig::default())
        .unwrap_or_else(|e| fail(e));
    let engine = LayoutEngine::new(cli.apply(config));
    let layout = engine
        .layout(request.tasks.as_slice(), request.edges.as_slice())
        .unwrap_or_else(|e| fail(e));

    let rendered = if cli.pretty {
        serde_json::to_string_pretty(&layout)
    } else {
        serde_json::to_string(&layout)
    }
    .unwrap_or_else(|e| fail(e));

    // Write output to file or stdout
    if let Some(ref path) = cli.output {
        if let Err(e) = fs::write(path, rendered + "\n") {
            fail(format!("cannot write '{}': {}", path, e));
        }
    } else {
        println!("{}", rendered);
        if let Err(e) = io::stdout().flush() {
            fail(format!("cannot flush stdout: {}", e));
        }
    }
}
