#![forbid(unsafe_code)]

mod cmd;
mod output;

use std::env;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use nnes_core::SignificanceError;
use nnes_core::config::{self, AlgorithmConfig};
use tracing::debug;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "nnes: node and edge significance scoring",
    long_about = None
)]
struct Cli {
    /// Enable debug logging (ignored when `NNES_LOG` is set).
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Emit JSON output instead of human-readable text.
    #[arg(long, global = true)]
    json: bool,

    /// Read algorithm settings from this TOML file instead of
    /// `.nnes/config.toml` or the user config.
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Treat the edge list as directed.
    #[arg(long, global = true)]
    directed: bool,

    /// Edge attribute to use as weight (the edge list's third column is `weight`).
    #[arg(long, global = true, value_name = "ATTR")]
    weight: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    #[command(
        next_help_heading = "Scoring",
        about = "Score every edge",
        after_help = "EXAMPLES:\n    # Triangle-based importance\n    nnes edge diffusion graph.txt\n\n    # Seeded random-walk estimate, top 10 only\n    nnes edge erw-kpath graph.txt --seed 7 --top 10\n\n    # Save the snapshot\n    nnes edge bridgeness graph.txt -o bridgeness.json"
    )]
    Edge(cmd::edge::EdgeArgs),

    #[command(
        next_help_heading = "Scoring",
        about = "Score every node",
        after_help = "EXAMPLES:\n    # Spectral centrality with three communities\n    nnes node spectrum graph.txt -c 3\n\n    # Vulnerability ranking\n    nnes node efficiency graph.txt --top 5 --json"
    )]
    Node(cmd::node::NodeArgs),

    #[command(
        next_help_heading = "Evaluation",
        about = "Community structure significance index",
        after_help = "EXAMPLES:\n    # Index for two communities, plus removal deltas\n    nnes index graph.txt -c 2 --remove 1 --remove 15"
    )]
    Index(cmd::evaluate::IndexArgs),

    #[command(
        next_help_heading = "Evaluation",
        about = "Giant component fraction and susceptibility"
    )]
    Topology(cmd::evaluate::TopologyArgs),

    #[command(
        next_help_heading = "Evaluation",
        about = "Ratio cut of a node partition",
        after_help = "EXAMPLES:\n    nnes cut graph.txt --group a,b,c --group d,e,f"
    )]
    Cut(cmd::evaluate::CutArgs),

    #[command(
        next_help_heading = "Evaluation",
        about = "Jaccard overlap of the top nodes in two snapshots",
        after_help = "EXAMPLES:\n    nnes compare graph.txt spectrum.json efficiency.json --top 5"
    )]
    Compare(cmd::compare::CompareArgs),
}

fn init_tracing(verbose: bool) {
    let filter = EnvFilter::try_from_env("NNES_LOG").unwrap_or_else(|_| {
        EnvFilter::new(if verbose || env::var("DEBUG").is_ok() {
            "nnes=debug,info"
        } else {
            "nnes=info,warn"
        })
    });

    let format = env::var("NNES_LOG_FORMAT").unwrap_or_else(|_| "compact".to_string());

    let registry = tracing_subscriber::registry().with(filter);

    match format.as_str() {
        "json" => {
            registry
                .with(fmt::layer().json().with_ansi(false).with_writer(io::stderr))
                .init();
        }
        _ => {
            registry
                .with(fmt::layer().compact().with_writer(io::stderr))
                .init();
        }
    }
}

/// Explicit `--config` wins, then the project file, then the user file.
fn resolve_config(explicit: Option<&Path>, project_root: &Path) -> anyhow::Result<AlgorithmConfig> {
    if let Some(path) = explicit {
        return config::load_config_file(path);
    }
    if project_root.join(".nnes/config.toml").exists() {
        return config::load_project_config(project_root);
    }
    config::load_user_config()
}

fn run(cli: &Cli, w: &mut dyn Write) -> anyhow::Result<()> {
    let project_root = env::current_dir().context("Failed to read the working directory")?;
    let mut config = resolve_config(cli.config.as_deref(), &project_root)?;
    if cli.weight.is_some() {
        config.weight.clone_from(&cli.weight);
    }
    debug!(?config, "resolved configuration");

    let ctx = cmd::RunContext {
        config,
        directed: cli.directed,
        output: output::resolve_output_mode(cli.json),
    };

    match &cli.command {
        Commands::Edge(args) => cmd::edge::run_edge(args, &ctx, w),
        Commands::Node(args) => cmd::node::run_node(args, &ctx, w),
        Commands::Index(args) => cmd::evaluate::run_index(args, &ctx, w),
        Commands::Topology(args) => cmd::evaluate::run_topology(args, &ctx, w),
        Commands::Cut(args) => cmd::evaluate::run_cut(args, &ctx, w),
        Commands::Compare(args) => cmd::compare::run_compare(args, &ctx, w),
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    debug!(command = ?cli.command, "starting");

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let result = run(&cli, &mut out);

    if let Err(err) = &result
        && let Some(cause) = err.downcast_ref::<SignificanceError>()
    {
        let code = cause.code();
        eprintln!("error[{code}]: {}", code.message());
        if let Some(hint) = code.hint() {
            eprintln!("hint: {hint}");
        }
    }
    result
}
