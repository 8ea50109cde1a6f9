//! `nnes node` — score every node of a graph.

use std::io::Write;
use std::path::PathBuf;

use anyhow::Context as _;
use clap::{Args, ValueEnum};
use nnes_metrics::node;

use super::RunContext;
use crate::output::render_significance;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum NodeMethod {
    /// Loading on the dominant adjacency eigenvectors.
    Spectrum,
    /// Drop in global efficiency when the node is removed.
    Efficiency,
}

/// Arguments for `nnes node`.
#[derive(Args, Debug)]
pub struct NodeArgs {
    /// Scoring method.
    #[arg(value_enum)]
    pub method: NodeMethod,

    /// Edge-list file (`source target [weight]` per line).
    pub graph: PathBuf,

    /// Only list the N highest-scoring nodes.
    #[arg(long)]
    pub top: Option<usize>,

    /// Also write the full JSON snapshot to this path.
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Spectrum: number of communities (eigenvectors) to use.
    #[arg(short, long)]
    pub communities: Option<usize>,
}

pub fn run_node(args: &NodeArgs, ctx: &RunContext, w: &mut dyn Write) -> anyhow::Result<()> {
    let graph = ctx.load_graph(&args.graph)?;
    let communities = args
        .communities
        .unwrap_or(ctx.config.spectral.communities_number);

    let result = match args.method {
        NodeMethod::Spectrum => node::centrality_metric_spectrum(&graph, communities, ctx.weight()),
        NodeMethod::Efficiency => node::efficiency_centrality(&graph, ctx.weight()),
    }
    .with_context(|| format!("{:?} scoring failed", args.method))?;

    if let Some(path) = &args.output {
        result
            .write_json(path)
            .with_context(|| format!("Failed to write {}", path.display()))?;
    }

    render_significance(w, &result, args.top, ctx.output)
}
