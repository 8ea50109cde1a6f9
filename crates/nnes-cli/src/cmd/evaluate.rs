//! Whole-graph evaluation commands: `nnes index`, `nnes topology`, `nnes cut`.

use std::io::Write;
use std::path::PathBuf;

use anyhow::Context as _;
use clap::Args;
use nnes_metrics::evaluation::{
    giant_component_fraction, normalized_susceptibility, ratio_cut, significance_index,
};
use tracing::info;

use super::RunContext;
use crate::output::render_scalar;

// ---------------------------------------------------------------------------
// Clap types
// ---------------------------------------------------------------------------

/// Arguments for `nnes index`.
#[derive(Args, Debug)]
pub struct IndexArgs {
    /// Edge-list file.
    pub graph: PathBuf,

    /// Number of communities `c`.
    #[arg(short, long)]
    pub communities: Option<usize>,

    /// Also report the change in the index after removing each node.
    #[arg(long = "remove", value_name = "NODE")]
    pub remove: Vec<String>,
}

/// Arguments for `nnes topology`.
#[derive(Args, Debug)]
pub struct TopologyArgs {
    /// Edge-list file.
    pub graph: PathBuf,

    /// Remove these nodes before scoring.
    #[arg(long = "remove", value_name = "NODE")]
    pub remove: Vec<String>,
}

/// Arguments for `nnes cut`.
#[derive(Args, Debug)]
pub struct CutArgs {
    /// Edge-list file.
    pub graph: PathBuf,

    /// A comma-separated node group, e.g. `a,b,c`. Repeat once per group.
    #[arg(long = "group", value_name = "NODES", required = true)]
    pub groups: Vec<String>,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

pub fn run_index(args: &IndexArgs, ctx: &RunContext, w: &mut dyn Write) -> anyhow::Result<()> {
    let graph = ctx.load_graph(&args.graph)?;
    let c = args
        .communities
        .unwrap_or(ctx.config.spectral.communities_number);

    let original = significance_index(&graph, c, ctx.weight())
        .context("Failed to compute the community significance index")?;
    render_scalar(w, "significance_index", original, ctx.output)?;

    for node in &args.remove {
        let reduced = graph.without_node(node)?;
        let value = significance_index(&reduced, c, ctx.weight())
            .with_context(|| format!("Failed to compute the index without {node}"))?;
        info!(node, delta = value - original, "node removed");
        render_scalar(w, &format!("delta[{node}]"), value - original, ctx.output)?;
    }
    Ok(())
}

pub fn run_topology(
    args: &TopologyArgs,
    ctx: &RunContext,
    w: &mut dyn Write,
) -> anyhow::Result<()> {
    let mut graph = ctx.load_graph(&args.graph)?;
    for node in &args.remove {
        graph = graph.without_node(node)?;
    }

    render_scalar(
        w,
        "giant_component_fraction",
        giant_component_fraction(&graph)?,
        ctx.output,
    )?;
    render_scalar(
        w,
        "normalized_susceptibility",
        normalized_susceptibility(&graph)?,
        ctx.output,
    )?;
    Ok(())
}

pub fn run_cut(args: &CutArgs, ctx: &RunContext, w: &mut dyn Write) -> anyhow::Result<()> {
    let graph = ctx.load_graph(&args.graph)?;
    let groups: Vec<Vec<&str>> = args.groups.iter().map(|g| parse_group(g)).collect();

    let value = ratio_cut(&graph, &groups, ctx.weight())?;
    render_scalar(w, "ratio_cut", value, ctx.output)?;
    Ok(())
}

fn parse_group(raw: &str) -> Vec<&str> {
    raw.split(',')
        .map(str::trim)
        .filter(|id| !id.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::parse_group;

    #[test]
    fn groups_split_on_commas() {
        assert_eq!(parse_group("a, b,c"), vec!["a", "b", "c"]);
        assert_eq!(parse_group("solo"), vec!["solo"]);
        assert!(parse_group(" , ").is_empty());
    }
}
