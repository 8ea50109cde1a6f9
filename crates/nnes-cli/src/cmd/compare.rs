//! `nnes compare` — overlap of the top-ranked nodes in two snapshots.

use std::collections::HashSet;
use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::Args;
use nnes_core::{Network, NodeSignificance};
use nnes_metrics::evaluation::jaccard_similarity;

use super::RunContext;
use crate::output::render_scalar;

/// Arguments for `nnes compare`.
#[derive(Args, Debug)]
pub struct CompareArgs {
    /// Edge-list file both snapshots were computed on.
    pub graph: PathBuf,

    /// First node significance snapshot (JSON).
    pub left: PathBuf,

    /// Second node significance snapshot (JSON).
    pub right: PathBuf,

    /// Compare the N highest-scoring nodes of each snapshot.
    #[arg(long, default_value_t = 10)]
    pub top: usize,
}

fn load_snapshot<'g>(path: &Path, graph: &'g Network) -> anyhow::Result<NodeSignificance<'g>> {
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    NodeSignificance::from_json(&json, graph)
        .with_context(|| format!("Failed to load snapshot {}", path.display()))
}

fn top_set(result: &NodeSignificance<'_>, n: usize) -> HashSet<String> {
    result
        .top_n(n)
        .into_iter()
        .map(|(id, _)| id.clone())
        .collect()
}

pub fn run_compare(args: &CompareArgs, ctx: &RunContext, w: &mut dyn Write) -> anyhow::Result<()> {
    let graph = ctx.load_graph(&args.graph)?;
    let left = load_snapshot(&args.left, &graph)?;
    let right = load_snapshot(&args.right, &graph)?;

    let similarity = jaccard_similarity(&top_set(&left, args.top), &top_set(&right, args.top));
    render_scalar(
        w,
        &format!("jaccard[{} vs {}]", left.method(), right.method()),
        similarity,
        ctx.output,
    )?;
    Ok(())
}
