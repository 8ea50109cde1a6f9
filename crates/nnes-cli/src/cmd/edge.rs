//! `nnes edge` — score every edge of a graph.

use std::io::Write;
use std::path::PathBuf;

use anyhow::Context as _;
use clap::{Args, ValueEnum};
use nnes_core::EdgeSignificance;
use nnes_metrics::edge;

use super::RunContext;
use crate::output::render_significance;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum EdgeMethod {
    /// Shared neighbors of the endpoints.
    Diffusion,
    /// Endpoint clique sizes over the edge's own clique size.
    Bridgeness,
    /// Random-walk k-path centrality estimate.
    ErwKpath,
    /// Brandes edge betweenness.
    Betweenness,
    /// `(deg(u) * deg(v))^theta`.
    DegreeProduct,
}

/// Arguments for `nnes edge`.
#[derive(Args, Debug)]
pub struct EdgeArgs {
    /// Scoring method.
    #[arg(value_enum)]
    pub method: EdgeMethod,

    /// Edge-list file (`source target [weight]` per line).
    pub graph: PathBuf,

    /// Only list the N highest-scoring edges.
    #[arg(long)]
    pub top: Option<usize>,

    /// Also write the full JSON snapshot to this path.
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// ERW-Kpath: maximum edges per walk.
    #[arg(long)]
    pub walk_length: Option<usize>,

    /// ERW-Kpath: number of walks.
    #[arg(long)]
    pub walks: Option<usize>,

    /// ERW-Kpath: weight added per traversal.
    #[arg(long)]
    pub beta: Option<f64>,

    /// Seed for ERW-Kpath walks or betweenness source sampling.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Betweenness: number of sampled source nodes.
    #[arg(long)]
    pub samples: Option<usize>,

    /// Betweenness: skip the `1 / (n (n - 1))` scaling.
    #[arg(long)]
    pub raw: bool,

    /// Degree product: exponent.
    #[arg(long)]
    pub theta: Option<f64>,
}

pub fn run_edge(args: &EdgeArgs, ctx: &RunContext, w: &mut dyn Write) -> anyhow::Result<()> {
    let graph = ctx.load_graph(&args.graph)?;
    let mut config = ctx.config.clone();

    if let Some(k) = args.walk_length {
        config.erw.k = k;
    }
    if args.walks.is_some() {
        config.erw.ruo = args.walks;
    }
    if args.beta.is_some() {
        config.erw.beta = args.beta;
    }
    if args.seed.is_some() {
        config.erw.seed = args.seed;
        config.betweenness.seed = args.seed;
    }
    if args.samples.is_some() {
        config.betweenness.k = args.samples;
    }
    if args.raw {
        config.betweenness.normalized = false;
    }
    if let Some(theta) = args.theta {
        config.degree_product.theta = theta;
    }

    let result: EdgeSignificance<'_> = match args.method {
        EdgeMethod::Diffusion => edge::diffusion_importance(&graph),
        EdgeMethod::Bridgeness => edge::bridgeness(&graph),
        EdgeMethod::ErwKpath => edge::erw_kpath(&graph, &config.erw),
        EdgeMethod::Betweenness => {
            edge::betweenness_centrality(&graph, &config.betweenness, ctx.weight())
        }
        EdgeMethod::DegreeProduct => {
            edge::degree_product(&graph, ctx.weight(), &config.degree_product)
        }
    }
    .with_context(|| format!("{:?} scoring failed", args.method))?;

    if let Some(path) = &args.output {
        result
            .write_json(path)
            .with_context(|| format!("Failed to write {}", path.display()))?;
    }

    render_significance(w, &*result, args.top, ctx.output)
}
