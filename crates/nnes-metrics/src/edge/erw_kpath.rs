//! ERW-Kpath: random-walk estimate of k-path edge centrality.
//!
//! # Overview
//!
//! k-path centrality counts how often an edge lies on simple paths of at
//! most `k` edges. Enumerating those paths is infeasible, so ERW-Kpath
//! samples them: many short random walks are launched and each traversal
//! adds a fixed increment to the edge's weight.
//!
//! # Algorithm
//!
//! 1. Every edge starts at `1 / |E|`.
//! 2. Repeat `ruo` times: pick a start node uniformly at random and clear
//!    the per-walk traversed set. While fewer than `k` steps have been
//!    taken and the current node has an incident edge not yet traversed in
//!    this walk, pick one such edge uniformly at random, add `beta` to its
//!    weight, mark it traversed and move to its other endpoint.
//! 3. Return the accumulated weights as-is (no renormalization).
//!
//! Walks follow the undirected view: an edge is traversable from either
//! endpoint and marking it closes both directions. Each walk therefore
//! traces a trail, never reusing an edge.
//!
//! # Reproducibility
//!
//! Results depend on the random source. Set `seed` in [`ErwKpathConfig`],
//! or pass an RNG to [`erw_kpath_with_rng`], for repeatable output. With no
//! seed the RNG is seeded from OS entropy.
//!
//! # Boundaries
//!
//! `k == 0` or `ruo == 0` leaves the uniform initial weights untouched.
//! A graph with no edges yields an empty result.

use fixedbitset::FixedBitSet;
use nnes_core::config::ErwKpathConfig;
use nnes_core::{CancelToken, EdgeKey, EdgeSignificance, Network, Result, SignificanceError};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use serde_json::Value;
use tracing::{debug, instrument, warn};

use crate::params;

/// Method name recorded on results.
pub const METHOD: &str = "erw_kpath";

/// Run ERW-Kpath with the RNG described by `config.seed`.
///
/// # Errors
///
/// Returns [`SignificanceError::InvalidParameter`] for a negative or
/// non-finite `beta`.
pub fn erw_kpath<'g>(graph: &'g Network, config: &ErwKpathConfig) -> Result<EdgeSignificance<'g>> {
    erw_kpath_with_cancel(graph, config, &CancelToken::new())
}

/// [`erw_kpath`] with cooperative cancellation, checked once per walk.
///
/// # Errors
///
/// As [`erw_kpath`], plus [`SignificanceError::Cancelled`].
pub fn erw_kpath_with_cancel<'g>(
    graph: &'g Network,
    config: &ErwKpathConfig,
    cancel: &CancelToken,
) -> Result<EdgeSignificance<'g>> {
    let mut rng = config
        .seed
        .map_or_else(StdRng::from_entropy, StdRng::seed_from_u64);
    erw_kpath_with_rng(graph, config, &mut rng, cancel)
}

/// [`erw_kpath`] drawing from a caller-supplied RNG. `config.seed` is
/// recorded in the params but not used.
///
/// # Errors
///
/// As [`erw_kpath_with_cancel`].
#[instrument(skip(graph, rng, cancel), fields(nodes = graph.node_count(), edges = graph.edge_count()))]
pub fn erw_kpath_with_rng<'g, R: Rng + ?Sized>(
    graph: &'g Network,
    config: &ErwKpathConfig,
    rng: &mut R,
    cancel: &CancelToken,
) -> Result<EdgeSignificance<'g>> {
    let m = graph.edge_count();
    let k = config.k;
    let ruo = config.resolved_ruo(m);
    let beta = config.resolved_beta(m);

    if !beta.is_finite() || beta < 0.0 {
        return Err(SignificanceError::invalid_parameter(
            "beta",
            format!("must be a finite non-negative number, got {beta}"),
        ));
    }

    let recorded = params([
        ("k", Value::from(k)),
        ("ruo", Value::from(ruo)),
        ("beta", Value::from(beta)),
        ("seed", config.seed.map_or(Value::Null, Value::from)),
    ]);

    if m == 0 {
        debug!("no edges, nothing to walk");
        return EdgeSignificance::new(graph, std::iter::empty::<(EdgeKey, f64)>(), METHOD, recorded);
    }

    let mut weights = vec![1.0 / m as f64; m];

    if k == 0 || ruo == 0 {
        warn!(k, ruo, "degenerate walk parameters, returning uniform weights");
    } else {
        let n = graph.node_count();
        let mut traversed = FixedBitSet::with_capacity(m);
        let mut open: Vec<(usize, usize)> = Vec::new();
        let mut steps = 0_usize;

        for _ in 0..ruo {
            cancel.check()?;
            traversed.clear();
            let mut current = rng.gen_range(0..n);

            for _ in 0..k {
                open.clear();
                open.extend(
                    graph
                        .incident_edges(current)
                        .iter()
                        .filter(|&&(_, edge)| !traversed.contains(edge)),
                );
                let Some(&(next, edge)) = open.choose(rng) else {
                    break;
                };
                weights[edge] += beta;
                traversed.insert(edge);
                current = next;
                steps += 1;
            }
        }

        debug!(walks = ruo, steps, "random walks finished");
    }

    let scores = weights
        .into_iter()
        .zip(graph.edges())
        .map(|(weight, (u, v))| (EdgeKey::from_indices(graph, u, v), weight));
    EdgeSignificance::new(graph, scores, METHOD, recorded)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
