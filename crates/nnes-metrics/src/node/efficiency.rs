//! Efficiency (vulnerability) centrality.
//!
//! # Overview
//!
//! The global efficiency of a network is the average inverse shortest-path
//! length over node pairs. A node is vulnerability-critical when removing it
//! makes the remaining routes much longer or breaks them.
//!
//! # Algorithm
//!
//! 1. **Baseline**: one shortest-path tree per source. A pair's efficiency
//!    is `1 / hops` along its recorded path, or 0 if unreachable.
//!    `E = sum / (n (n - 1))`.
//! 2. **Removal of `x`**: pairs touching `x` drop to 0. Pairs whose recorded
//!    path avoids `x` keep their baseline efficiency. Only pairs whose path
//!    runs through `x` are re-routed, using a tree from the pair's source
//!    that treats `x` as removed. That tree is computed at most once per
//!    source and only when needed.
//! 3. Score = `(E - E_hat(x)) / E`, with `E_hat` normalized by the same
//!    `n (n - 1)`.
//!
//! Undirected networks sum over unordered pairs; directed networks sum over
//! ordered pairs. Weighted runs choose paths by total weight but still count
//! efficiency in hops.
//!
//! # Cost
//!
//! Worst case one single-source search per (node, source) pair, i.e.
//! O(n^2) searches. The reuse rule keeps the typical count far lower.

use nnes_core::graph::ShortestPathTree;
use nnes_core::{CancelToken, Network, NodeSignificance, Result, SignificanceError};
use tracing::{debug, instrument};

use crate::{params, weight_param};

/// Method name recorded on results.
pub const METHOD: &str = "efficiency_centrality";

/// Compute efficiency centrality for every node.
///
/// # Errors
///
/// Returns [`SignificanceError::Computation`] if the baseline efficiency is
/// zero (fewer than two nodes, or no edges) or a weighted search meets an
/// invalid weight.
pub fn efficiency_centrality<'g>(
    graph: &'g Network,
    weight: Option<&str>,
) -> Result<NodeSignificance<'g>> {
    efficiency_centrality_with_cancel(graph, weight, &CancelToken::new())
}

/// [`efficiency_centrality`] with cooperative cancellation, checked once
/// per removed node.
///
/// # Errors
///
/// As [`efficiency_centrality`], plus [`SignificanceError::Cancelled`].
#[instrument(skip(graph, cancel), fields(nodes = graph.node_count(), edges = graph.edge_count()))]
pub fn efficiency_centrality_with_cancel<'g>(
    graph: &'g Network,
    weight: Option<&str>,
    cancel: &CancelToken,
) -> Result<NodeSignificance<'g>> {
    let n = graph.node_count();
    let pairs_norm = (n * n.saturating_sub(1)) as f64;

    let baseline = graph.all_pairs_shortest_paths(weight)?;
    let pairs = pair_list(n, graph.is_directed());
    let total: f64 = pairs
        .iter()
        .map(|&(s, t)| efficiency(&baseline[s], t))
        .sum();

    if n < 2 || total <= 0.0 {
        return Err(SignificanceError::computation(
            "baseline efficiency is zero, so relative efficiency loss is undefined",
        ));
    }
    let e = total / pairs_norm;
    debug!(efficiency = e, pairs = pairs.len(), "baseline efficiency");

    let mut scores = Vec::with_capacity(n);
    let mut rerouted: Vec<Option<ShortestPathTree>> = vec![None; n];
    let mut searches = 0_usize;

    for x in 0..n {
        cancel.check()?;
        rerouted.fill(None);

        let mut remaining = 0.0;
        for &(s, t) in &pairs {
            if s == x || t == x {
                continue;
            }
            let tree = &baseline[s];
            if !tree.path_contains(t, x) {
                remaining += efficiency(tree, t);
                continue;
            }

            if rerouted[s].is_none() {
                searches += 1;
                rerouted[s] = Some(graph.shortest_path_tree(s, weight, Some(x))?);
            }
            if let Some(detour) = &rerouted[s] {
                remaining += efficiency(detour, t);
            }
        }

        let e_hat = remaining / pairs_norm;
        scores.push((graph.node_id(x).to_string(), (e - e_hat) / e));
    }

    debug!(searches, "efficiency recomputation finished");

    NodeSignificance::new(
        graph,
        scores,
        METHOD,
        params([("weight", weight_param(weight))]),
    )
}

/// Source/target pairs summed over: unordered for undirected networks.
fn pair_list(n: usize, directed: bool) -> Vec<(usize, usize)> {
    let mut pairs = Vec::new();
    for s in 0..n {
        for t in 0..n {
            if s == t || (!directed && t < s) {
                continue;
            }
            pairs.push((s, t));
        }
    }
    pairs
}

fn efficiency(tree: &ShortestPathTree, target: usize) -> f64 {
    match tree.hops(target) {
        Some(hops) if hops > 0 => 1.0 / hops as f64,
        _ => 0.0,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
