//! Edge betweenness centrality via Brandes' algorithm.
//!
//! # Overview
//!
//! Edge betweenness measures how many shortest paths run through an edge.
//! Edges with high betweenness are the bottlenecks between groups of
//! nodes: removing them lengthens or breaks many routes.
//!
//! # Algorithm
//!
//! Brandes' algorithm (2001, edge variant from Brandes 2008):
//!
//! 1. For each source node `s`, order the reachable nodes by distance and
//!    count shortest paths `sigma`. Unweighted runs use BFS; weighted runs
//!    use Dijkstra, so a heavy direct edge loses its paths to a lighter
//!    detour.
//! 2. Pop nodes farthest first. For every predecessor `v` of `w`, the
//!    edge `(v, w)` receives `sigma[v] / sigma[w] * (1 + delta[w])`, which
//!    also flows into `delta[v]`.
//! 3. Sum over all sources, or over `k` sampled sources.
//!
//! Complexity: O(V * E) unweighted, O(V * E log V) weighted, with `V`
//! replaced by `k` when sampling.
//!
//! # Scaling
//!
//! - `normalized`: multiply by `1 / (n (n - 1))`.
//! - Otherwise, undirected totals are halved (each pair was counted from
//!   both ends).
//! - With `k` sampled sources the scale is further multiplied by `n / k`.

use std::collections::{BinaryHeap, VecDeque};

use nnes_core::config::BetweennessConfig;
use nnes_core::graph::Frontier;
use nnes_core::{EdgeKey, EdgeSignificance, Network, Result, SignificanceError};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use serde_json::Value;
use tracing::{debug, instrument};

use crate::{params, weight_param};

/// Method name recorded on results.
pub const METHOD: &str = "betweenness_centrality";

/// Shortest-path DAG from one source.
struct SourcePaths {
    /// Reached nodes in non-decreasing distance order.
    order: Vec<usize>,
    /// `(node, edge)` pairs preceding each node on its shortest paths.
    predecessors: Vec<Vec<(usize, usize)>>,
    /// Number of shortest paths from the source.
    sigma: Vec<f64>,
}

impl SourcePaths {
    fn new(n: usize, source: usize) -> Self {
        let mut sigma = vec![0.0; n];
        sigma[source] = 1.0;
        Self {
            order: Vec::with_capacity(n),
            predecessors: vec![Vec::new(); n],
            sigma,
        }
    }
}

/// Compute edge betweenness for every edge.
///
/// With `weight` set, path lengths are sums of that attribute (missing
/// values count as 1).
///
/// # Errors
///
/// Returns [`SignificanceError::InvalidParameter`] if `config.k` exceeds
/// the node count, and [`SignificanceError::Computation`] if a weighted
/// run meets a negative or NaN weight.
#[instrument(skip(graph), fields(nodes = graph.node_count(), edges = graph.edge_count()))]
pub fn betweenness_centrality<'g>(
    graph: &'g Network,
    config: &BetweennessConfig,
    weight: Option<&str>,
) -> Result<EdgeSignificance<'g>> {
    let n = graph.node_count();
    let m = graph.edge_count();

    let sources: Vec<usize> = match config.k {
        None => (0..n).collect(),
        Some(k) if k > n => {
            return Err(SignificanceError::invalid_parameter(
                "k",
                format!("cannot sample {k} sources from {n} nodes"),
            ));
        }
        Some(k) => {
            let mut rng = config
                .seed
                .map_or_else(StdRng::from_entropy, StdRng::seed_from_u64);
            let all: Vec<usize> = (0..n).collect();
            all.choose_multiple(&mut rng, k).copied().collect()
        }
    };

    // Edge-indexed betweenness accumulator.
    let mut cb: Vec<f64> = vec![0.0; m];

    for &s in &sources {
        let SourcePaths {
            mut order,
            predecessors,
            sigma,
        } = match weight {
            None => bfs_paths(graph, s),
            Some(name) => dijkstra_paths(graph, s, name)?,
        };

        // Accumulate dependencies farthest first.
        let mut delta: Vec<f64> = vec![0.0; n];

        while let Some(w) = order.pop() {
            if sigma[w] <= 0.0 {
                continue;
            }
            let coefficient = (1.0 + delta[w]) / sigma[w];
            for &(v, edge) in &predecessors[w] {
                let share = sigma[v] * coefficient;
                cb[edge] += share;
                delta[v] += share;
            }
        }
    }

    let scale = rescale_factor(n, graph.is_directed(), config.normalized, config.k);
    debug!(sources = sources.len(), scale = ?scale, "edge betweenness accumulated");

    let scores = cb.into_iter().zip(graph.edges()).map(|(total, (u, v))| {
        let score = scale.map_or(total, |factor| total * factor);
        (EdgeKey::from_indices(graph, u, v), score)
    });

    EdgeSignificance::new(
        graph,
        scores,
        METHOD,
        params([
            ("k", config.k.map_or(Value::Null, Value::from)),
            ("normalized", Value::from(config.normalized)),
            ("weight", weight_param(weight)),
            ("seed", config.seed.map_or(Value::Null, Value::from)),
        ]),
    )
}

fn bfs_paths(graph: &Network, s: usize) -> SourcePaths {
    let mut paths = SourcePaths::new(graph.node_count(), s);
    let mut dist: Vec<Option<usize>> = vec![None; graph.node_count()];
    dist[s] = Some(0);

    let mut queue: VecDeque<usize> = VecDeque::from([s]);

    while let Some(v) = queue.pop_front() {
        paths.order.push(v);
        let Some(dv) = dist[v] else { continue };

        for &(w, edge) in graph.forward_edges(v) {
            // First visit to w?
            if dist[w].is_none() {
                dist[w] = Some(dv + 1);
                queue.push_back(w);
            }

            // Shortest path to w via v?
            if dist[w] == Some(dv + 1) {
                paths.sigma[w] += paths.sigma[v];
                paths.predecessors[w].push((v, edge));
            }
        }
    }

    paths
}

fn dijkstra_paths(graph: &Network, s: usize, weight: &str) -> Result<SourcePaths> {
    let n = graph.node_count();
    let mut paths = SourcePaths::new(n, s);
    let mut settled = vec![false; n];
    let mut best = vec![f64::INFINITY; n];
    best[s] = 0.0;

    let mut heap = BinaryHeap::from([Frontier { cost: 0.0, node: s }]);

    while let Some(Frontier { cost, node: v }) = heap.pop() {
        if settled[v] {
            continue;
        }
        settled[v] = true;
        paths.order.push(v);

        for &(w, edge) in graph.forward_edges(v) {
            if settled[w] {
                continue;
            }
            let length = graph.edge_attrs(edge).weight(Some(weight));
            if length.is_nan() || length < 0.0 {
                return Err(SignificanceError::computation(format!(
                    "edge ({}, {}) has invalid weight {length} for shortest paths",
                    graph.node_id(v),
                    graph.node_id(w)
                )));
            }

            let candidate = cost + length;
            let tolerance = f64::EPSILON * candidate.abs().max(1.0);
            if candidate < best[w] - tolerance {
                // Strictly shorter: earlier predecessors no longer count.
                best[w] = candidate;
                paths.sigma[w] = paths.sigma[v];
                paths.predecessors[w].clear();
                paths.predecessors[w].push((v, edge));
                heap.push(Frontier {
                    cost: candidate,
                    node: w,
                });
            } else if (candidate - best[w]).abs() <= tolerance {
                paths.sigma[w] += paths.sigma[v];
                paths.predecessors[w].push((v, edge));
            }
        }
    }

    Ok(paths)
}

/// Multiplier applied to raw totals, `None` to leave them unchanged.
fn rescale_factor(n: usize, directed: bool, normalized: bool, k: Option<usize>) -> Option<f64> {
    let base = if normalized {
        if n <= 1 {
            return None;
        }
        1.0 / (n * (n - 1)) as f64
    } else if directed {
        return None;
    } else {
        0.5
    };

    Some(match k {
        Some(k) if k > 0 => base * n as f64 / k as f64,
        _ => base,
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
