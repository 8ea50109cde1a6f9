//! Diffusion importance of edges.
//!
//! # Overview
//!
//! An edge whose endpoints share many neighbors is redundant for spreading:
//! whatever crosses it could just as well travel through a common neighbor.
//! Diffusion importance counts those shared neighbors.
//!
//! # Algorithm
//!
//! For an edge `(u, v)` let `n(u <- v)` be the number of neighbors of `v`
//! that are also neighbors of `u`, and `n(v <- u)` the converse. The score
//! is `(n(u <- v) + n(v <- u)) / 2`.
//!
//! - **Undirected**: both counts equal the common-neighbor count, so the
//!   score is exactly the number of triangles on the edge.
//! - **Directed**: the two counts are kept apart as shared successors and
//!   shared predecessors, then averaged.
//!
//! Adjacency lists are sorted, so each count is a linear merge.
//! Complexity: O(|E| * average degree).

use nnes_core::{EdgeKey, EdgeSignificance, Network, Params, Result};
use tracing::{debug, instrument};

/// Method name recorded on results.
pub const METHOD: &str = "diffusion_importance";

/// Compute diffusion importance for every edge.
///
/// # Errors
///
/// Only fails if result construction rejects a key, which cannot happen
/// for edges enumerated from `graph`.
#[instrument(skip(graph), fields(nodes = graph.node_count(), edges = graph.edge_count()))]
pub fn diffusion_importance(graph: &Network) -> Result<EdgeSignificance<'_>> {
    let scores: Vec<(EdgeKey, f64)> = graph
        .edges()
        .map(|(u, v)| {
            let score = if graph.is_directed() {
                let outgoing = sorted_intersection_len(graph.successors(u), graph.successors(v));
                let incoming =
                    sorted_intersection_len(graph.predecessors(u), graph.predecessors(v));
                (outgoing + incoming) as f64 / 2.0
            } else {
                sorted_intersection_len(graph.neighbors(u), graph.neighbors(v)) as f64
            };
            (EdgeKey::from_indices(graph, u, v), score)
        })
        .collect();

    debug!(edges = scores.len(), "diffusion importance computed");
    EdgeSignificance::new(graph, scores, METHOD, Params::new())
}

/// Number of shared elements of two ascending slices.
pub(crate) fn sorted_intersection_len(a: &[usize], b: &[usize]) -> usize {
    let (mut i, mut j, mut shared) = (0, 0, 0);
    while i < a.len() && j < b.len() {
        match a[i].cmp(&b[j]) {
            std::cmp::Ordering::Less => i += 1,
            std::cmp::Ordering::Greater => j += 1,
            std::cmp::Ordering::Equal => {
                shared += 1;
                i += 1;
                j += 1;
            }
        }
    }
    shared
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
