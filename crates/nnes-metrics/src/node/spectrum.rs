//! Spectral community-based node centrality.
//!
//! # Overview
//!
//! The eigenvectors belonging to the largest adjacency eigenvalues localize
//! on the graph's communities. A node with a large squared component in
//! those eigenvectors is central to the community split.
//!
//! # Algorithm
//!
//! 1. Decompose the (weighted, symmetric) adjacency matrix.
//! 2. Take the `c` eigenpairs with the largest algebraic eigenvalues.
//! 3. Node `k` scores `(1 / c) * sum_i v_i[k]^2 / |v_i|^2`.
//!
//! Scores lie in `[0, 1]` and sum to 1 across all nodes. The squared loading
//! is insensitive to eigenvector sign.
//!
//! # Output
//!
//! Method `centrality_metric_spectrum`, params `{communities_number, weight}`.

use nnes_core::{Network, NodeSignificance, Result, SignificanceError};
use serde_json::Value;
use tracing::{debug, instrument};

use crate::{params, weight_param};

/// Method name recorded on results.
pub const METHOD: &str = "centrality_metric_spectrum";

/// Compute spectral community centrality for every node.
///
/// # Errors
///
/// Returns [`SignificanceError::InvalidParameter`] unless
/// `1 <= communities_number <= node_count`, and
/// [`SignificanceError::Computation`] if a selected eigenvector is zero.
#[instrument(skip(graph), fields(nodes = graph.node_count()))]
pub fn centrality_metric_spectrum<'g>(
    graph: &'g Network,
    communities_number: usize,
    weight: Option<&str>,
) -> Result<NodeSignificance<'g>> {
    let n = graph.node_count();
    if communities_number == 0 || communities_number > n {
        return Err(SignificanceError::invalid_parameter(
            "communities_number",
            format!("must be between 1 and the node count ({n}), got {communities_number}"),
        ));
    }

    let eigen = graph.adjacency_eigen(weight);

    let mut order: Vec<usize> = (0..eigen.eigenvalues.len()).collect();
    order.sort_by(|&a, &b| eigen.eigenvalues[b].total_cmp(&eigen.eigenvalues[a]));
    order.truncate(communities_number);
    debug!(
        selected = ?order.iter().map(|&i| eigen.eigenvalues[i]).collect::<Vec<_>>(),
        "dominant eigenvalues"
    );

    let c = communities_number as f64;
    let mut scores = vec![0.0; n];
    for &column in &order {
        let vector = eigen.eigenvectors.column(column);
        let norm_sq = vector.norm_squared();
        if norm_sq <= f64::EPSILON {
            return Err(SignificanceError::computation(format!(
                "eigenvector {column} has zero norm"
            )));
        }
        for (score, component) in scores.iter_mut().zip(vector.iter()) {
            *score += component * component / norm_sq / c;
        }
    }

    NodeSignificance::new(
        graph,
        scores
            .into_iter()
            .enumerate()
            .map(|(k, score)| (graph.node_id(k).to_string(), score)),
        METHOD,
        params([
            ("communities_number", Value::from(communities_number)),
            ("weight", weight_param(weight)),
        ]),
    )
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
