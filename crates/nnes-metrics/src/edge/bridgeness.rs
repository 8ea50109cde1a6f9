//! Bridgeness ("brightness") of edges.
//!
//! # Overview
//!
//! An edge deep inside a dense cluster sits in a large clique together
//! with both of its endpoints. An edge that bridges two clusters joins
//! endpoints that each belong to a large clique while the edge itself only
//! sits in a small one.
//!
//! # Algorithm
//!
//! 1. Enumerate maximal cliques and stable-sort them by size, largest first.
//! 2. For each edge `(u, v)`, scan that list once and record the size of
//!    the first clique containing `u` (`S_u`), the first containing `v`
//!    (`S_v`), and the first containing both (`S_e`). Stop as soon as all
//!    three are known.
//! 3. Score = `sqrt(S_u * S_v) / S_e`.
//!
//! Ties in clique size keep the enumeration order of
//! [`Network::maximal_cliques`], which is deterministic.
//!
//! # Cost
//!
//! Clique enumeration is exponential in the worst case, so this metric does
//! not scale to large dense graphs. Use [`bridgeness_with_cancel`] to bound
//! the wait.

use fixedbitset::FixedBitSet;
use nnes_core::{CancelToken, EdgeKey, EdgeSignificance, Network, Params, Result, SignificanceError};
use tracing::{debug, instrument};

/// Method name recorded on results.
pub const METHOD: &str = "bridgeness";

/// Compute bridgeness for every edge.
///
/// # Errors
///
/// Returns [`SignificanceError::Computation`] if an edge is found in no
/// clique, which means the clique enumeration and edge set disagree.
pub fn bridgeness(graph: &Network) -> Result<EdgeSignificance<'_>> {
    bridgeness_with_cancel(graph, &CancelToken::new())
}

/// [`bridgeness`] with cooperative cancellation.
///
/// # Errors
///
/// As [`bridgeness`], plus [`SignificanceError::Cancelled`].
#[instrument(skip(graph, cancel), fields(nodes = graph.node_count(), edges = graph.edge_count()))]
pub fn bridgeness_with_cancel<'g>(
    graph: &'g Network,
    cancel: &CancelToken,
) -> Result<EdgeSignificance<'g>> {
    let n = graph.node_count();
    let mut cliques: Vec<FixedBitSet> = graph
        .maximal_cliques_with_cancel(cancel)?
        .into_iter()
        .map(|members| {
            let mut set = FixedBitSet::with_capacity(n);
            set.extend(members);
            set
        })
        .collect();
    cliques.sort_by_key(|set| std::cmp::Reverse(set.count_ones(..)));
    let sizes: Vec<usize> = cliques.iter().map(|set| set.count_ones(..)).collect();
    debug!(
        cliques = cliques.len(),
        largest = sizes.first().copied().unwrap_or(0),
        "cliques enumerated"
    );

    let mut scores = Vec::with_capacity(graph.edge_count());
    for (u, v) in graph.edges() {
        cancel.check()?;

        let (mut s_u, mut s_v, mut s_e) = (0_usize, 0_usize, 0_usize);
        for (clique, &size) in cliques.iter().zip(&sizes) {
            if s_u != 0 && s_v != 0 && s_e != 0 {
                break;
            }
            let has_u = clique.contains(u);
            let has_v = clique.contains(v);
            if s_u == 0 && has_u {
                s_u = size;
            }
            if s_v == 0 && has_v {
                s_v = size;
            }
            if s_e == 0 && has_u && has_v {
                s_e = size;
            }
        }

        if s_e == 0 {
            return Err(SignificanceError::computation(format!(
                "edge ({}, {}) is not contained in any maximal clique",
                graph.node_id(u),
                graph.node_id(v)
            )));
        }

        let score = ((s_u * s_v) as f64).sqrt() / s_e as f64;
        scores.push((EdgeKey::from_indices(graph, u, v), score));
    }

    EdgeSignificance::new(graph, scores, METHOD, Params::new())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn complete(ids: &[&'static str]) -> Vec<(&'static str, &'static str)> {
        let mut edges = Vec::new();
        for i in 0..ids.len() {
            for j in (i + 1)..ids.len() {
                edges.push((ids[i], ids[j]));
            }
        }
        edges
    }

    #[test]
    fn edges_inside_a_clique_score_one() {
        let g = Network::from_edges(false, &complete(&["a", "b", "c", "d"]));
        let b = bridgeness(&g).expect("bridgeness");
        for (_, score) in b.iter() {
            assert!((score - 1.0).abs() < 1e-10, "K4 edge: sqrt(4*4)/4 = 1");
        }
    }

    #[test]
    fn bridge_between_two_cliques_scores_high() {
        // Two K4s joined by the edge d-e.
        let mut edges = complete(&["a", "b", "c", "d"]);
        edges.extend(complete(&["e", "f", "g", "h"]));
        edges.push(("d", "e"));
        let g = Network::from_edges(false, &edges);
        let b = bridgeness(&g).expect("bridgeness");

        // S_d = S_e = 4, S_edge = 2 -> sqrt(16) / 2 = 2.
        assert!(
            (b.get("d", "e").expect("bridge") - 2.0).abs() < 1e-10,
            "bridge edge scores sqrt(4*4)/2"
        );
        assert!((b.get("a", "b").expect("inner") - 1.0).abs() < 1e-10);
        assert!(b.get("d", "e").expect("bridge") > b.get("a", "d").expect("inner"));
    }

    #[test]
    fn pendant_edge_uses_hub_clique_size() {
        // Triangle a-b-c plus pendant c-d: S_c = 3, S_d = 2, S_e = 2.
        let g = Network::from_edges(false, &[("a", "b"), ("b", "c"), ("c", "a"), ("c", "d")]);
        let b = bridgeness(&g).expect("bridgeness");
        let expected = 6.0_f64.sqrt() / 2.0;
        assert!((b.get("c", "d").expect("pendant") - expected).abs() < 1e-10);
    }

    #[test]
    fn cancelled_before_start() {
        let g = Network::from_edges(false, &complete(&["a", "b", "c"]));
        let token = CancelToken::new();
        token.cancel();
        assert!(matches!(
            bridgeness_with_cancel(&g, &token),
            Err(SignificanceError::Cancelled)
        ));
    }
}
