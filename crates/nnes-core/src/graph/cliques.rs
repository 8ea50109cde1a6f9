//! Maximal clique enumeration (Bron–Kerbosch with Tomita pivoting).
//!
//! Runs on the undirected view of the network. Candidate and excluded sets
//! are [`FixedBitSet`]s so set intersections are word-parallel. The number of
//! maximal cliques is exponential in the worst case (Moon–Moser graphs have
//! `3^(n/3)`), which is the scalability ceiling of every clique-based metric.
//!
//! Output order is deterministic for a given node insertion order; each
//! clique lists its members in ascending index order. Isolated nodes form
//! singleton cliques.

use fixedbitset::FixedBitSet;

use crate::cancel::CancelToken;
use crate::error::Result;
use crate::graph::Network;

impl Network {
    /// Enumerate every maximal clique.
    #[must_use]
    pub fn maximal_cliques(&self) -> Vec<Vec<usize>> {
        // A fresh token is never cancelled.
        self.maximal_cliques_with_cancel(&CancelToken::new())
            .unwrap_or_default()
    }

    /// [`Network::maximal_cliques`], polling `cancel` at each recursion step.
    ///
    /// # Errors
    ///
    /// Returns [`SignificanceError::Cancelled`](crate::SignificanceError::Cancelled)
    /// when the token is cancelled mid-enumeration.
    pub fn maximal_cliques_with_cancel(&self, cancel: &CancelToken) -> Result<Vec<Vec<usize>>> {
        let mut out = Vec::new();
        self.collect_cliques(cancel, &mut out)?;
        Ok(out)
    }

    fn collect_cliques(&self, cancel: &CancelToken, out: &mut Vec<Vec<usize>>) -> Result<()> {
        let n = self.node_count();
        if n == 0 {
            return Ok(());
        }

        let neighbor_sets: Vec<FixedBitSet> = (0..n)
            .map(|v| {
                let mut set = FixedBitSet::with_capacity(n);
                for &w in self.neighbors(v) {
                    set.insert(w);
                }
                set
            })
            .collect();

        let mut candidates = FixedBitSet::with_capacity(n);
        candidates.insert_range(..);
        let excluded = FixedBitSet::with_capacity(n);
        let mut clique = Vec::new();

        expand(&neighbor_sets, &mut clique, candidates, excluded, cancel, out)
    }
}

fn expand(
    neighbor_sets: &[FixedBitSet],
    clique: &mut Vec<usize>,
    mut candidates: FixedBitSet,
    mut excluded: FixedBitSet,
    cancel: &CancelToken,
    out: &mut Vec<Vec<usize>>,
) -> Result<()> {
    cancel.check()?;

    if candidates.count_ones(..) == 0 {
        if excluded.count_ones(..) == 0 {
            let mut found = clique.clone();
            found.sort_unstable();
            out.push(found);
        }
        return Ok(());
    }

    // Pivot on the vertex of P ∪ X with the most neighbors in P.
    let pivot = candidates
        .union(&excluded)
        .max_by_key(|&u| candidates.intersection(&neighbor_sets[u]).count());
    let Some(pivot) = pivot else {
        return Ok(());
    };

    let branch: Vec<usize> = candidates.difference(&neighbor_sets[pivot]).collect();
    for v in branch {
        let mut next_candidates = candidates.clone();
        next_candidates.intersect_with(&neighbor_sets[v]);
        let mut next_excluded = excluded.clone();
        next_excluded.intersect_with(&neighbor_sets[v]);

        clique.push(v);
        expand(
            neighbor_sets,
            clique,
            next_candidates,
            next_excluded,
            cancel,
            out,
        )?;
        clique.pop();

        candidates.set(v, false);
        excluded.insert(v);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SignificanceError;

    fn sorted_cliques(g: &Network) -> Vec<Vec<&str>> {
        let mut cliques: Vec<Vec<&str>> = g
            .maximal_cliques()
            .into_iter()
            .map(|c| c.into_iter().map(|i| g.node_id(i)).collect())
            .collect();
        cliques.sort();
        cliques
    }

    #[test]
    fn empty_graph_has_no_cliques() {
        let g = Network::builder(false).build();
        assert!(g.maximal_cliques().is_empty());
    }

    #[test]
    fn triangle_with_tail() {
        let g = Network::from_edges(false, &[("a", "b"), ("b", "c"), ("a", "c"), ("c", "d")]);
        assert_eq!(sorted_cliques(&g), vec![vec!["a", "b", "c"], vec!["c", "d"]]);
    }

    #[test]
    fn isolated_node_is_a_singleton_clique() {
        let g = Network::from_nodes_and_edges(false, &["x"], &[("a", "b")]);
        assert_eq!(sorted_cliques(&g), vec![vec!["a", "b"], vec!["x"]]);
    }

    #[test]
    fn two_overlapping_four_cliques() {
        // K4 {a,b,c,d} and K4 {c,d,e,f} sharing the edge c-d.
        let mut edges = Vec::new();
        for group in [["a", "b", "c", "d"], ["c", "d", "e", "f"]] {
            for i in 0..4 {
                for j in (i + 1)..4 {
                    edges.push((group[i], group[j]));
                }
            }
        }
        let g = Network::from_edges(false, &edges);
        assert_eq!(
            sorted_cliques(&g),
            vec![vec!["a", "b", "c", "d"], vec!["c", "d", "e", "f"]]
        );
    }

    #[test]
    fn directed_edges_use_undirected_view() {
        let g = Network::from_edges(true, &[("a", "b"), ("b", "c"), ("c", "a")]);
        assert_eq!(sorted_cliques(&g), vec![vec!["a", "b", "c"]]);
    }

    #[test]
    fn cancelled_enumeration_errors() {
        let g = Network::from_edges(false, &[("a", "b")]);
        let token = CancelToken::new();
        token.cancel();
        assert!(matches!(
            g.maximal_cliques_with_cancel(&token),
            Err(SignificanceError::Cancelled)
        ));
    }
}
