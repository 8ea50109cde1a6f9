//! Single-source and all-pairs shortest paths.
//!
//! # Algorithm
//!
//! - **Unweighted** (`weight == None`): breadth-first search, O(V + E) per
//!   source.
//! - **Weighted**: Dijkstra with a binary heap, O((V + E) log V) per source.
//!   Negative weights are rejected.
//!
//! Neighbors are expanded in ascending index order and ties keep the first
//! parent found, so the recorded path for a pair is deterministic.
//!
//! A source tree can be computed with one node treated as removed
//! (`excluded`), which is equivalent to searching the induced subgraph
//! without that node. Removal analyses use this to avoid materialising a
//! subgraph per node.

use std::cmp::Ordering;
use std::collections::{BinaryHeap, VecDeque};

use crate::error::{Result, SignificanceError};
use crate::graph::Network;

/// Shortest paths from one source to every reachable node.
#[derive(Debug, Clone)]
pub struct ShortestPathTree {
    source: usize,
    /// Edge count of the recorded path.
    hops: Vec<Option<usize>>,
    /// Total weight of the recorded path (equals `hops` when unweighted).
    distance: Vec<Option<f64>>,
    parent: Vec<Option<usize>>,
}

impl ShortestPathTree {
    #[must_use]
    pub const fn source(&self) -> usize {
        self.source
    }

    #[must_use]
    pub fn reaches(&self, target: usize) -> bool {
        self.hops[target].is_some()
    }

    /// Number of edges on the recorded path to `target`.
    #[must_use]
    pub fn hops(&self, target: usize) -> Option<usize> {
        self.hops[target]
    }

    /// Path weight to `target`.
    #[must_use]
    pub fn distance(&self, target: usize) -> Option<f64> {
        self.distance[target]
    }

    /// Node indices from the source to `target`, inclusive.
    #[must_use]
    pub fn path(&self, target: usize) -> Option<Vec<usize>> {
        self.hops[target]?;
        let mut path = vec![target];
        let mut current = target;
        while let Some(parent) = self.parent[current] {
            path.push(parent);
            current = parent;
        }
        path.reverse();
        Some(path)
    }

    /// Whether `node` lies on the recorded path to `target` (endpoints
    /// included). False when `target` is unreachable.
    #[must_use]
    pub fn path_contains(&self, target: usize, node: usize) -> bool {
        if self.hops[target].is_none() {
            return false;
        }
        let mut current = Some(target);
        while let Some(c) = current {
            if c == node {
                return true;
            }
            current = self.parent[c];
        }
        false
    }
}

impl Network {
    /// Shortest paths from `source`, optionally treating `excluded` as
    /// removed from the graph.
    ///
    /// # Errors
    ///
    /// Returns [`SignificanceError::Computation`] if a weighted search meets
    /// a negative or NaN edge weight.
    pub fn shortest_path_tree(
        &self,
        source: usize,
        weight: Option<&str>,
        excluded: Option<usize>,
    ) -> Result<ShortestPathTree> {
        match weight {
            None => Ok(self.bfs_tree(source, excluded)),
            Some(name) => self.dijkstra_tree(source, name, excluded),
        }
    }

    /// Node ids along a shortest path, or `None` if `target` is unreachable.
    ///
    /// # Errors
    ///
    /// Returns [`SignificanceError::EntityNotFound`] for unknown endpoints and
    /// [`SignificanceError::Computation`] for negative weights.
    pub fn shortest_path(
        &self,
        source: &str,
        target: &str,
        weight: Option<&str>,
    ) -> Result<Option<Vec<String>>> {
        let s = self.require_index(source)?;
        let t = self.require_index(target)?;
        let tree = self.shortest_path_tree(s, weight, None)?;
        Ok(tree.path(t).map(|path| {
            path.into_iter()
                .map(|i| self.node_id(i).to_string())
                .collect()
        }))
    }

    /// One [`ShortestPathTree`] per node, indexed by source.
    ///
    /// # Errors
    ///
    /// Returns [`SignificanceError::Computation`] for negative weights.
    pub fn all_pairs_shortest_paths(&self, weight: Option<&str>) -> Result<Vec<ShortestPathTree>> {
        (0..self.node_count())
            .map(|source| self.shortest_path_tree(source, weight, None))
            .collect()
    }

    fn bfs_tree(&self, source: usize, excluded: Option<usize>) -> ShortestPathTree {
        let n = self.node_count();
        let mut tree = ShortestPathTree {
            source,
            hops: vec![None; n],
            distance: vec![None; n],
            parent: vec![None; n],
        };
        if excluded == Some(source) {
            return tree;
        }

        tree.hops[source] = Some(0);
        tree.distance[source] = Some(0.0);
        let mut queue = VecDeque::from([source]);

        while let Some(v) = queue.pop_front() {
            let next_hops = tree.hops[v].map_or(0, |h| h + 1);
            for &(w, _) in self.forward_edges(v) {
                if Some(w) == excluded || tree.hops[w].is_some() {
                    continue;
                }
                tree.hops[w] = Some(next_hops);
                tree.distance[w] = Some(next_hops as f64);
                tree.parent[w] = Some(v);
                queue.push_back(w);
            }
        }

        tree
    }

    fn dijkstra_tree(
        &self,
        source: usize,
        weight: &str,
        excluded: Option<usize>,
    ) -> Result<ShortestPathTree> {
        let n = self.node_count();
        let mut tree = ShortestPathTree {
            source,
            hops: vec![None; n],
            distance: vec![None; n],
            parent: vec![None; n],
        };
        if excluded == Some(source) {
            return Ok(tree);
        }

        let mut settled = vec![false; n];
        let mut best = vec![f64::INFINITY; n];
        best[source] = 0.0;
        tree.hops[source] = Some(0);

        let mut heap = BinaryHeap::new();
        heap.push(Frontier {
            cost: 0.0,
            node: source,
        });

        while let Some(Frontier { cost, node }) = heap.pop() {
            if settled[node] {
                continue;
            }
            settled[node] = true;
            tree.distance[node] = Some(cost);

            for &(next, edge) in self.forward_edges(node) {
                if Some(next) == excluded || settled[next] {
                    continue;
                }
                let w = self.edge_attrs(edge).weight(Some(weight));
                if w.is_nan() || w < 0.0 {
                    return Err(SignificanceError::computation(format!(
                        "edge ({}, {}) has invalid weight {w} for shortest paths",
                        self.node_id(node),
                        self.node_id(next)
                    )));
                }
                let candidate = cost + w;
                if candidate < best[next] {
                    best[next] = candidate;
                    tree.parent[next] = Some(node);
                    tree.hops[next] = tree.hops[node].map(|h| h + 1);
                    heap.push(Frontier {
                        cost: candidate,
                        node: next,
                    });
                }
            }
        }

        Ok(tree)
    }
}

/// Min-heap entry for Dijkstra; ties break on the lower node index.
///
/// `BinaryHeap<Frontier>` pops the cheapest node first.
#[derive(Debug, Clone, Copy)]
pub struct Frontier {
    pub cost: f64,
    pub node: usize,
}

impl PartialEq for Frontier {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Frontier {}

impl PartialOrd for Frontier {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Frontier {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .cost
            .total_cmp(&self.cost)
            .then_with(|| other.node.cmp(&self.node))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn path_ids(g: &Network, s: &str, t: &str, weight: Option<&str>) -> Option<Vec<String>> {
        g.shortest_path(s, t, weight).expect("valid endpoints")
    }

    #[test]
    fn bfs_path_on_chain() {
        let g = Network::from_edges(false, &[("a", "b"), ("b", "c"), ("c", "d")]);
        assert_eq!(
            path_ids(&g, "a", "d", None),
            Some(vec!["a".into(), "b".into(), "c".into(), "d".into()])
        );
        assert_eq!(path_ids(&g, "d", "a", None).map(|p| p.len()), Some(4));
    }

    #[test]
    fn unreachable_target_has_no_path() {
        let g = Network::from_edges(false, &[("a", "b"), ("c", "d")]);
        assert_eq!(path_ids(&g, "a", "d", None), None);
    }

    #[test]
    fn directed_paths_follow_edge_direction() {
        let g = Network::from_edges(true, &[("a", "b"), ("b", "c")]);
        assert!(path_ids(&g, "a", "c", None).is_some());
        assert!(path_ids(&g, "c", "a", None).is_none());
    }

    #[test]
    fn weighted_path_prefers_lighter_detour() {
        let mut b = Network::builder(false);
        b.add_weighted_edge("a", "d", "w", 10.0)
            .add_weighted_edge("a", "b", "w", 1.0)
            .add_weighted_edge("b", "c", "w", 1.0)
            .add_weighted_edge("c", "d", "w", 1.0);
        let g = b.build();

        assert_eq!(path_ids(&g, "a", "d", None).map(|p| p.len()), Some(2));
        assert_eq!(path_ids(&g, "a", "d", Some("w")).map(|p| p.len()), Some(4));

        let tree = g.shortest_path_tree(0, Some("w"), None).expect("tree");
        let d = g.index_of("d").expect("d");
        assert_eq!(tree.hops(d), Some(3));
        assert!((tree.distance(d).expect("reachable") - 3.0).abs() < 1e-12);
    }

    #[test]
    fn negative_weight_is_rejected() {
        let mut b = Network::builder(false);
        b.add_weighted_edge("a", "b", "w", -1.0);
        let g = b.build();
        assert!(matches!(
            g.shortest_path("a", "b", Some("w")),
            Err(SignificanceError::Computation(_))
        ));
    }

    #[test]
    fn excluded_node_forces_detour() {
        // a - b - d and a - c - e - d
        let g = Network::from_edges(
            false,
            &[("a", "b"), ("b", "d"), ("a", "c"), ("c", "e"), ("e", "d")],
        );
        let a = g.index_of("a").expect("a");
        let b = g.index_of("b").expect("b");
        let d = g.index_of("d").expect("d");

        let full = g.shortest_path_tree(a, None, None).expect("tree");
        assert_eq!(full.hops(d), Some(2));
        assert!(full.path_contains(d, b));

        let detour = g.shortest_path_tree(a, None, Some(b)).expect("tree");
        assert_eq!(detour.hops(d), Some(3));
        assert!(!detour.path_contains(d, b));
        assert!(!detour.reaches(b));
    }

    #[test]
    fn excluding_the_source_reaches_nothing() {
        let g = Network::from_edges(false, &[("a", "b")]);
        let tree = g.shortest_path_tree(0, None, Some(0)).expect("tree");
        assert!(!tree.reaches(0));
        assert!(!tree.reaches(1));
    }

    #[test]
    fn all_pairs_has_one_tree_per_node() {
        let g = Network::from_edges(false, &[("a", "b"), ("b", "c")]);
        let trees = g.all_pairs_shortest_paths(None).expect("apsp");
        assert_eq!(trees.len(), 3);
        for (i, tree) in trees.iter().enumerate() {
            assert_eq!(tree.source(), i);
            assert_eq!(tree.hops(i), Some(0));
        }
        assert_eq!(trees[0].hops(2), Some(2));
    }

    #[test]
    fn unknown_endpoint_is_entity_not_found() {
        let g = Network::from_edges(false, &[("a", "b")]);
        assert!(matches!(
            g.shortest_path("a", "zz", None),
            Err(SignificanceError::EntityNotFound { .. })
        ));
    }
}
