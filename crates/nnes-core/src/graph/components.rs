//! Connected components via union-find.
//!
//! Directed networks are decomposed into weakly connected components (edge
//! direction ignored). Components are returned in order of their smallest
//! member index, members ascending.

use std::collections::HashMap;

use petgraph::unionfind::UnionFind;

use crate::graph::Network;

impl Network {
    /// Node indices of each connected component.
    #[must_use]
    pub fn connected_components(&self) -> Vec<Vec<usize>> {
        let n = self.node_count();
        let mut sets = UnionFind::<usize>::new(n);
        for (source, target) in self.edges() {
            sets.union(source, target);
        }

        let mut slot_by_root: HashMap<usize, usize> = HashMap::new();
        let mut components: Vec<Vec<usize>> = Vec::new();
        for (node, root) in sets.into_labeling().into_iter().enumerate() {
            let slot = *slot_by_root.entry(root).or_insert_with(|| {
                components.push(Vec::new());
                components.len() - 1
            });
            components[slot].push(node);
        }
        components
    }

    /// Size of the largest connected component (0 for an empty network).
    #[must_use]
    pub fn largest_component_size(&self) -> usize {
        self.connected_components()
            .iter()
            .map(Vec::len)
            .max()
            .unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_network_has_no_components() {
        let g = Network::builder(false).build();
        assert!(g.connected_components().is_empty());
        assert_eq!(g.largest_component_size(), 0);
    }

    #[test]
    fn two_components_and_an_isolate() {
        let g = Network::from_nodes_and_edges(
            false,
            &["a", "b", "c", "d", "e"],
            &[("a", "b"), ("b", "c"), ("d", "e")],
        );
        assert_eq!(g.connected_components(), vec![vec![0, 1, 2], vec![3, 4]]);

        let h = Network::from_nodes_and_edges(false, &["z"], &[("a", "b")]);
        assert_eq!(h.connected_components(), vec![vec![0], vec![1, 2]]);
        assert_eq!(h.largest_component_size(), 2);
    }

    #[test]
    fn directed_components_are_weak() {
        let g = Network::from_edges(true, &[("a", "b"), ("c", "b")]);
        assert_eq!(g.connected_components(), vec![vec![0, 1, 2]]);
    }
}
