//! Ratio cut of a node partition.
//!
//! `RatioCut(C_1..C_c) = sum_i cut(C_i, V \ C_i) / |C_i|`, where the cut
//! sums the weights of edges with exactly one endpoint in `C_i`. Directed
//! edges count in either direction.

use fixedbitset::FixedBitSet;
use nnes_core::{Network, Result, SignificanceError};
use tracing::instrument;

/// Ratio cut of `groups`. Groups need not cover every node.
///
/// # Errors
///
/// Returns [`SignificanceError::EntityNotFound`] for unknown node ids and
/// [`SignificanceError::InvalidParameter`] for an empty group.
#[instrument(skip(graph, groups), fields(groups = groups.len()))]
pub fn ratio_cut<S: AsRef<str>>(
    graph: &Network,
    groups: &[Vec<S>],
    weight: Option<&str>,
) -> Result<f64> {
    let n = graph.node_count();
    let mut total = 0.0;

    for group in groups {
        let mut members = FixedBitSet::with_capacity(n);
        for id in group {
            members.insert(graph.require_index(id.as_ref())?);
        }
        let size = members.count_ones(..);
        if size == 0 {
            return Err(SignificanceError::invalid_parameter(
                "groups",
                "every group needs at least one node",
            ));
        }

        let cut: f64 = graph
            .edges()
            .enumerate()
            .filter(|&(_, (u, v))| members.contains(u) != members.contains(v))
            .map(|(edge, _)| graph.edge_attrs(edge).weight(weight))
            .sum();
        total += cut / size as f64;
    }

    Ok(total)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn barbell() -> Network {
        Network::from_edges(
            false,
            &[
                ("a", "b"),
                ("b", "c"),
                ("c", "a"),
                ("d", "e"),
                ("e", "f"),
                ("f", "d"),
                ("c", "d"),
            ],
        )
    }

    #[test]
    fn natural_split_cuts_one_edge() {
        let g = barbell();
        let rc = ratio_cut(&g, &[vec!["a", "b", "c"], vec!["d", "e", "f"]], None).expect("cut");
        assert!((rc - 2.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn worse_split_costs_more() {
        let g = barbell();
        let natural =
            ratio_cut(&g, &[vec!["a", "b", "c"], vec!["d", "e", "f"]], None).expect("natural");
        let skewed =
            ratio_cut(&g, &[vec!["a", "b"], vec!["c", "d", "e", "f"]], None).expect("skewed");
        assert!(skewed > natural);
    }

    #[test]
    fn directed_edges_cross_either_way() {
        let g = Network::from_edges(true, &[("a", "b"), ("c", "a")]);
        let rc = ratio_cut(&g, &[vec!["a".to_string()]], None).expect("cut");
        assert!((rc - 2.0).abs() < 1e-12);
    }

    #[test]
    fn weights_are_summed() {
        let mut b = Network::builder(false);
        b.add_weighted_edge("a", "b", "w", 2.5);
        let g = b.build();
        let rc = ratio_cut(&g, &[vec!["a"]], Some("w")).expect("cut");
        assert!((rc - 2.5).abs() < 1e-12);
    }

    #[test]
    fn bad_groups_are_rejected() {
        let g = barbell();
        assert!(matches!(
            ratio_cut(&g, &[vec!["a", "zz"]], None),
            Err(SignificanceError::EntityNotFound { .. })
        ));
        let empty: Vec<Vec<&str>> = vec![Vec::new()];
        assert!(matches!(
            ratio_cut(&g, &empty, None),
            Err(SignificanceError::InvalidParameter { .. })
        ));
    }
}
