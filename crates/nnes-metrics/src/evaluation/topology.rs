//! Component-size robustness scores.
//!
//! Used after removing the top-ranked nodes or edges of a significance
//! result: the faster the giant component shrinks, the better the ranking
//! identified the structurally important entities.

use std::collections::BTreeMap;

use nnes_core::{Network, Result, SignificanceError};

/// `|GC| / |V|`, the share of nodes in the largest connected component.
///
/// # Errors
///
/// Returns [`SignificanceError::Computation`] for an empty network.
pub fn giant_component_fraction(graph: &Network) -> Result<f64> {
    let n = require_nodes(graph)?;
    Ok(graph.largest_component_size() as f64 / n as f64)
}

/// `sum_{s < s_max} n_s * s^2 / N` over every component except the largest,
/// where `n_s` counts components of size `s`.
///
/// # Errors
///
/// Returns [`SignificanceError::Computation`] for an empty network.
pub fn normalized_susceptibility(graph: &Network) -> Result<f64> {
    let n = require_nodes(graph)?;

    let mut sizes: Vec<usize> = graph
        .connected_components()
        .iter()
        .map(Vec::len)
        .collect();
    sizes.sort_unstable_by(|a, b| b.cmp(a));

    let mut by_size: BTreeMap<usize, usize> = BTreeMap::new();
    for size in sizes.into_iter().skip(1) {
        *by_size.entry(size).or_insert(0) += 1;
    }

    Ok(by_size
        .into_iter()
        .map(|(size, count)| (count * size * size) as f64 / n as f64)
        .sum())
}

fn require_nodes(graph: &Network) -> Result<usize> {
    match graph.node_count() {
        0 => Err(SignificanceError::computation(
            "component scores are undefined for an empty network",
        )),
        n => Ok(n),
    }
}
