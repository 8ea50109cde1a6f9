//! Degree product of edge endpoints.
//!
//! `D(e) = (k_u * k_v)^theta`, where `k` is the (weighted) degree. With
//! `theta = 1` this is the plain product; other exponents tune how strongly
//! hub-to-hub links dominate.

use nnes_core::config::DegreeProductConfig;
use nnes_core::{EdgeKey, EdgeSignificance, Network, Result};
use serde_json::Value;
use tracing::instrument;

use crate::{params, weight_param};

/// Method name recorded on results.
pub const METHOD: &str = "degree_product";

/// Compute the degree product for every edge.
///
/// # Errors
///
/// Only fails if result construction rejects a key, which cannot happen
/// for edges enumerated from `graph`.
#[instrument(skip(graph), fields(edges = graph.edge_count()))]
pub fn degree_product<'g>(
    graph: &'g Network,
    weight: Option<&str>,
    config: &DegreeProductConfig,
) -> Result<EdgeSignificance<'g>> {
    let degrees: Vec<f64> = (0..graph.node_count())
        .map(|v| graph.degree(v, weight))
        .collect();

    let scores = graph.edges().map(|(u, v)| {
        (
            EdgeKey::from_indices(graph, u, v),
            (degrees[u] * degrees[v]).powf(config.theta),
        )
    });

    EdgeSignificance::new(
        graph,
        scores,
        METHOD,
        params([
            ("weight", weight_param(weight)),
            ("theta", Value::from(config.theta)),
        ]),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn star_edges_multiply_degrees() {
        let g = Network::from_edges(false, &[("hub", "a"), ("hub", "b"), ("hub", "c"), ("a", "b")]);
        let d = degree_product(&g, None, &DegreeProductConfig::default()).expect("degree");
        // deg(hub) = 3, deg(a) = 2, deg(c) = 1.
        assert!((d.get("hub", "a").expect("edge") - 6.0).abs() < 1e-10);
        assert!((d.get("hub", "c").expect("edge") - 3.0).abs() < 1e-10);
        assert!((d.get("a", "b").expect("edge") - 4.0).abs() < 1e-10);
    }

    #[test]
    fn theta_and_weights_apply() {
        let mut b = Network::builder(false);
        b.add_weighted_edge("a", "b", "w", 2.0)
            .add_weighted_edge("b", "c", "w", 3.0);
        let g = b.build();
        let d = degree_product(&g, Some("w"), &DegreeProductConfig { theta: 0.5 }).expect("degree");
        // k_a = 2, k_b = 5 -> sqrt(10).
        assert!((d.get("a", "b").expect("edge") - 10.0_f64.sqrt()).abs() < 1e-10);
        assert_eq!(d.params()["weight"], Value::from("w"));
        assert_eq!(d.params()["theta"], Value::from(0.5));
    }
}
