//! Community structure significance index.
//!
//! # Overview
//!
//! A graph with `c` well-separated communities has `c - 1` small non-zero
//! Laplacian eigenvalues clearly apart from the rest of the spectrum. The
//! index `H` measures that gap without computing a partition: the further
//! the remaining eigenvalues sit from the mean of the small ones, the larger
//! `H`.
//!
//! # Algorithm
//!
//! With the Laplacian spectrum ascending, `b_0 = 0 <= b_1 <= ... <= b_{n-1}`:
//!
//! ```text
//! b_mean        = mean(b_1 .. b_{c-1})
//! k_mean        = mean (weighted) degree
//! amplification = sum_{j=c}^{n-1} 1 / (|b_mean - b_j| + EPS)
//! H             = n / (k_mean * amplification)
//! ```
//!
//! `EPS` keeps a term finite when `b_j == b_mean`.

use nnes_core::{Network, Result, SignificanceError};
use tracing::{debug, instrument};

/// Added to every spectral gap before inversion.
pub const EPS: f64 = 1e-7;

/// Compute the significance index `H` for `communities_number` communities.
///
/// # Errors
///
/// Returns [`SignificanceError::InvalidParameter`] unless
/// `2 <= communities_number < node_count`, and
/// [`SignificanceError::Computation`] when the mean degree is zero.
#[instrument(skip(graph), fields(nodes = graph.node_count()))]
pub fn significance_index(
    graph: &Network,
    communities_number: usize,
    weight: Option<&str>,
) -> Result<f64> {
    let n = graph.node_count();
    let c = communities_number;
    if c < 2 || c >= n {
        return Err(SignificanceError::invalid_parameter(
            "communities_number",
            format!("must satisfy 2 <= c < node count ({n}), got {c}"),
        ));
    }

    let mean_degree = (0..n).map(|v| graph.degree(v, weight)).sum::<f64>() / n as f64;
    if mean_degree <= 0.0 {
        return Err(SignificanceError::computation(
            "mean degree is zero, the index is undefined",
        ));
    }

    let spectrum = graph.laplacian_spectrum(weight);
    let low = &spectrum[1..c];
    let beta_mean = low.iter().sum::<f64>() / low.len() as f64;
    let amplification: f64 = spectrum[c..]
        .iter()
        .map(|beta| 1.0 / ((beta_mean - beta).abs() + EPS))
        .sum();

    let h = n as f64 / (mean_degree * amplification);
    debug!(beta_mean, mean_degree, amplification, h, "significance index");
    Ok(h)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
