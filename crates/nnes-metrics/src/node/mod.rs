//! Node significance algorithms.
//!
//! # Overview
//!
//! - **Spectral centrality** (`spectrum`): a node's average squared loading
//!   on the `c` dominant adjacency eigenvectors, i.e. how much it shapes
//!   the community structure.
//! - **Efficiency centrality** (`efficiency`): the relative drop in global
//!   efficiency when the node is removed.
//!
//! Both return a [`NodeSignificance`](nnes_core::NodeSignificance).

pub mod efficiency;
pub mod spectrum;

pub use efficiency::{efficiency_centrality, efficiency_centrality_with_cancel};
pub use spectrum::centrality_metric_spectrum;
