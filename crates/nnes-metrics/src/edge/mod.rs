//! Edge significance algorithms.
//!
//! # Overview
//!
//! Each function takes a [`Network`](nnes_core::Network) and returns an
//! [`EdgeSignificance`](nnes_core::EdgeSignificance):
//!
//! - **Diffusion importance** (`diffusion`): how many neighbors the two
//!   endpoints share, i.e. the triangles the edge closes.
//! - **Bridgeness** (`bridgeness`): endpoint clique sizes relative to the
//!   largest clique holding the edge itself.
//! - **ERW-Kpath** (`erw_kpath`): a random-walk estimate of k-path edge
//!   centrality.
//! - **Betweenness** (`betweenness`): the fraction of shortest paths that
//!   run through the edge.
//! - **Degree product** (`degree`): `(k_u * k_v)^theta`.
//!
//! # Usage
//!
//! ```rust,ignore
//! use nnes_core::Network;
//! use nnes_metrics::edge::{bridgeness, diffusion_importance};
//!
//! let g = Network::from_edges(false, &[("a", "b"), ("b", "c"), ("c", "a")]);
//! let d = diffusion_importance(&g)?;
//! assert_eq!(d.get("a", "b")?, 1.0);
//! let b = bridgeness(&g)?;
//! ```

pub mod betweenness;
pub mod bridgeness;
pub mod degree;
pub mod diffusion;
pub mod erw_kpath;

pub use betweenness::betweenness_centrality;
pub use bridgeness::{bridgeness, bridgeness_with_cancel};
pub use degree::degree_product;
pub use diffusion::diffusion_importance;
pub use erw_kpath::{erw_kpath, erw_kpath_with_cancel, erw_kpath_with_rng};
