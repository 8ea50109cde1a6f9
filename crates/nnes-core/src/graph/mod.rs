//! Read-only graph collaborator consumed by every significance algorithm.
//!
//! # Overview
//!
//! [`Network`] wraps a petgraph [`DiGraph`](petgraph::graph::DiGraph) with
//! string node ids and per-edge numeric attributes. Undirected networks store
//! each edge once and answer neighbor queries through an undirected view.
//! Algorithms never mutate a `Network`; removal analyses work on induced
//! copies produced by [`Network::without_node`].
//!
//! ## Primitives
//!
//! ```text
//! build::NetworkBuilder          -> Network (node/edge enumeration, degree)
//! paths::ShortestPathTree        <- Network::shortest_path_tree / all_pairs_shortest_paths
//! cliques                        <- Network::maximal_cliques (Bron–Kerbosch)
//! components                     <- Network::connected_components (union-find)
//! spectrum                       <- Network::adjacency_eigen / laplacian_spectrum
//! load                           <- Network::from_edge_list
//! ```
//!
//! Every weighted primitive takes `weight: Option<&str>`: `None` treats all
//! edges as weight 1, `Some(name)` reads that attribute and falls back to 1
//! where it is missing.

pub mod build;
pub mod cliques;
pub mod components;
pub mod load;
pub mod paths;
pub mod spectrum;

pub use build::{EdgeAttrs, Network, NetworkBuilder};
pub use paths::{Frontier, ShortestPathTree};
