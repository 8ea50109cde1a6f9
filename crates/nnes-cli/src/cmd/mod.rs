//! Subcommand handlers.
//!
//! Each handler takes its clap `Args` plus the shared [`RunContext`] and
//! writes to stdout through [`crate::output`].

pub mod compare;
pub mod edge;
pub mod evaluate;
pub mod node;

use std::path::Path;

use anyhow::Context as _;
use nnes_core::Network;
use nnes_core::config::AlgorithmConfig;
use tracing::debug;

use crate::output::OutputMode;

/// Settings shared by every subcommand, resolved once in `main`.
#[derive(Debug, Clone)]
pub struct RunContext {
    /// Config file values with global flags already applied.
    pub config: AlgorithmConfig,
    pub directed: bool,
    pub output: OutputMode,
}

impl RunContext {
    pub fn weight(&self) -> Option<&str> {
        self.config.weight.as_deref()
    }

    /// Load an edge-list file as configured.
    pub fn load_graph(&self, path: &Path) -> anyhow::Result<Network> {
        let graph = Network::load_edge_list(path, self.directed)
            .with_context(|| format!("Failed to load graph from {}", path.display()))?;
        debug!(
            nodes = graph.node_count(),
            edges = graph.edge_count(),
            hash = graph.content_hash(),
            "loaded graph"
        );
        Ok(graph)
    }
}
