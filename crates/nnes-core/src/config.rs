//! Algorithm parameters and their TOML configuration layer.
//!
//! Every stochastic or tunable algorithm takes one of the `*Config` structs
//! below. The CLI loads an [`AlgorithmConfig`] from `.nnes/config.toml`
//! (project) or `<config dir>/nnes/config.toml` (user) and lets flags
//! override individual fields.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Top-level configuration file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AlgorithmConfig {
    /// Edge attribute used as weight. `None` means unweighted.
    #[serde(default)]
    pub weight: Option<String>,
    #[serde(default)]
    pub erw: ErwKpathConfig,
    #[serde(default)]
    pub spectral: SpectralConfig,
    #[serde(default)]
    pub betweenness: BetweennessConfig,
    #[serde(default)]
    pub degree_product: DegreeProductConfig,
}

/// Parameters for the random-walk k-path edge centrality estimator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErwKpathConfig {
    /// Maximum number of edges a single walk may traverse.
    /// Default: 20.
    #[serde(default = "default_erw_k")]
    pub k: usize,
    /// Number of independent walks. `None` uses `|E| - 1`.
    #[serde(default)]
    pub ruo: Option<usize>,
    /// Weight added to an edge per traversal. `None` uses `1 / |E|`.
    #[serde(default)]
    pub beta: Option<f64>,
    /// Seed for the walk RNG. `None` draws from OS entropy.
    #[serde(default)]
    pub seed: Option<u64>,
}

impl Default for ErwKpathConfig {
    fn default() -> Self {
        Self {
            k: default_erw_k(),
            ruo: None,
            beta: None,
            seed: None,
        }
    }
}

impl ErwKpathConfig {
    /// Iteration count for a graph with `edge_count` edges.
    #[must_use]
    pub fn resolved_ruo(&self, edge_count: usize) -> usize {
        self.ruo.unwrap_or_else(|| edge_count.saturating_sub(1))
    }

    /// Per-traversal increment for a graph with `edge_count` edges.
    #[must_use]
    pub fn resolved_beta(&self, edge_count: usize) -> f64 {
        self.beta.unwrap_or_else(|| {
            if edge_count == 0 {
                0.0
            } else {
                1.0 / edge_count as f64
            }
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpectralConfig {
    /// Number of communities `c` (dominant eigenvectors / non-trivial
    /// Laplacian eigenvalues considered). Default: 2.
    #[serde(default = "default_communities")]
    pub communities_number: usize,
}

impl Default for SpectralConfig {
    fn default() -> Self {
        Self {
            communities_number: default_communities(),
        }
    }
}

/// Parameters for edge betweenness centrality.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BetweennessConfig {
    /// Number of sampled source nodes. `None` uses every node.
    #[serde(default)]
    pub k: Option<usize>,
    /// Scale by `1 / (n (n - 1))`. Default: true.
    #[serde(default = "default_true")]
    pub normalized: bool,
    /// Seed for source sampling (only used when `k` is set).
    #[serde(default)]
    pub seed: Option<u64>,
}

impl Default for BetweennessConfig {
    fn default() -> Self {
        Self {
            k: None,
            normalized: default_true(),
            seed: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DegreeProductConfig {
    /// Exponent applied to `deg(u) * deg(v)`. Default: 1.0.
    #[serde(default = "default_theta")]
    pub theta: f64,
}

impl Default for DegreeProductConfig {
    fn default() -> Self {
        Self {
            theta: default_theta(),
        }
    }
}

/// Load `<project_root>/.nnes/config.toml`, or defaults if absent.
///
/// # Errors
///
/// Returns an error if the file exists but cannot be read or parsed.
pub fn load_project_config(project_root: &Path) -> Result<AlgorithmConfig> {
    let path = project_root.join(".nnes/config.toml");
    if !path.exists() {
        return Ok(AlgorithmConfig::default());
    }
    load_config_file(&path)
}

/// Load `<config dir>/nnes/config.toml`, or defaults if absent.
///
/// # Errors
///
/// Returns an error if the file exists but cannot be read or parsed.
pub fn load_user_config() -> Result<AlgorithmConfig> {
    let Some(config_dir) = dirs::config_dir() else {
        return Ok(AlgorithmConfig::default());
    };

    let path = config_dir.join("nnes/config.toml");
    if !path.exists() {
        return Ok(AlgorithmConfig::default());
    }
    load_config_file(&path)
}

/// Load a configuration file from an explicit path.
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed.
pub fn load_config_file(path: &Path) -> Result<AlgorithmConfig> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;

    toml::from_str::<AlgorithmConfig>(&content)
        .with_context(|| format!("Failed to parse {}", path.display()))
}

const fn default_erw_k() -> usize {
    20
}

const fn default_communities() -> usize {
    2
}

const fn default_true() -> bool {
    true
}

const fn default_theta() -> f64 {
    1.0
}
