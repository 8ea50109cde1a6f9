//! Significance results: scores keyed by node or edge, with provenance.
//!
//! # Overview
//!
//! Every algorithm returns a [`Significance`] value: a mapping from a
//! graph entity to an `f64` score, a borrow of the [`Network`] it was
//! computed on, the producing method's name, and the parameters it ran
//! with. Results are immutable once built.
//!
//! Construction validates every key against the graph and canonicalizes it
//! (undirected edge keys are ordered), so a result never refers to an
//! entity its graph lacks.
//!
//! # Wire Format
//!
//! ```json
//! {"significance": {"1|2": 0.5}, "algorithm": "bridgeness", "params": null}
//! ```
//!
//! Node keys are the node ids. Edge keys use the escaped `source|target`
//! encoding described in [`key`]. An empty parameter set is written as
//! `null`.

pub mod edge;
pub mod key;

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{Result, SignificanceError};
use crate::graph::Network;

pub use edge::EdgeSignificance;
pub use key::{EdgeKey, SignificanceKey};

/// Parameter name to value, as recorded by the producing algorithm.
pub type Params = BTreeMap<String, Value>;

/// A node-keyed result.
pub type NodeSignificance<'g> = Significance<'g, String>;

/// Scores for the entities of one graph, produced by one method.
#[derive(Debug, Clone)]
pub struct Significance<'g, K: SignificanceKey> {
    graph: &'g Network,
    scores: BTreeMap<K, f64>,
    method: String,
    params: Params,
}

/// Serialized form of a [`Significance`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SignificanceRecord {
    pub significance: BTreeMap<String, f64>,
    pub algorithm: String,
    pub params: Option<Params>,
}

impl<'g, K: SignificanceKey> Significance<'g, K> {
    /// Build a result, validating and canonicalizing every key.
    ///
    /// When two keys canonicalize to the same entity (for example `(a, b)`
    /// and `(b, a)` on an undirected graph) the later score wins.
    ///
    /// # Errors
    ///
    /// Returns [`SignificanceError::EntityNotFound`] for the first key that
    /// does not exist in `graph`.
    pub fn new(
        graph: &'g Network,
        scores: impl IntoIterator<Item = (K, f64)>,
        method: impl Into<String>,
        params: Params,
    ) -> Result<Self> {
        let mut canonical = BTreeMap::new();
        for (key, score) in scores {
            canonical.insert(key.canonicalize(graph)?, score);
        }
        Ok(Self {
            graph,
            scores: canonical,
            method: method.into(),
            params,
        })
    }

    #[must_use]
    pub const fn graph(&self) -> &'g Network {
        self.graph
    }

    /// Name of the algorithm that produced the scores.
    #[must_use]
    pub fn method(&self) -> &str {
        &self.method
    }

    #[must_use]
    pub const fn params(&self) -> &Params {
        &self.params
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.scores.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }

    /// Entries in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&K, f64)> + '_ {
        self.scores.iter().map(|(key, &score)| (key, score))
    }

    /// Score for an already-canonical key, if present.
    #[must_use]
    pub fn score(&self, key: &K) -> Option<f64> {
        self.scores.get(key).copied()
    }

    /// The `n` highest-scoring entries, descending. Ties keep key order.
    #[must_use]
    pub fn top_n(&self, n: usize) -> Vec<(&K, f64)> {
        let mut ranked: Vec<(&K, f64)> = self.iter().collect();
        ranked.sort_by(|a, b| b.1.total_cmp(&a.1));
        ranked.truncate(n);
        ranked
    }

    /// Wire record with encoded keys; empty params become `None`.
    #[must_use]
    pub fn to_record(&self) -> SignificanceRecord {
        SignificanceRecord {
            significance: self
                .scores
                .iter()
                .map(|(key, &score)| (key.encode(), score))
                .collect(),
            algorithm: self.method.clone(),
            params: if self.params.is_empty() {
                None
            } else {
                Some(self.params.clone())
            },
        }
    }

    /// Pretty-printed JSON snapshot.
    ///
    /// # Errors
    ///
    /// Returns [`SignificanceError::Json`] if serialization fails.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.to_record())?)
    }

    /// Write the JSON snapshot to `path`, replacing any existing file.
    ///
    /// # Errors
    ///
    /// Returns [`SignificanceError::Io`] if the file cannot be written.
    pub fn write_json(&self, path: &Path) -> Result<()> {
        let mut json = self.to_json()?;
        json.push('\n');
        fs::write(path, json)?;
        Ok(())
    }

    /// Rebuild a result from a JSON snapshot against `graph`.
    ///
    /// # Errors
    ///
    /// Returns [`SignificanceError::Json`] for malformed JSON,
    /// [`SignificanceError::InvalidKey`] for undecodable keys and
    /// [`SignificanceError::EntityNotFound`] for keys `graph` lacks.
    pub fn from_json(json: &str, graph: &'g Network) -> Result<Self> {
        let record: SignificanceRecord = serde_json::from_str(json)?;
        Self::from_record(record, graph)
    }

    /// Rebuild a result from an already-parsed record.
    ///
    /// # Errors
    ///
    /// See [`Significance::from_json`].
    pub fn from_record(record: SignificanceRecord, graph: &'g Network) -> Result<Self> {
        let scores = record
            .significance
            .iter()
            .map(|(raw, &score)| Ok((K::decode(raw)?, score)))
            .collect::<Result<Vec<_>>>()?;
        Self::new(
            graph,
            scores,
            record.algorithm,
            record.params.unwrap_or_default(),
        )
    }
}

impl Significance<'_, String> {
    /// Score of `node`.
    ///
    /// # Errors
    ///
    /// Returns [`SignificanceError::EntityNotFound`] if `node` has no score.
    pub fn get(&self, node: &str) -> Result<f64> {
        self.scores
            .get(node)
            .copied()
            .ok_or_else(|| SignificanceError::node_not_found(node))
    }
}
