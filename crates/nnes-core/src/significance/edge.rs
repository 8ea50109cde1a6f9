//! Edge-keyed results with a dense lookup matrix.
//!
//! On construction the scores are also laid out in a `|V| x |V|` matrix in
//! node-index order, so [`EdgeSignificance::get`] is two index lookups
//! instead of a key canonicalization and a tree search. Undirected results
//! fill both `M[i][j]` and `M[j][i]`. Cells for node pairs without an edge
//! hold `0.0`, the same value as an edge whose score is zero.

use std::ops::Deref;
use std::path::Path;

use nalgebra::DMatrix;

use crate::error::Result;
use crate::graph::Network;
use crate::significance::{EdgeKey, Params, Significance, SignificanceRecord};

#[derive(Debug, Clone)]
pub struct EdgeSignificance<'g> {
    inner: Significance<'g, EdgeKey>,
    matrix: DMatrix<f64>,
}

impl<'g> EdgeSignificance<'g> {
    /// Build a result and its lookup matrix.
    ///
    /// # Errors
    ///
    /// Returns [`SignificanceError::EntityNotFound`](crate::SignificanceError::EntityNotFound)
    /// for the first key that is not an edge of `graph`.
    pub fn new(
        graph: &'g Network,
        scores: impl IntoIterator<Item = (EdgeKey, f64)>,
        method: impl Into<String>,
        params: Params,
    ) -> Result<Self> {
        Ok(Self::from_significance(Significance::new(
            graph, scores, method, params,
        )?))
    }

    fn from_significance(inner: Significance<'g, EdgeKey>) -> Self {
        let graph = inner.graph();
        let n = graph.node_count();
        let mut matrix = DMatrix::zeros(n, n);
        for (key, score) in inner.iter() {
            // Keys were validated on construction.
            let (Some(i), Some(j)) = (graph.index_of(key.source()), graph.index_of(key.target()))
            else {
                continue;
            };
            matrix[(i, j)] = score;
            if !graph.is_directed() {
                matrix[(j, i)] = score;
            }
        }
        Self { inner, matrix }
    }

    /// Score of the edge `source -> target` (either orientation when the
    /// graph is undirected). Node pairs without an edge read as `0.0`.
    ///
    /// # Errors
    ///
    /// Returns [`SignificanceError::EntityNotFound`](crate::SignificanceError::EntityNotFound)
    /// if either endpoint is not a node of the graph.
    pub fn get(&self, source: &str, target: &str) -> Result<f64> {
        let graph = self.inner.graph();
        let i = graph.require_index(source)?;
        let j = graph.require_index(target)?;
        Ok(self.matrix[(i, j)])
    }

    /// The dense score matrix in node-index order.
    #[must_use]
    pub const fn matrix(&self) -> &DMatrix<f64> {
        &self.matrix
    }

    /// Rebuild a result from a JSON snapshot against `graph`.
    ///
    /// # Errors
    ///
    /// See [`Significance::from_json`].
    pub fn from_json(json: &str, graph: &'g Network) -> Result<Self> {
        Ok(Self::from_significance(Significance::from_json(json, graph)?))
    }

    /// Rebuild a result from a parsed record.
    ///
    /// # Errors
    ///
    /// See [`Significance::from_json`].
    pub fn from_record(record: SignificanceRecord, graph: &'g Network) -> Result<Self> {
        Ok(Self::from_significance(Significance::from_record(
            record, graph,
        )?))
    }

    /// Write the JSON snapshot to `path`.
    ///
    /// # Errors
    ///
    /// See [`Significance::write_json`].
    pub fn write_json(&self, path: &Path) -> Result<()> {
        self.inner.write_json(path)
    }
}

impl<'g> Deref for EdgeSignificance<'g> {
    type Target = Significance<'g, EdgeKey>;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}
