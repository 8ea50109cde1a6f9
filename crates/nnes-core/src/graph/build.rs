//! Graph construction and the basic enumeration/degree queries.
//!
//! ## Node Order
//!
//! Nodes are indexed `0..n` in first-insertion order. Every algorithm that
//! needs a deterministic iteration order (pair enumeration, clique order,
//! matrix rows) uses this index.
//!
//! ## Duplicate and Self Edges
//!
//! Self-loops are dropped with a warning. Adding an edge that already exists
//! (in either orientation, for undirected networks) merges its attributes
//! into the existing edge instead of creating a parallel one.
//!
//! ## Content Hash
//!
//! [`Network::content_hash`] is a BLAKE3 hash of the canonical edge set and
//! node set. Two networks with the same hash yield identical deterministic
//! significance results.

use std::collections::{BTreeMap, HashMap};

use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::visit::EdgeRef;
use tracing::{debug, warn};

use crate::error::{Result, SignificanceError};

// ---------------------------------------------------------------------------
// EdgeAttrs
// ---------------------------------------------------------------------------

/// Named numeric attributes attached to an edge (e.g. `weight`, `capacity`).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EdgeAttrs {
    values: BTreeMap<String, f64>,
}

impl EdgeAttrs {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    #[must_use]
    pub fn with(mut self, name: impl Into<String>, value: f64) -> Self {
        self.values.insert(name.into(), value);
        self
    }

    pub fn insert(&mut self, name: impl Into<String>, value: f64) {
        self.values.insert(name.into(), value);
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<f64> {
        self.values.get(name).copied()
    }

    /// Weight under the given attribute name; 1.0 when unweighted or missing.
    #[must_use]
    pub fn weight(&self, weight: Option<&str>) -> f64 {
        weight.and_then(|name| self.get(name)).unwrap_or(1.0)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.values.iter().map(|(k, v)| (k.as_str(), *v))
    }

    fn merge(&mut self, other: Self) {
        self.values.extend(other.values);
    }
}

// ---------------------------------------------------------------------------
// Network
// ---------------------------------------------------------------------------

/// An immutable graph snapshot: string node ids, attributed edges, and
/// precomputed adjacency lists.
///
/// Build one with [`NetworkBuilder`], [`Network::from_edges`] or
/// [`Network::from_edge_list`](crate::graph::load).
#[derive(Debug, Clone)]
pub struct Network {
    pub(crate) graph: DiGraph<String, EdgeAttrs>,
    pub(crate) node_map: HashMap<String, NodeIndex>,
    pub(crate) directed: bool,
    /// Undirected view: sorted, deduplicated neighbor indices.
    pub(crate) adjacency: Vec<Vec<usize>>,
    pub(crate) successors: Vec<Vec<usize>>,
    pub(crate) predecessors: Vec<Vec<usize>>,
    /// Edges leaving each node along a traversal: `(other endpoint, edge index)`.
    pub(crate) forward: Vec<Vec<(usize, usize)>>,
    /// Every edge touching each node regardless of direction.
    pub(crate) incident: Vec<Vec<(usize, usize)>>,
    content_hash: String,
}

impl Network {
    #[must_use]
    pub fn builder(directed: bool) -> NetworkBuilder {
        NetworkBuilder::new(directed)
    }

    /// Build an unweighted network from an edge list; nodes appear in
    /// first-mention order.
    #[must_use]
    pub fn from_edges(directed: bool, edges: &[(&str, &str)]) -> Self {
        Self::from_nodes_and_edges(directed, &[], edges)
    }

    /// Like [`Network::from_edges`], but inserts `nodes` first so isolated
    /// nodes exist and the node order is explicit.
    #[must_use]
    pub fn from_nodes_and_edges(directed: bool, nodes: &[&str], edges: &[(&str, &str)]) -> Self {
        let mut builder = NetworkBuilder::new(directed);
        for node in nodes {
            builder.add_node(*node);
        }
        for (source, target) in edges {
            builder.add_edge(*source, *target);
        }
        builder.build()
    }

    #[must_use]
    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    #[must_use]
    pub const fn is_directed(&self) -> bool {
        self.directed
    }

    /// BLAKE3 hash of the node and edge sets, prefixed with `blake3:`.
    #[must_use]
    pub fn content_hash(&self) -> &str {
        &self.content_hash
    }

    /// Node ids in index order.
    pub fn nodes(&self) -> impl Iterator<Item = &str> + '_ {
        self.graph.node_weights().map(String::as_str)
    }

    /// Id of the node at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= node_count()`.
    #[must_use]
    pub fn node_id(&self, index: usize) -> &str {
        &self.graph[NodeIndex::new(index)]
    }

    #[must_use]
    pub fn index_of(&self, id: &str) -> Option<usize> {
        self.node_map.get(id).map(|idx| idx.index())
    }

    /// Index of `id`, or `EntityNotFound`.
    ///
    /// # Errors
    ///
    /// Returns [`SignificanceError::EntityNotFound`] if the node is absent.
    pub fn require_index(&self, id: &str) -> Result<usize> {
        self.index_of(id)
            .ok_or_else(|| SignificanceError::node_not_found(id))
    }

    #[must_use]
    pub fn contains_node(&self, id: &str) -> bool {
        self.node_map.contains_key(id)
    }

    /// Edge endpoints as node indices, in edge-index order.
    pub fn edges(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.graph
            .edge_references()
            .map(|e| (e.source().index(), e.target().index()))
    }

    /// Edge endpoints as node ids, in edge-index order.
    pub fn edge_ids(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.edges()
            .map(|(s, t)| (self.node_id(s), self.node_id(t)))
    }

    /// Attributes of the edge at `edge_index`.
    ///
    /// # Panics
    ///
    /// Panics if `edge_index >= edge_count()`.
    #[must_use]
    pub fn edge_attrs(&self, edge_index: usize) -> &EdgeAttrs {
        &self.graph[petgraph::graph::EdgeIndex::new(edge_index)]
    }

    /// Edge index between two node indices. Undirected networks match
    /// either orientation.
    #[must_use]
    pub fn find_edge(&self, source: usize, target: usize) -> Option<usize> {
        let (a, b) = (NodeIndex::new(source), NodeIndex::new(target));
        if self.directed {
            self.graph.find_edge(a, b).map(|e| e.index())
        } else {
            self.graph.find_edge_undirected(a, b).map(|(e, _)| e.index())
        }
    }

    #[must_use]
    pub fn has_edge(&self, source: &str, target: &str) -> bool {
        match (self.index_of(source), self.index_of(target)) {
            (Some(s), Some(t)) => self.find_edge(s, t).is_some(),
            _ => false,
        }
    }

    /// Weight of the edge `source -> target`, if it exists.
    #[must_use]
    pub fn edge_weight(&self, source: &str, target: &str, weight: Option<&str>) -> Option<f64> {
        let s = self.index_of(source)?;
        let t = self.index_of(target)?;
        self.find_edge(s, t)
            .map(|e| self.edge_attrs(e).weight(weight))
    }

    /// Undirected neighbors of the node at `index`, sorted.
    #[must_use]
    pub fn neighbors(&self, index: usize) -> &[usize] {
        &self.adjacency[index]
    }

    /// Out-neighbors (undirected networks: all neighbors), sorted.
    #[must_use]
    pub fn successors(&self, index: usize) -> &[usize] {
        &self.successors[index]
    }

    /// In-neighbors (undirected networks: all neighbors), sorted.
    #[must_use]
    pub fn predecessors(&self, index: usize) -> &[usize] {
        &self.predecessors[index]
    }

    /// Edges a path may follow out of `index`: `(next node, edge index)`.
    #[must_use]
    pub fn forward_edges(&self, index: usize) -> &[(usize, usize)] {
        &self.forward[index]
    }

    /// Every edge touching `index`, ignoring direction.
    #[must_use]
    pub fn incident_edges(&self, index: usize) -> &[(usize, usize)] {
        &self.incident[index]
    }

    /// Neighbor ids of `id` in the undirected view.
    ///
    /// # Errors
    ///
    /// Returns [`SignificanceError::EntityNotFound`] if the node is absent.
    pub fn neighbors_of(&self, id: &str) -> Result<Vec<&str>> {
        let index = self.require_index(id)?;
        Ok(self.adjacency[index]
            .iter()
            .map(|&n| self.node_id(n))
            .collect())
    }

    /// (Weighted) degree: sum of incident edge weights. Directed networks
    /// count in- and out-edges.
    #[must_use]
    pub fn degree(&self, index: usize, weight: Option<&str>) -> f64 {
        self.incident[index]
            .iter()
            .map(|&(_, e)| self.edge_attrs(e).weight(weight))
            .sum()
    }

    /// [`Network::degree`] by node id.
    ///
    /// # Errors
    ///
    /// Returns [`SignificanceError::EntityNotFound`] if the node is absent.
    pub fn degree_of(&self, id: &str, weight: Option<&str>) -> Result<f64> {
        Ok(self.degree(self.require_index(id)?, weight))
    }

    /// Induced subgraph without `id`; remaining nodes keep their relative
    /// order.
    ///
    /// # Errors
    ///
    /// Returns [`SignificanceError::EntityNotFound`] if the node is absent.
    pub fn without_node(&self, id: &str) -> Result<Self> {
        let removed = self.require_index(id)?;
        let mut builder = NetworkBuilder::new(self.directed);
        for (index, node) in self.nodes().enumerate() {
            if index != removed {
                builder.add_node(node);
            }
        }
        for edge in self.graph.edge_references() {
            let (s, t) = (edge.source().index(), edge.target().index());
            if s != removed && t != removed {
                builder.add_edge_with_attrs(
                    self.node_id(s),
                    self.node_id(t),
                    edge.weight().clone(),
                );
            }
        }
        Ok(builder.build())
    }
}

// ---------------------------------------------------------------------------
// NetworkBuilder
// ---------------------------------------------------------------------------

/// Incremental builder for [`Network`].
#[derive(Debug, Clone)]
pub struct NetworkBuilder {
    graph: DiGraph<String, EdgeAttrs>,
    node_map: HashMap<String, NodeIndex>,
    directed: bool,
}

impl NetworkBuilder {
    #[must_use]
    pub fn new(directed: bool) -> Self {
        Self {
            graph: DiGraph::new(),
            node_map: HashMap::new(),
            directed,
        }
    }

    /// Add a node if it is not already present.
    pub fn add_node(&mut self, id: impl Into<String>) -> &mut Self {
        let id = id.into();
        self.ensure_node(&id);
        self
    }

    /// Add an unweighted edge.
    pub fn add_edge(&mut self, source: &str, target: &str) -> &mut Self {
        self.add_edge_with_attrs(source, target, EdgeAttrs::new())
    }

    /// Add an edge carrying a single named weight attribute.
    pub fn add_weighted_edge(
        &mut self,
        source: &str,
        target: &str,
        name: &str,
        value: f64,
    ) -> &mut Self {
        self.add_edge_with_attrs(source, target, EdgeAttrs::new().with(name, value))
    }

    /// Add an edge with arbitrary attributes, merging into an existing edge
    /// between the same endpoints.
    pub fn add_edge_with_attrs(
        &mut self,
        source: &str,
        target: &str,
        attrs: EdgeAttrs,
    ) -> &mut Self {
        let s = self.ensure_node(source);
        let t = self.ensure_node(target);

        if s == t {
            warn!(node = source, "skipping self-loop");
            return self;
        }

        let existing = if self.directed {
            self.graph.find_edge(s, t)
        } else {
            self.graph.find_edge_undirected(s, t).map(|(e, _)| e)
        };

        match existing {
            Some(edge) => self.graph[edge].merge(attrs),
            None => {
                self.graph.add_edge(s, t, attrs);
            }
        }
        self
    }

    fn ensure_node(&mut self, id: &str) -> NodeIndex {
        if let Some(&idx) = self.node_map.get(id) {
            return idx;
        }
        let idx = self.graph.add_node(id.to_string());
        self.node_map.insert(id.to_string(), idx);
        idx
    }

    /// Freeze the builder into a [`Network`].
    #[must_use]
    pub fn build(self) -> Network {
        let n = self.graph.node_count();
        let mut adjacency = vec![Vec::new(); n];
        let mut successors = vec![Vec::new(); n];
        let mut predecessors = vec![Vec::new(); n];
        let mut forward = vec![Vec::new(); n];
        let mut incident = vec![Vec::new(); n];

        for edge in self.graph.edge_references() {
            let (s, t, e) = (edge.source().index(), edge.target().index(), edge.id().index());

            adjacency[s].push(t);
            adjacency[t].push(s);
            incident[s].push((t, e));
            incident[t].push((s, e));
            successors[s].push(t);
            predecessors[t].push(s);
            forward[s].push((t, e));

            if !self.directed {
                successors[t].push(s);
                predecessors[s].push(t);
                forward[t].push((s, e));
            }
        }

        for list in adjacency
            .iter_mut()
            .chain(successors.iter_mut())
            .chain(predecessors.iter_mut())
        {
            list.sort_unstable();
            list.dedup();
        }
        for list in forward.iter_mut().chain(incident.iter_mut()) {
            list.sort_unstable();
        }

        let content_hash = compute_content_hash(&self.graph, self.directed);

        debug!(
            nodes = n,
            edges = self.graph.edge_count(),
            directed = self.directed,
            "network built"
        );

        Network {
            graph: self.graph,
            node_map: self.node_map,
            directed: self.directed,
            adjacency,
            successors,
            predecessors,
            forward,
            incident,
            content_hash,
        }
    }
}

/// BLAKE3 over sorted node ids and sorted canonical edges.
fn compute_content_hash(graph: &DiGraph<String, EdgeAttrs>, directed: bool) -> String {
    let mut nodes: Vec<&str> = graph.node_weights().map(String::as_str).collect();
    nodes.sort_unstable();

    let mut edges: Vec<(&str, &str)> = graph
        .edge_references()
        .map(|e| {
            let (s, t) = (graph[e.source()].as_str(), graph[e.target()].as_str());
            if directed || s <= t { (s, t) } else { (t, s) }
        })
        .collect();
    edges.sort_unstable();

    let mut hasher = blake3::Hasher::new();
    let kind: &[u8] = if directed { b"directed\x00" } else { b"undirected\x00" };
    hasher.update(kind);
    for node in nodes {
        hasher.update(node.as_bytes());
        hasher.update(b"\x00");
    }
    hasher.update(b"\x01");
    for (source, target) in edges {
        hasher.update(source.as_bytes());
        hasher.update(b"\x00");
        hasher.update(target.as_bytes());
        hasher.update(b"\x00");
    }
    format!("blake3:{}", hasher.finalize())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
