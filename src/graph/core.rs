//! 图的编辑操作与只读查询。
use indexmap::{IndexMap, IndexSet};
use itertools::Itertools;
use thiserror::Error;

use crate::graph::snapshot::Snapshot;
use crate::graph::structure::{Edge, EdgeKey, Vertex, Weight, WeightPolicy};

#[derive(Debug, Clone, PartialEq, Error)]
pub enum GraphError {
    #[error("vertex {0} not found")]
    NotFound(Vertex),
    #[error("self-loop on vertex {0} is not allowed")]
    InvalidEdge(Vertex),
    #[error("invalid edge weight {0}")]
    InvalidWeight(Weight),
}

#[derive(Debug, Clone, Default)]
pub struct Graph {
    vertices: IndexSet<Vertex>,
    edges: IndexMap<EdgeKey, Weight>,
    policy: WeightPolicy,
}

impl Graph {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn with_policy(policy: WeightPolicy) -> Self {
        Self {
            policy,
            ..Self::default()
        }
    }

    pub fn policy(&self) -> WeightPolicy {
        self.policy
    }

    /// Inserts `vertex` if absent. Returns `false` when it already existed.
    pub fn add_vertex(&mut self, vertex: impl Into<Vertex>) -> bool {
        self.vertices.insert(vertex.into())
    }

    /// Removes `vertex` together with every incident edge.
    ///
    /// Returns the number of edges dropped along with the vertex.
    pub fn remove_vertex(&mut self, vertex: &str) -> Result<usize, GraphError> {
        if !self.vertices.shift_remove(vertex) {
            return Err(GraphError::NotFound(Vertex::new(vertex)));
        }
        let before = self.edges.len();
        self.edges.retain(|key, _| !key.contains(vertex));
        Ok(before - self.edges.len())
    }

    /// Inserts the edge `a`–`b`, replacing the weight of an existing one.
    ///
    /// Both endpoints must already exist. Every check runs before the graph
    /// is touched, so a rejected call leaves it unchanged. Returns the
    /// replaced weight, if any.
    pub fn add_edge(
        &mut self,
        a: &str,
        b: &str,
        weight: Weight,
    ) -> Result<Option<Weight>, GraphError> {
        let a = self.lookup(a)?.clone();
        let b = self.lookup(b)?.clone();
        if a == b {
            return Err(GraphError::InvalidEdge(a));
        }
        if !self.policy.admits(weight) {
            return Err(GraphError::InvalidWeight(weight));
        }
        Ok(self.edges.insert(EdgeKey::new(a, b), weight))
    }

    /// Removes the edge `a`–`b` if present and returns its weight.
    pub fn remove_edge(&mut self, a: &str, b: &str) -> Option<Weight> {
        self.edges.shift_remove(&EdgeKey::new(a, b))
    }

    pub fn contains_vertex(&self, vertex: &str) -> bool {
        self.vertices.contains(vertex)
    }

    pub fn contains_edge(&self, a: &str, b: &str) -> bool {
        self.weight(a, b).is_some()
    }

    pub fn weight(&self, a: &str, b: &str) -> Option<Weight> {
        self.edges.get(&EdgeKey::new(a, b)).copied()
    }

    /// Vertices in insertion order.
    pub fn vertices(&self) -> impl Iterator<Item = &Vertex> {
        self.vertices.iter()
    }

    /// Edges in insertion order.
    pub fn edges(&self) -> impl Iterator<Item = Edge> {
        self.edges
            .iter()
            .map(|(key, weight)| Edge::from_key(key.clone(), *weight))
    }

    pub(crate) fn edge_entries(&self) -> impl Iterator<Item = (&EdgeKey, Weight)> {
        self.edges.iter().map(|(key, weight)| (key, *weight))
    }

    /// Position of `vertex` in iteration order.
    pub(crate) fn vertex_position(&self, vertex: &str) -> Option<usize> {
        self.vertices.get_index_of(vertex)
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Neighbours of `vertex` with the connecting weights. Unknown vertices
    /// have no neighbours.
    pub fn neighbors<'a>(
        &'a self,
        vertex: &'a str,
    ) -> impl Iterator<Item = (&'a Vertex, Weight)> {
        self.edges
            .iter()
            .filter_map(move |(key, weight)| key.other(vertex).map(|other| (other, *weight)))
    }

    pub fn degree(&self, vertex: &str) -> usize {
        self.neighbors(vertex).count()
    }

    pub fn total_weight(&self) -> Weight {
        self.edges.values().sum()
    }

    pub fn isolated_vertices(&self) -> Vec<&Vertex> {
        self.vertices
            .iter()
            .filter(|vertex| self.degree(vertex.as_str()) == 0)
            .collect()
    }

    /// Number of connected components; zero for the empty graph.
    pub fn connected_components(&self) -> usize {
        self.snapshot().component_count()
    }

    pub fn is_connected(&self) -> bool {
        self.connected_components() <= 1
    }

    /// Frozen, densely indexed copy used by the spanning tree engines.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot::of(self)
    }

    pub fn log_summary(&self) {
        log::info!(
            "graph: {} vertices, {} edges, total weight {}",
            self.vertex_count(),
            self.edge_count(),
            self.total_weight()
        );
        let isolated = self.isolated_vertices();
        if !isolated.is_empty() {
            log::warn!(
                "{} isolated vertices: {}",
                isolated.len(),
                isolated.iter().join(", ")
            );
        }
        let components = self.connected_components();
        if components > 1 {
            log::warn!(
                "graph is disconnected ({} components), engines will return a spanning forest",
                components
            );
        }
    }

    fn lookup(&self, vertex: &str) -> Result<&Vertex, GraphError> {
        self.vertices
            .get(vertex)
            .ok_or_else(|| GraphError::NotFound(Vertex::new(vertex)))
    }
}
