use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::graph::structure::{Edge, EdgeKey, Weight};
use crate::mst::Algorithm;

/// How much of the input the result spans.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Coverage {
    /// The graph had no vertices.
    Empty,
    /// Connected input: a single tree with |V| - 1 edges.
    Tree,
    /// Disconnected input: one tree per connected component.
    Forest { trees: usize },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MstResult {
    pub algorithm: Algorithm,
    /// Selected edges in acceptance order.
    pub edges: Vec<Edge>,
    pub total_weight: Weight,
    pub vertex_count: usize,
    pub coverage: Coverage,
}

impl MstResult {
    pub(crate) fn new(algorithm: Algorithm, edges: Vec<Edge>, vertex_count: usize) -> Self {
        let total_weight = edges.iter().map(Edge::weight).sum();
        // An acyclic edge set over |V| vertices leaves |V| - |E| trees.
        let trees = vertex_count - edges.len();
        let coverage = match trees {
            0 => Coverage::Empty,
            1 => Coverage::Tree,
            trees => Coverage::Forest { trees },
        };
        Self {
            algorithm,
            edges,
            total_weight,
            vertex_count,
            coverage,
        }
    }

    /// Number of trees in the result; zero for the empty graph.
    pub fn trees(&self) -> usize {
        match self.coverage {
            Coverage::Empty => 0,
            Coverage::Tree => 1,
            Coverage::Forest { trees } => trees,
        }
    }

    pub fn is_spanning_tree(&self) -> bool {
        self.coverage == Coverage::Tree
    }

    pub fn is_disconnected(&self) -> bool {
        matches!(self.coverage, Coverage::Forest { .. })
    }

    pub fn contains(&self, a: &str, b: &str) -> bool {
        let key = EdgeKey::new(a, b);
        self.edges.iter().any(|edge| *edge.key() == key)
    }

    /// Selected pairs, independent of acceptance order.
    pub fn edge_set(&self) -> BTreeSet<EdgeKey> {
        self.edges.iter().map(|edge| edge.key().clone()).collect()
    }
}

impl fmt::Display for MstResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {} edges, total weight {}",
            self.algorithm,
            self.edges.len(),
            self.total_weight
        )?;
        match self.coverage {
            Coverage::Empty => write!(f, " (empty graph)"),
            Coverage::Tree => Ok(()),
            Coverage::Forest { trees } => write!(f, " (disconnected: forest of {trees} trees)"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn coverage_follows_tree_count() {
        let empty = MstResult::new(Algorithm::Prim, Vec::new(), 0);
        assert_eq!(empty.coverage, Coverage::Empty);
        assert_eq!(empty.trees(), 0);

        let single = MstResult::new(Algorithm::Prim, Vec::new(), 1);
        assert!(single.is_spanning_tree());

        let forest = MstResult::new(
            Algorithm::Kruskal,
            vec![Edge::new("A", "B", 1.0), Edge::new("C", "D", 1.0)],
            4,
        );
        assert_eq!(forest.coverage, Coverage::Forest { trees: 2 });
        assert!(forest.is_disconnected());
        assert_eq!(forest.total_weight, 2.0);
        assert!(forest.contains("D", "C"));
        assert_eq!(
            forest.to_string(),
            "kruskal: 2 edges, total weight 2 (disconnected: forest of 2 trees)"
        );
    }
}
