//! 引擎运行期间使用的只读图快照。
//!
//! 顶点编号沿用 [`Graph`] 的迭代顺序；边按 `(权值, 较小标签, 较大标签)`
//! 升序排列，该全序即为三种生成树算法共享的平局裁决规则：两条候选边中
//! 在快照里位置更靠前者胜出。
use std::cmp::Ordering;

use itertools::Itertools;

use crate::graph::core::Graph;
use crate::graph::ids::VertexIdx;
use crate::graph::index_vec::{Idx, IndexVec};
use crate::graph::structure::{Edge, EdgeKey, Vertex, Weight};
use crate::mst::union_find::UnionFind;

/// Edge of a [`Snapshot`]; `u` carries the smaller label.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SnapshotEdge {
    pub u: VertexIdx,
    pub v: VertexIdx,
    pub weight: Weight,
}

impl SnapshotEdge {
    pub fn touches(&self, vertex: VertexIdx) -> bool {
        self.u == vertex || self.v == vertex
    }

    /// Endpoint opposite to `vertex`; `vertex` must be an endpoint.
    pub fn opposite(&self, vertex: VertexIdx) -> VertexIdx {
        if self.u == vertex { self.v } else { self.u }
    }
}

#[derive(Debug, Clone)]
pub struct Snapshot {
    vertices: IndexVec<VertexIdx, Vertex>,
    edges: Vec<SnapshotEdge>,
}

impl Snapshot {
    pub fn of(graph: &Graph) -> Self {
        let vertices: IndexVec<VertexIdx, Vertex> = graph.vertices().cloned().collect();
        let edges = graph
            .edge_entries()
            .filter_map(|(key, weight)| {
                let u = graph.vertex_position(key.low().as_str())?;
                let v = graph.vertex_position(key.high().as_str())?;
                Some(SnapshotEdge {
                    u: VertexIdx::from_usize(u),
                    v: VertexIdx::from_usize(v),
                    weight,
                })
            })
            .sorted_by(|x, y| canonical_order(&vertices, x, y))
            .collect();
        Self { vertices, edges }
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

    pub fn vertex(&self, idx: VertexIdx) -> &Vertex {
        &self.vertices[idx]
    }

    pub fn vertices(&self) -> &IndexVec<VertexIdx, Vertex> {
        &self.vertices
    }

    /// Edges in canonical order.
    pub fn edges(&self) -> &[SnapshotEdge] {
        &self.edges
    }

    pub fn edge(&self, edge: &SnapshotEdge) -> Edge {
        Edge::from_key(
            EdgeKey::new(self.vertex(edge.u).clone(), self.vertex(edge.v).clone()),
            edge.weight,
        )
    }

    /// Edges after position `pos` whose weight equals the weight at `pos`.
    /// They lost the tie-break against the edge at `pos`.
    pub fn ties_after(&self, pos: usize) -> impl Iterator<Item = &SnapshotEdge> {
        let weight = self.edges.get(pos).map(|edge| edge.weight);
        self.edges
            .iter()
            .skip(pos + 1)
            .take_while(move |edge| Some(edge.weight) == weight)
    }

    pub fn component_count(&self) -> usize {
        let mut uf = UnionFind::new(self.vertex_count());
        for edge in &self.edges {
            uf.union(edge.u, edge.v);
        }
        uf.num_components()
    }
}

fn canonical_order(
    vertices: &IndexVec<VertexIdx, Vertex>,
    x: &SnapshotEdge,
    y: &SnapshotEdge,
) -> Ordering {
    x.weight
        .total_cmp(&y.weight)
        .then_with(|| vertices[x.u].cmp(&vertices[y.u]))
        .then_with(|| vertices[x.v].cmp(&vertices[y.v]))
}
