//! 算法轨迹单元：每一步携带足以重绘的完整状态。
use serde::{Deserialize, Serialize};

use crate::graph::ids::{ComponentId, VertexIdx};
use crate::graph::index_vec::IndexVec;
use crate::graph::snapshot::{Snapshot, SnapshotEdge};
use crate::graph::structure::{Edge, Vertex, Weight};

/// Per-vertex state at the time a step was emitted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VertexState {
    pub vertex: Vertex,
    /// Component (Kruskal, Borůvka) or tree (Prim) the vertex belongs to.
    pub component: ComponentId,
    /// Prim: vertex visited. Kruskal / Borůvka: vertex touched by an accepted edge.
    pub settled: bool,
}

/// Cheapest outgoing edge picked by one component during a Borůvka round.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComponentChoice {
    /// Label of the component's union-find root at the start of the round.
    pub representative: Vertex,
    pub edge: Edge,
    /// Equal-weight edges leaving the same component that lost the
    /// label tie-break against `edge`.
    pub tied: Vec<Edge>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum StepEvent {
    /// Kruskal accepted the edge. `tied` lists the pending equal-weight
    /// candidates it beat on the label tie-break.
    Accepted { edge: Edge, tied: Vec<Edge> },
    /// Kruskal discarded the edge because it would close a cycle.
    Rejected { edge: Edge },
    /// Prim grew the current tree by `edge`, pulling in `entered`.
    Grown {
        edge: Edge,
        entered: Vertex,
        tied: Vec<Edge>,
    },
    /// Prim ran out of crossing edges and seeded a new tree at `root`.
    TreeStarted { root: Vertex },
    /// One complete Borůvka round.
    Round {
        choices: Vec<ComponentChoice>,
        merged: Vec<Edge>,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Step {
    /// Zero-based position in the trace.
    pub index: usize,
    pub event: StepEvent,
    pub membership: Vec<VertexState>,
    /// Every edge accepted so far, in acceptance order.
    pub tree: Vec<Edge>,
    pub total_weight: Weight,
}

impl Step {
    /// Edges this step added to the tree.
    pub fn added(&self) -> &[Edge] {
        match &self.event {
            StepEvent::Accepted { edge, .. } | StepEvent::Grown { edge, .. } => {
                std::slice::from_ref(edge)
            }
            StepEvent::Round { merged, .. } => merged,
            StepEvent::Rejected { .. } | StepEvent::TreeStarted { .. } => &[],
        }
    }

    pub fn component_of(&self, vertex: &str) -> Option<ComponentId> {
        self.membership
            .iter()
            .find(|state| state.vertex.as_str() == vertex)
            .map(|state| state.component)
    }
}

/// Running tree shared by the three engines.
#[derive(Debug, Clone)]
pub(crate) struct Progress {
    tree: Vec<Edge>,
    total_weight: Weight,
    settled: IndexVec<VertexIdx, bool>,
    emitted: usize,
}

impl Progress {
    pub(crate) fn new(vertex_count: usize) -> Self {
        Self {
            tree: Vec::new(),
            total_weight: 0.0,
            settled: IndexVec::from_elem(false, vertex_count),
            emitted: 0,
        }
    }

    pub(crate) fn tree(&self) -> &[Edge] {
        &self.tree
    }

    pub(crate) fn tree_len(&self) -> usize {
        self.tree.len()
    }

    pub(crate) fn is_settled(&self, vertex: VertexIdx) -> bool {
        self.settled[vertex]
    }

    pub(crate) fn settle(&mut self, vertex: VertexIdx) {
        self.settled[vertex] = true;
    }

    /// Adds `edge` to the tree and settles both endpoints.
    pub(crate) fn accept(&mut self, snapshot: &Snapshot, edge: &SnapshotEdge) -> Edge {
        let accepted = snapshot.edge(edge);
        self.settle(edge.u);
        self.settle(edge.v);
        self.total_weight += edge.weight;
        self.tree.push(accepted.clone());
        accepted
    }

    pub(crate) fn emit(
        &mut self,
        snapshot: &Snapshot,
        event: StepEvent,
        components: &IndexVec<VertexIdx, ComponentId>,
    ) -> Step {
        let membership = snapshot
            .vertices()
            .iter_enumerated()
            .map(|(idx, vertex)| VertexState {
                vertex: vertex.clone(),
                component: components[idx],
                settled: self.settled[idx],
            })
            .collect();
        let step = Step {
            index: self.emitted,
            event,
            membership,
            tree: self.tree.clone(),
            total_weight: self.total_weight,
        };
        self.emitted += 1;
        step
    }
}
