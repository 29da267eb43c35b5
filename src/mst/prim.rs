//! Prim：自首个顶点起按最小横切边生长，边耗尽后在下一个未访问顶点处另起一棵树。
use crate::graph::core::Graph;
use crate::graph::ids::{ComponentId, VertexIdx};
use crate::graph::index_vec::IndexVec;
use crate::graph::snapshot::Snapshot;
use crate::mst::step::{Progress, Step, StepEvent};
use crate::mst::union_find::number_components;
use crate::mst::{Algorithm, MstResult, MstTrace};

/// Frontier growth from the first vertex of the graph's iteration order.
///
/// Every selection is one [`StepEvent::Grown`]. When the frontier is empty
/// but vertices remain unvisited, the next unvisited vertex seeds a new tree
/// and a [`StepEvent::TreeStarted`] step is emitted, so disconnected input
/// yields a spanning forest.
#[derive(Debug, Clone)]
pub struct Prim {
    snapshot: Snapshot,
    /// Root of the tree each visited vertex belongs to; unvisited vertices
    /// point at themselves.
    tree_root: IndexVec<VertexIdx, VertexIdx>,
    seeded: bool,
    progress: Progress,
}

impl Prim {
    pub fn new(graph: &Graph) -> Self {
        let snapshot = graph.snapshot();
        let tree_root = IndexVec::from_fn(snapshot.vertex_count(), |idx| idx);
        let progress = Progress::new(snapshot.vertex_count());
        Self {
            snapshot,
            tree_root,
            seeded: false,
            progress,
        }
    }

    fn visited(&self, vertex: VertexIdx) -> bool {
        self.progress.is_settled(vertex)
    }

    fn crosses(&self, u: VertexIdx, v: VertexIdx) -> bool {
        self.visited(u) != self.visited(v)
    }

    /// Position of the cheapest edge with exactly one visited endpoint.
    /// Edges are in canonical order, so the first hit wins every tie.
    fn cheapest_crossing(&self) -> Option<usize> {
        self.snapshot
            .edges()
            .iter()
            .position(|edge| self.crosses(edge.u, edge.v))
    }

    fn first_unvisited(&self) -> Option<VertexIdx> {
        self.snapshot
            .vertices()
            .indices()
            .find(|&idx| !self.visited(idx))
    }

    fn visit(&mut self, vertex: VertexIdx, root: VertexIdx) {
        self.progress.settle(vertex);
        self.tree_root[vertex] = root;
    }

    fn components(&self) -> IndexVec<VertexIdx, ComponentId> {
        number_components(&self.tree_root)
    }
}

impl Iterator for Prim {
    type Item = Step;

    fn next(&mut self) -> Option<Step> {
        if !self.seeded {
            self.seeded = true;
            let start = self.first_unvisited()?;
            log::debug!("prim starts at {}", self.snapshot.vertex(start));
            self.visit(start, start);
        }

        let event = match self.cheapest_crossing() {
            Some(pos) => {
                let edge = self.snapshot.edges()[pos];
                let (inside, outside) = if self.visited(edge.u) {
                    (edge.u, edge.v)
                } else {
                    (edge.v, edge.u)
                };
                let tied = self
                    .snapshot
                    .ties_after(pos)
                    .filter(|other| self.crosses(other.u, other.v))
                    .map(|other| self.snapshot.edge(other))
                    .collect();
                let root = self.tree_root[inside];
                self.visit(outside, root);
                StepEvent::Grown {
                    edge: self.progress.accept(&self.snapshot, &edge),
                    entered: self.snapshot.vertex(outside).clone(),
                    tied,
                }
            }
            None => {
                let root = self.first_unvisited()?;
                self.visit(root, root);
                StepEvent::TreeStarted {
                    root: self.snapshot.vertex(root).clone(),
                }
            }
        };

        let components = self.components();
        let step = self.progress.emit(&self.snapshot, event, &components);
        log::debug!("prim step {}: {:?}", step.index, step.event);
        Some(step)
    }
}

impl MstTrace for Prim {
    fn algorithm(&self) -> Algorithm {
        Algorithm::Prim
    }

    fn finish(&mut self) -> MstResult {
        self.by_ref().for_each(drop);
        MstResult::new(
            Algorithm::Prim,
            self.progress.tree().to_vec(),
            self.snapshot.vertex_count(),
        )
    }
}
