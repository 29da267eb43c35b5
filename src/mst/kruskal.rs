//! Kruskal：按全序扫描所有边，以并查集判定是否成环。
use crate::graph::core::Graph;
use crate::graph::snapshot::Snapshot;
use crate::mst::step::{Progress, Step, StepEvent};
use crate::mst::union_find::UnionFind;
use crate::mst::{Algorithm, MstResult, MstTrace};

/// One step per scanned edge, either [`StepEvent::Accepted`] or
/// [`StepEvent::Rejected`]. Scanning stops early once |V| - 1 edges are in.
#[derive(Debug, Clone)]
pub struct Kruskal {
    snapshot: Snapshot,
    uf: UnionFind,
    cursor: usize,
    progress: Progress,
}

impl Kruskal {
    pub fn new(graph: &Graph) -> Self {
        let snapshot = graph.snapshot();
        let uf = UnionFind::new(snapshot.vertex_count());
        let progress = Progress::new(snapshot.vertex_count());
        Self {
            snapshot,
            uf,
            cursor: 0,
            progress,
        }
    }

    fn is_complete(&self) -> bool {
        self.cursor >= self.snapshot.edge_count()
            || self.progress.tree_len() + 1 >= self.snapshot.vertex_count()
    }
}

impl Iterator for Kruskal {
    type Item = Step;

    fn next(&mut self) -> Option<Step> {
        if self.is_complete() {
            return None;
        }
        let pos = self.cursor;
        self.cursor += 1;
        let edge = self.snapshot.edges()[pos];

        let event = if self.uf.connected(edge.u, edge.v) {
            StepEvent::Rejected {
                edge: self.snapshot.edge(&edge),
            }
        } else {
            let tied = self
                .snapshot
                .ties_after(pos)
                .filter(|other| !self.uf.connected(other.u, other.v))
                .map(|other| self.snapshot.edge(other))
                .collect();
            self.uf.union(edge.u, edge.v);
            StepEvent::Accepted {
                edge: self.progress.accept(&self.snapshot, &edge),
                tied,
            }
        };

        let components = self.uf.component_ids();
        let step = self.progress.emit(&self.snapshot, event, &components);
        log::debug!("kruskal step {}: {:?}", step.index, step.event);
        Some(step)
    }
}

impl MstTrace for Kruskal {
    fn algorithm(&self) -> Algorithm {
        Algorithm::Kruskal
    }

    fn finish(&mut self) -> MstResult {
        self.by_ref().for_each(drop);
        MstResult::new(
            Algorithm::Kruskal,
            self.progress.tree().to_vec(),
            self.snapshot.vertex_count(),
        )
    }
}
