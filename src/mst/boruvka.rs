//! Borůvka：每轮为每个分量挑选最便宜的外向边并统一合并。
use indexmap::{IndexMap, IndexSet};

use crate::graph::core::Graph;
use crate::graph::ids::VertexIdx;
use crate::graph::snapshot::Snapshot;
use crate::mst::step::{ComponentChoice, Progress, Step, StepEvent};
use crate::mst::union_find::UnionFind;
use crate::mst::{Algorithm, MstResult, MstTrace};

/// Round-based component merging; every completed round is one
/// [`StepEvent::Round`].
///
/// Stops when a single component is left or when no component has an
/// outgoing edge any more (disconnected input).
#[derive(Debug, Clone)]
pub struct Boruvka {
    snapshot: Snapshot,
    uf: UnionFind,
    stalled: bool,
    progress: Progress,
}

impl Boruvka {
    pub fn new(graph: &Graph) -> Self {
        let snapshot = graph.snapshot();
        let uf = UnionFind::new(snapshot.vertex_count());
        let progress = Progress::new(snapshot.vertex_count());
        Self {
            snapshot,
            uf,
            stalled: false,
            progress,
        }
    }

    /// Cheapest outgoing edge position per component root.
    ///
    /// Keys keep the order in which components received their edge; since
    /// edges are scanned in canonical order, the first edge seen for a root
    /// is its cheapest.
    fn cheapest_per_component(&mut self) -> IndexMap<VertexIdx, usize> {
        let mut cheapest = IndexMap::new();
        for (pos, edge) in self.snapshot.edges().iter().enumerate() {
            let root_u = self.uf.find(edge.u);
            let root_v = self.uf.find(edge.v);
            if root_u == root_v {
                continue;
            }
            cheapest.entry(root_u).or_insert(pos);
            cheapest.entry(root_v).or_insert(pos);
        }
        cheapest
    }

    /// Describes the pick of component `root`, with the equal-weight
    /// outgoing edges it beat. Must run before the round's unions.
    fn choice(&mut self, root: VertexIdx, pos: usize) -> ComponentChoice {
        let mut tied = Vec::new();
        for other in self.snapshot.ties_after(pos) {
            let root_u = self.uf.find(other.u);
            let root_v = self.uf.find(other.v);
            if root_u != root_v && (root_u == root || root_v == root) {
                tied.push(self.snapshot.edge(other));
            }
        }
        ComponentChoice {
            representative: self.snapshot.vertex(root).clone(),
            edge: self.snapshot.edge(&self.snapshot.edges()[pos]),
            tied,
        }
    }
}

impl Iterator for Boruvka {
    type Item = Step;

    fn next(&mut self) -> Option<Step> {
        if self.stalled || self.uf.num_components() <= 1 {
            return None;
        }

        let cheapest = self.cheapest_per_component();
        if cheapest.is_empty() {
            log::debug!(
                "boruvka stalls with {} components",
                self.uf.num_components()
            );
            self.stalled = true;
            return None;
        }

        let choices = cheapest
            .iter()
            .map(|(&root, &pos)| self.choice(root, pos))
            .collect();

        // Several components may pick the same edge. An edge is only applied
        // if an earlier merge of this round has not joined its endpoints yet.
        let selected: IndexSet<usize> = cheapest.values().copied().collect();
        let mut merged = Vec::new();
        for pos in selected {
            let edge = self.snapshot.edges()[pos];
            if self.uf.union(edge.u, edge.v) {
                merged.push(self.progress.accept(&self.snapshot, &edge));
            }
        }

        let event = StepEvent::Round { choices, merged };
        let components = self.uf.component_ids();
        let step = self.progress.emit(&self.snapshot, event, &components);
        log::debug!(
            "boruvka round {}: {} components left",
            step.index,
            self.uf.num_components()
        );
        Some(step)
    }
}

impl MstTrace for Boruvka {
    fn algorithm(&self) -> Algorithm {
        Algorithm::Boruvka
    }

    fn finish(&mut self) -> MstResult {
        self.by_ref().for_each(drop);
        MstResult::new(
            Algorithm::Boruvka,
            self.progress.tree().to_vec(),
            self.snapshot.vertex_count(),
        )
    }
}
