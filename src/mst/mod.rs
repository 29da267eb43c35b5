//! # 最小生成树引擎
//!
//! 三种经典算法共享同一份只读 [`Snapshot`](crate::graph::Snapshot) 与同一
//! 平局裁决全序（权值，其次为端点标签对）：
//!
//! * [`Kruskal`]：全局排序 + 并查集，每扫描一条边产生一步；
//! * [`Prim`]：从首个顶点出发的前沿生长，每选中一条边产生一步；
//! * [`Boruvka`]：按轮次合并分量，每完成一轮产生一步。
//!
//! 每个引擎都是惰性的 [`Step`] 迭代器，不含任何计时或绘制逻辑；调用
//! [`MstTrace::finish`] 会耗尽剩余步骤并给出 [`MstResult`]。对于非连通图，
//! 结果是最小生成森林，并通过 [`Coverage::Forest`] 明确标识。
//!
//! ## 示例
//!
//! ```rust
//! use mst_trace::{Algorithm, Coverage, Graph};
//!
//! let mut graph = Graph::empty();
//! for v in ["A", "B", "C", "D"] {
//!     graph.add_vertex(v);
//! }
//! graph.add_edge("A", "B", 1.0).unwrap();
//! graph.add_edge("C", "D", 1.0).unwrap();
//!
//! for algorithm in Algorithm::ALL {
//!     let result = algorithm.run(&graph);
//!     assert_eq!(result.total_weight, 2.0);
//!     assert_eq!(result.coverage, Coverage::Forest { trees: 2 });
//! }
//! ```

pub mod boruvka;
pub mod kruskal;
pub mod prim;
pub mod result;
pub mod step;
pub mod union_find;

use std::fmt;
use std::str::FromStr;

use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::graph::core::Graph;

pub use boruvka::Boruvka;
pub use kruskal::Kruskal;
pub use prim::Prim;
pub use result::{Coverage, MstResult};
pub use step::{ComponentChoice, Step, StepEvent, VertexState};
pub use union_find::UnionFind;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Algorithm {
    Prim,
    Boruvka,
    Kruskal,
}

impl Algorithm {
    pub const ALL: [Algorithm; 3] = [Algorithm::Prim, Algorithm::Boruvka, Algorithm::Kruskal];

    pub fn name(self) -> &'static str {
        match self {
            Algorithm::Prim => "prim",
            Algorithm::Boruvka => "boruvka",
            Algorithm::Kruskal => "kruskal",
        }
    }

    /// Starts a fresh trace over a snapshot of `graph`.
    pub fn trace(self, graph: &Graph) -> Box<dyn MstTrace + Send> {
        match self {
            Algorithm::Prim => Box::new(Prim::new(graph)),
            Algorithm::Boruvka => Box::new(Boruvka::new(graph)),
            Algorithm::Kruskal => Box::new(Kruskal::new(graph)),
        }
    }

    /// Runs the engine to completion without keeping the steps.
    pub fn run(self, graph: &Graph) -> MstResult {
        let result = self.trace(graph).finish();
        log_outcome(&result);
        result
    }

    /// Runs the engine to completion, collecting every step.
    pub fn run_with_steps(self, graph: &Graph) -> (Vec<Step>, MstResult) {
        let mut trace = self.trace(graph);
        let steps: Vec<Step> = trace.by_ref().collect();
        let result = trace.finish();
        log_outcome(&result);
        (steps, result)
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown algorithm `{0}`, expected one of prim, boruvka, kruskal")]
pub struct UnknownAlgorithm(pub String);

impl FromStr for Algorithm {
    type Err = UnknownAlgorithm;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "prim" => Ok(Algorithm::Prim),
            "boruvka" | "borůvka" => Ok(Algorithm::Boruvka),
            "kruskal" => Ok(Algorithm::Kruskal),
            _ => Err(UnknownAlgorithm(s.to_owned())),
        }
    }
}

/// A running spanning tree computation.
///
/// Iterating yields the steps in order; the trace is finished once the
/// iterator returns `None`. A trace cannot be rewound: start a new one with
/// [`Algorithm::trace`] to replay it.
pub trait MstTrace: Iterator<Item = Step> {
    fn algorithm(&self) -> Algorithm;

    /// Drains the remaining steps and returns the final tree or forest.
    fn finish(&mut self) -> MstResult;
}

/// Runs every engine on the same graph, in parallel, in [`Algorithm::ALL`] order.
///
/// Each engine owns its snapshot and union-find; only `graph` is shared.
pub fn compare_all(graph: &Graph) -> Vec<MstResult> {
    Algorithm::ALL[..]
        .par_iter()
        .map(|algorithm| algorithm.run(graph))
        .collect()
}

/// Whether all results carry the same total weight, up to rounding.
pub fn weights_agree(results: &[MstResult]) -> bool {
    results.windows(2).all(|pair| {
        let (a, b) = (pair[0].total_weight, pair[1].total_weight);
        (a - b).abs() <= 1e-9 * a.abs().max(b.abs()).max(1.0)
    })
}

pub(crate) fn log_outcome(result: &MstResult) {
    if result.is_disconnected() {
        log::warn!("{result}");
    } else {
        log::info!("{result}");
    }
}
