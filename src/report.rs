//! 运行报告：记录一次（或三种算法各一次）最小生成树计算的输入规模、步骤、结果与耗时。
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use std::time::{Duration, Instant};

use crate::graph::core::Graph;
use crate::graph::io::{IoError, write_json};
use crate::mst::{Algorithm, Coverage, MstResult, Step, log_outcome, weights_agree};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunReport {
    pub algorithm: Algorithm,     // 使用的算法
    pub vertex_count: usize,      // 输入顶点数
    pub edge_count: usize,        // 输入边数
    pub steps: Option<Vec<Step>>, // 完整轨迹，未记录时为 None
    pub step_count: usize,        // 轨迹长度
    pub result: MstResult,        // 最终生成树或森林
    pub elapsed: Duration,        // 计算耗时
}

impl RunReport {
    /// 在 `graph` 上运行 `algorithm` 并记录结果；`record_steps` 为 false 时只保留步数。
    pub fn record(algorithm: Algorithm, graph: &Graph, record_steps: bool) -> Self {
        let start = Instant::now();
        let mut trace = algorithm.trace(graph);
        let mut steps = Vec::new();
        let mut step_count = 0;
        for step in trace.by_ref() {
            step_count += 1;
            if record_steps {
                steps.push(step);
            }
        }
        let result = trace.finish();
        let elapsed = start.elapsed();
        log_outcome(&result);

        Self {
            algorithm,
            vertex_count: graph.vertex_count(),
            edge_count: graph.edge_count(),
            steps: record_steps.then_some(steps),
            step_count,
            result,
            elapsed,
        }
    }

    /// 将报告以 JSON 格式保存到文件中
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), IoError> {
        write_json(path, self)
    }
}

impl fmt::Display for RunReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "最小生成树报告")?;
        writeln!(f, "算法: {}", self.algorithm)?;
        writeln!(f, "顶点数: {}", self.vertex_count)?;
        writeln!(f, "边数: {}", self.edge_count)?;
        writeln!(f, "步骤数: {}", self.step_count)?;
        writeln!(f, "计算耗时: {:?}", self.elapsed)?;
        match self.result.coverage {
            Coverage::Empty => writeln!(f, "覆盖: 空图")?,
            Coverage::Tree => writeln!(f, "覆盖: 生成树")?,
            Coverage::Forest { trees } => {
                writeln!(f, "覆盖: 生成森林（{} 棵树，输入图不连通）", trees)?
            }
        }
        writeln!(f, "总权值: {}", self.result.total_weight)?;

        if !self.result.edges.is_empty() {
            writeln!(f, "\n选中的边:")?;
            for (i, edge) in self.result.edges.iter().enumerate() {
                writeln!(f, "  #{} {}", i + 1, edge)?;
            }
        }
        Ok(())
    }
}

/// 同一张图上三种算法的对照报告。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComparisonReport {
    pub runs: Vec<RunReport>,
    pub weights_agree: bool,
}

impl ComparisonReport {
    /// 并行运行全部算法，报告顺序与 [`Algorithm::ALL`] 一致。
    pub fn record(graph: &Graph, record_steps: bool) -> Self {
        let runs: Vec<RunReport> = Algorithm::ALL[..]
            .par_iter()
            .map(|&algorithm| RunReport::record(algorithm, graph, record_steps))
            .collect();
        let results: Vec<MstResult> = runs.iter().map(|run| run.result.clone()).collect();
        let weights_agree = weights_agree(&results);
        if !weights_agree {
            log::warn!("engines disagree on the total weight");
        }
        Self {
            runs,
            weights_agree,
        }
    }

    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), IoError> {
        write_json(path, self)
    }
}

impl fmt::Display for ComparisonReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for run in &self.runs {
            writeln!(f, "{}", run)?;
        }
        writeln!(f, "总权值一致: {}", self.weights_agree)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square() -> Graph {
        let mut graph = Graph::empty();
        for v in ["A", "B", "C", "D"] {
            graph.add_vertex(v);
        }
        for (a, b, w) in [
            ("A", "B", 1.0),
            ("B", "C", 2.0),
            ("C", "D", 3.0),
            ("A", "D", 4.0),
            ("A", "C", 5.0),
        ] {
            graph.add_edge(a, b, w).unwrap();
        }
        graph
    }

    #[test]
    fn report_keeps_steps_on_request() {
        let graph = square();
        let full = RunReport::record(Algorithm::Kruskal, &graph, true);
        assert_eq!(full.step_count, 3);
        assert_eq!(full.steps.as_ref().map(Vec::len), Some(3));
        assert_eq!(full.result.total_weight, 6.0);
        assert_eq!(full.edge_count, 5);

        let bare = RunReport::record(Algorithm::Kruskal, &graph, false);
        assert_eq!(bare.step_count, 3);
        assert!(bare.steps.is_none());
    }

    #[test]
    fn display_names_disconnected_forest() {
        let mut graph = Graph::empty();
        for v in ["A", "B", "C"] {
            graph.add_vertex(v);
        }
        graph.add_edge("A", "B", 2.5).unwrap();
        let text = RunReport::record(Algorithm::Prim, &graph, false).to_string();
        assert!(text.contains("算法: prim"));
        assert!(text.contains("2 棵树"));
        assert!(text.contains("总权值: 2.5"));
    }

    #[test]
    fn comparison_runs_all_engines() {
        let report = ComparisonReport::record(&square(), true);
        let order: Vec<_> = report.runs.iter().map(|run| run.algorithm).collect();
        assert_eq!(order, Algorithm::ALL.to_vec());
        assert!(report.weights_agree);
        assert!(report.to_string().contains("总权值一致: true"));
    }

    #[test]
    fn report_serializes_to_json() {
        let report = RunReport::record(Algorithm::Boruvka, &square(), true);
        let json = crate::graph::io::to_json_string(&report).unwrap();
        let back: RunReport = crate::graph::io::from_json_str(&json).unwrap();
        assert_eq!(back.result, report.result);
        assert_eq!(back.steps, report.steps);
    }
}
