//! # 带权无向图
//!
//! 设顶点集合 `V` 与边集合 `E ⊆ {{u, v} | u, v ∈ V, u ≠ v}`，权函数
//! `w: E → ℝ`。图满足以下不变量：
//!
//! * 每条边的两个端点均属于 `V`；
//! * 无自环，且任意无序对 `{u, v}` 至多对应一条边（重复添加即覆盖权值）；
//! * 删除顶点时级联删除其全部关联边。
//!
//! 顶点按插入顺序迭代，删除操作保持其余顶点的相对顺序；边以
//! [`EdgeKey`]（较小标签在前）规范化存储。
//!
//! 生成树引擎不直接读取 [`Graph`]，而是在开始时取一份 [`Snapshot`]：
//! 顶点被稠密编号为 [`VertexIdx`]，边按 `(权值, 较小标签, 较大标签)`
//! 全序排列，三种算法共用这一次序作为平局裁决规则。
//!
//! ## 示例
//!
//! ```rust
//! use mst_trace::graph::*;
//!
//! let mut graph = Graph::empty();
//! graph.add_vertex("a");
//! graph.add_vertex("b");
//! graph.add_edge("b", "a", 2.5).unwrap();
//!
//! assert_eq!(graph.weight("a", "b"), Some(2.5));
//! assert_eq!(graph.add_edge("a", "a", 1.0), Err(GraphError::InvalidEdge(Vertex::new("a"))));
//!
//! graph.remove_vertex("a").unwrap();
//! assert_eq!(graph.edge_count(), 0);
//! ```

pub mod core;
pub mod ids;
pub mod index_vec;
pub mod io;
pub mod snapshot;
pub mod structure;

pub use self::core::{Graph, GraphError};
pub use ids::{ComponentId, VertexIdx};
pub use index_vec::{Idx, IndexVec};
pub use io::{EdgeRecord, Format, IoError, LoadError, RecordWeight};
pub use snapshot::{Snapshot, SnapshotEdge};
pub use structure::{Edge, EdgeKey, Vertex, Weight, WeightPolicy};
