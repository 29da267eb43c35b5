//! Weighted undirected graphs and step-by-step minimum spanning tree engines.
//!
//! The crate is split into:
//!
//! - [`graph`]: the editable [`Graph`], its frozen [`Snapshot`] and the
//!   `(source, target, weight)` import/export contract;
//! - [`mst`]: the union-find structure and the Prim, Borůvka and Kruskal
//!   engines, each exposed as an iterator of [`Step`]s;
//! - [`report`]: serializable run reports;
//! - [`config`] / [`options`]: settings for the `mst` command-line driver.
//!
//! # Example
//!
//! ```rust
//! use mst_trace::{Algorithm, Graph};
//!
//! let mut graph = Graph::empty();
//! for v in ["A", "B", "C", "D"] {
//!     graph.add_vertex(v);
//! }
//! graph.add_edge("A", "B", 1.0).unwrap();
//! graph.add_edge("B", "C", 2.0).unwrap();
//! graph.add_edge("C", "D", 3.0).unwrap();
//! graph.add_edge("A", "D", 4.0).unwrap();
//!
//! let mut trace = Algorithm::Kruskal.trace(&graph);
//! let steps: Vec<_> = trace.by_ref().collect();
//! let result = trace.finish();
//!
//! assert_eq!(steps.len(), 3);
//! assert_eq!(result.total_weight, 6.0);
//! assert!(result.is_spanning_tree());
//! ```

pub mod config;
pub mod graph;
pub mod mst;
pub mod options;
pub mod report;

pub use graph::{Edge, EdgeKey, Graph, GraphError, Snapshot, Vertex, Weight, WeightPolicy};
pub use mst::{Algorithm, Coverage, MstResult, MstTrace, Step, StepEvent, UnionFind};
