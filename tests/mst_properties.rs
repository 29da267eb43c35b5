use std::collections::HashMap;

use petgraph::algo::{connected_components, min_spanning_tree};
use petgraph::data::Element;
use petgraph::graph::{NodeIndex, UnGraph};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use mst_trace::mst::compare_all;
use mst_trace::{Algorithm, Coverage, Graph, StepEvent};

fn random_graph(rng: &mut StdRng, vertices: usize, edges: usize) -> Graph {
    let mut graph = Graph::empty();
    for i in 0..vertices {
        graph.add_vertex(format!("v{i}"));
    }
    if vertices < 2 {
        return graph;
    }
    for _ in 0..edges {
        let a = rng.random_range(0..vertices);
        let b = rng.random_range(0..vertices);
        if a == b {
            continue;
        }
        // Small integer weights: plenty of ties, exact sums.
        let weight = rng.random_range(1..=20) as f64;
        graph
            .add_edge(&format!("v{a}"), &format!("v{b}"), weight)
            .unwrap();
    }
    graph
}

fn to_petgraph(graph: &Graph) -> UnGraph<(), f64> {
    let mut pg = UnGraph::new_undirected();
    let nodes: HashMap<String, NodeIndex> = graph
        .vertices()
        .map(|v| (v.as_str().to_owned(), pg.add_node(())))
        .collect();
    for edge in graph.edges() {
        let (a, b) = edge.endpoints();
        pg.add_edge(nodes[a.as_str()], nodes[b.as_str()], edge.weight());
    }
    pg
}

fn petgraph_forest_weight(pg: &UnGraph<(), f64>) -> f64 {
    min_spanning_tree(pg)
        .filter_map(|element| match element {
            Element::Edge { weight, .. } => Some(weight),
            Element::Node { .. } => None,
        })
        .sum()
}

#[test]
fn engines_match_petgraph_on_random_graphs() {
    let mut rng = StdRng::seed_from_u64(0x5eed);
    for round in 0..60 {
        let vertices = rng.random_range(0..25);
        let edges = rng.random_range(0..(vertices * 3 + 1));
        let graph = random_graph(&mut rng, vertices, edges);
        let pg = to_petgraph(&graph);
        let expected = petgraph_forest_weight(&pg);
        let components = if vertices == 0 {
            0
        } else {
            connected_components(&pg)
        };

        let results = compare_all(&graph);
        for result in &results {
            assert_eq!(
                result.total_weight, expected,
                "round {round}: {} disagrees with petgraph",
                result.algorithm
            );
            assert_eq!(result.edges.len(), vertices - components, "round {round}");
            assert_eq!(result.trees(), components, "round {round}");
        }
        // The tie-break makes the order on edges strict, so the tree is unique.
        assert_eq!(results[0].edge_set(), results[1].edge_set(), "round {round}");
        assert_eq!(results[1].edge_set(), results[2].edge_set(), "round {round}");
    }
}

#[test]
fn traces_are_deterministic() {
    let mut rng = StdRng::seed_from_u64(7);
    let graph = random_graph(&mut rng, 15, 40);
    for algorithm in Algorithm::ALL {
        let (first_steps, first) = algorithm.run_with_steps(&graph);
        let (second_steps, second) = algorithm.run_with_steps(&graph);
        assert_eq!(first_steps, second_steps, "{algorithm}");
        assert_eq!(first, second, "{algorithm}");
    }
}

#[test]
fn every_step_reports_full_state() {
    let mut rng = StdRng::seed_from_u64(11);
    let graph = random_graph(&mut rng, 12, 30);
    for algorithm in Algorithm::ALL {
        let (steps, result) = algorithm.run_with_steps(&graph);
        let mut previous = 0;
        for (i, step) in steps.iter().enumerate() {
            assert_eq!(step.index, i);
            assert_eq!(step.membership.len(), graph.vertex_count());
            assert_eq!(step.tree.len(), previous + step.added().len());
            let sum: f64 = step.tree.iter().map(|edge| edge.weight()).sum();
            assert_eq!(step.total_weight, sum);
            previous = step.tree.len();
        }
        assert_eq!(previous, result.edges.len(), "{algorithm}");
    }
}

#[test]
fn trace_is_isolated_from_later_edits() {
    let mut graph = Graph::empty();
    for v in ["A", "B", "C"] {
        graph.add_vertex(v);
    }
    graph.add_edge("A", "B", 1.0).unwrap();
    graph.add_edge("B", "C", 2.0).unwrap();

    let mut trace = Algorithm::Prim.trace(&graph);
    graph.remove_vertex("C").unwrap();
    graph.add_edge("A", "B", 10.0).unwrap();

    let result = trace.finish();
    assert_eq!(result.total_weight, 3.0);
    assert_eq!(result.vertex_count, 3);
}

#[test]
fn kruskal_scenario() {
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
    for algorithm in Algorithm::ALL {
        let result = algorithm.run(&graph);
        assert_eq!(result.total_weight, 6.0);
        assert!(result.contains("A", "B"));
        assert!(result.contains("B", "C"));
        assert!(result.contains("C", "D"));
        assert_eq!(result.coverage, Coverage::Tree);
    }
}

#[test]
fn disconnected_scenario() {
    let mut graph = Graph::empty();
    for v in ["A", "B", "C", "D"] {
        graph.add_vertex(v);
    }
    graph.add_edge("A", "B", 1.0).unwrap();
    graph.add_edge("C", "D", 1.0).unwrap();
    for algorithm in Algorithm::ALL {
        let result = algorithm.run(&graph);
        assert_eq!(result.total_weight, 2.0);
        assert_eq!(result.coverage, Coverage::Forest { trees: 2 });
        assert!(result.is_disconnected());
    }

    let (steps, _) = Algorithm::Prim.run_with_steps(&graph);
    assert!(
        steps
            .iter()
            .any(|step| matches!(step.event, StepEvent::TreeStarted { .. }))
    );
}

#[test]
fn tie_scenario() {
    let mut graph = Graph::empty();
    for v in ["A", "B", "C"] {
        graph.add_vertex(v);
    }
    graph.add_edge("A", "B", 1.0).unwrap();
    graph.add_edge("B", "C", 1.0).unwrap();
    graph.add_edge("A", "C", 1.0).unwrap();
    for algorithm in Algorithm::ALL {
        let result = algorithm.run(&graph);
        assert_eq!(result.total_weight, 2.0);
        assert_eq!(result.edges.len(), 2);
        assert!(!result.contains("B", "C"), "{algorithm}");
    }
}

#[test]
fn trivial_graphs() {
    for algorithm in Algorithm::ALL {
        let (steps, result) = algorithm.run_with_steps(&Graph::empty());
        assert!(steps.is_empty());
        assert_eq!(result.coverage, Coverage::Empty);
        assert_eq!(result.total_weight, 0.0);

        let mut isolated = Graph::empty();
        for v in ["A", "B", "C"] {
            isolated.add_vertex(v);
        }
        let result = algorithm.run(&isolated);
        assert!(result.edges.is_empty());
        assert_eq!(result.trees(), 3);
    }
}
