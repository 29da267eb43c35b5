//! Engine benchmarks on random sparse graphs.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use mst_trace::graph::VertexIdx;
use mst_trace::{Algorithm, Graph, UnionFind};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn random_graph(vertices: usize, edges_per_vertex: usize) -> Graph {
    let mut rng = StdRng::seed_from_u64(42);
    let mut graph = Graph::empty();
    for i in 0..vertices {
        graph.add_vertex(format!("v{i}"));
    }
    // A path first, so the graph is connected.
    for i in 1..vertices {
        let weight = rng.random_range(0.0..100.0);
        graph
            .add_edge(&format!("v{}", i - 1), &format!("v{i}"), weight)
            .unwrap();
    }
    for _ in 0..vertices * edges_per_vertex {
        let a = rng.random_range(0..vertices);
        let b = rng.random_range(0..vertices);
        if a != b {
            let weight = rng.random_range(0.0..100.0);
            graph
                .add_edge(&format!("v{a}"), &format!("v{b}"), weight)
                .unwrap();
        }
    }
    graph
}

fn bench_engines(c: &mut Criterion) {
    let sizes = [100, 500, 2000];

    let mut group = c.benchmark_group("MST Engines");

    for size in sizes {
        let graph = random_graph(size, 4);
        group.throughput(Throughput::Elements(graph.edge_count() as u64));
        for algorithm in Algorithm::ALL {
            group.bench_with_input(BenchmarkId::new(algorithm.name(), size), &graph, |b, g| {
                b.iter(|| black_box(algorithm.run(black_box(g))))
            });
        }
    }

    group.finish();
}

fn bench_union_find(c: &mut Criterion) {
    let n = 10_000;
    let mut group = c.benchmark_group("Union-Find");
    group.throughput(Throughput::Elements(n as u64));

    group.bench_function("chain_then_find", |b| {
        b.iter(|| {
            let mut uf = UnionFind::new(n);
            for i in 1..n as u32 {
                uf.union(VertexIdx::new(i - 1), VertexIdx::new(i));
            }
            black_box(uf.find(VertexIdx::new(n as u32 - 1)))
        })
    });

    group.finish();
}

criterion_group!(benches, bench_engines, bench_union_find);
criterion_main!(benches);
