//! Traversal benchmarks over deep and wide graphs.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use trellis_core::{EagerGraph, Graph, Node, Traversal};

fn chain(depth: u32) -> Graph<u32, u64> {
    let mut graph = Graph::new();
    graph.insert(0, Node::constant(1));
    for i in 1..=depth {
        graph.insert(i, Node::map(i - 1, |prev| prev.wrapping_mul(3)));
    }
    graph
}

fn fan_in(width: u32) -> Graph<u32, u64> {
    let mut graph = Graph::new();
    for i in 1..=width {
        graph.insert(i, Node::constant(u64::from(i)));
    }
    graph.insert(0, Node::new(1..=width, |args: &[u64]| args.iter().sum()));
    graph
}

fn bench_traversal(c: &mut Criterion) {
    let mut group = c.benchmark_group("traversal");

    for depth in [100u32, 1_000, 10_000] {
        let graph = chain(depth);
        group.bench_with_input(BenchmarkId::new("chain", depth), &graph, |b, graph| {
            b.iter(|| Traversal::evaluate(graph, black_box(&depth)))
        });
    }

    for width in [16u32, 256, 4_096] {
        let graph = fan_in(width);
        group.bench_with_input(BenchmarkId::new("fan_in", width), &graph, |b, graph| {
            b.iter(|| Traversal::evaluate(graph, black_box(&0)))
        });
    }

    group.finish();
}

fn bench_eager(c: &mut Criterion) {
    let graph = chain(1_000);
    c.bench_function("eager_bind_chain_1000", |b| {
        b.iter(|| EagerGraph::bind(black_box(&graph)))
    });
}

criterion_group!(benches, bench_traversal, bench_eager);
criterion_main!(benches);
