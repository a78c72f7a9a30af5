//! Benchmarks for the spring layout
//!
//! The layout is O(iterations * n^2) in the repulsion pass; these benches
//! track how it scales with graph size so the interactive view stays
//! responsive on real header trees.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use srcviz::graph::{spring_layout, IncludeGraph, LayoutConfig};

/// Create a chain graph: f0.h -> f1.h -> ... -> fn.h
fn create_chain(len: usize) -> IncludeGraph {
    let mut graph = IncludeGraph::new();
    for i in 0..len.saturating_sub(1) {
        graph.add_edge(&format!("f{}.h", i), &format!("f{}.h", i + 1));
    }
    graph
}

/// Create a hub graph: every header includes a handful of shared ones,
/// roughly the shape real include trees take.
fn create_hub(headers: usize, shared: usize) -> IncludeGraph {
    let mut graph = IncludeGraph::new();
    for i in 0..headers {
        for j in 0..shared {
            graph.add_edge(&format!("h{}.h", i), &format!("common{}.h", j));
        }
    }
    graph
}

/// Benchmark the layout on chain graphs of increasing size
fn bench_chain(c: &mut Criterion) {
    let mut group = c.benchmark_group("spring_layout_chain");
    let config = LayoutConfig::default();

    for size in [10, 25, 50, 100].iter() {
        let graph = create_chain(*size);

        group.bench_with_input(BenchmarkId::new("nodes", size), size, |b, _| {
            b.iter(|| black_box(spring_layout(&graph, &config)));
        });
    }

    group.finish();
}

/// Benchmark the layout on hub graphs
fn bench_hub(c: &mut Criterion) {
    let mut group = c.benchmark_group("spring_layout_hub");
    let config = LayoutConfig::default();

    for size in [10, 25, 50].iter() {
        let graph = create_hub(*size, 4);

        group.bench_with_input(BenchmarkId::new("headers", size), size, |b, _| {
            b.iter(|| black_box(spring_layout(&graph, &config)));
        });
    }

    group.finish();
}

/// Benchmark iteration-count scaling on a fixed graph
fn bench_iterations(c: &mut Criterion) {
    let mut group = c.benchmark_group("spring_layout_iterations");
    let graph = create_hub(25, 4);

    for iterations in [25, 50, 100, 200].iter() {
        let config = LayoutConfig {
            iterations: *iterations,
            scale: 1.0,
        };

        group.bench_with_input(
            BenchmarkId::new("iterations", iterations),
            iterations,
            |b, _| {
                b.iter(|| black_box(spring_layout(&graph, &config)));
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_chain, bench_hub, bench_iterations);
criterion_main!(benches);
