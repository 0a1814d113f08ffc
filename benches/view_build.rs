//! View construction and lookup benchmarks.
//!
//! Covers the one-time index construction cost (path derivation, parent
//! resolution) and the steady-state query costs (path lookup, tree walk)
//! over synthetic feature trees of increasing size.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use statview::testing::synthetic_tree_stats;
use statview::{DatasetView, Path};

// =============================================================================
// Construction
// =============================================================================

/// Benchmark building the derived state (paths, index, parents).
fn bench_view_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("view/build");

    for depth in [2, 3, 4, 5] {
        let stats = synthetic_tree_stats(depth, 4);
        let num_features = stats.num_features();

        group.throughput(Throughput::Elements(num_features as u64));
        group.bench_with_input(
            BenchmarkId::new("tree", num_features),
            &stats,
            |b, stats| {
                b.iter(|| {
                    let view = DatasetView::new(black_box(stats));
                    black_box(view)
                });
            },
        );
    }

    group.finish();
}

// =============================================================================
// Lookup
// =============================================================================

/// Benchmark path lookup at the shallowest and deepest tree levels.
fn bench_get_by_path(c: &mut Criterion) {
    let mut group = c.benchmark_group("view/get_by_path");

    for depth in [2, 4] {
        let stats = synthetic_tree_stats(depth, 4);
        let view = DatasetView::new(&stats);

        let shallow = Path::new(["f0"]);
        let deep = view
            .features()
            .iter()
            .map(|f| f.path().clone())
            .max_by_key(|p| p.len())
            .unwrap();

        group.bench_with_input(BenchmarkId::new("shallow", depth), &shallow, |b, path| {
            b.iter(|| black_box(view.get_by_path(black_box(path))))
        });

        group.bench_with_input(BenchmarkId::new("deep", depth), &deep, |b, path| {
            b.iter(|| black_box(view.get_by_path(black_box(path))))
        });
    }

    group.finish();
}

// =============================================================================
// Traversal
// =============================================================================

/// Benchmark a full tree walk through root_features/children.
fn bench_tree_walk(c: &mut Criterion) {
    let mut group = c.benchmark_group("view/walk");

    for depth in [3, 4] {
        let stats = synthetic_tree_stats(depth, 4);
        let num_features = stats.num_features();
        let view = DatasetView::new(&stats);

        group.throughput(Throughput::Elements(num_features as u64));
        group.bench_function(BenchmarkId::new("children", num_features), |b| {
            b.iter(|| {
                let mut stack = view.root_features();
                let mut visited = 0usize;
                while let Some(feature) = stack.pop() {
                    visited += 1;
                    stack.extend(feature.children());
                }
                black_box(visited)
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_view_build, bench_get_by_path, bench_tree_walk);
criterion_main!(benches);
