use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use median_kdtree::kdtree::{KDTreeBuilder, KDTreeIndex, SplitStrategy};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rstar::RTree;

fn generate_points(n: usize, seed: u64) -> Vec<[f64; 2]> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..n)
        .map(|_| [rng.gen_range(0.0..10_000.0), rng.gen_range(0.0..10_000.0)])
        .collect()
}

pub fn criterion_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("construction");
    for n in [1_000, 100_000] {
        let points = generate_points(n, 42);

        group.bench_with_input(BenchmarkId::new("sort", n), &points, |b, points| {
            b.iter(|| KDTreeBuilder::new(2).finish_copied(points).unwrap())
        });
        group.bench_with_input(BenchmarkId::new("select", n), &points, |b, points| {
            b.iter(|| {
                KDTreeBuilder::new(2)
                    .split_strategy(SplitStrategy::Select)
                    .finish_copied(points)
                    .unwrap()
            })
        });
        group.bench_with_input(BenchmarkId::new("rstar bulk", n), &points, |b, points| {
            b.iter(|| RTree::bulk_load(points.to_vec()))
        });
    }
    group.finish();

    let points = generate_points(100_000, 42);
    let queries = generate_points(1_000, 7);
    let tree = KDTreeBuilder::new(2).finish_copied(&points).unwrap();
    let rstar_tree = RTree::bulk_load(points.clone());

    c.bench_function("nearest (kdtree)", |b| {
        b.iter(|| {
            for query in queries.iter() {
                tree.nearest_neighbour(query).unwrap();
            }
        })
    });

    c.bench_function("nearest (rstar)", |b| {
        b.iter(|| {
            for query in queries.iter() {
                rstar_tree.nearest_neighbor(query);
            }
        })
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
