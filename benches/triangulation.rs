use criterion::*;

use rand::distributions::{Distribution, Uniform};
use rand::SeedableRng;

use trowel::{triangulate, Point2};

const SEED: &[u8; 32] = b"eW9LHvoTuAm2YnzxFGJ4kUqC8pR1bDs0";

fn uniform_points(size: usize) -> Vec<Point2<f64>> {
    let mut rng = rand::rngs::StdRng::from_seed(*SEED);
    let range = Uniform::new(-1.0e3, 1.0e3);
    (0..size)
        .map(|_| Point2::new(range.sample(&mut rng), range.sample(&mut rng)))
        .collect()
}

fn triangulation_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("triangulate");
    for size in [10, 50, 100, 250] {
        let points = uniform_points(size);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &points, |b, points| {
            b.iter(|| triangulate(points));
        });
    }
    group.finish();
}

criterion_group!(benches, triangulation_benchmark);
criterion_main!(benches);
