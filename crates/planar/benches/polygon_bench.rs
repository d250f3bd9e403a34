//! Criterion benchmarks for polygon classification and queries.
//! Focus sizes: n in {4, 16, 64, 256, 1024} vertices.
//! Results live under `target/criterion`.

use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use planar::rand::{draw_points, draw_polygon_radial, RadialCfg, ReplayToken, VertexCount};
use planar::{Polygon, Strategy, Vec2};

const SIZES: [usize; 5] = [4, 16, 64, 256, 1024];

fn radial(n: usize, seed: u64) -> Polygon {
    let cfg = RadialCfg {
        vertex_count: VertexCount::Fixed(n),
        angle_jitter_frac: 0.2,
        radial_jitter: 0.3,
        ..RadialCfg::default()
    };
    draw_polygon_radial(cfg, ReplayToken { seed, index: 0 }).unwrap()
}

fn fresh(p: &Polygon) -> Polygon {
    Polygon::new(p.vertices().iter().copied()).unwrap()
}

fn bench_classify(c: &mut Criterion) {
    let mut group = c.benchmark_group("classify");
    for &n in &SIZES {
        let regular = Polygon::regular(n, 1.0, Vec2::zeros(), 0.0).unwrap();
        let star = radial(n, 42);
        group.bench_with_input(BenchmarkId::new("is_convex", n), &n, |b, _| {
            b.iter_batched(
                || fresh(&regular),
                |mut p| p.is_convex(),
                BatchSize::SmallInput,
            )
        });
        group.bench_with_input(BenchmarkId::new("is_simple_concave", n), &n, |b, _| {
            b.iter_batched(
                || fresh(&star),
                |mut p| p.is_simple(),
                BatchSize::SmallInput,
            )
        });
        group.bench_with_input(BenchmarkId::new("centroid", n), &n, |b, _| {
            b.iter_batched(
                || fresh(&star),
                |mut p| p.centroid(),
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

fn bench_contains(c: &mut Criterion) {
    let mut group = c.benchmark_group("contains_point");
    let probes = draw_points(256, Vec2::zeros(), 1.5, ReplayToken { seed: 7, index: 0 });
    for &n in &SIZES {
        let mut convex = Polygon::regular(n, 1.0, Vec2::zeros(), 0.0).unwrap();
        for strategy in [
            Strategy::YMonotone,
            Strategy::ConvexHalfPlane,
            Strategy::Winding,
            Strategy::EvenOdd,
        ] {
            let id = BenchmarkId::new(format!("{strategy:?}"), n);
            group.bench_with_input(id, &n, |b, _| {
                b.iter(|| {
                    probes
                        .iter()
                        .filter(|&&p| convex.contains_point_with(p, strategy))
                        .count()
                })
            });
        }
        group.bench_with_input(BenchmarkId::new("dispatch_regular", n), &n, |b, _| {
            b.iter(|| probes.iter().filter(|&&p| convex.contains_point(p)).count())
        });
        let mut star = radial(n, 43);
        group.bench_with_input(BenchmarkId::new("dispatch_radial", n), &n, |b, _| {
            b.iter(|| probes.iter().filter(|&&p| star.contains_point(p)).count())
        });
    }
    group.finish();
}

fn bench_tangents(c: &mut Criterion) {
    let mut group = c.benchmark_group("tangents_to_point");
    let p = Vec2::new(3.0, 4.0);
    for &n in &SIZES {
        let mut convex = Polygon::regular(n, 1.0, Vec2::zeros(), 0.0).unwrap();
        let mut star = radial(n, 44);
        star.is_convex();
        group.bench_with_input(BenchmarkId::new("convex", n), &n, |b, _| {
            b.iter(|| convex.tangents_to_point(p))
        });
        group.bench_with_input(BenchmarkId::new("generic", n), &n, |b, _| {
            b.iter(|| star.tangents_to_point(p))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_classify, bench_contains, bench_tangents);
criterion_main!(benches);
