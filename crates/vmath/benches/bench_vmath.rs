use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::Rng;
use std::hint::black_box;
use vmath::{Mat2F32, Vec2F32, Vec3F32};

fn bench_vec3(c: &mut Criterion) {
    let mut group = c.benchmark_group("vec3");
    let mut rng = rand::rng();

    let data_size = 1000;
    let vs: Vec<Vec3F32> = (0..data_size)
        .map(|_| Vec3F32::new(rng.random(), rng.random(), rng.random()))
        .collect();
    let vs_glam: Vec<glam::Vec3> = vs.iter().map(|&v| v.into()).collect();

    group.bench_function(BenchmarkId::new("cross_vmath", ""), |b| {
        b.iter(|| {
            for w in vs.windows(2) {
                black_box(black_box(w[0]).cross_product(black_box(w[1])));
            }
        })
    });

    group.bench_function(BenchmarkId::new("cross_glam", ""), |b| {
        b.iter(|| {
            for w in vs_glam.windows(2) {
                black_box(black_box(w[0]).cross(black_box(w[1])));
            }
        })
    });

    group.bench_function(BenchmarkId::new("normalized_vmath", ""), |b| {
        b.iter(|| {
            for v in vs.iter() {
                let _ = black_box(black_box(*v).normalized());
            }
        })
    });

    group.bench_function(BenchmarkId::new("angle_to_vmath", ""), |b| {
        b.iter(|| {
            for w in vs.windows(2) {
                let _ = black_box(black_box(w[0]).angle_to(black_box(w[1])));
            }
        })
    });

    group.finish();
}

fn bench_mat2(c: &mut Criterion) {
    let mut group = c.benchmark_group("mat2");
    let mut rng = rand::rng();

    let m1 = Mat2F32::new(rng.random(), rng.random(), rng.random(), rng.random());
    let m2 = Mat2F32::new(rng.random(), rng.random(), rng.random(), rng.random());
    let v = Vec2F32::new(rng.random(), rng.random());

    let g1 = glam::Mat2::from(m1);
    let g2 = glam::Mat2::from(m2);

    group.bench_function(BenchmarkId::new("mul_vmath", ""), |b| {
        b.iter(|| black_box(m1) * black_box(m2))
    });

    group.bench_function(BenchmarkId::new("mul_glam", ""), |b| {
        b.iter(|| black_box(g1) * black_box(g2))
    });

    group.bench_function(BenchmarkId::new("mul_vec_vmath", ""), |b| {
        b.iter(|| black_box(m1) * black_box(v))
    });

    group.bench_function(BenchmarkId::new("inverse_vmath", ""), |b| {
        b.iter(|| black_box(m1).inverse())
    });

    group.finish();
}

criterion_group!(benches, bench_vec3, bench_mat2);
criterion_main!(benches);
