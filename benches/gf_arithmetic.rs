//! Benchmarks for Galois field arithmetic.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use kirkman::gf::DynamicGf;

fn bench_gf_pow(c: &mut Criterion) {
    let mut group = c.benchmark_group("GF Pow");

    for order in [7u32, 13, 25, 49, 79] {
        let gf = DynamicGf::new(order).unwrap();

        group.bench_with_input(BenchmarkId::new("order", order), &gf, |b, gf| {
            let alpha = gf.first_primitive_element().unwrap();
            b.iter(|| (0..u64::from(order - 1)).map(|e| gf.pow(alpha, e)).sum::<u32>());
        });
    }

    group.finish();
}

fn bench_gf_creation(c: &mut Criterion) {
    let mut group = c.benchmark_group("GF Creation");

    for order in [7u32, 25, 49, 121, 343] {
        group.bench_with_input(BenchmarkId::new("order", order), &order, |b, &order| {
            b.iter(|| DynamicGf::new(order).unwrap());
        });
    }

    group.finish();
}

fn bench_primitive_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("Primitive Search");

    for order in [13u32, 49, 169] {
        let gf = DynamicGf::new(order).unwrap();
        group.bench_with_input(BenchmarkId::new("order", order), &gf, |b, gf| {
            b.iter(|| gf.first_primitive_element().unwrap());
        });
    }

    group.finish();
}

criterion_group!(benches, bench_gf_pow, bench_gf_creation, bench_primitive_search);
criterion_main!(benches);
