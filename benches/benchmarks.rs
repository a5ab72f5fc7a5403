//! Benchmarks for galoisfield operations.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use galoisfield::{ff_multiply, poly, Field, FieldElement, Gf256};

fn bench_element_operations(c: &mut Criterion) {
    let mut group = c.benchmark_group("Element Operations");

    for order in [256u64, 243, 12167] {
        let f = Field::new(order).unwrap();
        let a = f.element(order / 3).unwrap();
        let b = f.element(order - 2).unwrap();

        group.bench_with_input(BenchmarkId::new("add", order), &(&a, &b), |bencher, (a, b)| {
            bencher.iter(|| black_box(*a) + black_box(*b))
        });

        group.bench_with_input(BenchmarkId::new("mul", order), &(&a, &b), |bencher, (a, b)| {
            bencher.iter(|| black_box(*a) * black_box(*b))
        });

        group.bench_with_input(BenchmarkId::new("inverse", order), &a, |bencher, a| {
            bencher.iter(|| black_box(a).inverse())
        });
    }

    group.finish();
}

fn bench_binary_fast_path(c: &mut Criterion) {
    let mut group = c.benchmark_group("GF(2^8) Fast Path");

    group.bench_function("ff_multiply", |bencher| {
        bencher.iter(|| ff_multiply(black_box(0x57), black_box(0x83)))
    });

    let a = Gf256::new(0x57);
    let b = Gf256::new(0x83);
    group.bench_function("gf256_mul", |bencher| {
        bencher.iter(|| black_box(a) * black_box(b))
    });

    group.bench_function("gf256_inverse", |bencher| bencher.iter(|| black_box(a).inverse()));

    let f = Field::new(256).unwrap();
    let ea = f.element(0x57).unwrap();
    let eb = f.element(0x83).unwrap();
    group.bench_function("general_engine_mul", |bencher| {
        bencher.iter(|| black_box(&ea) * black_box(&eb))
    });

    group.finish();
}

fn bench_poly_operations(c: &mut Criterion) {
    let mut group = c.benchmark_group("Poly Operations");

    for size in [8usize, 32, 128] {
        let num: Vec<i64> = (0..2 * size as i64).map(|i| (i * 7) % 11 - 5).collect();
        let mut den: Vec<i64> = (0..size as i64).map(|i| (i * 3) % 5).collect();
        den.push(1);

        group.bench_with_input(BenchmarkId::new("divmod", size), &size, |bencher, _| {
            bencher.iter(|| poly::divmod(black_box(&num), black_box(&den)))
        });

        let a: Vec<u64> = num.iter().map(|&c| c.rem_euclid(13) as u64).collect();
        let b: Vec<u64> = den.iter().map(|&c| c as u64).collect();
        group.bench_with_input(BenchmarkId::new("divmod_mod_p", size), &size, |bencher, _| {
            bencher.iter(|| poly::divmod_mod_p(black_box(&a), black_box(&b), 13))
        });
    }

    group.finish();
}

fn bench_irreducibility(c: &mut Criterion) {
    let mut group = c.benchmark_group("Irreducibility");

    for order in [256u64, 3125, 12167] {
        let f = Field::new(order).unwrap();
        let modulus = f.modulus_polynomial().unwrap().to_vec();
        let p = f.prime();
        group.bench_with_input(BenchmarkId::new("rabin", order), &modulus, |bencher, m| {
            bencher.iter(|| poly::is_irreducible_mod_p(black_box(m), p))
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_element_operations,
    bench_binary_fast_path,
    bench_poly_operations,
    bench_irreducibility,
);

criterion_main!(benches);
