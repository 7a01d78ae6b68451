//! Solver benchmarks
//!
//! Measures the O(n³) / O(n²) / O(n) separation between the three
//! maximum-subarray algorithms on identical seeded inputs. Brute force is
//! capped at the smaller sizes to keep wall time sane.
//!
//! Run with: cargo bench --bench solver_benchmarks

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use maxsub::solver::{brute_force, dynamic_programming, optimized_enumeration};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const BRUTE_FORCE_SIZES: [usize; 3] = [10, 50, 200];
const ENUMERATION_SIZES: [usize; 4] = [10, 200, 1_000, 5_000];
const KADANE_SIZES: [usize; 4] = [10, 1_000, 100_000, 1_000_000];

fn generate_input(size: usize) -> Vec<i64> {
    let mut rng = StdRng::seed_from_u64(42);
    (0..size).map(|_| rng.gen_range(-100..=100)).collect()
}

/// Benchmark the O(n³) brute-force solver (small sizes only)
fn bench_brute_force(c: &mut Criterion) {
    let mut group = c.benchmark_group("brute_force");

    for size in BRUTE_FORCE_SIZES {
        let values = generate_input(size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &values, |b, values| {
            b.iter(|| brute_force(black_box(values)));
        });
    }

    group.finish();
}

/// Benchmark the O(n²) optimized enumeration solver
fn bench_optimized_enumeration(c: &mut Criterion) {
    let mut group = c.benchmark_group("optimized_enumeration");

    for size in ENUMERATION_SIZES {
        let values = generate_input(size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &values, |b, values| {
            b.iter(|| optimized_enumeration(black_box(values)));
        });
    }

    group.finish();
}

/// Benchmark the O(n) Kadane solver
fn bench_dynamic_programming(c: &mut Criterion) {
    let mut group = c.benchmark_group("dynamic_programming");

    for size in KADANE_SIZES {
        let values = generate_input(size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &values, |b, values| {
            b.iter(|| dynamic_programming(black_box(values)));
        });
    }

    group.finish();
}

/// Head-to-head comparison on one shared input size
fn bench_head_to_head(c: &mut Criterion) {
    let mut group = c.benchmark_group("head_to_head_200");
    let values = generate_input(200);

    group.bench_with_input(BenchmarkId::new("brute_force", 200), &values, |b, values| {
        b.iter(|| brute_force(black_box(values)));
    });
    group.bench_with_input(
        BenchmarkId::new("optimized_enumeration", 200),
        &values,
        |b, values| {
            b.iter(|| optimized_enumeration(black_box(values)));
        },
    );
    group.bench_with_input(
        BenchmarkId::new("dynamic_programming", 200),
        &values,
        |b, values| {
            b.iter(|| dynamic_programming(black_box(values)));
        },
    );

    group.finish();
}

criterion_group!(
    benches,
    bench_brute_force,
    bench_optimized_enumeration,
    bench_dynamic_programming,
    bench_head_to_head
);
criterion_main!(benches);
