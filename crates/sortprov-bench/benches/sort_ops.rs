//! Criterion micro-benchmarks for the sort algorithms.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use sortprov_core::Algorithm;
use sortprov_test_utils::{generate, InputPattern};

const SEED: u64 = 2222;

/// Benchmark: every algorithm on 1K and 10K random inputs.
///
/// Insertion sort stops at 1K to keep the run short.
fn bench_random(c: &mut Criterion) {
    let mut group = c.benchmark_group("random");
    for len in [1_000usize, 10_000] {
        let input = generate(InputPattern::Random, len, SEED);
        for algorithm in Algorithm::ALL {
            if algorithm == Algorithm::Insertion && len > 1_000 {
                continue;
            }
            group.bench_with_input(BenchmarkId::new(algorithm.name(), len), &input, |b, input| {
                b.iter_batched_ref(
                    || input.clone(),
                    |data| algorithm.sort(black_box(data)),
                    BatchSize::SmallInput,
                );
            });
        }
    }
    group.finish();
}

/// Benchmark: default sort across input shapes at 10K elements.
fn bench_patterns(c: &mut Criterion) {
    let mut group = c.benchmark_group("patterns_10k");
    for pattern in InputPattern::ALL {
        let input = generate(pattern, 10_000, SEED);
        group.bench_with_input(BenchmarkId::from_parameter(pattern.name()), &input, |b, input| {
            b.iter_batched_ref(
                || input.clone(),
                |data| sortprov_core::sort(black_box(data)),
                BatchSize::SmallInput,
            );
        });
    }
    group.finish();
}

criterion_group!(benches, bench_random, bench_patterns);
criterion_main!(benches);
