#![allow(missing_docs)]
//! Benchmarks for SuperSimplex sampling and seed derivation.

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use std::hint::black_box;

use strata_utils::math::Vector2;
use strata_utils::noise::SuperSimplexNoise;
use strata_utils::random::seed_from_text;

const SEED: i64 = 12345;

fn bench_single_sample(c: &mut Criterion) {
    let noise = SuperSimplexNoise::new(SEED);

    c.bench_function("single_noise_sample", |b| {
        b.iter(|| {
            black_box(noise.sample(black_box(Vector2::new(1234.5, -678.9))));
        });
    });
}

fn bench_region_sweep(c: &mut Criterion) {
    let noise = SuperSimplexNoise::new(SEED);

    let mut group = c.benchmark_group("region_sweep");

    // Sweep a 64x64 grid of sample points from different origins to
    // see variance across lattice regions.
    let origins = [(0.0, 0.0), (1_000.0, 1_000.0), (-100_000.0, 100_000.0)];

    for (x, y) in origins {
        group.bench_with_input(
            BenchmarkId::new("origin", format!("({x},{y})")),
            &(x, y),
            |b, &(x, y)| {
                b.iter(|| {
                    let mut total = 0.0;
                    for column in 0..64 {
                        for row in 0..64 {
                            let point = Vector2::new(
                                x + f64::from(column) * 0.25,
                                y + f64::from(row) * 0.25,
                            );
                            total += noise.sample(black_box(point));
                        }
                    }
                    black_box(total);
                });
            },
        );
    }

    group.finish();
}

fn bench_seed_from_text(c: &mut Criterion) {
    let mut group = c.benchmark_group("seed_from_text");

    for text in ["strata", "a much longer world seed phrase", "🌍🌎🌏"] {
        group.bench_with_input(BenchmarkId::new("text", text), &text, |b, &text| {
            b.iter(|| black_box(seed_from_text(black_box(text))));
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_single_sample,
    bench_region_sweep,
    bench_seed_from_text,
);
criterion_main!(benches);
