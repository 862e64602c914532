//! Benchmark of the clean → transform → aggregate path on synthetic catalogs
//!
//! Run with: cargo bench --bench pipeline_benchmark

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use polars::prelude::*;
use rand::prelude::*;
use rand::SeedableRng;

use cateda::pipeline::{
    analyze_catalog, clean_catalog, derive_duration_minutes, CleaningRules, DEFAULT_TOP_DIRECTORS,
};

const DIRECTORS: [&str; 6] = [
    "Rajiv Chilaka",
    "Jan Suter",
    "Raúl Campos",
    "Suhas Kadav",
    "Marcus Raboy",
    "Jay Karas",
];
const RATINGS: [&str; 4] = ["TV-MA", "TV-14", "PG-13", "R"];

/// Generate a catalog with roughly 30% missing directors and 1% missing ratings
fn generate_catalog(n_rows: usize, seed: u64) -> DataFrame {
    let mut rng = rand::rngs::StdRng::seed_from_u64(seed);

    let ids: Vec<String> = (0..n_rows).map(|i| format!("s{}", i + 1)).collect();
    let mut types = Vec::with_capacity(n_rows);
    let mut durations = Vec::with_capacity(n_rows);
    for _ in 0..n_rows {
        if rng.gen_bool(0.7) {
            types.push("Movie");
            durations.push(Some(format!("{} min", rng.gen_range(60..180))));
        } else {
            types.push("TV Show");
            durations.push(Some(format!("{} Seasons", rng.gen_range(1..8))));
        }
    }
    let directors: Vec<Option<&str>> = (0..n_rows)
        .map(|_| {
            if rng.gen_bool(0.3) {
                None
            } else {
                DIRECTORS.choose(&mut rng).copied()
            }
        })
        .collect();
    let ratings: Vec<Option<&str>> = (0..n_rows)
        .map(|_| {
            if rng.gen_bool(0.01) {
                None
            } else {
                RATINGS.choose(&mut rng).copied()
            }
        })
        .collect();
    let years: Vec<i64> = (0..n_rows).map(|_| rng.gen_range(1940..2022)).collect();

    df! {
        "show_id" => ids,
        "type" => types,
        "director" => directors,
        "date_added" => vec!["September 24, 2021"; n_rows],
        "rating" => ratings,
        "duration" => durations,
        "release_year" => years,
    }
    .unwrap()
}

fn bench_clean(c: &mut Criterion) {
    let mut group = c.benchmark_group("clean_catalog");
    let rules = CleaningRules::catalog();

    for n_rows in [1_000, 10_000, 100_000] {
        let df = generate_catalog(n_rows, 42);
        group.throughput(Throughput::Elements(n_rows as u64));
        group.bench_with_input(BenchmarkId::new("rows", n_rows), &df, |b, df| {
            b.iter(|| clean_catalog(black_box(df.clone()), &rules).unwrap())
        });
    }

    group.finish();
}

fn bench_transform_and_aggregate(c: &mut Criterion) {
    let mut group = c.benchmark_group("transform_and_aggregate");
    let rules = CleaningRules::catalog();

    for n_rows in [1_000, 10_000, 100_000] {
        let cleaned = clean_catalog(generate_catalog(n_rows, 7), &rules).unwrap().df;
        group.throughput(Throughput::Elements(n_rows as u64));
        group.bench_with_input(BenchmarkId::new("rows", n_rows), &cleaned, |b, df| {
            b.iter(|| {
                let df = derive_duration_minutes(black_box(df.clone())).unwrap();
                analyze_catalog(&df, DEFAULT_TOP_DIRECTORS).unwrap()
            })
        });
    }

    group.finish();
}

criterion_group!(benches, bench_clean, bench_transform_and_aggregate);
criterion_main!(benches);
