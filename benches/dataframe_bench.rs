//! Cleaning operation benchmarks
//!
//! Percentile bounds, outlier filtering, and factorization over synthetic
//! car listings of increasing size.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use tidyrs::dataframe::DataFrame;
use tidyrs::stats;

const BRANDS: [&str; 8] = ["BMW", "Audi", "Kia", "Fiat", "Ford", "Volvo", "Saab", "Opel"];

/// Synthetic listings with a `Year`, a `Price`, and a `Brand` column
fn create_listings(n_rows: usize) -> DataFrame {
    // Simple LCG random generator for reproducibility
    let mut rng_state: u64 = 42;
    let mut next = || -> u64 {
        rng_state = rng_state.wrapping_mul(6364136223846793005).wrapping_add(1);
        rng_state >> 33
    };

    let mut years = Vec::with_capacity(n_rows);
    let mut prices = Vec::with_capacity(n_rows);
    let mut brands = Vec::with_capacity(n_rows);
    for _ in 0..n_rows {
        years.push(1990 + (next() % 31) as i64);
        prices.push(5_000.0 + (next() % 90_000) as f64);
        brands.push(BRANDS[(next() % BRANDS.len() as u64) as usize].to_string());
    }

    let mut df = DataFrame::new();
    df.add_int_column("Year", years).unwrap();
    df.add_float_column("Price", prices).unwrap();
    df.add_string_column("Brand", brands).unwrap();
    df
}

fn bench_percentile_bounds(c: &mut Criterion) {
    let mut group = c.benchmark_group("percentile_bounds");

    for n_rows in [1_000, 10_000, 100_000] {
        let values = create_listings(n_rows).numeric_values("Price").unwrap();
        group.bench_with_input(BenchmarkId::new("p5_p95", n_rows), &values, |b, values| {
            b.iter(|| stats::percentile_bounds(black_box(values), 5.0, 95.0).unwrap())
        });
    }

    group.finish();
}

fn bench_filter_outliers(c: &mut Criterion) {
    let mut group = c.benchmark_group("filter_outliers");

    for n_rows in [1_000, 10_000, 100_000] {
        let df = create_listings(n_rows);
        group.bench_with_input(BenchmarkId::new("year", n_rows), &df, |b, df| {
            b.iter(|| black_box(df).drop_outliers().unwrap())
        });
    }

    group.finish();
}

fn bench_factorize(c: &mut Criterion) {
    let mut group = c.benchmark_group("factorize");

    for n_rows in [1_000, 10_000, 100_000] {
        let df = create_listings(n_rows);
        group.bench_with_input(BenchmarkId::new("brand", n_rows), &df, |b, df| {
            b.iter(|| black_box(df).factorize_column("Brand", "Brand_ID").unwrap())
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_percentile_bounds,
    bench_filter_outliers,
    bench_factorize,
);

criterion_main!(benches);
