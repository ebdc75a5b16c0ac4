//! Strsearch Benchmarks
//!
//! Criterion benchmarks for table preprocessing and search across the three
//! matchers. Inputs come from a seeded corpus generator so runs are
//! comparable.
//!
//! To run the benchmarks:
//! ```bash
//! cargo bench --features benchmarking
//! ```

use criterion::{
    black_box, criterion_group, criterion_main, measurement::WallTime, BenchmarkId, Criterion,
    SamplingMode, Throughput,
};
use std::time::Duration;

use strsearch_lib::analysis::{CorpusGenerator, SymbolClass};
use strsearch_lib::matching::{
    build_bad_char_table, build_failure_function, build_good_suffix_table, search_boyer_moore,
    search_kmp, search_naive, Alphabet,
};

const TEXT_SIZES: [usize; 3] = [1_000, 10_000, 100_000];
const PATTERN_SIZES: [usize; 3] = [4, 16, 64];

/// Benchmark preprocessing for both table-driven matchers
fn bench_preprocessing(c: &mut Criterion) {
    let alphabet = Alphabet::latin();
    let mut generator = CorpusGenerator::seeded(7, SymbolClass::Mixed);

    let mut group = c.benchmark_group("preprocessing");
    group.sampling_mode(SamplingMode::Flat);
    group.measurement_time(Duration::from_secs(2));

    for size in PATTERN_SIZES {
        let pattern = generator.pattern(size);
        group.throughput(Throughput::Elements(size as u64));

        group.bench_with_input(BenchmarkId::new("bad_char", size), &pattern, |b, p| {
            b.iter(|| build_bad_char_table(black_box(p), &alphabet))
        });
        group.bench_with_input(BenchmarkId::new("good_suffix", size), &pattern, |b, p| {
            b.iter(|| build_good_suffix_table(black_box(p)))
        });
        group.bench_with_input(BenchmarkId::new("failure", size), &pattern, |b, p| {
            b.iter(|| build_failure_function(black_box(p)))
        });
    }

    group.finish();
}

/// Benchmark search over random uppercase text with the pattern planted once
fn bench_search(c: &mut Criterion) {
    let alphabet = Alphabet::latin();
    let mut generator = CorpusGenerator::seeded(42, SymbolClass::Uppercase);

    for pattern_size in PATTERN_SIZES {
        let mut group = c.benchmark_group(format!("search_m{pattern_size}"));
        group.sampling_mode(SamplingMode::Flat);
        group.measurement_time(Duration::from_secs(2));
        group.warm_up_time(Duration::from_secs(1));

        for text_size in TEXT_SIZES {
            let pattern = generator.pattern(pattern_size);
            let base = generator.text(text_size);
            let (text, _) = generator.plant(&base, &pattern);
            let input = (text, pattern);

            group.throughput(Throughput::Elements(text_size as u64));
            group.bench_with_input(
                BenchmarkId::new("boyer_moore", text_size),
                &input,
                |b, (text, pattern)| {
                    b.iter(|| search_boyer_moore(black_box(text), black_box(pattern), &alphabet))
                },
            );
            group.bench_with_input(
                BenchmarkId::new("kmp", text_size),
                &input,
                |b, (text, pattern)| b.iter(|| search_kmp(black_box(text), black_box(pattern))),
            );
            group.bench_with_input(
                BenchmarkId::new("naive", text_size),
                &input,
                |b, (text, pattern)| b.iter(|| search_naive(black_box(text), black_box(pattern))),
            );
        }

        group.finish();
    }
}

/// Benchmark the repetitive inputs where KMP and naive search diverge most
fn bench_repetitive(c: &mut Criterion) {
    let alphabet = Alphabet::latin();
    let mut group = c.benchmark_group("repetitive");
    group.sampling_mode(SamplingMode::Flat);

    let text = "a".repeat(50_000);
    let pattern = format!("{}b", "a".repeat(31));

    group.bench_function("boyer_moore", |b| {
        b.iter(|| search_boyer_moore(black_box(&text), black_box(&pattern), &alphabet))
    });
    group.bench_function("kmp", |b| {
        b.iter(|| search_kmp(black_box(&text), black_box(&pattern)))
    });
    group.bench_function("naive", |b| {
        b.iter(|| search_naive(black_box(&text), black_box(&pattern)))
    });

    group.finish();
}

criterion_group! {
    name = benches;
    config = Criterion::default()
        .with_measurement(WallTime)
        .significance_level(0.01)
        .noise_threshold(0.02)
        .confidence_level(0.99);
    targets = bench_preprocessing, bench_search, bench_repetitive
}

criterion_main!(benches);
