//! Dictionary operation benchmarks.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use wordhoard_bench::{random_dictionary, sample_words, SIZES};
use wordhoard_core::{Definition, PartOfSpeech};

/// Benchmark adding a definition to a populated dictionary.
fn bench_add_definition(c: &mut Criterion) {
    let mut group = c.benchmark_group("add_definition");

    for size in SIZES.iter() {
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, &size| {
            let (mut index, _) = random_dictionary(size);
            let mut n = 0u64;

            b.iter(|| {
                n += 1;
                let def = Definition::new(PartOfSpeech::Noun, format!("testing {n}"));
                black_box(index.add_definition(black_box("Test"), def));
            });
        });
    }
    group.finish();
}

/// Benchmark replacing the text of an existing definition.
fn bench_update_definition(c: &mut Criterion) {
    let mut group = c.benchmark_group("update_definition");

    for size in SIZES.iter() {
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, &size| {
            let (mut index, word) = random_dictionary(size);
            let mut flip = false;

            b.iter(|| {
                flip = !flip;
                let text = if flip { "testing" } else { "tested" };
                index.update_definition(black_box(&word), 0, text).unwrap();
            });
        });
    }
    group.finish();
}

/// Benchmark range queries.
fn bench_words_in_range(c: &mut Criterion) {
    let mut group = c.benchmark_group("words_in_range");

    for size in SIZES.iter() {
        let (index, _) = random_dictionary(*size);
        group.throughput(Throughput::Elements(index.words_in_range("1", "2").len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &index, |b, index| {
            b.iter(|| {
                black_box(index.words_in_range(black_box("1"), black_box("2")));
            });
        });
    }
    group.finish();
}

/// Benchmark point lookups.
fn bench_lookup(c: &mut Criterion) {
    let mut group = c.benchmark_group("lookup");

    for size in SIZES.iter() {
        let (index, _) = random_dictionary(*size);
        let words = sample_words(&index, 1000);
        group.throughput(Throughput::Elements(words.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &index, |b, index| {
            b.iter(|| {
                for word in &words {
                    black_box(index.lookup(black_box(word)));
                }
            });
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_add_definition,
    bench_update_definition,
    bench_words_in_range,
    bench_lookup,
);
criterion_main!(benches);
