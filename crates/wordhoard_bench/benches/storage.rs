//! Serialization and storage benchmarks.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use tempfile::TempDir;
use wordhoard_bench::{random_dictionary, SIZES};
use wordhoard_core::{store, Config};
use wordhoard_storage::{FileBackend, InMemoryBackend};

/// Benchmark rendering the dictionary file format.
fn bench_serialize(c: &mut Criterion) {
    let mut group = c.benchmark_group("serialize");

    for size in SIZES.iter() {
        let (index, _) = random_dictionary(*size);
        group.throughput(Throughput::Elements(index.definition_count() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &index, |b, index| {
            b.iter(|| {
                black_box(index.serialize());
            });
        });
    }
    group.finish();
}

/// Benchmark parsing a dictionary from memory.
fn bench_load(c: &mut Criterion) {
    let mut group = c.benchmark_group("load");
    let config = Config::default();

    for size in SIZES.iter() {
        let (index, _) = random_dictionary(*size);
        let content = index.serialize();
        group.throughput(Throughput::Bytes(content.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &content, |b, content| {
            let backend = InMemoryBackend::with_data(content.as_bytes());
            b.iter(|| {
                black_box(store::load(&backend, &config).unwrap());
            });
        });
    }
    group.finish();
}

/// Benchmark saving to a file.
fn bench_file_save(c: &mut Criterion) {
    let mut group = c.benchmark_group("file_save");

    // Fewer samples than the default; file I/O dominates each iteration
    group.sample_size(20);
    let config = Config::new().sync_on_save(false);

    for size in SIZES.iter() {
        let (index, _) = random_dictionary(*size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &index, |b, index| {
            let temp_dir = TempDir::new().unwrap();
            let mut backend = FileBackend::open(&temp_dir.path().join("bench.txt")).unwrap();

            b.iter(|| {
                store::save(black_box(index), &mut backend, &config).unwrap();
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_serialize, bench_load, bench_file_save);
criterion_main!(benches);
