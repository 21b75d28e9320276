//! Benchmark: tophash-map performance
//!
//! Measures insert and lookup throughput for well-sized and undersized maps.

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use foldhash::fast::FixedState;
use tophash_map::StringMap;

// Number of operations per benchmark
const SMALL_OPS: usize = 1_000;
const MEDIUM_OPS: usize = 10_000;
const LARGE_OPS: usize = 60_000;

fn keys(size: usize) -> Vec<String> {
    (0..size).map(|i| format!("key_{}", i)).collect()
}

/// Benchmark: insert into a map sized for the workload
fn bench_insert_sized(c: &mut Criterion) {
    let mut group = c.benchmark_group("insert_sized");

    for &size in &[SMALL_OPS, MEDIUM_OPS, LARGE_OPS] {
        group.throughput(Throughput::Elements(size as u64));
        let keys = keys(size);

        group.bench_with_input(BenchmarkId::new("tophash-map", size), &size, |b, &size| {
            b.iter(|| {
                let mut map = StringMap::with_capacity_and_hasher(size as u16, FixedState::default());
                for key in &keys {
                    map.insert(black_box(key.clone()), black_box(key.clone()));
                }
                map
            });
        });
    }

    group.finish();
}

/// Benchmark: insert into a map whose hint is far too small
fn bench_insert_undersized(c: &mut Criterion) {
    let mut group = c.benchmark_group("insert_undersized");

    for &size in &[SMALL_OPS, MEDIUM_OPS] {
        group.throughput(Throughput::Elements(size as u64));
        let keys = keys(size);

        group.bench_with_input(BenchmarkId::new("tophash-map", size), &size, |b, _| {
            b.iter(|| {
                let mut map = StringMap::with_capacity_and_hasher(0, FixedState::default());
                for key in &keys {
                    map.insert(black_box(key.clone()), black_box(key.clone()));
                }
                map
            });
        });
    }

    group.finish();
}

/// Benchmark: lookups, half of them hits
fn bench_get(c: &mut Criterion) {
    let mut group = c.benchmark_group("get");

    for &size in &[SMALL_OPS, MEDIUM_OPS, LARGE_OPS] {
        group.throughput(Throughput::Elements(size as u64));
        let keys = keys(size);
        let mut map = StringMap::with_capacity_and_hasher(size as u16, FixedState::default());
        for key in keys.iter().step_by(2) {
            map.insert(key.clone(), key.clone());
        }

        group.bench_with_input(BenchmarkId::new("tophash-map", size), &size, |b, _| {
            b.iter(|| {
                let mut found = 0usize;
                for key in &keys {
                    if map.get(black_box(key.as_str())).is_some() {
                        found += 1;
                    }
                }
                found
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_insert_sized, bench_insert_undersized, bench_get);

criterion_main!(benches);
