use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;
use kmodes::{KModes, Strategy};
use rand::prelude::*;

// Benchmark snapshot() and list() with a large, full tracked set.
fn benchmark_snapshot(c: &mut Criterion) {
    let mut rng = SmallRng::seed_from_u64(7);
    let k = 5_000;

    let mut modes = KModes::new(k, Strategy::Heap);
    for _ in 0..(k * 4) {
        let key: u64 = rng.random_range(0..(k as u64 * 2));
        modes.add(key);
    }

    let mut group = c.benchmark_group("KModes_snapshot");
    group.sample_size(40);
    group.bench_function("snapshot_k_5000", |b| {
        b.iter(|| black_box(modes.snapshot()));
    });
    group.bench_function("list_k_5000", |b| {
        b.iter(|| black_box(modes.list()));
    });
    group.finish();
}

criterion_group!(benches, benchmark_snapshot);
criterion_main!(benches);
