use std::collections::HashMap;
use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use pullstream::prelude::*;
use pullstream::SortOrder;
use rand::prelude::*;

fn data(len: usize) -> Vec<i64> {
    let mut rng = StdRng::seed_from_u64(0xCAFE);
    (0..len).map(|_| rng.random_range(0..10_000)).collect()
}

fn bench_sort(c: &mut Criterion) {
    let nums = data(10_000);
    let mut group = c.benchmark_group("sort");

    group.bench_function("pullstream_stable", |b| {
        b.iter(|| {
            let out: Vec<i64> = pullstream::from(black_box(nums.clone()))
                .sort(SortOrder::Ascending)
                .collect();
            out
        })
    });
    group.bench_function("pullstream_unstable", |b| {
        b.iter(|| {
            let out: Vec<i64> = pullstream::from(black_box(nums.clone()))
                .sort_unstable(SortOrder::Ascending)
                .collect();
            out
        })
    });
    group.bench_function("std_sort", |b| {
        b.iter(|| {
            let mut out = black_box(nums.clone());
            out.sort();
            out
        })
    });

    group.finish();
}

fn bench_group_by(c: &mut Criterion) {
    let nums = data(10_000);
    let mut group = c.benchmark_group("group_by");

    group.bench_function("pullstream", |b| {
        b.iter(|| {
            let groups: HashMap<i64, Vec<i64>> = pullstream::from(black_box(nums.clone()))
                .group_by(|n| n % 16)
                .collect();
            groups
        })
    });
    group.bench_function("hand_rolled_entry_loop", |b| {
        b.iter(|| {
            let mut groups: HashMap<i64, Vec<i64>> = HashMap::new();
            for n in black_box(nums.clone()) {
                groups.entry(n % 16).or_default().push(n);
            }
            groups
        })
    });

    group.finish();
}

criterion_group!(benches, bench_sort, bench_group_by);
criterion_main!(benches);
