// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Benchmarks for [`trellis_range`] set mutation and grouping.

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use trellis_benches::scattered_values;
use trellis_range::util::{group_by_contiguous, ranges_of};
use trellis_range::{Range, RangeSet};

fn bench_insert(c: &mut Criterion) {
    let mut group = c.benchmark_group("range_set/insert");
    for n in [1_000_i64, 10_000, 100_000] {
        // Scattered inserts stay fragmented; sequential inserts collapse into
        // one range. The gap between the two is the merge cost.
        group.bench_with_input(BenchmarkId::new("scattered", n), &n, |b, &n| {
            let values = scattered_values(n);
            b.iter(|| {
                let mut set = RangeSet::new();
                for &v in &values {
                    set.insert(v);
                }
                black_box(set.range_count())
            });
        });
        group.bench_with_input(BenchmarkId::new("sequential", n), &n, |b, &n| {
            b.iter(|| {
                let mut set = RangeSet::new();
                for v in 0..n {
                    set.insert(v);
                }
                black_box(set.range_count())
            });
        });
    }
    group.finish();
}

fn bench_contains(c: &mut Criterion) {
    let mut set = RangeSet::new();
    for &v in &scattered_values(100_000) {
        set.insert(v);
    }
    c.bench_function("range_set/contains", |b| {
        b.iter(|| {
            let mut hits = 0_u32;
            for v in 0..1_000 {
                hits += u32::from(set.contains(black_box(v * 97)));
            }
            black_box(hits)
        });
    });
}

fn bench_remove_range(c: &mut Criterion) {
    c.bench_function("range_set/remove_range_split", |b| {
        b.iter_batched(
            || {
                let mut set = RangeSet::new();
                set.insert_range(Range::new(0, 100_000));
                set
            },
            |mut set| {
                // Punch holes through one big range.
                for i in 0..1_000 {
                    set.remove_range(Range::new(i * 100 + 10, i * 100 + 20));
                }
                black_box(set.range_count())
            },
            criterion::BatchSize::SmallInput,
        );
    });
}

fn bench_grouping(c: &mut Criterion) {
    let scattered = scattered_values(30_000);
    let runs: Vec<i64> = (0..30_000).collect();
    let mut group = c.benchmark_group("range_set/grouping");
    group.bench_function("group_by_contiguous/scattered", |b| {
        b.iter(|| black_box(group_by_contiguous(black_box(&scattered))));
    });
    group.bench_function("ranges_of/one_run", |b| {
        b.iter(|| black_box(ranges_of(black_box(&runs))));
    });
    group.finish();
}

criterion_group!(
    benches,
    bench_insert,
    bench_contains,
    bench_remove_range,
    bench_grouping
);
criterion_main!(benches);
