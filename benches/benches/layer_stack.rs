// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Benchmarks for command dispatch and position conversion through a
//! composed layer stack.

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use trellis_benches::column_stack;
use trellis_layer::{Axis, Command, Edge, Layer, reorder_diffs};
use trellis_range::Range;

fn bench_conversion(c: &mut Criterion) {
    let mut group = c.benchmark_group("layer_stack/conversion");
    for n in [100_i64, 1_000, 10_000] {
        let mut stack = column_stack(n);
        let mut events = Vec::new();
        // Permute and hide so neither boundary is an identity map.
        stack.do_command(
            &Command::Reorder {
                axis: Axis::Column,
                from_positions: vec![0, 1, 2],
                to_position: n - 1,
                edge: Edge::Trailing,
            },
            &mut events,
        );
        let hide: Vec<i64> = (0..n).step_by(7).collect();
        stack.do_command(
            &Command::Hide {
                axis: Axis::Column,
                positions: hide,
            },
            &mut events,
        );
        let count = stack.count(Axis::Column);
        group.bench_with_input(BenchmarkId::new("local_to_underlying", n), &count, |b, &count| {
            b.iter(|| {
                let mut sum = 0_i64;
                for p in 0..count {
                    sum += stack.local_to_underlying(Axis::Column, p).unwrap_or(0);
                }
                black_box(sum)
            });
        });
        group.bench_with_input(BenchmarkId::new("underlying_to_local", n), &n, |b, &n| {
            b.iter(|| {
                let mut visible = 0_i64;
                for u in 0..n {
                    visible += i64::from(stack.underlying_to_local(Axis::Column, u).is_some());
                }
                black_box(visible)
            });
        });
    }
    group.finish();
}

fn bench_hide_show_cycle(c: &mut Criterion) {
    c.bench_function("layer_stack/hide_show_cycle", |b| {
        let mut stack = column_stack(10_000);
        let positions: Vec<i64> = (0..1_000).map(|i| i * 2).collect();
        b.iter(|| {
            let mut events = Vec::new();
            stack.do_command(
                &Command::Hide {
                    axis: Axis::Column,
                    positions: positions.clone(),
                },
                &mut events,
            );
            stack.do_command(&Command::ShowAll { axis: Axis::Column }, &mut events);
            black_box(events.len())
        });
    });
}

fn bench_reorder_diffs(c: &mut Criterion) {
    // Many disjoint moved ranges makes the cumulative-offset walk the cost.
    let ranges: Vec<Range> = (0..500).map(|i| Range::new(i * 4, i * 4 + 2)).collect();
    c.bench_function("layer_stack/reorder_diffs", |b| {
        b.iter(|| black_box(reorder_diffs(black_box(&ranges), 3_000, Edge::Leading)));
    });
}

criterion_group!(benches, bench_conversion, bench_hide_show_cycle, bench_reorder_diffs);
criterion_main!(benches);
