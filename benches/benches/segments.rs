// Copyright 2026 the Tidemark Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use chrono::{TimeDelta, TimeZone, Utc};
use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use tidemark_scale::TimeRange;
use tidemark_timebar::{TierFormats, TimeUnit, TimebarConfig, generate_segments};

fn window(secs: i64) -> TimeRange<Utc> {
    let start = Utc.with_ymd_and_hms(2024, 5, 1, 10, 0, 0).unwrap();
    TimeRange::new(start, start + TimeDelta::seconds(secs))
}

fn bench_second_walk(c: &mut Criterion) {
    let mut group = c.benchmark_group("segments/second_walk");

    // Hypothesis: the walk is linear in the number of emitted units and
    // independent of the pixel width.
    let formats = TierFormats::default();
    for secs in [30i64, 100, 600, 3_600] {
        let visible = window(secs);
        group.throughput(Throughput::Elements(secs as u64));
        group.bench_with_input(BenchmarkId::new("emit", secs), &visible, |b, visible| {
            b.iter(|| {
                let segments = generate_segments(
                    black_box(visible),
                    1_000.0,
                    TimeUnit::Second,
                    formats.formats(TimeUnit::Second),
                    &[],
                    60.0,
                );
                black_box(segments);
            });
        });
    }

    group.finish();
}

fn bench_width_independence(c: &mut Criterion) {
    let mut group = c.benchmark_group("segments/width_independence");

    let formats = TierFormats::default();
    let visible = window(600);
    group.throughput(Throughput::Elements(600));
    for width in [300.0f64, 3_000.0, 30_000.0] {
        group.bench_with_input(
            BenchmarkId::new("width", width as u64),
            &width,
            |b, &width| {
                b.iter(|| {
                    let segments = generate_segments(
                        black_box(&visible),
                        width,
                        TimeUnit::Second,
                        formats.formats(TimeUnit::Second),
                        &[],
                        60.0,
                    );
                    black_box(segments);
                });
            },
        );
    }

    group.finish();
}

fn bench_selection_overlap(c: &mut Criterion) {
    let mut group = c.benchmark_group("segments/selection_overlap");

    // Hypothesis: the overlap test adds a factor linear in the number of
    // selected ranges; the floor per range dominates.
    let formats = TierFormats::default();
    let visible = window(600);
    for ranges in [0usize, 4, 16, 64] {
        let selected: Vec<TimeRange<Utc>> = (0..ranges)
            .map(|i| {
                let offset = (i as i64) * 9;
                TimeRange::new(
                    visible.start + TimeDelta::seconds(offset),
                    visible.start + TimeDelta::seconds(offset + 5),
                )
            })
            .collect();
        group.throughput(Throughput::Elements(600));
        group.bench_with_input(
            BenchmarkId::new("ranges", ranges),
            &selected,
            |b, selected| {
                b.iter(|| {
                    let segments = generate_segments(
                        black_box(&visible),
                        3_000.0,
                        TimeUnit::Second,
                        formats.formats(TimeUnit::Second),
                        selected,
                        60.0,
                    );
                    black_box(segments);
                });
            },
        );
    }

    group.finish();
}

fn bench_full_layout(c: &mut Criterion) {
    let mut group = c.benchmark_group("segments/layout");

    let config = TimebarConfig::default();
    for secs in [30i64, 600] {
        let visible = window(secs);
        group.bench_with_input(BenchmarkId::new("layout", secs), &visible, |b, visible| {
            b.iter(|| {
                black_box(config.layout(black_box(visible), 1_000.0, &[]));
            });
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_second_walk,
    bench_width_independence,
    bench_selection_overlap,
    bench_full_layout
);
criterion_main!(benches);
