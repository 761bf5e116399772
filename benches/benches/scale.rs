// Copyright 2026 the Tidemark Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use chrono::{TimeDelta, TimeZone, Utc};
use criterion::{Criterion, Throughput, black_box, criterion_group, criterion_main};
use tidemark_scale::{TimeRange, TimeScale, snap_to_grid};

fn scale() -> TimeScale<Utc> {
    let start = Utc.with_ymd_and_hms(2024, 5, 1, 10, 0, 0).unwrap();
    TimeScale::new(
        TimeRange::new(start, start + TimeDelta::seconds(600)),
        1_000.0,
    )
}

fn bench_conversions(c: &mut Criterion) {
    let mut group = c.benchmark_group("scale/conversions");
    group.throughput(Throughput::Elements(1));

    // Hypothesis: conversions are a handful of integer/float operations;
    // none of them should allocate.
    let scale = scale();
    let t = scale.visible().start + TimeDelta::seconds(123);

    group.bench_function("time_at_pixel", |b| {
        b.iter(|| black_box(scale.time_at_pixel(black_box(345.6))));
    });
    group.bench_function("pixel_at_time", |b| {
        b.iter(|| black_box(scale.pixel_at_time(black_box(&t))));
    });
    group.bench_function("duration_from_pixels", |b| {
        b.iter(|| black_box(scale.duration_from_pixels(black_box(345.6))));
    });

    group.finish();
}

fn bench_snapping(c: &mut Criterion) {
    let mut group = c.benchmark_group("scale/snapping");
    group.throughput(Throughput::Elements(1));

    let scale = scale();
    let t = scale.visible().start + TimeDelta::milliseconds(123_456);

    group.bench_function("snap_pixel_delta", |b| {
        b.iter(|| black_box(scale.snap_pixel_delta(black_box(37.0), 5)));
    });
    group.bench_function("snap_to_grid", |b| {
        b.iter(|| black_box(snap_to_grid(black_box(t), 300)));
    });
    group.bench_function("snap_to_grid_subsecond_strip", |b| {
        b.iter(|| black_box(snap_to_grid(black_box(t), 0)));
    });

    group.finish();
}

criterion_group!(benches, bench_conversions, bench_snapping);
criterion_main!(benches);
