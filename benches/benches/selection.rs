// Copyright 2026 the Tidemark Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use chrono::{TimeDelta, TimeZone, Utc};
use criterion::{
    BatchSize, BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main,
};
use tidemark_lanes::{ItemId, ItemSelection, LanePlan};
use tidemark_scale::TimeRange;

/// Allocates `len` ids through a plan; `ItemId`s are opaque, so benches mint
/// them the way hosts do.
fn ids(len: usize) -> Vec<ItemId> {
    let start = Utc.with_ymd_and_hms(2024, 5, 1, 10, 0, 0).unwrap();
    let mut plan = LanePlan::new(4);
    (0..len)
        .map(|i| {
            let from = start + TimeDelta::seconds(i as i64);
            plan.insert(i % 4, TimeRange::new(from, from + TimeDelta::seconds(1)))
        })
        .collect()
}

fn bench_replace_with_vs_hashed(c: &mut Criterion) {
    let mut group = c.benchmark_group("lanes/replace_with");

    // Hypothesis: `replace_with` is O(n^2) due to de-dup scanning, while
    // `replace_with_hashed` is O(n) for select-all style inputs.
    for len in [128usize, 512, 2_048, 8_192] {
        let keys = ids(len);
        group.throughput(Throughput::Elements(len as u64));

        group.bench_with_input(BenchmarkId::new("replace_with", len), &keys, |b, keys| {
            b.iter_batched(
                ItemSelection::new,
                |mut sel| {
                    sel.replace_with(keys.iter().copied());
                    black_box(sel);
                },
                BatchSize::LargeInput,
            );
        });

        group.bench_with_input(
            BenchmarkId::new("replace_with_hashed", len),
            &keys,
            |b, keys| {
                b.iter_batched(
                    ItemSelection::new,
                    |mut sel| {
                        sel.replace_with_hashed(keys.iter().copied());
                        black_box(sel);
                    },
                    BatchSize::LargeInput,
                );
            },
        );
    }

    group.finish();
}

fn bench_replace_with_duplicates(c: &mut Criterion) {
    let mut group = c.benchmark_group("lanes/replace_with_duplicates");

    // Many duplicates: models rebuilding a selection from repeated sweeps.
    for unique_len in [128usize, 512, 2_048] {
        let keys: Vec<ItemId> = ids(unique_len)
            .into_iter()
            .flat_map(|k| core::iter::repeat_n(k, 4))
            .collect();
        group.throughput(Throughput::Elements(keys.len() as u64));

        group.bench_with_input(
            BenchmarkId::new("replace_with", unique_len),
            &keys,
            |b, keys| {
                b.iter_batched(
                    ItemSelection::new,
                    |mut sel| {
                        sel.replace_with(keys.iter().copied());
                        black_box(sel);
                    },
                    BatchSize::LargeInput,
                );
            },
        );

        group.bench_with_input(
            BenchmarkId::new("replace_with_hashed", unique_len),
            &keys,
            |b, keys| {
                b.iter_batched(
                    ItemSelection::new,
                    |mut sel| {
                        sel.replace_with_hashed(keys.iter().copied());
                        black_box(sel);
                    },
                    BatchSize::LargeInput,
                );
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_replace_with_vs_hashed, bench_replace_with_duplicates);
criterion_main!(benches);
