// Copyright 2026 the Tidemark Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::{String, ToString};
use alloc::vec::Vec;
use core::fmt::Display;

use chrono::TimeZone;
use tidemark_scale::TimeRange;

use crate::{TimeUnit, UnitFormats};

/// One labeled block of a timebar tier.
///
/// Segments are produced fresh on every layout pass and never mutated; hosts
/// draw each as a `width`-pixel block and may use `key` as a per-pass child
/// key.
#[derive(Clone, Debug, PartialEq)]
pub struct Segment {
    /// Label text, formatted from the block's cursor instant.
    pub label: String,
    /// Whether the block's unit overlaps a selected range.
    pub selected: bool,
    /// Width of the block in pixels.
    pub width: f64,
    /// Remaining pixel budget at emission time. Strictly decreasing across a
    /// pass while emitted widths are positive, so it is unique within one
    /// tier.
    pub key: f64,
}

/// Walks the visible range at `unit` granularity and returns its label
/// segments in chronological order.
///
/// The walk starts a cursor at `visible.start` with a pixel budget of
/// `width_px` and emits one segment per unit:
///
/// - Only the first segment accounts for the cursor's offset into its own
///   unit, so a window starting mid-unit gets a narrow leading block.
/// - Each block's width is clamped to the remaining budget; the sequence
///   never sums past `width_px` and never walks past `visible.end`.
/// - A block narrower than `short_label_limit` is labeled with the short
///   pattern, otherwise the long one (a block exactly at the limit uses the
///   long form).
/// - A block is `selected` when its cursor lies within some selected range
///   whose endpoints are floored to this unit, so a selection touching any
///   part of a unit highlights the whole block.
///
/// A zero-length visible range and a unit without a walk step (see
/// [`TimeUnit::step`]) both yield an empty sequence: nothing to render, not
/// an error.
#[must_use]
pub fn generate_segments<Tz: TimeZone>(
    visible: &TimeRange<Tz>,
    width_px: f64,
    unit: TimeUnit,
    formats: &UnitFormats,
    selected: &[TimeRange<Tz>],
    short_label_limit: f64,
) -> Vec<Segment>
where
    Tz::Offset: Display,
{
    let total_seconds = visible.duration_seconds();
    let Some(step) = unit.step() else {
        return Vec::new();
    };
    if total_seconds == 0 || width_px <= 0.0 {
        return Vec::new();
    }
    let pixels_per_second = width_px / total_seconds as f64;

    let mut segments = Vec::new();
    let mut cursor = visible.start.clone();
    let mut pixels_left = width_px;
    let mut first = true;

    while cursor < visible.end && pixels_left > 0.0 {
        let offset_seconds = if first {
            unit.offset_into(&cursor).num_milliseconds() as f64 / 1_000.0
        } else {
            0.0
        };
        first = false;

        let ideal = match unit {
            TimeUnit::Minute => pixels_per_second * (60.0 - offset_seconds),
            TimeUnit::Second => pixels_per_second - offset_seconds,
            // No step above, so the walk never reaches here.
            TimeUnit::Hour => break,
        };
        let width = ideal.min(width_px).min(pixels_left);

        let pattern = if width < short_label_limit {
            &formats.short
        } else {
            &formats.long
        };
        let label = cursor.format(pattern).to_string();

        let selected = selected.iter().any(|range| {
            unit.floor(&range.start) <= cursor && cursor <= unit.floor(&range.end)
        });

        segments.push(Segment {
            label,
            selected,
            width,
            key: pixels_left,
        });

        cursor = match cursor.checked_add_signed(step) {
            Some(next) => next,
            None => break,
        };
        pixels_left -= width;
    }

    segments
}

/// Picks the top-tier segment that carries the cursor annotation.
///
/// The rendering layer appends the cursor time to exactly one top-tier
/// segment: the first one, unless a second segment exists and is wider, in
/// which case the second one. The tie-break is arbitrary but kept for
/// compatibility with existing timebar hosts.
#[must_use]
pub fn cursor_segment_key(segments: &[Segment]) -> Option<f64> {
    match segments {
        [] => None,
        [only] => Some(only.key),
        [first, second, ..] => {
            if second.width > first.width {
                Some(second.key)
            } else {
                Some(first.key)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec::Vec;

    use chrono::{TimeDelta, TimeZone, Utc};
    use tidemark_scale::TimeRange;

    use super::{Segment, cursor_segment_key, generate_segments};
    use crate::{TierFormats, TimeUnit};

    fn at(min: u32, secs: u32) -> chrono::DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, 1, 10, min, secs).unwrap()
    }

    fn seconds_tier(visible: &TimeRange<Utc>, width: f64) -> Vec<Segment> {
        let formats = TierFormats::default();
        generate_segments(
            visible,
            width,
            TimeUnit::Second,
            formats.formats(TimeUnit::Second),
            &[],
            60.0,
        )
    }

    #[test]
    fn thirty_seconds_at_three_hundred_px() {
        let visible = TimeRange::new(at(0, 0), at(0, 30));
        let segments = seconds_tier(&visible, 300.0);

        assert_eq!(segments.len(), 30);
        for (i, seg) in segments.iter().enumerate() {
            assert_eq!(seg.width, 10.0);
            // 10 px is under the 60 px limit, so the short second pattern.
            assert_eq!(seg.label, alloc::format!("{:02}", i));
        }
        let total: f64 = segments.iter().map(|s| s.width).sum();
        assert!(total <= 300.0 + 1e-9);
    }

    #[test]
    fn misaligned_start_shortens_only_the_first_segment() {
        let start = at(0, 0) + TimeDelta::milliseconds(500);
        let visible = TimeRange::new(start, at(0, 30) + TimeDelta::milliseconds(500));
        let segments = seconds_tier(&visible, 300.0);

        // pps is 10; the leading block loses the 0.5 s offset.
        assert_eq!(segments[0].width, 9.5);
        for seg in &segments[1..] {
            assert_eq!(seg.width, 10.0);
        }
    }

    #[test]
    fn ten_minutes_at_six_hundred_px_uses_long_labels() {
        let visible = TimeRange::new(at(0, 0), Utc.with_ymd_and_hms(2024, 5, 1, 10, 10, 0).unwrap());
        let formats = TierFormats::default();
        let segments = generate_segments(
            &visible,
            600.0,
            TimeUnit::Minute,
            formats.formats(TimeUnit::Minute),
            &[],
            60.0,
        );

        assert_eq!(segments.len(), 10);
        for (i, seg) in segments.iter().enumerate() {
            // Exactly 60 px is not under the limit: long form.
            assert_eq!(seg.width, 60.0);
            assert_eq!(seg.label, alloc::format!("{:02}:00", i));
        }
    }

    #[test]
    fn widths_never_sum_past_the_budget() {
        let visible = TimeRange::new(at(0, 0), at(1, 13));
        let segments = seconds_tier(&visible, 547.0);
        let total: f64 = segments.iter().map(|s| s.width).sum();
        assert!(total <= 547.0 + 1e-9);
    }

    #[test]
    fn keys_strictly_decrease() {
        let visible = TimeRange::new(at(0, 0), at(0, 30));
        let segments = seconds_tier(&visible, 300.0);
        for pair in segments.windows(2) {
            assert!(pair[1].key < pair[0].key, "keys must strictly decrease");
        }
    }

    #[test]
    fn hour_unit_yields_nothing_to_render() {
        let visible = TimeRange::new(at(0, 0), at(5, 0));
        let formats = TierFormats::default();
        let segments = generate_segments(
            &visible,
            600.0,
            TimeUnit::Hour,
            formats.formats(TimeUnit::Hour),
            &[],
            60.0,
        );
        assert!(segments.is_empty());
    }

    #[test]
    fn zero_length_range_yields_empty_sequence() {
        let visible = TimeRange::new(at(0, 5), at(0, 5));
        assert!(seconds_tier(&visible, 300.0).is_empty());
    }

    #[test]
    fn range_shorter_than_one_unit_emits_one_partial_segment() {
        // A 30 s window at minute granularity: one block, clamped to the
        // full budget.
        let visible = TimeRange::new(at(0, 0), at(0, 30));
        let formats = TierFormats::default();
        let segments = generate_segments(
            &visible,
            300.0,
            TimeUnit::Minute,
            formats.formats(TimeUnit::Minute),
            &[],
            60.0,
        );
        assert_eq!(segments.len(), 1);
        assert_eq!(segments[0].width, 300.0);
    }

    #[test]
    fn selection_flags_follow_unit_floored_overlap() {
        let visible = TimeRange::new(at(0, 0), at(0, 30));

        // A selection from 10.4 s to 12.8 s touches seconds 10, 11, and 12.
        let selected = [TimeRange::new(
            at(0, 10) + TimeDelta::milliseconds(400),
            at(0, 12) + TimeDelta::milliseconds(800),
        )];
        let formats = TierFormats::default();
        let segments = generate_segments(
            &visible,
            300.0,
            TimeUnit::Second,
            formats.formats(TimeUnit::Second),
            &selected,
            60.0,
        );

        for (i, seg) in segments.iter().enumerate() {
            let expected = (10..=12).contains(&i);
            assert_eq!(seg.selected, expected, "second {i}");
        }
    }

    #[test]
    fn selection_flags_with_disjoint_and_touching_ranges() {
        let visible = TimeRange::new(at(0, 0), at(0, 30));
        let selected = [
            // Entirely before the window: no flags.
            TimeRange::new(at(0, 0) - TimeDelta::seconds(20), at(0, 0) - TimeDelta::seconds(10)),
            // Touching second 5 exactly at its boundary.
            TimeRange::new(at(0, 5), at(0, 5)),
        ];
        let formats = TierFormats::default();
        let segments = generate_segments(
            &visible,
            300.0,
            TimeUnit::Second,
            formats.formats(TimeUnit::Second),
            &selected,
            60.0,
        );

        for (i, seg) in segments.iter().enumerate() {
            assert_eq!(seg.selected, i == 5, "second {i}");
        }
    }

    #[test]
    fn cursor_key_prefers_a_wider_second_segment() {
        let seg = |width: f64, key: f64| Segment {
            label: alloc::string::String::new(),
            selected: false,
            width,
            key,
        };

        assert_eq!(cursor_segment_key(&[]), None);
        assert_eq!(cursor_segment_key(&[seg(10.0, 300.0)]), Some(300.0));
        // Equal widths keep the first.
        assert_eq!(
            cursor_segment_key(&[seg(10.0, 300.0), seg(10.0, 290.0)]),
            Some(300.0)
        );
        // A wider second segment wins, no matter what follows.
        assert_eq!(
            cursor_segment_key(&[seg(5.0, 300.0), seg(10.0, 295.0), seg(50.0, 285.0)]),
            Some(295.0)
        );
    }
}
