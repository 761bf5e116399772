// Copyright 2026 the Tidemark Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shared stdout rendering helpers for the Tidemark demo binaries.
//!
//! The demos have no GUI stack; they draw timebar tiers and lane rows as
//! fixed-width ASCII cells, one character per `pixels_per_char` pixels.
//! Run them with:
//! - `cargo run -p tidemark_demos --example timebar_tour`
//! - `cargo run -p tidemark_demos --example lane_editing`

use chrono::Utc;
use tidemark_lanes::{ItemSelection, LanePlan};
use tidemark_scale::{TimeRange, TimeScale};
use tidemark_timebar::Segment;

/// Renders one timebar tier as a row of `|`-separated cells.
///
/// Each segment occupies `width / pixels_per_char` characters (at least one).
/// Selected segments are filled with `#`. When `cursor` is given, its text is
/// appended to the segment whose key matches, the way a timebar host appends
/// the cursor time to one top-tier block.
pub fn render_tier(
    segments: &[Segment],
    pixels_per_char: f64,
    cursor: Option<(f64, &str)>,
) -> String {
    let mut out = String::new();
    for seg in segments {
        #[expect(
            clippy::cast_possible_truncation,
            reason = "cell counts are tiny; rounded and clamped to at least one"
        )]
        let cells = ((seg.width / pixels_per_char).round().max(1.0)) as usize;
        let mut label = seg.label.clone();
        if let Some((key, text)) = cursor
            && seg.key == key
        {
            label.push_str(" [");
            label.push_str(text);
            label.push(']');
        }
        let fill = if seg.selected { '#' } else { ' ' };

        out.push('|');
        let mut written = 0;
        for ch in label.chars().take(cells.saturating_sub(1)) {
            out.push(ch);
            written += 1;
        }
        for _ in written..cells.saturating_sub(1) {
            out.push(fill);
        }
    }
    out.push('|');
    out
}

/// Renders the lanes of a plan, one text row per lane.
///
/// Every character column samples the instant at its center: `.` for empty
/// track, `=` for an item, `#` for a selected item. The time axis matches
/// whatever `scale` the timebar tiers above are drawn with.
pub fn render_lanes(
    plan: &LanePlan<Utc>,
    selection: &ItemSelection,
    scale: &TimeScale<Utc>,
    pixels_per_char: f64,
) -> String {
    #[expect(
        clippy::cast_possible_truncation,
        reason = "column counts are tiny; rounded and clamped to at least one"
    )]
    let columns = ((scale.width_px() / pixels_per_char).round().max(1.0)) as usize;
    let mut out = String::new();
    for row in 0..plan.rows() {
        out.push_str(&format!("row {row} "));
        for col in 0..columns {
            let t = scale.time_at_pixel((col as f64 + 0.5) * pixels_per_char);
            match plan.hit_test(row, &t) {
                Some(id) if selection.contains(id) => out.push('#'),
                Some(_) => out.push('='),
                None => out.push('.'),
            }
        }
        out.push('\n');
    }
    out
}

/// Renders a swept time span as a `~` band under the lane rows.
pub fn render_span(span: &TimeRange<Utc>, scale: &TimeScale<Utc>, pixels_per_char: f64) -> String {
    #[expect(
        clippy::cast_possible_truncation,
        reason = "column counts are tiny; rounded and clamped to at least one"
    )]
    let columns = ((scale.width_px() / pixels_per_char).round().max(1.0)) as usize;
    let mut out = String::from("sweep ");
    for col in 0..columns {
        let t = scale.time_at_pixel((col as f64 + 0.5) * pixels_per_char);
        out.push(if span.contains(&t) { '~' } else { ' ' });
    }
    out
}
