// Copyright 2026 the Tidemark Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tour of the two-tier timebar: guessed resolutions, zooming across the
//! resolution boundary, selection highlighting, and the cursor annotation.
//!
//! Run:
//! - `cargo run -p tidemark_demos --example timebar_tour`

use chrono::{DurationRound, TimeDelta, TimeZone, Utc};
use tidemark_demos::render_tier;
use tidemark_scale::{TimeRange, TimeScale};
use tidemark_timebar::TimebarConfig;

const WIDTH_PX: f64 = 300.0;
const PX_PER_CHAR: f64 = 3.0;

fn print_window(config: &TimebarConfig, visible: &TimeRange<Utc>, selected: &[TimeRange<Utc>]) {
    let layout = config.layout(visible, WIDTH_PX, selected);
    println!(
        "visible {} .. {} ({} s)",
        visible.start.format("%H:%M:%S"),
        visible.end.format("%H:%M:%S"),
        visible.duration_seconds()
    );
    if layout.top.is_empty() {
        println!("  top    (hidden)");
    } else {
        println!("  top    {}", render_tier(&layout.top, PX_PER_CHAR, None));
    }
    println!("  bottom {}", render_tier(&layout.bottom, PX_PER_CHAR, None));
}

fn main() {
    let start = Utc.with_ymd_and_hms(2024, 5, 1, 10, 0, 0).unwrap();
    let config = TimebarConfig::default();

    // A 30 second window guesses minute-over-second; each zoom-out doubles
    // the duration, and crossing 100 s flips to the minute-only resolution
    // with progressively narrower (short-form) labels.
    println!("== zooming out from 30 s ==");
    let mut visible = TimeRange::new(start, start + TimeDelta::seconds(30));
    for _ in 0..4 {
        print_window(&config, &visible, &[]);
        visible = visible.scaled_about_start(2.0);
    }

    // Selected ranges highlight every block whose unit they touch.
    println!("\n== selection highlight ==");
    let visible = TimeRange::new(start, start + TimeDelta::seconds(30));
    let selected = [TimeRange::new(
        start + TimeDelta::seconds(8),
        start + TimeDelta::seconds(14),
    )];
    print_window(&config, &visible, &selected);

    // The cursor annotation goes to exactly one top-tier segment.
    println!("\n== cursor annotation ==");
    let scale = TimeScale::new(visible.clone(), WIDTH_PX);
    let cursor_time = scale.time_at_pixel(155.0);
    let layout = config.layout(&visible, WIDTH_PX, &[]);
    if let Some(key) = layout.cursor_key {
        let text = cursor_time.format("%M:%S").to_string();
        println!(
            "  top    {}",
            render_tier(&layout.top, PX_PER_CHAR, Some((key, &text)))
        );
    }

    // A live window anchored at the current minute, kept deterministic in
    // shape (not in labels) by flooring to the minute.
    println!("\n== now-anchored window ==");
    let now = Utc::now()
        .duration_trunc(TimeDelta::minutes(1))
        .expect("minute truncation is always representable");
    let visible = TimeRange::new(now, now + TimeDelta::seconds(90));
    print_window(&config, &visible, &[]);
}
