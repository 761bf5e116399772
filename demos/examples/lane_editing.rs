// Copyright 2026 the Tidemark Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Editing items in lanes: click/ctrl/shift selection, a snapped move drag,
//! a clamped resize drag, and a select-span sweep feeding the timebar
//! highlight.
//!
//! Run:
//! - `cargo run -p tidemark_demos --example lane_editing`

use chrono::{TimeDelta, TimeZone, Utc};
use kurbo::Point;
use tidemark_demos::{render_lanes, render_span, render_tier};
use tidemark_lanes::{
    DragOutcome, DragSession, ItemEdge, ItemSelection, LanePlan, Modifiers, apply_click,
};
use tidemark_scale::{TimeRange, TimeScale};
use tidemark_timebar::TimebarConfig;

const WIDTH_PX: f64 = 600.0;
const PX_PER_CHAR: f64 = 10.0;
const SNAP_SECONDS: i64 = 5;

fn print_state(
    title: &str,
    plan: &LanePlan<Utc>,
    selection: &ItemSelection,
    scale: &TimeScale<Utc>,
) {
    println!("== {title} ==");
    print!("{}", render_lanes(plan, selection, scale, PX_PER_CHAR));
    let layout = TimebarConfig::default().layout(scale.visible(), WIDTH_PX, &plan.spans_of(selection));
    println!("  bar {}\n", render_tier(&layout.bottom, PX_PER_CHAR, None));
}

fn main() {
    let start = Utc.with_ymd_and_hms(2024, 5, 1, 10, 0, 0).unwrap();
    let at = |secs: i64| start + TimeDelta::seconds(secs);

    // A one-minute window at 10 px per second.
    let visible = TimeRange::new(at(0), at(60));
    let scale = TimeScale::new(visible, WIDTH_PX);

    let mut plan = LanePlan::new(3);
    let eeg = plan.insert(0, TimeRange::new(at(2), at(12)));
    let emotion = plan.insert(1, TimeRange::new(at(15), at(30)));
    let focus = plan.insert(2, TimeRange::new(at(35), at(50)));
    let mut selection = ItemSelection::new();

    print_state("initial", &plan, &selection, &scale);

    // Click, ctrl-click, shift-click.
    apply_click(&plan, &mut selection, eeg, Modifiers::empty());
    print_state("click first item", &plan, &selection, &scale);

    apply_click(&plan, &mut selection, focus, Modifiers::CTRL);
    print_state("ctrl-click third item", &plan, &selection, &scale);

    apply_click(&plan, &mut selection, eeg, Modifiers::empty());
    apply_click(&plan, &mut selection, focus, Modifiers::SHIFT);
    print_state("shift-click selects the start range", &plan, &selection, &scale);

    // A move drag with 5 s snapping: 37 px of pointer travel snaps to one
    // 50 px grid step, and the item changes lanes under the pointer.
    let mut drag = DragSession::begin_move(Point::new(70.0, 0.0), eeg, &plan)
        .expect("item exists");
    drag.update(Point::new(107.0, 40.0), 1, &scale, SNAP_SECONDS, &mut plan);
    match drag.finish() {
        Some(DragOutcome::Item(id)) => {
            let item = plan.item(id).expect("item exists");
            println!(
                "moved item to row {} at {}",
                item.row,
                item.span.start.format("%M:%S")
            );
        }
        _ => unreachable!("move drags always report their item"),
    }
    print_state("after snapped move", &plan, &selection, &scale);

    // A resize drag pulled far past the start edge clamps to zero length,
    // then lands where the pointer says.
    let mut drag = DragSession::begin_resize(Point::new(300.0, 0.0), emotion, ItemEdge::End, &plan)
        .expect("item exists");
    drag.update(Point::new(50.0, 0.0), 1, &scale, 0, &mut plan);
    drag.update(Point::new(400.0, 0.0), 1, &scale, 0, &mut plan);
    let _ = drag.finish();
    print_state("after resize", &plan, &selection, &scale);

    // A select-span sweep (right to left) normalizes its range and feeds
    // the timebar highlight directly.
    let mut drag = DragSession::begin_select(Point::new(450.0, 0.0), &scale);
    drag.update(Point::new(250.0, 0.0), 0, &scale, 0, &mut plan);
    if let Some(DragOutcome::Span(span)) = drag.finish() {
        println!(
            "swept {} .. {}",
            span.start.format("%M:%S"),
            span.end.format("%M:%S")
        );
        println!("{}", render_span(&span, &scale, PX_PER_CHAR));
        let layout = TimebarConfig::default().layout(scale.visible(), WIDTH_PX, &[span]);
        println!("  bar {}", render_tier(&layout.bottom, PX_PER_CHAR, None));
    }
}
