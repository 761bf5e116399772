// Copyright 2026 the Tidemark Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use chrono::{DateTime, TimeDelta, TimeZone};
use kurbo::Point;
use tidemark_scale::{TimeRange, TimeScale};

use crate::{ItemEdge, ItemId, LanePlan};

/// What a [`DragSession`] edits.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DragKind {
    /// Move the grabbed item along the time axis (and between rows).
    Move,
    /// Move the grabbed item's start edge.
    ResizeStart,
    /// Move the grabbed item's end edge.
    ResizeEnd,
    /// Sweep out a time span, independent of any item.
    SelectSpan,
}

/// What a finished [`DragSession`] produced.
#[derive(Clone, Debug)]
pub enum DragOutcome<Tz: TimeZone> {
    /// An item was moved or resized in place; the new span lives in the
    /// plan.
    Item(ItemId),
    /// A span was swept out.
    Span(TimeRange<Tz>),
}

/// One pointer-driven gesture: move, resize, or sweep a selection span.
///
/// A session captures the grabbed item's origin span and row at
/// [`DragSession::begin_move`] / [`DragSession::begin_resize`] time, and on
/// every [`DragSession::update`] recomputes the preview from the origin using
/// the **total** pixel offset since the drag started. Working from the total
/// offset rather than accumulating per-event deltas keeps the preview from
/// drifting when individual deltas round against the snap grid.
///
/// The pixel offset is snapped through [`TimeScale::snap_pixel_delta`]
/// before conversion, so previews land on the host's time grid.
#[derive(Clone, Debug)]
pub struct DragSession<Tz: TimeZone> {
    kind: DragKind,
    start_pos: Point,
    item: Option<ItemId>,
    origin_row: usize,
    origin_span: Option<TimeRange<Tz>>,
    anchor_time: Option<DateTime<Tz>>,
    span: Option<TimeRange<Tz>>,
}

impl<Tz: TimeZone> DragSession<Tz> {
    /// Begins moving `id` from pointer position `pos`.
    ///
    /// Returns `None` when the item does not exist.
    #[must_use]
    pub fn begin_move(pos: Point, id: ItemId, plan: &LanePlan<Tz>) -> Option<Self> {
        let item = plan.item(id)?;
        Some(Self {
            kind: DragKind::Move,
            start_pos: pos,
            item: Some(id),
            origin_row: item.row,
            origin_span: Some(item.span.clone()),
            anchor_time: None,
            span: None,
        })
    }

    /// Begins resizing `edge` of `id` from pointer position `pos`.
    ///
    /// Returns `None` when the item does not exist.
    #[must_use]
    pub fn begin_resize(pos: Point, id: ItemId, edge: ItemEdge, plan: &LanePlan<Tz>) -> Option<Self> {
        let item = plan.item(id)?;
        Some(Self {
            kind: match edge {
                ItemEdge::Start => DragKind::ResizeStart,
                ItemEdge::End => DragKind::ResizeEnd,
            },
            start_pos: pos,
            item: Some(id),
            origin_row: item.row,
            origin_span: Some(item.span.clone()),
            anchor_time: None,
            span: None,
        })
    }

    /// Begins sweeping a selection span anchored at the instant under `pos`.
    #[must_use]
    pub fn begin_select(pos: Point, scale: &TimeScale<Tz>) -> Self {
        Self {
            kind: DragKind::SelectSpan,
            start_pos: pos,
            item: None,
            origin_row: 0,
            origin_span: None,
            anchor_time: Some(scale.time_at_point(pos)),
            span: None,
        }
    }

    /// Returns what this session edits.
    #[must_use]
    pub fn kind(&self) -> DragKind {
        self.kind
    }

    /// Returns the grabbed item for item gestures.
    #[must_use]
    pub fn item(&self) -> Option<ItemId> {
        self.item
    }

    /// Returns the current swept span of a select gesture.
    #[must_use]
    pub fn selected_span(&self) -> Option<&TimeRange<Tz>> {
        self.span.as_ref()
    }

    /// Applies the pointer position `pos` to the session.
    ///
    /// `row` is the lane under the pointer and only affects [`DragKind::Move`];
    /// hosts own the pointer-to-row mapping. `snap_seconds` is the host's
    /// time grid (non-positive disables snapping). Item gestures write their
    /// preview into `plan`; select gestures update
    /// [`DragSession::selected_span`] and leave the plan untouched.
    pub fn update(
        &mut self,
        pos: Point,
        row: usize,
        scale: &TimeScale<Tz>,
        snap_seconds: i64,
        plan: &mut LanePlan<Tz>,
    ) {
        match self.kind {
            DragKind::Move => {
                let Some((id, origin)) = self.item.zip(self.origin_span.as_ref()) else {
                    return;
                };
                let delta = self.snapped_delta(pos, scale, snap_seconds);
                let shifted = origin
                    .start
                    .clone()
                    .checked_add_signed(delta)
                    .zip(origin.end.clone().checked_add_signed(delta));
                if let Some((start, end)) = shifted {
                    plan.set_item_span(id, TimeRange::new(start, end));
                }
                plan.set_item_row(id, row);
            }
            DragKind::ResizeStart => {
                let Some((id, origin)) = self.item.zip(self.origin_span.as_ref()) else {
                    return;
                };
                let delta = self.snapped_delta(pos, scale, snap_seconds);
                if let Some(at) = origin.start.clone().checked_add_signed(delta) {
                    plan.set_item_edge(id, ItemEdge::Start, at);
                }
            }
            DragKind::ResizeEnd => {
                let Some((id, origin)) = self.item.zip(self.origin_span.as_ref()) else {
                    return;
                };
                let delta = self.snapped_delta(pos, scale, snap_seconds);
                if let Some(at) = origin.end.clone().checked_add_signed(delta) {
                    plan.set_item_edge(id, ItemEdge::End, at);
                }
            }
            DragKind::SelectSpan => {
                let Some(anchor) = self.anchor_time.clone() else {
                    return;
                };
                let current = scale.time_at_point(pos);
                self.span = Some(TimeRange::between(anchor, current));
            }
        }
    }

    /// Restores the grabbed item's origin span and row, abandoning the
    /// gesture.
    pub fn cancel(self, plan: &mut LanePlan<Tz>) {
        if let Some((id, origin)) = self.item.zip(self.origin_span) {
            plan.set_item_span(id, origin);
            plan.set_item_row(id, self.origin_row);
        }
    }

    /// Completes the gesture and returns its outcome.
    ///
    /// Item gestures report the edited item (its final span already lives in
    /// the plan). A select gesture reports the swept span, or `None` when
    /// the pointer never moved.
    #[must_use]
    pub fn finish(self) -> Option<DragOutcome<Tz>> {
        match self.kind {
            DragKind::Move | DragKind::ResizeStart | DragKind::ResizeEnd => {
                self.item.map(DragOutcome::Item)
            }
            DragKind::SelectSpan => self.span.map(DragOutcome::Span),
        }
    }

    fn snapped_delta(&self, pos: Point, scale: &TimeScale<Tz>, snap_seconds: i64) -> TimeDelta {
        let pixel_delta = pos.x - self.start_pos.x;
        scale.duration_from_pixels(scale.snap_pixel_delta(pixel_delta, snap_seconds))
    }
}
