// Copyright 2026 the Tidemark Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::vec::Vec;

use chrono::{DateTime, TimeDelta, TimeZone};
use tidemark_scale::TimeRange;

use crate::ItemSelection;

/// Opaque key of one item in a [`LanePlan`].
///
/// Ids are allocated by the plan and never reused within one plan instance.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ItemId(u64);

/// Which end of an item's span a resize gesture moves.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ItemEdge {
    /// The left (earlier) edge.
    Start,
    /// The right (later) edge.
    End,
}

/// One item on the timeline: a time span placed in a row.
#[derive(Clone, Debug)]
pub struct Item<Tz: TimeZone> {
    /// The item's plan-allocated key.
    pub id: ItemId,
    /// The row the item sits in.
    pub row: usize,
    /// The item's span on the time axis.
    pub span: TimeRange<Tz>,
}

/// Items arranged in a fixed number of rows over a shared time axis.
///
/// The plan owns item placement only; row heights, item appearance, and
/// pointer-to-row mapping stay with the host. Items are kept in insertion
/// order, and hit tests treat later insertions as being on top.
#[derive(Clone, Debug)]
pub struct LanePlan<Tz: TimeZone> {
    rows: usize,
    items: Vec<Item<Tz>>,
    next_id: u64,
}

impl<Tz: TimeZone> LanePlan<Tz> {
    /// Creates an empty plan with `rows` lanes (at least one).
    #[must_use]
    pub fn new(rows: usize) -> Self {
        Self {
            rows: rows.max(1),
            items: Vec::new(),
            next_id: 0,
        }
    }

    /// Returns the number of lanes.
    #[must_use]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Returns all items in insertion order.
    #[must_use]
    pub fn items(&self) -> &[Item<Tz>] {
        &self.items
    }

    /// Returns the item with `id`, if it exists.
    #[must_use]
    pub fn item(&self, id: ItemId) -> Option<&Item<Tz>> {
        self.items.iter().find(|item| item.id == id)
    }

    /// Returns the items in `row`, in insertion order.
    pub fn row_items(&self, row: usize) -> impl Iterator<Item = &Item<Tz>> {
        self.items.iter().filter(move |item| item.row == row)
    }

    /// Inserts an item and returns its id. Out-of-range rows clamp to the
    /// last lane.
    pub fn insert(&mut self, row: usize, span: TimeRange<Tz>) -> ItemId {
        let id = ItemId(self.next_id);
        self.next_id += 1;
        self.items.push(Item {
            id,
            row: row.min(self.rows - 1),
            span,
        });
        id
    }

    /// Removes and returns the item with `id`, if it exists.
    pub fn remove(&mut self, id: ItemId) -> Option<Item<Tz>> {
        let idx = self.items.iter().position(|item| item.id == id)?;
        Some(self.items.remove(idx))
    }

    /// Returns the topmost item in `row` whose span contains `t`.
    ///
    /// Spans are closed intervals, so an instant exactly on an edge hits.
    /// When items overlap, the most recently inserted one wins.
    #[must_use]
    pub fn hit_test(&self, row: usize, t: &DateTime<Tz>) -> Option<ItemId> {
        self.items
            .iter()
            .rev()
            .find(|item| item.row == row && item.span.contains(t))
            .map(|item| item.id)
    }

    /// Shifts an item's span by `delta`, keeping its length.
    ///
    /// Returns `false` when the item does not exist or either endpoint would
    /// overflow the calendar; the item is left unchanged in that case.
    pub fn shift_item(&mut self, id: ItemId, delta: TimeDelta) -> bool {
        let Some(item) = self.items.iter_mut().find(|item| item.id == id) else {
            return false;
        };
        let shifted = item
            .span
            .start
            .clone()
            .checked_add_signed(delta)
            .zip(item.span.end.clone().checked_add_signed(delta));
        match shifted {
            Some((start, end)) => {
                item.span = TimeRange::new(start, end);
                true
            }
            None => false,
        }
    }

    /// Moves one edge of an item's span to `at`.
    ///
    /// The moved edge clamps at the opposite edge, so a resize can shrink an
    /// item to zero length but never invert it. Returns `false` when the
    /// item does not exist.
    pub fn set_item_edge(&mut self, id: ItemId, edge: ItemEdge, at: DateTime<Tz>) -> bool {
        let Some(item) = self.items.iter_mut().find(|item| item.id == id) else {
            return false;
        };
        match edge {
            ItemEdge::Start => {
                let start = if at > item.span.end {
                    item.span.end.clone()
                } else {
                    at
                };
                item.span = TimeRange::new(start, item.span.end.clone());
            }
            ItemEdge::End => {
                let end = if at < item.span.start {
                    item.span.start.clone()
                } else {
                    at
                };
                item.span = TimeRange::new(item.span.start.clone(), end);
            }
        }
        true
    }

    /// Replaces an item's span wholesale. Returns `false` when the item does
    /// not exist.
    pub fn set_item_span(&mut self, id: ItemId, span: TimeRange<Tz>) -> bool {
        let Some(item) = self.items.iter_mut().find(|item| item.id == id) else {
            return false;
        };
        item.span = span;
        true
    }

    /// Moves an item to `row`, clamped to the last lane. Returns `false`
    /// when the item does not exist.
    pub fn set_item_row(&mut self, id: ItemId, row: usize) -> bool {
        let Some(item) = self.items.iter_mut().find(|item| item.id == id) else {
            return false;
        };
        item.row = row.min(self.rows - 1);
        true
    }

    /// Returns every item whose span starts between the starts of `a` and
    /// `b` (inclusive, either order), sorted by span start.
    ///
    /// This is the shift-click range policy: the range runs over the time
    /// axis across all rows, not within one lane. Unknown anchors produce an
    /// empty result.
    #[must_use]
    pub fn range_between(&self, a: ItemId, b: ItemId) -> Vec<ItemId> {
        let (Some(a), Some(b)) = (self.item(a), self.item(b)) else {
            return Vec::new();
        };
        let (lo, hi) = if a.span.start <= b.span.start {
            (a.span.start.clone(), b.span.start.clone())
        } else {
            (b.span.start.clone(), a.span.start.clone())
        };

        let mut hits: Vec<(DateTime<Tz>, ItemId)> = self
            .items
            .iter()
            .filter(|item| lo <= item.span.start && item.span.start <= hi)
            .map(|item| (item.span.start.clone(), item.id))
            .collect();
        hits.sort_by(|(a, _), (b, _)| a.cmp(b));
        hits.into_iter().map(|(_, id)| id).collect()
    }

    /// Returns the spans of all selected items that still exist, in the
    /// selection's order.
    ///
    /// These are the highlight ranges a timebar layout takes as its selected
    /// set.
    #[must_use]
    pub fn spans_of(&self, selection: &ItemSelection) -> Vec<TimeRange<Tz>> {
        selection
            .iter()
            .filter_map(|id| self.item(id).map(|item| item.span.clone()))
            .collect()
    }
}
