// Copyright 2026 the Tidemark Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::vec::Vec;

use bitflags::bitflags;
use chrono::TimeZone;

use crate::{ItemId, LanePlan};

bitflags! {
    /// Keyboard modifiers held during a click gesture.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
    pub struct Modifiers: u8 {
        /// Control (or command) key.
        const CTRL = 1;
        /// Shift key.
        const SHIFT = 1 << 1;
        /// Alt (or option) key.
        const ALT = 1 << 2;
    }
}

/// Bookkeeping of the selected items in a [`LanePlan`].
///
/// Tracks the unique set of selected [`ItemId`]s plus:
/// - a **primary** item, the most recently interacted-with one;
/// - an **anchor** item, the pivot for shift-click range extension;
/// - a monotonically increasing **revision** that bumps only when a mutation
///   actually changes contents, primary, or anchor.
///
/// The container does not consult the plan; ids of removed items linger
/// until the caller removes them. Queries that need live items (such as
/// [`LanePlan::spans_of`]) skip stale ids.
#[derive(Clone, Debug, Default)]
pub struct ItemSelection {
    items: Vec<ItemId>,
    primary: Option<usize>,
    anchor: Option<usize>,
    revision: u64,
}

impl ItemSelection {
    /// Creates an empty selection.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            items: Vec::new(),
            primary: None,
            anchor: None,
            revision: 0,
        }
    }

    /// Returns `true` if nothing is selected.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns the number of selected items.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns the selected ids in their internal order.
    #[must_use]
    pub fn items(&self) -> &[ItemId] {
        &self.items
    }

    /// Returns an iterator over the selected ids.
    pub fn iter(&self) -> impl Iterator<Item = ItemId> + '_ {
        self.items.iter().copied()
    }

    /// Returns `true` if `id` is selected.
    #[must_use]
    pub fn contains(&self, id: ItemId) -> bool {
        self.position_of(id).is_some()
    }

    /// Returns the primary item, if any.
    #[must_use]
    pub fn primary(&self) -> Option<ItemId> {
        self.primary.map(|idx| self.items[idx])
    }

    /// Returns the anchor item, if any.
    #[must_use]
    pub fn anchor(&self) -> Option<ItemId> {
        self.anchor.map(|idx| self.items[idx])
    }

    /// Returns the revision counter.
    ///
    /// Useful as a cheap "did anything change?" marker; no-op mutations
    /// leave it untouched.
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Empties the selection and clears primary/anchor.
    pub fn clear(&mut self) {
        if self.items.is_empty() && self.primary.is_none() && self.anchor.is_none() {
            return;
        }
        self.items.clear();
        self.primary = None;
        self.anchor = None;
        self.bump_revision();
    }

    /// Replaces the selection with a single item, setting both primary and
    /// anchor. The usual mapping for a plain click.
    pub fn select_only(&mut self, id: ItemId) {
        if self.items.len() == 1
            && self.items.first() == Some(&id)
            && self.primary == Some(0)
            && self.anchor == Some(0)
        {
            return;
        }
        self.items.clear();
        self.items.push(id);
        self.primary = Some(0);
        self.anchor = Some(0);
        self.bump_revision();
    }

    /// Adds `id` if not present; it becomes the primary item either way.
    /// The anchor is left unchanged.
    pub fn add(&mut self, id: ItemId) {
        if let Some(idx) = self.position_of(id) {
            if self.primary != Some(idx) {
                self.primary = Some(idx);
                self.bump_revision();
            }
        } else {
            self.items.push(id);
            self.primary = Some(self.items.len() - 1);
            self.bump_revision();
        }
    }

    /// Removes `id` if present, clearing primary/anchor roles it held.
    pub fn remove(&mut self, id: ItemId) {
        if let Some(idx) = self.position_of(id) {
            self.remove_at(idx);
            self.bump_revision();
        }
    }

    /// Toggles membership of `id`. A newly added item becomes the primary.
    /// The usual mapping for a ctrl-click.
    pub fn toggle(&mut self, id: ItemId) {
        if let Some(idx) = self.position_of(id) {
            self.remove_at(idx);
            self.bump_revision();
        } else {
            self.items.push(id);
            self.primary = Some(self.items.len() - 1);
            self.bump_revision();
        }
    }

    /// Extends the selection with a batch of ids.
    ///
    /// Existing ids stay; duplicates in the input are ignored. The primary
    /// becomes the last newly added id, the anchor is left unchanged.
    pub fn extend_with<I>(&mut self, ids: I)
    where
        I: IntoIterator<Item = ItemId>,
    {
        let mut last_added = None;
        for id in ids {
            if self.position_of(id).is_none() {
                self.items.push(id);
                last_added = Some(self.items.len() - 1);
            }
        }
        if let Some(idx) = last_added {
            self.primary = Some(idx);
            self.bump_revision();
        }
    }

    /// Replaces the selection with a batch of ids.
    ///
    /// Duplicates in the input are ignored (by scanning the accumulated
    /// output, so quadratic in the batch size — see
    /// [`ItemSelection::replace_with_hashed`] for large batches). The
    /// previous anchor survives when its id is still present; otherwise the
    /// first id becomes both primary and anchor.
    pub fn replace_with<I>(&mut self, ids: I)
    where
        I: IntoIterator<Item = ItemId>,
    {
        let mut new_items: Vec<ItemId> = Vec::new();
        for id in ids {
            if !new_items.contains(&id) {
                new_items.push(id);
            }
        }
        self.replace_with_items(new_items);
    }

    fn replace_with_items(&mut self, new_items: Vec<ItemId>) {
        let new_primary = if new_items.is_empty() { None } else { Some(0) };

        // Keep the previous anchor when its id survives into the new set.
        let mut new_anchor = None;
        if let Some(old_idx) = self.anchor
            && let Some(old_id) = self.items.get(old_idx)
        {
            new_anchor = new_items.iter().position(|id| id == old_id);
        }
        if new_anchor.is_none() {
            new_anchor = new_primary;
        }

        if new_items == self.items && self.primary == new_primary && self.anchor == new_anchor {
            return;
        }

        self.items = new_items;
        self.primary = new_primary;
        self.anchor = new_anchor;
        self.bump_revision();
    }

    fn position_of(&self, id: ItemId) -> Option<usize> {
        self.items.iter().position(|&k| k == id)
    }

    fn remove_at(&mut self, idx: usize) {
        self.items.remove(idx);

        let update_index = |slot: &mut Option<usize>| {
            if let Some(current) = *slot {
                if current == idx {
                    *slot = None;
                } else if current > idx {
                    *slot = Some(current - 1);
                }
            }
        };
        update_index(&mut self.primary);
        update_index(&mut self.anchor);

        if self.items.is_empty() {
            self.primary = None;
            self.anchor = None;
        }
    }

    fn bump_revision(&mut self) {
        self.revision = self.revision.wrapping_add(1);
    }
}

#[cfg(feature = "hashbrown")]
impl ItemSelection {
    /// Replaces the selection with a batch of ids, de-duplicating with
    /// hashing.
    ///
    /// Linear-time alternative to [`ItemSelection::replace_with`] for large
    /// batches. First-occurrence order is preserved, since primary and
    /// anchor default to the first id.
    pub fn replace_with_hashed<I>(&mut self, ids: I)
    where
        I: IntoIterator<Item = ItemId>,
    {
        use hashbrown::HashSet;

        let iter = ids.into_iter();
        let (lower, upper) = iter.size_hint();
        let cap = upper.unwrap_or(lower);

        let mut new_items: Vec<ItemId> = Vec::with_capacity(cap);
        let mut seen: HashSet<ItemId> = HashSet::with_capacity(cap);
        for id in iter {
            if seen.insert(id) {
                new_items.push(id);
            }
        }
        self.replace_with_items(new_items);
    }
}

/// Applies the standard click gesture mapping to a selection.
///
/// - Plain click: replace the selection with the clicked item.
/// - Ctrl-click: toggle the clicked item, keeping the anchor stable.
/// - Shift-click: replace the selection with every item whose span starts
///   between the anchor item and the clicked one (see
///   [`LanePlan::range_between`]); the anchor falls back to the clicked item
///   when none is set.
///
/// Alt does not change selection semantics; hosts typically use it to vary
/// the drag gesture instead.
pub fn apply_click<Tz: TimeZone>(
    plan: &LanePlan<Tz>,
    selection: &mut ItemSelection,
    clicked: ItemId,
    modifiers: Modifiers,
) {
    if modifiers.contains(Modifiers::SHIFT) {
        let anchor = selection.anchor().unwrap_or(clicked);
        selection.replace_with(plan.range_between(anchor, clicked));
    } else if modifiers.contains(Modifiers::CTRL) {
        selection.toggle(clicked);
    } else {
        selection.select_only(clicked);
    }
}
