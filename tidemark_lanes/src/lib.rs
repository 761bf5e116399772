// Copyright 2026 the Tidemark Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=tidemark_lanes --heading-base-level=0

//! Tidemark Lanes: the interaction model of a timeline editor, headless.
//!
//! This crate tracks items arranged in horizontal rows ("lanes") over a
//! shared time axis, and the gestures that edit them. The core concepts are:
//!
//! - [`LanePlan`]: the items, each with a row index and a time span, with
//!   hit-test, move, resize, and range queries.
//! - [`ItemSelection`]: the bookkeeping of selected items — a unique set of
//!   [`ItemId`]s plus a primary item, a range anchor, and a revision counter.
//! - [`apply_click`]: the standard mapping from click modifiers to selection
//!   changes (click replaces, ctrl toggles, shift extends between anchors).
//! - [`DragSession`]: a pointer-driven move / resize / select-span gesture,
//!   recomputed from the total offset since the drag began and snapped
//!   through [`tidemark_scale::TimeScale`].
//!
//! The crate does not know about widgets or row geometry. Hosts translate
//! pointer positions into rows themselves and pass the target row into
//! [`DragSession::update`]; the crate never guesses vertical layout.
//!
//! ## Minimal example
//!
//! ```rust
//! use chrono::{TimeDelta, TimeZone, Utc};
//! use tidemark_lanes::{ItemSelection, LanePlan, Modifiers, apply_click};
//! use tidemark_scale::TimeRange;
//!
//! let start = Utc.with_ymd_and_hms(2024, 5, 1, 10, 0, 0).unwrap();
//! let mut plan = LanePlan::new(3);
//! let a = plan.insert(0, TimeRange::new(start, start + TimeDelta::seconds(10)));
//! let b = plan.insert(1, TimeRange::new(start + TimeDelta::seconds(5), start + TimeDelta::seconds(20)));
//!
//! let mut selection = ItemSelection::new();
//! apply_click(&plan, &mut selection, a, Modifiers::empty());
//! assert_eq!(selection.primary(), Some(a));
//!
//! // Ctrl-click adds the second item.
//! apply_click(&plan, &mut selection, b, Modifiers::CTRL);
//! assert_eq!(selection.len(), 2);
//!
//! // The selected spans feed the timebar's highlight ranges.
//! let highlights = plan.spans_of(&selection);
//! assert_eq!(highlights.len(), 2);
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod drag;
mod plan;
mod selection;

pub use drag::{DragKind, DragOutcome, DragSession};
pub use plan::{Item, ItemEdge, ItemId, LanePlan};
pub use selection::{ItemSelection, Modifiers, apply_click};
