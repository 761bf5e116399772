// Copyright 2026 the Tidemark Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=tidemark_scale --heading-base-level=0

//! Tidemark Scale: pixel/calendar-time conversion primitives for timeline views.
//!
//! This crate provides small, headless value types that map between device
//! pixels along a horizontal timeline axis and calendar instants. It focuses
//! on:
//! - A visible-range value type ([`TimeRange`]) with duration and containment
//!   queries.
//! - Per-layout-pass conversion between pixel offsets and instants
//!   ([`TimeScale`]).
//! - Snapping instants and pixel deltas to a fixed time grid
//!   ([`snap_to_grid`], [`TimeScale::snap_pixel_delta`]).
//!
//! It does **not** own any widget, scene tree, or rendering backend. Callers
//! are expected to:
//! - Maintain their own visible range and pixel width, and build a fresh
//!   [`TimeScale`] per layout pass.
//! - Wire pointer events into conversions at a higher layer (for example via
//!   [`TimeScale::time_at_point`]).
//! - Draw whatever the conversions describe.
//!
//! ## Minimal example
//!
//! ```rust
//! use chrono::{TimeZone, Utc};
//! use tidemark_scale::{TimeRange, TimeScale};
//!
//! // A 30 second window rendered into 300 pixels.
//! let start = Utc.with_ymd_and_hms(2024, 5, 1, 10, 0, 0).unwrap();
//! let end = Utc.with_ymd_and_hms(2024, 5, 1, 10, 0, 30).unwrap();
//! let scale = TimeScale::new(TimeRange::new(start, end), 300.0);
//!
//! assert_eq!(scale.pixels_per_second(), 10.0);
//! assert_eq!(scale.time_at_pixel(155.0), start + chrono::TimeDelta::seconds(15));
//! assert_eq!(scale.pixel_at_time(&(start + chrono::TimeDelta::seconds(15))), 150.0);
//! ```
//!
//! ## Design notes
//!
//! - Conversions floor to whole seconds: `time_at_pixel(pixel_at_time(t))`
//!   recovers `t` truncated to its second. The sub-second loss is intended,
//!   not a defect; timeline hosts place items on whole-second boundaries.
//! - Every conversion self-guards against a zero-length visible range and
//!   returns a documented sentinel (zero, or the range start) instead of a
//!   non-finite value.
//! - `start <= end` is a caller contract. It is `debug_assert!`ed in
//!   [`TimeRange::new`] and not validated in release builds.
//!
//! This crate is `no_std`.

#![no_std]

mod range;
mod scale;
mod snap;

pub use range::TimeRange;
pub use scale::TimeScale;
pub use snap::snap_to_grid;
