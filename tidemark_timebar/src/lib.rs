// Copyright 2026 the Tidemark Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=tidemark_timebar --heading-base-level=0

//! Tidemark Timebar: adaptive label segments for a horizontal time axis.
//!
//! This crate computes, per layout pass, the labeled blocks of a two-tier
//! timebar: a major (top) tier and a minor (bottom) tier, each rendered at a
//! time granularity chosen from the visible duration. The core concepts are:
//!
//! - [`TimeUnit`]: the granularity a tier renders at (second, minute, hour),
//!   with unit flooring and walk-step queries.
//! - [`Resolution`]: the pair of tier granularities, either guessed from the
//!   visible duration ([`Resolution::guess`]) or supplied by the caller.
//! - [`TimebarFormats`]: per-tier, per-unit label patterns in chrono strftime
//!   syntax, with short and long variants chosen from the pixel room a
//!   segment has.
//! - [`generate_segments`]: the walk producing an ordered sequence of
//!   [`Segment`]s covering the visible range, leading partial unit included.
//! - [`TimebarConfig::layout`]: the two-tier entry point producing a
//!   [`TimebarLayout`] plus the cursor-annotation placement.
//!
//! The crate does not render anything. Hosts call [`TimebarConfig::layout`]
//! during their own layout pass and draw each returned segment as a block of
//! `width` pixels with `label` inside, highlighted when `selected` is set.
//!
//! ## Minimal example
//!
//! ```rust
//! use chrono::{TimeZone, Utc};
//! use tidemark_scale::TimeRange;
//! use tidemark_timebar::TimebarConfig;
//!
//! let start = Utc.with_ymd_and_hms(2024, 5, 1, 10, 0, 0).unwrap();
//! let end = Utc.with_ymd_and_hms(2024, 5, 1, 10, 10, 0).unwrap();
//! let visible = TimeRange::new(start, end);
//!
//! let layout = TimebarConfig::default().layout(&visible, 600.0, &[]);
//!
//! // 10 minutes guess a minute-only resolution: no top tier, ten
//! // one-minute blocks of 60 px on the bottom tier.
//! assert!(layout.top.is_empty());
//! assert_eq!(layout.bottom.len(), 10);
//! assert_eq!(layout.bottom[0].width, 60.0);
//! assert_eq!(layout.bottom[0].label, "00:00");
//! ```
//!
//! ## Design notes
//!
//! - Segment generation is bounded by the number of whole units in the
//!   visible window. Hosts should bound the visible range before asking for
//!   second-level segments over hours of time.
//! - The walk advances the cursor by exactly one unit per segment and only
//!   shortens the first emitted block, so a window that starts mid-unit shows
//!   a narrow leading block and full-size blocks after it.
//! - A granularity with no walk step (currently [`TimeUnit::Hour`]) produces
//!   an empty sequence: "nothing to render", not an error.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod config;
mod formats;
mod resolution;
mod segments;
mod unit;

pub use config::{TimebarConfig, TimebarLayout};
pub use formats::{TierFormats, TimebarFormats, UnitFormats};
pub use resolution::Resolution;
pub use segments::{Segment, cursor_segment_key, generate_segments};
pub use unit::TimeUnit;
