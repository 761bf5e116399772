// Copyright 2026 the Tidemark Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::vec::Vec;
use core::fmt::Display;

use chrono::TimeZone;
use tidemark_scale::TimeRange;

use crate::{Resolution, Segment, TimebarFormats, cursor_segment_key, generate_segments};

/// Caller-owned timebar tuning parameters.
///
/// All fields have working defaults; hosts typically keep one of these
/// alongside their visible-range state and call [`TimebarConfig::layout`]
/// once per layout pass.
#[derive(Clone, Debug)]
pub struct TimebarConfig {
    /// Label patterns for both tiers.
    pub formats: TimebarFormats,
    /// Explicit tier granularities. `None` re-guesses from the visible
    /// duration on every layout call; `Some` skips the heuristic entirely.
    pub resolution: Option<Resolution>,
    /// Pixels reserved at the left edge (for a row-title gutter), excluded
    /// from the usable width.
    pub left_offset: f64,
    /// Blocks narrower than this many pixels use the short label pattern.
    pub short_label_limit: f64,
}

impl Default for TimebarConfig {
    fn default() -> Self {
        Self {
            formats: TimebarFormats::default(),
            resolution: None,
            left_offset: 0.0,
            short_label_limit: 60.0,
        }
    }
}

/// The two computed tiers of a timebar, plus cursor placement.
#[derive(Clone, Debug)]
pub struct TimebarLayout {
    /// Top (major) tier segments. Empty when the major tier is hidden.
    pub top: Vec<Segment>,
    /// Bottom (minor) tier segments.
    pub bottom: Vec<Segment>,
    /// Key of the top-tier segment that carries the cursor annotation, if
    /// any (see [`cursor_segment_key`]).
    pub cursor_key: Option<f64>,
}

impl TimebarConfig {
    /// Computes both tiers for one layout pass.
    ///
    /// The usable width is `width_px` minus [`TimebarConfig::left_offset`],
    /// clamped at zero. The resolution is the configured override, or
    /// [`Resolution::guess`] on the visible duration when none is set.
    #[must_use]
    pub fn layout<Tz: TimeZone>(
        &self,
        visible: &TimeRange<Tz>,
        width_px: f64,
        selected: &[TimeRange<Tz>],
    ) -> TimebarLayout
    where
        Tz::Offset: Display,
    {
        let width = (width_px - self.left_offset).max(0.0);
        let resolution = self
            .resolution
            .unwrap_or_else(|| Resolution::guess(visible));

        let top = match resolution.major {
            Some(unit) => generate_segments(
                visible,
                width,
                unit,
                self.formats.major.formats(unit),
                selected,
                self.short_label_limit,
            ),
            None => Vec::new(),
        };
        let bottom = generate_segments(
            visible,
            width,
            resolution.minor,
            self.formats.minor.formats(resolution.minor),
            selected,
            self.short_label_limit,
        );
        let cursor_key = cursor_segment_key(&top);

        TimebarLayout {
            top,
            bottom,
            cursor_key,
        }
    }
}
