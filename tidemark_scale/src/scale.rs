// Copyright 2026 the Tidemark Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use chrono::{DateTime, TimeDelta, TimeZone};
use kurbo::Point;

use crate::TimeRange;

/// Per-layout-pass conversion between pixel offsets and calendar instants.
///
/// A `TimeScale` pairs the visible [`TimeRange`] with the pixel width it is
/// rendered into. It is a value object: build a fresh one whenever the
/// visible range or the width changes, and derive every conversion from it.
///
/// All conversions self-guard against a zero-length visible range (where
/// pixels-per-second would be non-finite) and return a documented sentinel
/// instead: zero for widths and durations, the range start for instants.
#[derive(Clone, Debug)]
pub struct TimeScale<Tz: TimeZone> {
    visible: TimeRange<Tz>,
    width_px: f64,
}

impl<Tz: TimeZone> TimeScale<Tz> {
    /// Creates a scale over the visible range rendered into `width_px` pixels.
    #[must_use]
    pub fn new(visible: TimeRange<Tz>, width_px: f64) -> Self {
        Self { visible, width_px }
    }

    /// Returns the visible range.
    #[must_use]
    pub fn visible(&self) -> &TimeRange<Tz> {
        &self.visible
    }

    /// Returns the pixel width of the rendered range.
    #[must_use]
    pub fn width_px(&self) -> f64 {
        self.width_px
    }

    /// Returns how many pixels one second of visible time occupies.
    ///
    /// Returns `0.0` when the visible range is shorter than one whole second,
    /// rather than a non-finite value.
    #[must_use]
    pub fn pixels_per_second(&self) -> f64 {
        let secs = self.visible.duration_seconds();
        if secs == 0 {
            return 0.0;
        }
        self.width_px / secs as f64
    }

    /// Returns the instant under a pixel offset from the left edge.
    ///
    /// The offset is floored to whole seconds; sub-second precision is not
    /// preserved. Returns the range start for a degenerate scale or a
    /// non-finite offset.
    #[must_use]
    pub fn time_at_pixel(&self, pixel_offset: f64) -> DateTime<Tz> {
        let pps = self.pixels_per_second();
        if pps <= 0.0 || !pixel_offset.is_finite() {
            return self.visible.start.clone();
        }
        #[expect(
            clippy::cast_possible_truncation,
            reason = "floored finite value; saturation at i64 bounds is acceptable"
        )]
        let secs = (pixel_offset / pps).floor() as i64;
        TimeDelta::try_seconds(secs)
            .and_then(|d| self.visible.start.clone().checked_add_signed(d))
            .unwrap_or_else(|| self.visible.start.clone())
    }

    /// Convenience conversion from a `Point`, using its X coordinate.
    ///
    /// This helper ignores the point's Y coordinate and uses only `pt.x`. It
    /// is intended for timelines where the X axis carries the time dimension.
    #[must_use]
    pub fn time_at_point(&self, pt: Point) -> DateTime<Tz> {
        self.time_at_pixel(pt.x)
    }

    /// Returns the pixel offset of an instant from the left edge.
    ///
    /// The instant's distance from the range start is truncated to whole
    /// seconds before scaling, so this is the exact inverse of
    /// [`TimeScale::time_at_pixel`] up to that truncation. The lossy
    /// round-trip at sub-pixel/sub-second boundaries is intended. Returns
    /// `0.0` for a degenerate scale.
    #[must_use]
    pub fn pixel_at_time(&self, t: &DateTime<Tz>) -> f64 {
        let secs = (t.clone() - self.visible.start.clone()).num_seconds();
        secs as f64 * self.pixels_per_second()
    }

    /// Returns the span of visible time covered by a pixel distance.
    ///
    /// The result carries millisecond precision. Returns a zero delta for a
    /// degenerate scale or a non-finite pixel distance.
    #[must_use]
    pub fn duration_from_pixels(&self, pixels: f64) -> TimeDelta {
        let pps = self.pixels_per_second();
        if pps <= 0.0 || !pixels.is_finite() {
            return TimeDelta::zero();
        }
        let millis = pixels / pps * 1000.0;
        if !millis.is_finite() {
            return TimeDelta::zero();
        }
        #[expect(
            clippy::cast_possible_truncation,
            reason = "rounded finite value; saturation at i64 bounds is acceptable"
        )]
        let millis = millis.round() as i64;
        TimeDelta::try_milliseconds(millis).unwrap_or_else(TimeDelta::zero)
    }

    /// Rounds a pixel delta to the nearest multiple of the pixel span that
    /// `snap_seconds` covers at this scale.
    ///
    /// A non-positive snap span (a non-positive `snap_seconds`, or a
    /// degenerate scale) returns the delta unchanged instead of producing a
    /// non-finite result.
    #[must_use]
    pub fn snap_pixel_delta(&self, pixel_delta: f64, snap_seconds: i64) -> f64 {
        let span = self.pixels_per_second() * snap_seconds as f64;
        if span <= 0.0 || !pixel_delta.is_finite() {
            return pixel_delta;
        }
        (pixel_delta / span).round() * span
    }
}
