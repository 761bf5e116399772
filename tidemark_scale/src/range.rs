// Copyright 2026 the Tidemark Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use chrono::{DateTime, TimeDelta, TimeZone};

/// A closed span of calendar time, typically the visible window of a timeline
/// or a selected range within it.
///
/// `start <= end` is a caller contract: it is checked in debug builds by
/// [`TimeRange::new`] and assumed everywhere else. Use [`TimeRange::between`]
/// when the endpoints come from user gestures and may arrive in either order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TimeRange<Tz: TimeZone> {
    /// Start of the range (inclusive).
    pub start: DateTime<Tz>,
    /// End of the range (inclusive for containment queries).
    pub end: DateTime<Tz>,
}

impl<Tz: TimeZone> TimeRange<Tz> {
    /// Creates a range from ordered endpoints.
    ///
    /// Debug-asserts `start <= end`.
    #[must_use]
    pub fn new(start: DateTime<Tz>, end: DateTime<Tz>) -> Self {
        debug_assert!(start <= end, "TimeRange endpoints out of order");
        Self { start, end }
    }

    /// Creates a range from endpoints in either order, normalizing them.
    #[must_use]
    pub fn between(a: DateTime<Tz>, b: DateTime<Tz>) -> Self {
        if a <= b {
            Self { start: a, end: b }
        } else {
            Self { start: b, end: a }
        }
    }

    /// Returns the signed length of the range.
    #[must_use]
    pub fn duration(&self) -> TimeDelta {
        self.end.clone() - self.start.clone()
    }

    /// Returns the length of the range in whole seconds, truncated.
    #[must_use]
    pub fn duration_seconds(&self) -> i64 {
        self.duration().num_seconds()
    }

    /// Returns `true` if the range has zero length.
    #[must_use]
    pub fn is_instant(&self) -> bool {
        self.start == self.end
    }

    /// Returns `true` if `t` lies within the closed interval `[start, end]`.
    #[must_use]
    pub fn contains(&self, t: &DateTime<Tz>) -> bool {
        self.start <= *t && *t <= self.end
    }

    /// Returns a range with the same start and the duration multiplied by
    /// `factor`.
    ///
    /// This is the usual zoom gesture for a start-anchored timeline: a factor
    /// of `0.5` halves the visible window, `2.0` doubles it. Non-finite or
    /// negative factors, and durations that would overflow, leave the range
    /// unchanged. The duration is scaled at millisecond precision.
    #[must_use]
    pub fn scaled_about_start(&self, factor: f64) -> Self {
        if !factor.is_finite() || factor < 0.0 {
            return self.clone();
        }
        let millis = self.duration().num_milliseconds() as f64 * factor;
        if !millis.is_finite() {
            return self.clone();
        }
        #[expect(
            clippy::cast_possible_truncation,
            reason = "finite value checked above; saturation at i64 bounds is acceptable"
        )]
        let scaled = TimeDelta::try_milliseconds(millis as i64);
        match scaled.and_then(|d| self.start.clone().checked_add_signed(d)) {
            Some(end) => Self {
                start: self.start.clone(),
                end,
            },
            None => self.clone(),
        }
    }
}
