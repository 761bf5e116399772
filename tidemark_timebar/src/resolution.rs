// Copyright 2026 the Tidemark Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use chrono::TimeZone;
use tidemark_scale::TimeRange;

use crate::TimeUnit;

/// The granularity pair of the two timebar tiers.
///
/// `major` is the top tier and may be `None` to hide it entirely; `minor` is
/// the bottom tier and is always rendered.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Resolution {
    /// Top-tier granularity, or `None` to hide the top tier.
    pub major: Option<TimeUnit>,
    /// Bottom-tier granularity.
    pub minor: TimeUnit,
}

impl Resolution {
    /// Guesses a resolution from the visible duration.
    ///
    /// The policy is a deliberate two-bucket heuristic:
    /// - 100 seconds or more: minute blocks only, top tier hidden.
    /// - under 100 seconds: minute blocks over second blocks.
    ///
    /// [`TimeUnit::Hour`] is never guessed; it exists for caller-supplied
    /// overrides. This is derived state: call it again whenever the visible
    /// range changes, or skip it entirely by supplying an explicit
    /// `Resolution` to the layout call.
    #[must_use]
    pub fn guess<Tz: TimeZone>(visible: &TimeRange<Tz>) -> Self {
        if visible.duration_seconds() >= 100 {
            Self {
                major: None,
                minor: TimeUnit::Minute,
            }
        } else {
            Self {
                major: Some(TimeUnit::Minute),
                minor: TimeUnit::Second,
            }
        }
    }
}
