// Copyright 2026 the Tidemark Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use chrono::{DateTime, TimeDelta, TimeZone, Timelike};

/// The time granularity a timebar tier renders at.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TimeUnit {
    /// One-second blocks.
    Second,
    /// One-minute blocks.
    Minute,
    /// One-hour blocks. Usable for flooring and label formats; the segment
    /// walk defines no step for it and yields an empty sequence.
    Hour,
}

impl TimeUnit {
    /// Returns the nominal length of one unit in seconds.
    #[must_use]
    pub fn seconds_per_unit(self) -> i64 {
        match self {
            Self::Second => 1,
            Self::Minute => 60,
            Self::Hour => 3_600,
        }
    }

    /// Returns the cursor advance for one segment of this unit, or `None`
    /// when the segment walk does not support the unit.
    #[must_use]
    pub fn step(self) -> Option<TimeDelta> {
        match self {
            Self::Second => Some(TimeDelta::seconds(1)),
            Self::Minute => Some(TimeDelta::minutes(1)),
            Self::Hour => None,
        }
    }

    /// Truncates an instant to the start of its unit, by wall-clock fields.
    ///
    /// When the zone cannot represent the truncated wall-clock time (which
    /// can happen around DST transitions), the instant is returned unchanged
    /// rather than failing the layout pass.
    #[must_use]
    pub fn floor<Tz: TimeZone>(self, t: &DateTime<Tz>) -> DateTime<Tz> {
        let floored = match self {
            Self::Second => t.with_nanosecond(0),
            Self::Minute => t.with_second(0).and_then(|t| t.with_nanosecond(0)),
            Self::Hour => t
                .with_minute(0)
                .and_then(|t| t.with_second(0))
                .and_then(|t| t.with_nanosecond(0)),
        };
        floored.unwrap_or_else(|| t.clone())
    }

    /// Returns how far `t` is into its own unit.
    ///
    /// The result carries sub-second precision: an instant 1.5 s into its
    /// minute reports a 1.5 s offset.
    #[must_use]
    pub fn offset_into<Tz: TimeZone>(self, t: &DateTime<Tz>) -> TimeDelta {
        t.clone() - self.floor(t)
    }
}
