// Copyright 2026 the Tidemark Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::{String, ToString};

use crate::TimeUnit;

/// Short and long label patterns for one granularity, in chrono strftime
/// syntax.
///
/// The segment walk picks the short pattern when a block is too narrow for
/// the long one (see `short_label_limit` on
/// [`TimebarConfig`](crate::TimebarConfig)). Patterns must be valid strftime
/// strings; formatting an invalid pattern panics when the label is rendered.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UnitFormats {
    /// Pattern for narrow blocks.
    pub short: String,
    /// Pattern for blocks with room for a fuller label.
    pub long: String,
}

impl UnitFormats {
    fn new(short: &str, long: &str) -> Self {
        Self {
            short: short.to_string(),
            long: long.to_string(),
        }
    }
}

/// Per-unit label patterns for one tier.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TierFormats {
    /// Patterns for second blocks.
    pub second: UnitFormats,
    /// Patterns for minute blocks.
    pub minute: UnitFormats,
    /// Patterns for hour blocks.
    pub hour: UnitFormats,
}

impl TierFormats {
    /// Returns the patterns for `unit`.
    #[must_use]
    pub fn formats(&self, unit: TimeUnit) -> &UnitFormats {
        match unit {
            TimeUnit::Second => &self.second,
            TimeUnit::Minute => &self.minute,
            TimeUnit::Hour => &self.hour,
        }
    }
}

impl Default for TierFormats {
    /// Seconds as `17`, minutes as `03` / `03:17`, hours as `10` / `10:03`.
    fn default() -> Self {
        Self {
            second: UnitFormats::new("%S", "%S"),
            minute: UnitFormats::new("%M", "%M:%S"),
            hour: UnitFormats::new("%H", "%H:%M"),
        }
    }
}

/// Label patterns for both timebar tiers, independently overridable.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TimebarFormats {
    /// Patterns for the top (major) tier.
    pub major: TierFormats,
    /// Patterns for the bottom (minor) tier.
    pub minor: TierFormats,
}
