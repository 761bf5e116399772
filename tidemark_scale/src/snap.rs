// Copyright 2026 the Tidemark Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use chrono::{DateTime, TimeZone, Timelike};

/// Snaps an instant to the nearest multiple of `grid_seconds` on the unix
/// timeline.
///
/// - `grid_seconds <= 0` strips sub-second precision and returns the instant
///   otherwise unchanged.
/// - A positive grid rounds the instant's unix-seconds value to the nearest
///   grid multiple, halfway rounding up. The remainder is computed with
///   euclidean arithmetic, so pre-1970 instants snap toward the same grid
///   rather than mirroring around the epoch.
///
/// The sub-second component participates only through the floor that
/// `timestamp()` applies; the result always lands exactly on a grid line with
/// no sub-second component.
///
/// Instants whose snapped timestamp the zone cannot represent are returned
/// unchanged (minus sub-second precision); this keeps a layout pass total.
#[must_use]
pub fn snap_to_grid<Tz: TimeZone>(t: DateTime<Tz>, grid_seconds: i64) -> DateTime<Tz> {
    let truncated = t.with_nanosecond(0).unwrap_or_else(|| t.clone());
    if grid_seconds <= 0 {
        return truncated;
    }

    let unix = t.timestamp();
    let rem = unix.rem_euclid(grid_seconds);
    let snapped = if rem >= grid_seconds - rem {
        match unix.checked_add(grid_seconds - rem) {
            Some(v) => v,
            None => return truncated,
        }
    } else {
        unix - rem
    };

    t.timezone()
        .timestamp_opt(snapped, 0)
        .single()
        .unwrap_or(truncated)
}
