//! Scoring module - line-clear score, level, and gravity interval
//!
//! Scoring is quadratic in the number of rows cleared by one merge, so
//! multi-line clears are worth disproportionately more. Level is derived
//! from the lifetime line count and only ever drives the drop interval.

use crate::types::{
    BASE_DROP_INTERVAL_MS, DROP_INTERVAL_FLOOR_MS, LEVEL_SPEEDUP_MS, LINES_PER_LEVEL,
};

/// Score for clearing `lines` rows in a single merge: 100 * n^2.
pub fn line_clear_score(lines: u32) -> u32 {
    100 * lines * lines
}

/// Level for a lifetime line count. Starts at 1, +1 every 10 lines.
pub fn level_for_lines(total_lines: u32) -> u32 {
    total_lines / LINES_PER_LEVEL + 1
}

/// Milliseconds between automatic drops at a level.
/// Each level shaves 100ms off the 1000ms base, with a 100ms floor.
pub fn drop_interval_ms(level: u32) -> u64 {
    let speedup = u64::from(level.saturating_sub(1)) * LEVEL_SPEEDUP_MS;
    BASE_DROP_INTERVAL_MS
        .saturating_sub(speedup)
        .max(DROP_INTERVAL_FLOOR_MS)
}
