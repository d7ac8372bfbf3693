//! Scoring module - classic line-clear scoring and level progression
//!
//! Points for a clear are `base[lines] * (level + 1)` with the classic base
//! table {0, 40, 100, 300, 1200}. Level starts at 1 and increases every 10
//! total lines; each level shaves 50ms off the drop interval down to a 50ms
//! floor. Hard drops award 2 points per cell of drop distance.

use crate::types::{BASE_DROP_MS, DROP_DECREMENT_MS, LINE_SCORES, MIN_DROP_MS};

/// Points for clearing `lines` rows in a single lock at the given level.
/// `lines` outside 1..=4 scores nothing.
pub fn line_clear_score(lines: u32, level: u32) -> u32 {
    if lines == 0 || lines > 4 {
        return 0;
    }
    LINE_SCORES[lines as usize] * (level + 1)
}

/// Points for a hard drop of the given distance.
pub fn hard_drop_score(distance: u32) -> u32 {
    distance * 2
}

/// Level for a total line count. Starts at 1, +1 every 10 lines.
pub fn level_for_lines(total_lines: u32) -> u32 {
    total_lines / 10 + 1
}

/// Gravity interval for a level: 1000ms at level 1, 50ms faster per level,
/// floored at 50ms.
pub fn drop_interval_ms(level: u32) -> u32 {
    BASE_DROP_MS
        .saturating_sub(level.saturating_sub(1) * DROP_DECREMENT_MS)
        .max(MIN_DROP_MS)
}
