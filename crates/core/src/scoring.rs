//! Scoring module - line-clear points, leveling and gravity speed
//!
//! - Points for one lock are `LINE_SCORES[cleared] * level`.
//! - Level is `1 + lines / 10` and never goes down within a session.
//! - Gravity period shrinks by 70ms per level from 800ms, floored at 100ms.

use crate::types::{
    BASE_GRAVITY_MS, GRAVITY_STEP_MS, LINES_PER_LEVEL, LINE_SCORES, MIN_GRAVITY_MS,
};

/// Points awarded for clearing `lines` rows at `level`.
///
/// More than four rows cannot come from a single lock and scores nothing.
pub fn line_clear_points(lines: usize, level: u32) -> u32 {
    LINE_SCORES
        .get(lines)
        .copied()
        .unwrap_or(0)
        .saturating_mul(level)
}

/// Level implied by a running total of cleared lines
pub fn level_for_lines(lines: u32) -> u32 {
    1 + lines / LINES_PER_LEVEL
}

/// Gravity period in milliseconds for a level
pub fn gravity_interval_ms(level: u32) -> u32 {
    let speedup = level.saturating_sub(1).saturating_mul(GRAVITY_STEP_MS);
    BASE_GRAVITY_MS.saturating_sub(speedup).max(MIN_GRAVITY_MS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_clear_points() {
        assert_eq!(line_clear_points(0, 1), 0);
        assert_eq!(line_clear_points(1, 1), 100);
        assert_eq!(line_clear_points(2, 1), 300);
        assert_eq!(line_clear_points(3, 1), 500);
        assert_eq!(line_clear_points(4, 1), 800);
        assert_eq!(line_clear_points(4, 3), 2400);
        assert_eq!(line_clear_points(1, 7), 700);
        assert_eq!(line_clear_points(5, 1), 0);
    }

    #[test]
    fn test_level_for_lines() {
        assert_eq!(level_for_lines(0), 1);
        assert_eq!(level_for_lines(9), 1);
        assert_eq!(level_for_lines(10), 2);
        assert_eq!(level_for_lines(25), 3);
    }

    #[test]
    fn test_gravity_interval() {
        assert_eq!(gravity_interval_ms(1), 800);
        assert_eq!(gravity_interval_ms(2), 730);
        assert_eq!(gravity_interval_ms(10), 170);
        assert_eq!(gravity_interval_ms(11), 100);
        assert_eq!(gravity_interval_ms(12), 100);
        assert_eq!(gravity_interval_ms(100), 100);
        // Level 0 never occurs but must not underflow.
        assert_eq!(gravity_interval_ms(0), 800);
    }
}
