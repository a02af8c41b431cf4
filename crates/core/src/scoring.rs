//! Scoring module - row-clear points and the level step function
//!
//! Score grows by a flat [`SCORE_PER_ROW`] per cleared row. Level is looked up
//! from [`LEVEL_THRESHOLDS`], so it only ever rises as score rises and stops at
//! the last tier.

use crate::types::{LEVEL_THRESHOLDS, SCORE_PER_ROW, STARTING_LEVEL};

/// Points for clearing `rows` rows at once
pub fn score_for_rows(rows: usize) -> u32 {
    (rows as u32).saturating_mul(SCORE_PER_ROW)
}

/// Level for a score: the highest tier whose threshold has been reached
pub fn level_for_score(score: u32) -> u32 {
    LEVEL_THRESHOLDS
        .iter()
        .rev()
        .find(|&&(threshold, _)| score >= threshold)
        .map_or(STARTING_LEVEL, |&(_, level)| level)
}

/// Highest level any score can reach
pub fn max_level() -> u32 {
    LEVEL_THRESHOLDS
        .last()
        .map_or(STARTING_LEVEL, |&(_, level)| level)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score_for_rows() {
        assert_eq!(score_for_rows(0), 0);
        assert_eq!(score_for_rows(1), SCORE_PER_ROW);
        assert_eq!(score_for_rows(4), 4 * SCORE_PER_ROW);
    }

    #[test]
    fn test_level_steps() {
        assert_eq!(level_for_score(0), 1);
        assert_eq!(level_for_score(99), 1);
        assert_eq!(level_for_score(100), 2);
        assert_eq!(level_for_score(299), 2);
        assert_eq!(level_for_score(300), 3);
        assert_eq!(level_for_score(600), 4);
        assert_eq!(level_for_score(1000), 5);
    }

    #[test]
    fn test_level_caps_at_final_tier() {
        assert_eq!(level_for_score(u32::MAX), max_level());
        assert_eq!(max_level(), 5);
    }

    #[test]
    fn test_level_is_monotonic() {
        let mut last = 0;
        for score in (0..2000).step_by(SCORE_PER_ROW as usize) {
            let level = level_for_score(score);
            assert!(level >= last);
            last = level;
        }
    }
}
