//! Scoring module - classic line-clear scoring and level progression
//!
//! Scoring rules are injected into the engine through the `ScoringRules`
//! trait so tests can substitute fixed-value fakes. `ClassicScoring` is the
//! default ruleset: the 40/100/300/1200 table multiplied by the current
//! level, and one level gained per ten lines.

use crate::types::{BASE_DROP_MS, LEVEL_SPEED_FACTOR, LINES_PER_LEVEL, LINE_SCORES};

/// Pure scoring rules: points for a clear and level from total lines.
pub trait ScoringRules {
    /// Points awarded for clearing `lines` rows at the given level.
    fn score_for_clear(&self, lines: usize, level: u32) -> u32;

    /// Level for a total line count. Always at least 1.
    fn level_for_lines(&self, total_lines: u32) -> u32;
}

/// Classic ruleset: single/double/triple/tetris table, level as multiplier
#[derive(Debug, Clone, Copy, Default)]
pub struct ClassicScoring;

impl ScoringRules for ClassicScoring {
    fn score_for_clear(&self, lines: usize, level: u32) -> u32 {
        if lines == 0 {
            return 0;
        }
        // Counts above 4 cannot happen with a one-cell piece but still get
        // a defined value: per-line singles.
        let base = match lines {
            1..=4 => LINE_SCORES[lines],
            _ => lines as u32 * LINE_SCORES[1],
        };
        base * level
    }

    fn level_for_lines(&self, total_lines: u32) -> u32 {
        total_lines / LINES_PER_LEVEL + 1
    }
}

/// Drop interval for a level (in milliseconds).
///
/// Helper for the external tick driver: the engine exposes the level as
/// data, and the driver recomputes its interval after every tick so
/// level-ups take effect on the next one.
pub fn drop_interval_ms(level: u32) -> f64 {
    BASE_DROP_MS / (1.0 + f64::from(level.saturating_sub(1)) * LEVEL_SPEED_FACTOR)
}
