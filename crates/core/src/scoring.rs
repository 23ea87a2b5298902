//! Scoring module - sweep rewards and level progression
//!
//! Row clears within one sweep pay 10, 20, 40, ... (doubling per additional
//! row). After every sweep the level is checked once: reaching
//! `level * 100` points advances exactly one level and shortens the drop
//! interval by a factor of 0.9, no matter how far past the threshold the
//! score landed.

use crate::types::{BASE_DROP_INTERVAL, CLEAR_BASE_SCORE, LEVEL_SCORE_STEP, LEVEL_UP_FACTOR};

/// Reward for the k-th (0-based) row cleared in a single sweep
pub fn clear_reward(k: u32) -> u32 {
    CLEAR_BASE_SCORE.saturating_mul(1u32.checked_shl(k).unwrap_or(u32::MAX))
}

/// Total award for clearing `rows` rows in one sweep: `10 * (2^rows - 1)`
pub fn sweep_total(rows: u32) -> u32 {
    (0..rows).fold(0u32, |acc, k| acc.saturating_add(clear_reward(k)))
}

/// Level and the drop interval derived from it
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LevelProgress {
    level: u32,
    drop_interval: f64,
}

impl LevelProgress {
    pub fn new() -> Self {
        Self {
            level: 1,
            drop_interval: BASE_DROP_INTERVAL,
        }
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    /// Current drop threshold in time units
    pub fn drop_interval(&self) -> f64 {
        self.drop_interval
    }

    /// Check the score after a sweep; advances at most one level.
    ///
    /// Returns true on level-up.
    pub fn update(&mut self, score: u32) -> bool {
        if score >= self.level.saturating_mul(LEVEL_SCORE_STEP) {
            self.level += 1;
            self.drop_interval *= LEVEL_UP_FACTOR;
            return true;
        }
        false
    }
}

impl Default for LevelProgress {
    fn default() -> Self {
        Self::new()
    }
}
