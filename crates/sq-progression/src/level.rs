//! Level math.
//!
//! Levels are a strict step function of total XP: every [`XP_PER_LEVEL`]
//! points is one level, starting at level 1 with 0 XP. No caps.

use serde::{Deserialize, Serialize};

/// XP needed to advance one level.
pub const XP_PER_LEVEL: u64 = 500;

/// The level reached with `xp` total points.
pub fn level_for_xp(xp: u64) -> u64 {
    1 + xp / XP_PER_LEVEL
}

/// Position within the current level, for "N XP to next level" displays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelProgress {
    /// Current level.
    pub level: u64,
    /// XP earned since reaching the current level.
    pub xp_into_level: u64,
    /// XP still needed for the next level.
    pub xp_to_next_level: u64,
    /// Total XP at which the next level is reached.
    pub next_level_at: u64,
}

impl LevelProgress {
    /// Compute the progress for a total XP value.
    pub fn from_xp(xp: u64) -> Self {
        let level = level_for_xp(xp);
        let next_level_at = level * XP_PER_LEVEL;
        Self {
            level,
            xp_into_level: xp % XP_PER_LEVEL,
            xp_to_next_level: next_level_at - xp,
            next_level_at,
        }
    }

    /// Fraction of the current level completed, in `0.0..1.0`.
    pub fn fraction(&self) -> f64 {
        self.xp_into_level as f64 / XP_PER_LEVEL as f64
    }
}
