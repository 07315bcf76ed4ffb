//! Activity entry types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single progression event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ActivityEntry {
    /// A challenge was completed for the first time.
    ChallengeCompleted {
        /// Challenge id.
        id: String,
        /// Challenge title.
        title: String,
        /// XP awarded.
        xp: u32,
        /// Whether it was also part of today's rotation.
        daily: bool,
        /// When it was completed.
        timestamp: DateTime<Utc>,
    },
    /// Total XP crossed into a new level.
    LevelUp {
        /// The level reached.
        level: u64,
        /// When it happened.
        timestamp: DateTime<Utc>,
    },
    /// The first completion ever started a streak.
    StreakStarted {
        /// When it happened.
        timestamp: DateTime<Utc>,
    },
    /// A completion on the following day extended the streak.
    StreakExtended {
        /// New streak length.
        days: u32,
        /// When it happened.
        timestamp: DateTime<Utc>,
    },
    /// A completion after missed days, or dated before the last one, reset
    /// the streak.
    StreakReset {
        /// Streak length before the reset.
        previous: u32,
        /// When it happened.
        timestamp: DateTime<Utc>,
    },
    /// The daily rotation was regenerated.
    DailyRerolled {
        /// Ids in the new rotation.
        ids: Vec<String>,
        /// When it happened.
        timestamp: DateTime<Utc>,
    },
}

impl ActivityEntry {
    /// When the event happened.
    pub fn timestamp(&self) -> DateTime<Utc> {
        match self {
            Self::ChallengeCompleted { timestamp, .. }
            | Self::LevelUp { timestamp, .. }
            | Self::StreakStarted { timestamp }
            | Self::StreakExtended { timestamp, .. }
            | Self::StreakReset { timestamp, .. }
            | Self::DailyRerolled { timestamp, .. } => *timestamp,
        }
    }

    /// One-line plain-text description, without the timestamp.
    pub fn text_line(&self) -> String {
        match self {
            Self::ChallengeCompleted {
                title, xp, daily, ..
            } => {
                let tag = if *daily { " (daily)" } else { "" };
                format!("Completed {title}: +{xp} XP{tag}")
            }
            Self::LevelUp { level, .. } => format!("Level up! Reached level {level}"),
            Self::StreakStarted { .. } => "Streak started".to_string(),
            Self::StreakExtended { days, .. } => format!("Streak extended to {days} days"),
            Self::StreakReset { previous, .. } => format!("Streak reset (was {previous} days)"),
            Self::DailyRerolled { ids, .. } => {
                format!("Daily challenges rerolled: {}", ids.join(", "))
            }
        }
    }

    /// One-line markdown description, without the timestamp.
    pub fn markdown_line(&self) -> String {
        match self {
            Self::ChallengeCompleted {
                id,
                title,
                xp,
                daily,
                ..
            } => {
                let tag = if *daily { " *(daily)*" } else { "" };
                format!("**Completed** {title} (`{id}`): +{xp} XP{tag}")
            }
            Self::LevelUp { level, .. } => format!("**Level up!** Reached level {level}"),
            Self::StreakStarted { .. } => "Streak started".to_string(),
            Self::StreakExtended { days, .. } => format!("Streak extended to **{days}** days"),
            Self::StreakReset { previous, .. } => format!("Streak reset (was {previous} days)"),
            Self::DailyRerolled { ids, .. } => {
                let list: Vec<String> = ids.iter().map(|id| format!("`{id}`")).collect();
                format!("*Daily challenges rerolled*: {}", list.join(", "))
            }
        }
    }
}
