//! Daily completion streak.
//!
//! The streak counts consecutive calendar days with at least one completed
//! challenge. It is only evaluated when something is completed, so a missed
//! day is noticed the next time the skater completes a challenge, not before.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Streak length at which the streak counts as "hot".
pub const HOT_STREAK_DAYS: u32 = 3;

/// What recording a completion did to the streak.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StreakChange {
    /// First completion ever.
    Started,
    /// Another completion on the same day; streak unchanged.
    SameDay,
    /// Completion on the day after the previous one.
    Extended,
    /// Completion after one or more missed days, or dated before the last one.
    Reset {
        /// Streak length before the reset.
        previous: u32,
    },
}

/// Streak length and the day it was last advanced.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Streak {
    days: u32,
    last_completed: Option<NaiveDate>,
}

impl Streak {
    /// Rebuild a streak from stored parts.
    pub fn from_parts(days: u32, last_completed: Option<NaiveDate>) -> Self {
        Self {
            days,
            last_completed,
        }
    }

    /// Current streak length in days.
    pub fn days(&self) -> u32 {
        self.days
    }

    /// Calendar day of the last completion.
    pub fn last_completed(&self) -> Option<NaiveDate> {
        self.last_completed
    }

    /// Whether the streak has reached [`HOT_STREAK_DAYS`].
    pub fn is_hot(&self) -> bool {
        self.days >= HOT_STREAK_DAYS
    }

    /// Record a completion on `today`.
    pub fn record(&mut self, today: NaiveDate) -> StreakChange {
        let Some(last) = self.last_completed else {
            self.days = 1;
            self.last_completed = Some(today);
            return StreakChange::Started;
        };

        // A clock that moved backwards resets the streak too.
        let gap = (today - last).num_days();
        if gap == 0 {
            return StreakChange::SameDay;
        }

        self.last_completed = Some(today);
        if gap == 1 {
            self.days += 1;
            StreakChange::Extended
        } else {
            let previous = self.days;
            self.days = 1;
            StreakChange::Reset { previous }
        }
    }
}
