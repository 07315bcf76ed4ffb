//! The progression snapshot rendered by hosts.

use std::collections::HashSet;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sq_core::ChallengeInstance;

use crate::error::{ProgressionError, ProgressionResult};
use crate::level::{LevelProgress, level_for_xp};
use crate::streak::Streak;

/// Everything a host needs to render progression.
///
/// Only [`Progression`](crate::Progression) mutates it. Hosts read it through
/// the accessors or serialize it for a persistence collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressionState {
    pub(crate) challenges: Vec<ChallengeInstance>,
    pub(crate) daily_challenges: Vec<ChallengeInstance>,
    pub(crate) xp: u64,
    pub(crate) level: u64,
    pub(crate) streak_days: u32,
    pub(crate) last_completed_date: Option<NaiveDate>,
}

impl ProgressionState {
    pub(crate) fn new(
        challenges: Vec<ChallengeInstance>,
        daily_challenges: Vec<ChallengeInstance>,
    ) -> Self {
        Self {
            challenges,
            daily_challenges,
            xp: 0,
            level: 1,
            streak_days: 0,
            last_completed_date: None,
        }
    }

    /// The all-time challenge list, in catalog order.
    pub fn challenges(&self) -> &[ChallengeInstance] {
        &self.challenges
    }

    /// Today's rotation.
    pub fn daily_challenges(&self) -> &[ChallengeInstance] {
        &self.daily_challenges
    }

    /// Total XP.
    pub fn xp(&self) -> u64 {
        self.xp
    }

    /// Current level.
    pub fn level(&self) -> u64 {
        self.level
    }

    /// Current streak length in days.
    pub fn streak_days(&self) -> u32 {
        self.streak_days
    }

    /// Calendar day of the last streak update.
    pub fn last_completed_date(&self) -> Option<NaiveDate> {
        self.last_completed_date
    }

    /// The streak as a value.
    pub fn streak(&self) -> Streak {
        Streak::from_parts(self.streak_days, self.last_completed_date)
    }

    /// Whether the streak is long enough to show the hot-streak badge.
    pub fn is_hot_streak(&self) -> bool {
        self.streak().is_hot()
    }

    /// Position within the current level.
    pub fn level_progress(&self) -> LevelProgress {
        LevelProgress::from_xp(self.xp)
    }

    /// Look up an all-time challenge by id.
    pub fn challenge(&self, id: &str) -> Option<&ChallengeInstance> {
        self.challenges.iter().find(|c| c.id() == id)
    }

    /// Look up a challenge in today's rotation by id.
    pub fn daily_challenge(&self, id: &str) -> Option<&ChallengeInstance> {
        self.daily_challenges.iter().find(|c| c.id() == id)
    }

    /// Number of completed all-time challenges.
    pub fn completed_count(&self) -> usize {
        self.challenges.iter().filter(|c| c.is_completed()).count()
    }

    /// Number of completed challenges in today's rotation.
    pub fn daily_completed_count(&self) -> usize {
        self.daily_challenges
            .iter()
            .filter(|c| c.is_completed())
            .count()
    }

    /// Check the invariants a snapshot must satisfy before the engine may
    /// continue from it.
    pub fn validate(&self) -> ProgressionResult<()> {
        let expected = level_for_xp(self.xp);
        if self.level != expected {
            return Err(invalid(format!(
                "level {} does not match {} XP (expected level {expected})",
                self.level, self.xp
            )));
        }

        for c in &self.challenges {
            if !c.is_consistent() {
                return Err(invalid(format!(
                    "challenge {} has inconsistent completion state",
                    c.id()
                )));
            }
            if c.is_daily() {
                return Err(invalid(format!(
                    "all-time challenge {} is flagged daily",
                    c.id()
                )));
            }
        }

        for c in &self.daily_challenges {
            if !c.is_consistent() {
                return Err(invalid(format!(
                    "daily challenge {} has inconsistent completion state",
                    c.id()
                )));
            }
            if !c.is_daily() {
                return Err(invalid(format!(
                    "daily challenge {} is not flagged daily",
                    c.id()
                )));
            }
        }

        if let Some(id) = first_duplicate(&self.challenges) {
            return Err(invalid(format!("challenge {id} appears twice")));
        }
        if let Some(id) = first_duplicate(&self.daily_challenges) {
            return Err(invalid(format!("daily challenge {id} appears twice")));
        }

        for daily in self.daily_challenges.iter().filter(|c| c.is_completed()) {
            if !self.challenge(daily.id()).is_some_and(|c| c.is_completed()) {
                return Err(invalid(format!(
                    "daily challenge {} is completed but its all-time entry is not",
                    daily.id()
                )));
            }
        }

        let earned: u64 = self
            .challenges
            .iter()
            .filter(|c| c.is_completed())
            .map(|c| u64::from(c.xp()))
            .sum();
        if self.xp < earned {
            return Err(invalid(format!(
                "{} XP is less than the {earned} XP of completed challenges",
                self.xp
            )));
        }

        if (self.streak_days == 0) != self.last_completed_date.is_none() {
            return Err(invalid(
                "streak days and last completed date disagree".to_string(),
            ));
        }

        Ok(())
    }
}

fn first_duplicate(challenges: &[ChallengeInstance]) -> Option<&str> {
    let mut seen = HashSet::new();
    challenges
        .iter()
        .map(ChallengeInstance::id)
        .find(|id| !seen.insert(*id))
}

fn invalid(msg: String) -> ProgressionError {
    ProgressionError::InvalidSnapshot(msg)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use sq_core::Catalog;

    fn fresh() -> ProgressionState {
        let catalog = Catalog::builtin();
        let daily = catalog
            .iter()
            .take(3)
            .map(|d| d.instantiate_daily())
            .collect();
        ProgressionState::new(catalog.instantiate_all(), daily)
    }

    #[test]
    fn fresh_state_defaults() {
        let s = fresh();
        assert_eq!(s.xp(), 0);
        assert_eq!(s.level(), 1);
        assert_eq!(s.streak_days(), 0);
        assert!(s.last_completed_date().is_none());
        assert_eq!(s.completed_count(), 0);
        assert!(s.validate().is_ok());
    }

    #[test]
    fn lookups() {
        let s = fresh();
        assert!(s.challenge("ch_switch_trick").is_some());
        assert!(s.challenge("nope").is_none());
        assert!(s.daily_challenge("ch_flat_kickflip").is_some());
        assert!(s.daily_challenge("ch_switch_trick").is_none());
    }

    #[test]
    fn validate_rejects_wrong_level() {
        let mut s = fresh();
        s.xp = 600;
        assert!(matches!(
            s.validate().unwrap_err(),
            ProgressionError::InvalidSnapshot(_)
        ));
        s.level = 2;
        assert!(s.validate().is_ok());
    }

    #[test]
    fn validate_rejects_missing_xp() {
        let mut s = fresh();
        s.challenges[0].complete(Utc::now());
        s.streak_days = 1;
        s.last_completed_date = Some(Utc::now().date_naive());
        assert!(s.validate().is_err());
        s.xp = 100;
        assert!(s.validate().is_ok());
    }

    #[test]
    fn validate_rejects_streak_mismatch() {
        let mut s = fresh();
        s.streak_days = 2;
        assert!(s.validate().is_err());
    }

    #[test]
    fn validate_rejects_undaily_rotation() {
        let mut s = fresh();
        s.daily_challenges[0] = Catalog::builtin().definitions()[0].instantiate();
        assert!(s.validate().is_err());
    }

    #[test]
    fn validate_rejects_duplicate_daily() {
        let mut s = fresh();
        let copy = s.daily_challenges[0].clone();
        s.daily_challenges.push(copy);
        let err = s.validate().unwrap_err();
        assert!(err.to_string().contains("daily challenge ch_flat_kickflip appears twice"));
    }

    #[test]
    fn validate_rejects_duplicate_all_time() {
        let mut s = fresh();
        let copy = s.challenges[1].clone();
        s.challenges.push(copy);
        let err = s.validate().unwrap_err();
        assert!(err.to_string().contains("challenge ch_5050_ledge appears twice"));
    }

    #[test]
    fn validate_rejects_daily_completed_alone() {
        let mut s = fresh();
        let now = Utc::now();
        s.daily_challenges[0].complete(now);
        let err = s.validate().unwrap_err();
        assert!(err.to_string().contains("all-time entry is not"));

        s.challenges[0].complete(now);
        s.xp = 100;
        s.streak_days = 1;
        s.last_completed_date = Some(now.date_naive());
        assert!(s.validate().is_ok());
    }

    #[test]
    fn serializes_with_source_field_names() {
        let json = serde_json::to_value(fresh()).unwrap();
        assert_eq!(json["xp"], 0);
        assert_eq!(json["level"], 1);
        assert_eq!(json["streakDays"], 0);
        assert!(json["lastCompletedDate"].is_null());
        assert_eq!(json["dailyChallenges"].as_array().unwrap().len(), 3);
    }
}
