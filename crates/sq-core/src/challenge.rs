//! Challenge definitions and the completable instances derived from them.
//!
//! A [`ChallengeDefinition`] is immutable catalog data. Every list the
//! progression engine tracks holds [`ChallengeInstance`] values, each owning
//! its own copy of the definition plus completion state, so completing one
//! instance never affects the catalog or any other instance.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Difficulty tier of a challenge. Informational only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Difficulty {
    /// Something most skaters can land in a session.
    Easy,
    /// Needs some practice.
    Medium,
    /// Needs a dedicated session or a specific spot.
    Hard,
    /// Bragging rights.
    Insane,
}

impl Difficulty {
    /// All tiers, from easiest to hardest.
    pub const ALL: [Difficulty; 4] = [
        Difficulty::Easy,
        Difficulty::Medium,
        Difficulty::Hard,
        Difficulty::Insane,
    ];

    /// Parse a tier name, ignoring case and surrounding whitespace.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "easy" => Some(Self::Easy),
            "medium" => Some(Self::Medium),
            "hard" => Some(Self::Hard),
            "insane" => Some(Self::Insane),
            _ => None,
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Easy => write!(f, "easy"),
            Self::Medium => write!(f, "medium"),
            Self::Hard => write!(f, "hard"),
            Self::Insane => write!(f, "insane"),
        }
    }
}

/// An immutable challenge as it appears in the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChallengeDefinition {
    /// Unique, stable identifier (e.g. `ch_flat_kickflip`).
    pub id: String,
    /// Short display title.
    pub title: String,
    /// Longer display text.
    pub description: String,
    /// XP awarded on first completion. Always positive in a valid catalog.
    pub xp: u32,
    /// Difficulty tier.
    pub difficulty: Difficulty,
    /// Skate spot this challenge is tied to, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub spot_id: Option<String>,
    /// Named trick this challenge is about, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trick: Option<String>,
}

impl ChallengeDefinition {
    /// Create a definition without spot or trick association.
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        description: impl Into<String>,
        xp: u32,
        difficulty: Difficulty,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: description.into(),
            xp,
            difficulty,
            spot_id: None,
            trick: None,
        }
    }

    /// Associate the challenge with a skate spot.
    pub fn with_spot(mut self, spot_id: impl Into<String>) -> Self {
        self.spot_id = Some(spot_id.into());
        self
    }

    /// Associate the challenge with a named trick.
    pub fn with_trick(mut self, trick: impl Into<String>) -> Self {
        self.trick = Some(trick.into());
        self
    }

    /// A fresh, incomplete copy for the all-time challenge list.
    pub fn instantiate(&self) -> ChallengeInstance {
        ChallengeInstance {
            definition: self.clone(),
            completed: false,
            completed_at: None,
            is_daily: false,
        }
    }

    /// A fresh, incomplete copy flagged as part of the daily rotation.
    pub fn instantiate_daily(&self) -> ChallengeInstance {
        ChallengeInstance {
            is_daily: true,
            ..self.instantiate()
        }
    }
}

/// A challenge with its own completion state.
///
/// `completed` and `completed_at` only change together, and only once:
/// there is no way to un-complete an instance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChallengeInstance {
    #[serde(flatten)]
    definition: ChallengeDefinition,
    completed: bool,
    #[serde(default)]
    completed_at: Option<DateTime<Utc>>,
    #[serde(default)]
    is_daily: bool,
}

impl ChallengeInstance {
    /// Mark the instance completed at `at`.
    ///
    /// Returns `false` and leaves the instance untouched if it was already
    /// completed.
    pub fn complete(&mut self, at: DateTime<Utc>) -> bool {
        if self.completed {
            return false;
        }
        self.completed = true;
        self.completed_at = Some(at);
        true
    }

    /// The challenge id.
    pub fn id(&self) -> &str {
        &self.definition.id
    }

    /// XP awarded on completion.
    pub fn xp(&self) -> u32 {
        self.definition.xp
    }

    /// The definition this instance was copied from.
    pub fn definition(&self) -> &ChallengeDefinition {
        &self.definition
    }

    /// Whether the instance has been completed.
    pub fn is_completed(&self) -> bool {
        self.completed
    }

    /// When the instance was completed.
    pub fn completed_at(&self) -> Option<DateTime<Utc>> {
        self.completed_at
    }

    /// Whether the instance belongs to a daily rotation.
    pub fn is_daily(&self) -> bool {
        self.is_daily
    }

    /// Whether `completed` agrees with `completed_at`.
    ///
    /// Always true for instances built through this API; deserialized
    /// snapshots may violate it.
    pub fn is_consistent(&self) -> bool {
        self.completed == self.completed_at.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn kickflip() -> ChallengeDefinition {
        ChallengeDefinition::new(
            "ch_flat_kickflip",
            "Kickflip on flat",
            "Land a clean kickflip on flatground.",
            100,
            Difficulty::Easy,
        )
    }

    #[test]
    fn difficulty_parse() {
        assert_eq!(Difficulty::parse("Hard"), Some(Difficulty::Hard));
        assert_eq!(Difficulty::parse(" insane "), Some(Difficulty::Insane));
        assert_eq!(Difficulty::parse("gnarly"), None);
    }

    #[test]
    fn difficulty_ordering() {
        assert!(Difficulty::Easy < Difficulty::Medium);
        assert!(Difficulty::Hard < Difficulty::Insane);
        assert_eq!(Difficulty::ALL.len(), 4);
    }

    #[test]
    fn difficulty_display_matches_serde() {
        for d in Difficulty::ALL {
            let json = serde_json::to_string(&d).unwrap();
            assert_eq!(json, format!("\"{d}\""));
        }
    }

    #[test]
    fn instantiate_is_incomplete() {
        let inst = kickflip().instantiate();
        assert!(!inst.is_completed());
        assert!(inst.completed_at().is_none());
        assert!(!inst.is_daily());
        assert_eq!(inst.id(), "ch_flat_kickflip");
        assert_eq!(inst.xp(), 100);
    }

    #[test]
    fn instantiate_daily_sets_flag() {
        let inst = kickflip().instantiate_daily();
        assert!(inst.is_daily());
        assert!(!inst.is_completed());
    }

    #[test]
    fn complete_only_once() {
        let first = Utc.with_ymd_and_hms(2024, 3, 1, 10, 0, 0).unwrap();
        let second = Utc.with_ymd_and_hms(2024, 3, 2, 10, 0, 0).unwrap();

        let mut inst = kickflip().instantiate();
        assert!(inst.complete(first));
        assert!(!inst.complete(second));
        assert!(inst.is_completed());
        assert_eq!(inst.completed_at(), Some(first));
        assert!(inst.is_consistent());
    }

    #[test]
    fn completing_copy_leaves_definition_alone() {
        let def = kickflip();
        let mut a = def.instantiate();
        let b = def.instantiate();
        a.complete(Utc::now());
        assert!(!b.is_completed());
        assert_eq!(a.definition(), &def);
    }

    #[test]
    fn optional_fields_round_trip() {
        let def = kickflip().with_spot("spot_42").with_trick("kickflip");
        let json = serde_json::to_string(&def).unwrap();
        assert!(json.contains("\"spotId\":\"spot_42\""));
        let back: ChallengeDefinition = serde_json::from_str(&json).unwrap();
        assert_eq!(back, def);
    }

    #[test]
    fn instance_serializes_flat() {
        let inst = kickflip().instantiate_daily();
        let json = serde_json::to_value(&inst).unwrap();
        assert_eq!(json["id"], "ch_flat_kickflip");
        assert_eq!(json["completed"], false);
        assert_eq!(json["isDaily"], true);
        assert!(json["completedAt"].is_null());
    }

    #[test]
    fn inconsistent_snapshot_detected() {
        let json = r#"{
            "id": "x", "title": "X", "description": "", "xp": 10,
            "difficulty": "easy", "completed": true, "completedAt": null
        }"#;
        let inst: ChallengeInstance = serde_json::from_str(json).unwrap();
        assert!(!inst.is_consistent());
    }
}
