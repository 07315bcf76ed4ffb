//! The challenge catalog: a validated, ordered set of challenge definitions.

use std::collections::HashSet;
use std::path::Path;

use serde::Serialize;

use crate::challenge::{ChallengeDefinition, ChallengeInstance, Difficulty};
use crate::error::{CoreError, CoreResult};

/// A fixed, ordered list of challenge definitions.
///
/// Every id is non-empty and unique, and every challenge awards positive XP.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Catalog {
    challenges: Vec<ChallengeDefinition>,
}

impl Catalog {
    /// Build a catalog, validating ids and XP values.
    pub fn new(challenges: Vec<ChallengeDefinition>) -> CoreResult<Self> {
        if challenges.is_empty() {
            return Err(CoreError::EmptyCatalog);
        }

        let mut seen = HashSet::new();
        for def in &challenges {
            if def.id.trim().is_empty() {
                return Err(CoreError::EmptyId);
            }
            if !seen.insert(def.id.as_str()) {
                return Err(CoreError::DuplicateId(def.id.clone()));
            }
            if def.xp == 0 {
                return Err(CoreError::ZeroXp(def.id.clone()));
            }
        }

        Ok(Self { challenges })
    }

    /// The five starter challenges shipped with the app.
    pub fn builtin() -> Self {
        Self {
            challenges: vec![
                ChallengeDefinition::new(
                    "ch_flat_kickflip",
                    "Kickflip on flat",
                    "Land a clean kickflip on flatground. No tic-tac, roll away smooth.",
                    100,
                    Difficulty::Easy,
                ),
                ChallengeDefinition::new(
                    "ch_5050_ledge",
                    "50-50 a ledge",
                    "Find a ledge and lock in a 50-50. Hold it and pop out clean.",
                    200,
                    Difficulty::Medium,
                ),
                ChallengeDefinition::new(
                    "ch_manual_line",
                    "Manual line",
                    "Manual across a parking lot line for at least 3 seconds.",
                    150,
                    Difficulty::Medium,
                ),
                ChallengeDefinition::new(
                    "ch_park_line",
                    "Park line",
                    "Hit three obstacles in one line at a park you haven't skated this week.",
                    300,
                    Difficulty::Hard,
                ),
                ChallengeDefinition::new(
                    "ch_switch_trick",
                    "Switch trick",
                    "Learn or land a trick in switch stance you rarely do.",
                    250,
                    Difficulty::Hard,
                ),
            ],
        }
    }

    /// Parse a JSON array of challenge definitions.
    pub fn from_json(json: &str) -> CoreResult<Self> {
        let challenges: Vec<ChallengeDefinition> = serde_json::from_str(json)?;
        Self::new(challenges)
    }

    /// Load a catalog from a JSON file.
    pub fn from_path(path: &Path) -> CoreResult<Self> {
        let json = std::fs::read_to_string(path).map_err(|source| CoreError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&json)
    }

    /// Look up a definition by id.
    pub fn get(&self, id: &str) -> Option<&ChallengeDefinition> {
        self.challenges.iter().find(|c| c.id == id)
    }

    /// Whether the catalog contains the given id.
    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    /// Iterate over definitions in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = &ChallengeDefinition> {
        self.challenges.iter()
    }

    /// All definitions in catalog order.
    pub fn definitions(&self) -> &[ChallengeDefinition] {
        &self.challenges
    }

    /// All ids in catalog order.
    pub fn ids(&self) -> Vec<&str> {
        self.challenges.iter().map(|c| c.id.as_str()).collect()
    }

    /// Definitions of a single difficulty tier.
    pub fn by_difficulty(&self, difficulty: Difficulty) -> Vec<&ChallengeDefinition> {
        self.challenges
            .iter()
            .filter(|c| c.difficulty == difficulty)
            .collect()
    }

    /// Sum of XP over the whole catalog.
    pub fn total_xp(&self) -> u64 {
        self.challenges.iter().map(|c| u64::from(c.xp)).sum()
    }

    /// Number of challenges.
    pub fn len(&self) -> usize {
        self.challenges.len()
    }

    /// Always false for a validated catalog.
    pub fn is_empty(&self) -> bool {
        self.challenges.is_empty()
    }

    /// Fresh, incomplete instances of every challenge, in catalog order.
    pub fn instantiate_all(&self) -> Vec<ChallengeInstance> {
        self.challenges
            .iter()
            .map(ChallengeDefinition::instantiate)
            .collect()
    }
}
