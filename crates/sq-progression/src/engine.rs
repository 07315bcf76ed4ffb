//! The progression engine.
//!
//! `Progression` owns the catalog and the [`ProgressionState`] and is the
//! only thing allowed to change that state. Completing a challenge is one
//! `&mut self` call: the already-completed check, the completion flags, XP,
//! level, and streak all change together or not at all.

use chrono::{DateTime, Utc};
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};
use sq_core::Catalog;
use tracing::{debug, info};

use crate::activity::{ActivityEntry, ActivityLog};
use crate::config::ProgressionConfig;
use crate::daily::select_daily;
use crate::error::{ProgressionError, ProgressionResult};
use crate::level::level_for_xp;
use crate::state::ProgressionState;
use crate::streak::StreakChange;

/// What a first-time completion changed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompletionReport {
    /// The completed challenge.
    pub challenge_id: String,
    /// Its title, for notifications.
    pub title: String,
    /// XP added by this completion.
    pub xp_awarded: u32,
    /// Total XP afterwards.
    pub total_xp: u64,
    /// Level before the completion.
    pub previous_level: u64,
    /// Level afterwards.
    pub level: u64,
    /// How the streak reacted.
    pub streak: StreakChange,
    /// Streak length afterwards.
    pub streak_days: u32,
    /// Whether a copy in today's rotation was marked as well.
    pub daily_marked: bool,
}

impl CompletionReport {
    /// Whether this completion reached a new level.
    pub fn leveled_up(&self) -> bool {
        self.level > self.previous_level
    }
}

/// Outcome of a completion request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Completion {
    /// First completion: XP, level, and streak were updated.
    Completed(CompletionReport),
    /// The challenge was already completed; nothing changed.
    AlreadyCompleted,
    /// No challenge has that id; nothing changed.
    NotFound,
}

impl Completion {
    /// The report, if XP was awarded.
    pub fn report(&self) -> Option<&CompletionReport> {
        match self {
            Self::Completed(report) => Some(report),
            _ => None,
        }
    }

    /// Whether XP was awarded.
    pub fn is_completed(&self) -> bool {
        matches!(self, Self::Completed(_))
    }
}

/// Challenge progression for one skater.
#[derive(Debug)]
pub struct Progression {
    catalog: Catalog,
    config: ProgressionConfig,
    state: ProgressionState,
    activity: ActivityLog,
    rng: StdRng,
}

impl Progression {
    /// Start a fresh progression: every challenge incomplete, 0 XP, level 1,
    /// no streak, and one daily rotation drawn.
    pub fn new(catalog: Catalog, config: ProgressionConfig) -> Self {
        let mut rng = StdRng::seed_from_u64(config.seed);
        let daily = select_daily(&catalog, config.daily_count, &mut rng);
        let state = ProgressionState::new(catalog.instantiate_all(), daily);

        debug!(
            challenges = catalog.len(),
            daily = state.daily_challenges().len(),
            seed = config.seed,
            "progression created"
        );

        Self {
            catalog,
            config,
            state,
            activity: ActivityLog::new(),
            rng,
        }
    }

    /// Continue from a snapshot produced by an earlier session.
    ///
    /// The snapshot must satisfy [`ProgressionState::validate`] and only
    /// reference challenges from `catalog`. Catalog entries the snapshot does
    /// not know yet are appended as incomplete challenges. Later rerolls draw
    /// from a seed mixed with the snapshot's progress, so they do not replay
    /// the rotations of a fresh session with the same config.
    pub fn restore(
        catalog: Catalog,
        config: ProgressionConfig,
        mut state: ProgressionState,
    ) -> ProgressionResult<Self> {
        state.validate()?;

        for c in state.challenges().iter().chain(state.daily_challenges()) {
            if !catalog.contains(c.id()) {
                return Err(ProgressionError::UnknownChallenge(c.id().to_string()));
            }
        }

        for def in catalog.iter() {
            if state.challenge(&def.id).is_none() {
                debug!(id = %def.id, "adding catalog challenge missing from snapshot");
                state.challenges.push(def.instantiate());
            }
        }

        let seed = restore_seed(config.seed, &state);
        debug!(seed, xp = state.xp(), "progression restored");

        Ok(Self {
            rng: StdRng::seed_from_u64(seed),
            catalog,
            config,
            state,
            activity: ActivityLog::new(),
        })
    }

    /// The current state.
    pub fn state(&self) -> &ProgressionState {
        &self.state
    }

    /// An owned copy of the current state.
    pub fn snapshot(&self) -> ProgressionState {
        self.state.clone()
    }

    /// The catalog this progression runs over.
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// The configuration in use.
    pub fn config(&self) -> &ProgressionConfig {
        &self.config
    }

    /// Events recorded during this session.
    pub fn activity(&self) -> &ActivityLog {
        &self.activity
    }

    /// Complete a challenge now.
    pub fn complete_challenge(&mut self, id: &str) -> Completion {
        self.complete_challenge_at(id, Utc::now())
    }

    /// Complete a challenge at the given instant.
    ///
    /// XP is awarded at most once per challenge. The streak is evaluated on
    /// the UTC calendar day of `now`.
    pub fn complete_challenge_at(&mut self, id: &str, now: DateTime<Utc>) -> Completion {
        let Some(challenge) = self.state.challenges.iter_mut().find(|c| c.id() == id) else {
            debug!(id, "ignoring completion of unknown challenge");
            return Completion::NotFound;
        };

        if !challenge.complete(now) {
            debug!(id, "challenge already completed, no XP awarded");
            return Completion::AlreadyCompleted;
        }

        let xp_awarded = challenge.xp();
        let title = challenge.definition().title.clone();

        let daily_marked = self
            .state
            .daily_challenges
            .iter_mut()
            .find(|c| c.id() == id)
            .is_some_and(|c| c.complete(now));

        let previous_level = self.state.level;
        self.state.xp += u64::from(xp_awarded);
        self.state.level = level_for_xp(self.state.xp);

        let mut streak = self.state.streak();
        let streak_change = streak.record(now.date_naive());
        self.state.streak_days = streak.days();
        self.state.last_completed_date = streak.last_completed();

        let report = CompletionReport {
            challenge_id: id.to_string(),
            title,
            xp_awarded,
            total_xp: self.state.xp,
            previous_level,
            level: self.state.level,
            streak: streak_change,
            streak_days: self.state.streak_days,
            daily_marked,
        };

        debug!(
            id,
            xp = xp_awarded,
            total_xp = report.total_xp,
            streak_days = report.streak_days,
            "challenge completed"
        );
        self.record_completion(&report, now);

        Completion::Completed(report)
    }

    /// Draw a new daily rotation. XP, level, streak, and the all-time list
    /// are left alone.
    pub fn reset_daily_challenges(&mut self) {
        self.reset_daily_challenges_at(Utc::now());
    }

    /// Draw a new daily rotation, logging it at the given instant.
    pub fn reset_daily_challenges_at(&mut self, now: DateTime<Utc>) {
        self.state.daily_challenges =
            select_daily(&self.catalog, self.config.daily_count, &mut self.rng);

        let ids: Vec<String> = self
            .state
            .daily_challenges
            .iter()
            .map(|c| c.id().to_string())
            .collect();
        debug!(?ids, "daily challenges rerolled");

        self.activity.append(ActivityEntry::DailyRerolled {
            ids,
            timestamp: now,
        });
    }

    fn record_completion(&mut self, report: &CompletionReport, now: DateTime<Utc>) {
        self.activity.append(ActivityEntry::ChallengeCompleted {
            id: report.challenge_id.clone(),
            title: report.title.clone(),
            xp: report.xp_awarded,
            daily: report.daily_marked,
            timestamp: now,
        });

        if report.leveled_up() {
            info!(level = report.level, "level up");
            self.activity.append(ActivityEntry::LevelUp {
                level: report.level,
                timestamp: now,
            });
        }

        match report.streak {
            StreakChange::Started => {
                self.activity
                    .append(ActivityEntry::StreakStarted { timestamp: now });
            }
            StreakChange::Extended => {
                self.activity.append(ActivityEntry::StreakExtended {
                    days: report.streak_days,
                    timestamp: now,
                });
            }
            StreakChange::Reset { previous } => {
                self.activity.append(ActivityEntry::StreakReset {
                    previous,
                    timestamp: now,
                });
            }
            StreakChange::SameDay => {}
        }
    }
}

/// Seed for the reroll RNG of a restored progression.
fn restore_seed(seed: u64, state: &ProgressionState) -> u64 {
    const RESTORED: u64 = 0xA076_1D64_78BD_642F;
    let progress = state.xp() ^ ((state.completed_count() as u64) << 48);
    (seed ^ RESTORED)
        .wrapping_add(progress)
        .wrapping_mul(0x9E37_79B9_7F4A_7C15)
}
