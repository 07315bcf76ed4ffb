//! Interactive progression session.
//!
//! `PlaySession` turns lines of user input into progression operations and
//! renders the results as text. The stdin loop lives in `commands::play`.

use strsim::jaro_winkler;
use thiserror::Error;

use sq_core::Catalog;
use sq_progression::{Completion, CompletionReport, Progression, StreakChange};

use crate::commands::format_challenge_list;

/// Minimum similarity for a "did you mean" suggestion (0.0-1.0).
const SUGGEST_THRESHOLD: f64 = 0.75;

/// Entries shown by the `log` command.
const RECENT_ACTIVITY: usize = 10;

/// Errors surfaced to the player. None of them change progression state.
#[derive(Debug, Error)]
pub enum PlayError {
    /// Missing or malformed command argument.
    #[error("invalid choice: {0}")]
    InvalidChoice(String),

    /// No challenge matches the given id or title.
    #[error("unknown challenge: {id}{}", did_you_mean(.suggestion))]
    UnknownChallenge {
        /// What the player typed.
        id: String,
        /// Closest catalog id, if any is close enough.
        suggestion: Option<String>,
    },

    /// Unrecognised command word.
    #[error("unknown command: {0} (type 'help' for commands)")]
    UnknownCommand(String),

    /// Snapshot serialization failed.
    #[error("cannot export snapshot: {0}")]
    Json(#[from] serde_json::Error),
}

fn did_you_mean(suggestion: &Option<String>) -> String {
    suggestion
        .as_ref()
        .map(|s| format!(" (did you mean '{s}'?)"))
        .unwrap_or_default()
}

/// An interactive session over one progression.
pub struct PlaySession {
    progression: Progression,
}

impl PlaySession {
    /// Start a session.
    pub fn new(progression: Progression) -> Self {
        Self { progression }
    }

    /// The underlying progression.
    pub fn progression(&self) -> &Progression {
        &self.progression
    }

    /// Process a line of user input and return a response.
    pub fn process(&mut self, input: &str) -> Result<String, PlayError> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Ok(String::new());
        }

        let parts: Vec<&str> = trimmed.splitn(2, ' ').collect();
        let cmd = parts[0].to_lowercase();
        let rest = parts.get(1).map(|s| s.trim()).unwrap_or("");

        match cmd.as_str() {
            "complete" | "done" => self.do_complete(rest),
            "challenges" | "list" => Ok(self.do_challenges()),
            "daily" => Ok(self.do_daily()),
            "reroll" => Ok(self.do_reroll()),
            "status" => Ok(self.do_status()),
            "log" => Ok(self.do_log()),
            "export" => self.do_export(rest),
            "help" => Ok(HELP.to_string()),
            "quit" | "q" => Ok("Goodbye!".to_string()),
            other => Err(PlayError::UnknownCommand(other.to_string())),
        }
    }

    fn do_complete(&mut self, arg: &str) -> Result<String, PlayError> {
        if arg.is_empty() {
            return Err(PlayError::InvalidChoice(
                "usage: complete <challenge id or title>".to_string(),
            ));
        }

        let catalog = self.progression.catalog();
        let id = resolve_challenge(catalog, arg).ok_or_else(|| PlayError::UnknownChallenge {
            id: arg.to_string(),
            suggestion: suggest_challenge(catalog, arg),
        })?;

        match self.progression.complete_challenge(&id) {
            Completion::Completed(report) => Ok(self.render_completion(&report)),
            Completion::AlreadyCompleted => {
                let title = self
                    .progression
                    .state()
                    .challenge(&id)
                    .map(|c| c.definition().title.clone())
                    .unwrap_or(id);
                Ok(format!("Already completed: {title}. No extra XP."))
            }
            Completion::NotFound => Err(PlayError::UnknownChallenge {
                id,
                suggestion: None,
            }),
        }
    }

    fn render_completion(&self, report: &CompletionReport) -> String {
        let mut out = format!(
            "Completed {}: +{} XP ({} XP total)",
            report.title, report.xp_awarded, report.total_xp
        );
        if report.daily_marked {
            out.push_str("\n  Daily challenge done!");
        }
        if report.leveled_up() {
            out.push_str(&format!("\n  LEVEL UP! You reached level {}", report.level));
        }
        match report.streak {
            StreakChange::Started => out.push_str("\n  Streak started: 1 day"),
            StreakChange::Extended => {
                out.push_str(&format!("\n  Streak: {} days", report.streak_days));
                if self.progression.state().is_hot_streak() {
                    out.push_str(" (hot streak!)");
                }
            }
            StreakChange::Reset { previous } => out.push_str(&format!(
                "\n  Streak reset (was {previous} days), back to 1 day"
            )),
            StreakChange::SameDay => {}
        }
        out
    }

    fn do_challenges(&self) -> String {
        let state = self.progression.state();
        format!(
            "Challenges ({}/{} done):\n{}",
            state.completed_count(),
            state.challenges().len(),
            format_challenge_list(state.challenges())
        )
    }

    fn do_daily(&self) -> String {
        let state = self.progression.state();
        if state.daily_challenges().is_empty() {
            return "No daily challenges.".to_string();
        }
        format!(
            "Daily challenges ({}/{} done):\n{}",
            state.daily_completed_count(),
            state.daily_challenges().len(),
            format_challenge_list(state.daily_challenges())
        )
    }

    fn do_reroll(&mut self) -> String {
        self.progression.reset_daily_challenges();
        format!("Daily challenges rerolled.\n{}", self.do_daily())
    }

    fn do_status(&self) -> String {
        let state = self.progression.state();
        let progress = state.level_progress();

        let mut out = format!("Level {} · {} XP\n", state.level(), state.xp());
        out.push_str(&format!(
            "Next level: {} XP to go (level {} at {} XP)\n",
            progress.xp_to_next_level,
            progress.level + 1,
            progress.next_level_at
        ));
        out.push_str(&format!(
            "Completed challenges: {} / {}\n",
            state.completed_count(),
            state.challenges().len()
        ));
        out.push_str(&format!(
            "Daily: {} / {} done\n",
            state.daily_completed_count(),
            state.daily_challenges().len()
        ));

        let days = state.streak_days();
        let unit = if days == 1 { "day" } else { "days" };
        out.push_str(&format!("Streak: {days} {unit}"));
        if state.is_hot_streak() {
            out.push_str(" (hot streak!)");
        }
        out
    }

    fn do_log(&self) -> String {
        let activity = self.progression.activity();
        if activity.is_empty() {
            return "No activity yet.".to_string();
        }

        format!(
            "Activity ({} entries, showing last {}):\n\n{}",
            activity.len(),
            activity.recent(RECENT_ACTIVITY).len(),
            activity.export_text_recent(RECENT_ACTIVITY).trim_end()
        )
    }

    fn do_export(&self, format: &str) -> Result<String, PlayError> {
        match format.to_lowercase().as_str() {
            "markdown" | "md" | "" => Ok(self.progression.activity().export_markdown()),
            "text" | "txt" => Ok(self.progression.activity().export_text()),
            "json" => Ok(serde_json::to_string_pretty(self.progression.state())?),
            other => Err(PlayError::InvalidChoice(format!(
                "unknown format '{other}', use: markdown, text, json"
            ))),
        }
    }
}

/// Match an exact id, then a case-insensitive id or title.
fn resolve_challenge(catalog: &Catalog, input: &str) -> Option<String> {
    if let Some(def) = catalog.get(input) {
        return Some(def.id.clone());
    }
    let lower = input.to_lowercase();
    catalog
        .iter()
        .find(|d| d.id.to_lowercase() == lower || d.title.to_lowercase() == lower)
        .map(|d| d.id.clone())
}

/// Closest catalog id by id or title similarity.
fn suggest_challenge(catalog: &Catalog, input: &str) -> Option<String> {
    let lower = input.to_lowercase();
    catalog
        .iter()
        .map(|d| {
            let by_id = jaro_winkler(&lower, &d.id.to_lowercase());
            let by_title = jaro_winkler(&lower, &d.title.to_lowercase());
            (d.id.as_str(), by_id.max(by_title))
        })
        .filter(|(_, score)| *score >= SUGGEST_THRESHOLD)
        .max_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal))
        .map(|(id, _)| id.to_string())
}

const HELP: &str = "\
SkateQuest Commands:
  complete <id or title>        Complete a challenge (alias: done)
  challenges                    List all challenges
  daily                         Show today's daily challenges
  reroll                        Draw a new daily rotation
  status                        Show level, XP, and streak
  log                           Show recent activity
  export [markdown|text|json]   Export activity, or the state as JSON
  help                          Show this help
  quit                          Exit";
