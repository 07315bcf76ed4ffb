//! Challenge progression engine for SkateQuest.
//!
//! Tracks challenge completion, XP, the level derived from it, the daily
//! completion streak, and the rotating set of daily challenges. The engine is
//! pure in-memory logic: time and randomness are injected, nothing here does
//! I/O.

pub mod activity;
pub mod config;
pub mod daily;
pub mod engine;
pub mod error;
pub mod level;
pub mod shared;
pub mod state;
pub mod streak;

pub use activity::{ActivityEntry, ActivityLog};
pub use config::ProgressionConfig;
pub use daily::select_daily;
pub use engine::{Completion, CompletionReport, Progression};
pub use error::{ProgressionError, ProgressionResult};
pub use level::{LevelProgress, XP_PER_LEVEL, level_for_xp};
pub use shared::SharedProgression;
pub use state::ProgressionState;
pub use streak::{HOT_STREAK_DAYS, Streak, StreakChange};
