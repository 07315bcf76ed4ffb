//! Thread-safe handle for hosts that dispatch from several threads.

use std::sync::{Arc, Mutex, MutexGuard};

use chrono::{DateTime, Utc};

use crate::engine::{Completion, Progression};
use crate::state::ProgressionState;

/// A cloneable, lockable [`Progression`].
///
/// Each operation holds the lock for the whole transition, so two racing
/// completions of the same challenge award XP once.
#[derive(Debug, Clone)]
pub struct SharedProgression {
    inner: Arc<Mutex<Progression>>,
}

impl SharedProgression {
    /// Wrap a progression.
    pub fn new(progression: Progression) -> Self {
        Self {
            inner: Arc::new(Mutex::new(progression)),
        }
    }

    // Transitions never leave the state half-applied, so a poisoned lock
    // still guards a consistent value.
    fn lock(&self) -> MutexGuard<'_, Progression> {
        self.inner
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Complete a challenge now.
    pub fn complete_challenge(&self, id: &str) -> Completion {
        self.lock().complete_challenge(id)
    }

    /// Complete a challenge at the given instant.
    pub fn complete_challenge_at(&self, id: &str, now: DateTime<Utc>) -> Completion {
        self.lock().complete_challenge_at(id, now)
    }

    /// Draw a new daily rotation.
    pub fn reset_daily_challenges(&self) {
        self.lock().reset_daily_challenges();
    }

    /// A copy of the current state.
    pub fn snapshot(&self) -> ProgressionState {
        self.lock().snapshot()
    }

    /// Run a read-only closure against the progression.
    pub fn with<T>(&self, f: impl FnOnce(&Progression) -> T) -> T {
        f(&self.lock())
    }
}

impl From<Progression> for SharedProgression {
    fn from(progression: Progression) -> Self {
        Self::new(progression)
    }
}
