//! Configuration for a progression engine.

/// Configuration for a [`Progression`](crate::Progression).
#[derive(Debug, Clone)]
pub struct ProgressionConfig {
    /// RNG seed for the daily rotation.
    pub seed: u64,
    /// Number of challenges in each daily rotation.
    pub daily_count: usize,
}

impl Default for ProgressionConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            daily_count: 3,
        }
    }
}

impl ProgressionConfig {
    /// Set the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Set the daily rotation size. Clamped to the catalog size at selection time.
    pub fn with_daily_count(mut self, count: usize) -> Self {
        self.daily_count = count;
        self
    }
}
