//! Core types for SkateQuest: challenge definitions and the challenge catalog.
//!
//! The catalog is plain data. Completion state lives on
//! [`ChallengeInstance`] copies so the progression engine can mutate them
//! without touching the catalog. A [`Catalog`] can be built in code, taken
//! from the built-in starter set, or loaded from JSON.

/// The validated challenge catalog.
pub mod catalog;
/// Challenge definitions, difficulty tiers, and completable instances.
pub mod challenge;
/// Error types for catalog construction and loading.
pub mod error;

/// Re-export the catalog.
pub use catalog::Catalog;
/// Re-export challenge types.
pub use challenge::{ChallengeDefinition, ChallengeInstance, Difficulty};
/// Re-export error types.
pub use error::{CoreError, CoreResult};
