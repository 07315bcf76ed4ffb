//! Error types for the progression engine.

use thiserror::Error;

/// Result type for progression operations.
pub type ProgressionResult<T> = Result<T, ProgressionError>;

/// Errors raised when restoring a progression from outside data.
///
/// Completing an unknown challenge is not an error; see
/// [`Completion::NotFound`](crate::engine::Completion::NotFound).
#[derive(Debug, Error)]
pub enum ProgressionError {
    /// A restored snapshot breaks one of the state invariants.
    #[error("invalid snapshot: {0}")]
    InvalidSnapshot(String),

    /// A restored snapshot references a challenge missing from the catalog.
    #[error("snapshot references unknown challenge: {0}")]
    UnknownChallenge(String),
}
