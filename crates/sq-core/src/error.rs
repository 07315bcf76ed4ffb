use std::path::PathBuf;

/// Alias for `Result<T, CoreError>`.
pub type CoreResult<T> = Result<T, CoreError>;

/// Errors that can occur while building or loading a challenge catalog.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// A challenge definition has an empty or whitespace-only id.
    #[error("challenge id must not be empty")]
    EmptyId,

    /// Two challenge definitions share the same id.
    #[error("duplicate challenge id: \"{0}\"")]
    DuplicateId(String),

    /// A challenge definition awards no XP.
    #[error("challenge \"{0}\" must award a positive amount of XP")]
    ZeroXp(String),

    /// The catalog contains no challenges.
    #[error("challenge catalog is empty")]
    EmptyCatalog,

    /// The catalog file is not valid JSON for a list of challenges.
    #[error("invalid catalog JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// The catalog file could not be read.
    #[error("cannot read catalog {}: {source}", path.display())]
    Io {
        /// Path of the catalog file.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },
}
