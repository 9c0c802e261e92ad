//! Error types for vocab-core.

use thiserror::Error;

use crate::types::GameMode;

/// Result type alias using LoadError.
pub type Result<T> = std::result::Result<T, LoadError>;

/// Errors that can occur while parsing vocabulary data.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("invalid manifest: {0}")]
    Manifest(#[source] serde_json::Error),

    #[error("invalid set file {path}: {source}")]
    SetFile {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("duplicate set id {0} in manifest")]
    DuplicateSetId(String),

    #[error("empty manifest")]
    EmptyManifest,
}

/// Errors that can occur when building a round.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RoundError {
    #[error("not enough words for {mode}: need {required}, have {available}")]
    InsufficientData {
        mode: GameMode,
        required: usize,
        available: usize,
    },
}
