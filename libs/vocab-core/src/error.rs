//! Error types for vocab-core.

use thiserror::Error;

/// Result type alias using VocabError.
pub type Result<T> = std::result::Result<T, VocabError>;

/// Errors that make the vocabulary source unusable.
#[derive(Debug, Error)]
pub enum VocabError {
    #[error("no vocabulary data found")]
    MissingSource,

    #[error("vocabulary data must be an object keyed by category, found {found}")]
    NotAMapping { found: &'static str },

    #[error("invalid vocabulary source: {0}")]
    InvalidSource(String),
}

/// Errors raised by a key-value store backing user preferences.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("storage unavailable")]
    Unavailable,

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
