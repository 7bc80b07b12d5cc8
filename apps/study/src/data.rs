//! Vocabulary loading.

use anyhow::{Context, Result};
use std::borrow::Cow;
use std::fs;
use std::path::Path;
use vocab_core::{normalize_source, WordEntry};

/// Word list shipped with the application.
pub const BUILTIN_VOCABULARY: &str = include_str!("../data/spanish_full_vocab.js");

/// Load and normalize vocabulary from `path`, or the built-in list.
pub fn load_words(path: Option<&Path>) -> Result<Vec<WordEntry>> {
    let text = match path {
        Some(path) => Cow::Owned(
            fs::read_to_string(path)
                .with_context(|| format!("failed to read vocabulary file {}", path.display()))?,
        ),
        None => Cow::Borrowed(BUILTIN_VOCABULARY),
    };

    let words = normalize_source(&text).context("no usable vocabulary data found")?;
    tracing::info!(words = words.len(), "vocabulary loaded");
    Ok(words)
}
