//! Core vocabulary study library.
//!
//! Provides:
//! - Normalizer for category-keyed Spanish/English word lists
//! - Persisted per-category preferences over a key-value store
//! - Shuffled practice deck with reveal state
//! - Pronunciation capability trait
//! - Flashcard, glossary and settings view models
//! - Session controller applying user actions

pub mod deck;
pub mod error;
pub mod normalize;
pub mod preferences;
pub mod session;
pub mod speech;
pub mod types;
pub mod view;

pub use deck::DeckEngine;
pub use error::{Result, StorageError, VocabError};
pub use normalize::{normalize, normalize_source, parse_source};
pub use preferences::{FileStore, KeyValueStore, MemoryStore, PreferenceStore, PREFERENCES_KEY};
pub use session::{Action, Session, Tab};
pub use speech::{Pronouncer, Silent};
pub use types::{Category, CategoryPreferences, WordEntry};
pub use view::{FlashcardView, GlossaryView, SettingsView};
