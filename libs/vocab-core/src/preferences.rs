//! Persisted category preferences.

use crate::error::StorageError;
use crate::types::CategoryPreferences;
use serde_json::Value;
use std::collections::HashMap;
use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// Key under which category preferences are stored.
pub const PREFERENCES_KEY: &str = "spanish_settings_v1";

type Result<T> = std::result::Result<T, StorageError>;

/// Simple string key-value storage scoped to the application.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>>;
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
}

/// In-process store. Can be switched to unavailable to simulate a full or
/// disabled backing store.
#[derive(Debug, Default)]
pub struct MemoryStore {
    values: HashMap<String, String>,
    unavailable: bool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-populated with a single key.
    pub fn with_value(key: &str, value: &str) -> Self {
        let mut store = Self::new();
        store.values.insert(key.to_string(), value.to_string());
        store
    }

    pub fn set_unavailable(&mut self, unavailable: bool) {
        self.unavailable = unavailable;
    }

    /// Raw stored value, bypassing availability.
    pub fn peek(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        if self.unavailable {
            return Err(StorageError::Unavailable);
        }
        Ok(self.values.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        if self.unavailable {
            return Err(StorageError::Unavailable);
        }
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Directory-backed store: one `<key>.json` file per key.
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        match fs::read_to_string(self.path_for(key)) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        fs::create_dir_all(&self.dir)?;

        // Write to a sibling temp file, then rename over the target.
        let mut temp_file = NamedTempFile::new_in(&self.dir)?;
        temp_file.write_all(value.as_bytes())?;
        temp_file
            .persist(self.path_for(key))
            .map_err(|e| StorageError::Io(e.error))?;
        Ok(())
    }
}

/// Loads and saves [`CategoryPreferences`] through a [`KeyValueStore`].
///
/// Storage problems never escape: loading heals to defaults and saving
/// failures are logged and ignored.
#[derive(Debug)]
pub struct PreferenceStore<S> {
    store: S,
}

impl<S: KeyValueStore> PreferenceStore<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Load preferences, defaulting anything missing or invalid to enabled.
    pub fn load(&self) -> CategoryPreferences {
        let raw = match self.store.get(PREFERENCES_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => return CategoryPreferences::default(),
            Err(e) => {
                tracing::warn!(error = %e, "failed to read preferences, using defaults");
                return CategoryPreferences::default();
            }
        };

        match serde_json::from_str::<Value>(&raw) {
            Ok(value) => CategoryPreferences::from_value(&value),
            Err(e) => {
                tracing::warn!(error = %e, "stored preferences are corrupt, using defaults");
                CategoryPreferences::default()
            }
        }
    }

    /// Persist preferences. Failures are logged and swallowed.
    pub fn save(&mut self, prefs: &CategoryPreferences) {
        let result = serde_json::to_string(prefs)
            .map_err(|e| StorageError::Io(e.into()))
            .and_then(|json| self.store.set(PREFERENCES_KEY, &json));

        if let Err(e) = result {
            tracing::warn!(error = %e, "failed to save preferences");
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}
