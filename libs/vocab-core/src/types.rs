//! Core types for the vocabulary study tool.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use std::fmt;

/// Canonical vocabulary category.
///
/// Declaration order is the canonical display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Category {
    Basics,
    People,
    Places,
    Things,
    Adjectives,
    Verbs,
}

impl Category {
    /// All categories in canonical order.
    pub const ALL: [Category; 6] = [
        Self::Basics,
        Self::People,
        Self::Places,
        Self::Things,
        Self::Adjectives,
        Self::Verbs,
    ];

    /// Get the canonical name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Basics => "Basics",
            Self::People => "People",
            Self::Places => "Places",
            Self::Things => "Things",
            Self::Adjectives => "Adjectives",
            Self::Verbs => "Verbs",
        }
    }

    /// Map a free-form label onto a canonical category.
    ///
    /// Labels are trimmed and compared case-insensitively, first by prefix
    /// (`"basic"`, `"people"`, `"place"`, `"thing"`, `"adj"`, `"verb"`), then
    /// by exact canonical name.
    pub fn from_label(label: &str) -> Option<Self> {
        let label = label.trim().to_lowercase();

        const PREFIXES: [(&str, Category); 6] = [
            ("basic", Category::Basics),
            ("people", Category::People),
            ("place", Category::Places),
            ("thing", Category::Things),
            ("adj", Category::Adjectives),
            ("verb", Category::Verbs),
        ];

        PREFIXES
            .iter()
            .find(|(prefix, _)| label.starts_with(prefix))
            .map(|(_, cat)| *cat)
            .or_else(|| {
                Self::ALL
                    .into_iter()
                    .find(|c| c.as_str().to_lowercase() == label)
            })
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single normalized vocabulary item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordEntry {
    pub category: Category,
    /// Spanish word or phrase shown on the card front.
    pub headword: String,
    /// Pronunciation guide; empty when the source had none.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub pronunciation: String,
    /// English meaning shown once the card is revealed.
    pub translation: String,
}

/// Per-category enablement. Every category always has a value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct CategoryPreferences {
    enabled: BTreeMap<Category, bool>,
}

impl Default for CategoryPreferences {
    fn default() -> Self {
        Self::all(true)
    }
}

impl CategoryPreferences {
    /// Preferences with every category set to `enabled`.
    pub fn all(enabled: bool) -> Self {
        Self {
            enabled: Category::ALL.into_iter().map(|c| (c, enabled)).collect(),
        }
    }

    /// Build preferences from loosely-typed stored data.
    ///
    /// Boolean values keyed by canonical name are kept; anything missing or
    /// not a boolean falls back to enabled. A non-object value yields all
    /// categories enabled.
    pub fn from_value(value: &Value) -> Self {
        let mut prefs = Self::default();
        if let Value::Object(map) = value {
            for cat in Category::ALL {
                if let Some(Value::Bool(on)) = map.get(cat.as_str()) {
                    prefs.set(cat, *on);
                }
            }
        }
        prefs
    }

    pub fn is_enabled(&self, category: Category) -> bool {
        self.enabled.get(&category).copied().unwrap_or(true)
    }

    pub fn set(&mut self, category: Category, enabled: bool) {
        self.enabled.insert(category, enabled);
    }

    /// Flip a category and return its new value.
    pub fn toggle(&mut self, category: Category) -> bool {
        let on = !self.is_enabled(category);
        self.set(category, on);
        on
    }

    pub fn set_all(&mut self, enabled: bool) {
        for cat in Category::ALL {
            self.set(cat, enabled);
        }
    }

    /// Enabled categories in canonical order.
    pub fn active(&self) -> impl Iterator<Item = Category> + '_ {
        Category::ALL.into_iter().filter(|c| self.is_enabled(*c))
    }
}
