//! Read-only view models for the flashcard, glossary and settings panels.

use crate::deck::DeckEngine;
use crate::types::{Category, CategoryPreferences, WordEntry};
use rand::Rng;
use serde::Serialize;

pub const NO_WORDS: &str = "No words";
pub const ENABLE_HINT: &str = "Enable categories in Settings";
pub const REVEAL_PROMPT: &str = "Tap Flip to reveal";
pub const GLOSSARY_EMPTY: &str = "No words. Enable categories in Settings.";

/// Format a pronunciation guide as `/guide/`, or empty.
pub fn format_pronunciation(pronunciation: &str) -> String {
    if pronunciation.is_empty() {
        String::new()
    } else {
        format!("/{pronunciation}/")
    }
}

/// What the flashcard panel shows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FlashcardView {
    pub word: String,
    pub pronunciation: String,
    pub meaning: String,
    pub revealed: bool,
    /// 1-based card number and deck size; `None` when there is no card.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub progress: Option<(usize, usize)>,
}

impl FlashcardView {
    pub fn render<R: Rng>(deck: &DeckEngine<R>) -> Self {
        let Some(card) = deck.current() else {
            return Self {
                word: NO_WORDS.to_string(),
                pronunciation: ENABLE_HINT.to_string(),
                meaning: String::new(),
                revealed: false,
                progress: None,
            };
        };

        let revealed = deck.is_revealed();
        Self {
            word: card.headword.clone(),
            pronunciation: format_pronunciation(&card.pronunciation),
            meaning: if revealed {
                card.translation.clone()
            } else {
                REVEAL_PROMPT.to_string()
            },
            revealed,
            progress: deck.position().map(|pos| (pos + 1, deck.len())),
        }
    }

    pub fn has_card(&self) -> bool {
        self.progress.is_some()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GlossaryRow {
    pub headword: String,
    pub pronunciation: String,
    pub translation: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GlossarySection {
    pub category: Category,
    /// Jump target id, e.g. `gloss-Verbs`.
    pub anchor: String,
    pub rows: Vec<GlossaryRow>,
}

/// Enabled vocabulary grouped by category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GlossaryView {
    pub sections: Vec<GlossarySection>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub empty_message: Option<&'static str>,
}

impl GlossaryView {
    pub fn render(words: &[WordEntry], prefs: &CategoryPreferences) -> Self {
        let sections: Vec<GlossarySection> = prefs
            .active()
            .filter_map(|category| {
                let rows: Vec<GlossaryRow> = words
                    .iter()
                    .filter(|w| w.category == category)
                    .map(|w| GlossaryRow {
                        headword: w.headword.clone(),
                        pronunciation: format_pronunciation(&w.pronunciation),
                        translation: w.translation.clone(),
                    })
                    .collect();
                (!rows.is_empty()).then(|| GlossarySection {
                    category,
                    anchor: section_anchor(category),
                    rows,
                })
            })
            .collect();

        let empty_message = sections.is_empty().then_some(GLOSSARY_EMPTY);
        Self {
            sections,
            empty_message,
        }
    }

    pub fn row_count(&self) -> usize {
        self.sections.iter().map(|s| s.rows.len()).sum()
    }
}

/// Anchor id of a glossary section.
pub fn section_anchor(category: Category) -> String {
    format!("gloss-{}", category.as_str())
}

/// Entries listed by the glossary, in display order.
pub fn glossary_entries<'a>(
    words: &'a [WordEntry],
    prefs: &CategoryPreferences,
) -> Vec<&'a WordEntry> {
    prefs
        .active()
        .flat_map(|category| words.iter().filter(move |w| w.category == category))
        .collect()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SettingsRow {
    pub category: Category,
    pub enabled: bool,
}

/// Category checkboxes of the settings panel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SettingsView {
    pub rows: Vec<SettingsRow>,
}

impl SettingsView {
    pub fn render(prefs: &CategoryPreferences) -> Self {
        Self {
            rows: Category::ALL
                .into_iter()
                .map(|category| SettingsRow {
                    category,
                    enabled: prefs.is_enabled(category),
                })
                .collect(),
        }
    }
}
