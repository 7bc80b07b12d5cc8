//! Plain-text rendering of view models.

use vocab_core::{FlashcardView, GlossaryView, SettingsView};

pub fn flashcard(view: &FlashcardView) -> String {
    let mut out = match view.progress {
        Some((n, total)) => format!("== Flashcards ({n}/{total}) ==\n"),
        None => String::from("== Flashcards ==\n"),
    };
    out.push_str(&format!("  {}\n", view.word));
    if !view.has_card() {
        // Empty state: the pronunciation slot carries the hint.
        out.push_str(&format!("  {}\n", view.pronunciation));
        return out;
    }
    if !view.pronunciation.is_empty() {
        out.push_str(&format!("  {}\n", view.pronunciation));
    }
    out.push_str(&format!("  {}\n", view.meaning));
    out
}

/// Glossary with 1-based row numbers running across sections.
pub fn glossary(view: &GlossaryView) -> String {
    if let Some(message) = view.empty_message {
        return format!("== Glossary ==\n  {message}\n");
    }

    let mut out = format!("== Glossary ({} words) ==\n", view.row_count());
    let mut row_no = 0;
    for section in &view.sections {
        out.push_str(&format!("-- {} --\n", section.category));
        for row in &section.rows {
            row_no += 1;
            out.push_str(&format!("{row_no:>4}. {}", row.headword));
            if !row.pronunciation.is_empty() {
                out.push_str(&format!("  {}", row.pronunciation));
            }
            out.push_str(&format!("  = {}\n", row.translation));
        }
    }
    out
}

pub fn settings(view: &SettingsView) -> String {
    let mut out = String::from("== Settings ==\n");
    for row in &view.rows {
        let mark = if row.enabled { 'x' } else { ' ' };
        out.push_str(&format!("  [{mark}] {}\n", row.category));
    }
    out.push_str("  (toggle <cat>, all, none; 'o' to close)\n");
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use vocab_core::view::{GlossaryRow, GlossarySection, ENABLE_HINT, NO_WORDS};
    use vocab_core::{Category, CategoryPreferences};

    #[test]
    fn flashcard_with_card() {
        let view = FlashcardView {
            word: "Pero".to_string(),
            pronunciation: "/PEH-roh/".to_string(),
            meaning: "but".to_string(),
            revealed: true,
            progress: Some((2, 5)),
        };
        assert_eq!(
            flashcard(&view),
            "== Flashcards (2/5) ==\n  Pero\n  /PEH-roh/\n  but\n"
        );
    }

    #[test]
    fn flashcard_empty() {
        let view = FlashcardView {
            word: NO_WORDS.to_string(),
            pronunciation: ENABLE_HINT.to_string(),
            meaning: String::new(),
            revealed: false,
            progress: None,
        };
        assert_eq!(
            flashcard(&view),
            "== Flashcards ==\n  No words\n  Enable categories in Settings\n"
        );
    }

    #[test]
    fn glossary_numbers_rows_across_sections() {
        let view = GlossaryView {
            sections: vec![
                GlossarySection {
                    category: Category::Basics,
                    anchor: "gloss-Basics".to_string(),
                    rows: vec![GlossaryRow {
                        headword: "Y".to_string(),
                        pronunciation: "/ee/".to_string(),
                        translation: "and".to_string(),
                    }],
                },
                GlossarySection {
                    category: Category::Places,
                    anchor: "gloss-Places".to_string(),
                    rows: vec![GlossaryRow {
                        headword: "el hotel".to_string(),
                        pronunciation: String::new(),
                        translation: "the hotel".to_string(),
                    }],
                },
            ],
            empty_message: None,
        };
        assert_eq!(
            glossary(&view),
            "== Glossary (2 words) ==\n-- Basics --\n   1. Y  /ee/  = and\n-- Places --\n   2. el hotel  = the hotel\n"
        );
    }

    #[test]
    fn settings_marks_enabled() {
        let mut prefs = CategoryPreferences::all(true);
        prefs.set(Category::Things, false);
        let text = settings(&SettingsView::render(&prefs));
        assert!(text.contains("  [x] Basics\n"));
        assert!(text.contains("  [ ] Things\n"));
    }
}
