//! Study session: owns all mutable state and applies user commands.

use crate::deck::DeckEngine;
use crate::preferences::{KeyValueStore, PreferenceStore};
use crate::speech::Pronouncer;
use crate::types::{Category, CategoryPreferences, WordEntry};
use crate::view::{self, FlashcardView, GlossaryView, SettingsView};
use rand::rngs::StdRng;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Visible panel.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tab {
    #[default]
    Flashcards,
    Glossary,
}

/// A discrete user command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Action {
    Flip,
    Advance,
    SpeakCurrent,
    /// Speak the glossary row at this display index.
    SpeakRow { index: usize },
    ToggleCategory { category: Category },
    SetCategory { category: Category, enabled: bool },
    SelectAll,
    DeselectAll,
    ShowTab { tab: Tab },
    ToggleSettings,
}

/// Single-owner study session.
///
/// Preference changes are persisted and always rebuild the deck.
pub struct Session<S, P, R = StdRng> {
    words: Vec<WordEntry>,
    prefs: CategoryPreferences,
    store: PreferenceStore<S>,
    deck: DeckEngine<R>,
    pronouncer: P,
    tab: Tab,
    settings_open: bool,
}

impl<S: KeyValueStore, P: Pronouncer> Session<S, P, StdRng> {
    /// Start a session: load preferences and deal the first deck.
    pub fn start(words: Vec<WordEntry>, store: S, pronouncer: P) -> Self {
        Self::with_deck(words, store, pronouncer, DeckEngine::new())
    }
}

impl<S: KeyValueStore, P: Pronouncer, R: Rng> Session<S, P, R> {
    /// Start a session around an existing (e.g. seeded) deck engine.
    pub fn with_deck(words: Vec<WordEntry>, store: S, pronouncer: P, deck: DeckEngine<R>) -> Self {
        let store = PreferenceStore::new(store);
        let prefs = store.load();
        let mut session = Self {
            words,
            prefs,
            store,
            deck,
            pronouncer,
            tab: Tab::default(),
            settings_open: false,
        };
        session.deck.rebuild(&session.words, &session.prefs);
        tracing::info!(
            words = session.words.len(),
            active = session.deck.len(),
            "session started"
        );
        session
    }

    /// Apply one action.
    pub fn dispatch(&mut self, action: Action) {
        tracing::trace!(?action, "dispatch");
        match action {
            Action::Flip => self.on_flip(),
            Action::Advance => self.on_advance(),
            Action::SpeakCurrent => self.on_speak_current(),
            Action::SpeakRow { index } => self.on_speak_row(index),
            Action::ToggleCategory { category } => self.on_toggle_category(category),
            Action::SetCategory { category, enabled } => self.on_set_category(category, enabled),
            Action::SelectAll => self.on_select_all(),
            Action::DeselectAll => self.on_deselect_all(),
            Action::ShowTab { tab } => self.on_show_tab(tab),
            Action::ToggleSettings => self.on_toggle_settings(),
        }
    }

    pub fn on_flip(&mut self) {
        self.deck.toggle_reveal();
    }

    pub fn on_advance(&mut self) {
        self.deck.advance();
    }

    /// Speak the current flashcard's headword, if any.
    pub fn on_speak_current(&mut self) {
        if let Some(text) = self.deck.current().map(|w| w.headword.clone()) {
            self.speak(&text);
        }
    }

    /// Speak an entry's headword (glossary row selection).
    pub fn on_speak_entry(&mut self, entry: &WordEntry) {
        self.speak(&entry.headword);
    }

    /// Speak the glossary row at `index`; out-of-range indices are ignored.
    pub fn on_speak_row(&mut self, index: usize) {
        let text = view::glossary_entries(&self.words, &self.prefs)
            .get(index)
            .map(|w| w.headword.clone());
        match text {
            Some(text) => self.speak(&text),
            None => tracing::debug!(index, "no glossary row at index"),
        }
    }

    pub fn on_toggle_category(&mut self, category: Category) {
        self.prefs.toggle(category);
        self.preferences_changed();
    }

    pub fn on_set_category(&mut self, category: Category, enabled: bool) {
        self.prefs.set(category, enabled);
        self.preferences_changed();
    }

    pub fn on_select_all(&mut self) {
        self.prefs.set_all(true);
        self.preferences_changed();
    }

    pub fn on_deselect_all(&mut self) {
        self.prefs.set_all(false);
        self.preferences_changed();
    }

    pub fn on_show_tab(&mut self, tab: Tab) {
        self.tab = tab;
    }

    pub fn on_toggle_settings(&mut self) {
        self.settings_open = !self.settings_open;
    }

    pub fn flashcard_view(&self) -> FlashcardView {
        FlashcardView::render(&self.deck)
    }

    pub fn glossary_view(&self) -> GlossaryView {
        GlossaryView::render(&self.words, &self.prefs)
    }

    pub fn settings_view(&self) -> SettingsView {
        SettingsView::render(&self.prefs)
    }

    pub fn preferences(&self) -> &CategoryPreferences {
        &self.prefs
    }

    pub fn deck(&self) -> &DeckEngine<R> {
        &self.deck
    }

    pub fn words(&self) -> &[WordEntry] {
        &self.words
    }

    pub fn active_tab(&self) -> Tab {
        self.tab
    }

    pub fn settings_open(&self) -> bool {
        self.settings_open
    }

    pub fn pronouncer(&self) -> &P {
        &self.pronouncer
    }

    pub fn store(&self) -> &S {
        self.store.store()
    }

    fn preferences_changed(&mut self) {
        self.store.save(&self.prefs);
        self.deck.rebuild(&self.words, &self.prefs);
    }

    fn speak(&mut self, text: &str) {
        if text.trim().is_empty() {
            return;
        }
        if !self.pronouncer.is_ready() {
            tracing::debug!("speech unavailable, skipping");
            return;
        }
        self.pronouncer.speak(text);
    }
}
