//! Practice deck: filtered, shuffled working set with a cursor.

use crate::types::{CategoryPreferences, WordEntry};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

/// Randomized practice order over the enabled vocabulary.
///
/// The deck owns copies of the entries it serves; the source word list is
/// never reordered.
#[derive(Debug)]
pub struct DeckEngine<R = StdRng> {
    cards: Vec<WordEntry>,
    cursor: usize,
    revealed: bool,
    rng: R,
}

impl DeckEngine<StdRng> {
    /// Empty deck seeded from the operating system.
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_os_rng())
    }
}

impl Default for DeckEngine<StdRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> DeckEngine<R> {
    /// Empty deck drawing randomness from `rng`.
    pub fn with_rng(rng: R) -> Self {
        Self {
            cards: Vec::new(),
            cursor: 0,
            revealed: false,
            rng,
        }
    }

    /// Rebuild from the words whose category is enabled in `prefs`.
    pub fn rebuild(&mut self, words: &[WordEntry], prefs: &CategoryPreferences) {
        self.cards = words
            .iter()
            .filter(|w| prefs.is_enabled(w.category))
            .cloned()
            .collect();
        self.cards.shuffle(&mut self.rng);
        self.cursor = 0;
        self.revealed = false;
        tracing::debug!(cards = self.cards.len(), "deck rebuilt");
    }

    /// Card under the cursor, or `None` when the deck is empty.
    pub fn current(&self) -> Option<&WordEntry> {
        self.cards.get(self.cursor)
    }

    /// Move to the next card, reshuffling after the last one.
    pub fn advance(&mut self) {
        if self.cards.is_empty() {
            return;
        }
        self.cursor += 1;
        if self.cursor >= self.cards.len() {
            self.cards.shuffle(&mut self.rng);
            self.cursor = 0;
            tracing::debug!(cards = self.cards.len(), "deck exhausted, reshuffled");
        }
        self.revealed = false;
    }

    pub fn toggle_reveal(&mut self) {
        self.revealed = !self.revealed;
    }

    pub fn is_revealed(&self) -> bool {
        self.revealed
    }

    /// Cursor position, or `None` when the deck is empty.
    pub fn position(&self) -> Option<usize> {
        (!self.cards.is_empty()).then_some(self.cursor)
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Cards in current practice order.
    pub fn entries(&self) -> &[WordEntry] {
        &self.cards
    }
}
