//! Common test utilities for driving a study session end to end.
//!
//! Sessions use a seeded deck, a [`FileStore`] in a temporary directory and
//! a recording pronouncer instead of a real speech engine.

pub mod fixtures;

use rand::rngs::StdRng;
use rand::SeedableRng;
use tempfile::TempDir;
use vocab_core::{normalize, DeckEngine, FileStore, Pronouncer, Session};
use vocab_study::config::OutputFormat;

/// Pronouncer that remembers what it was asked to say.
#[derive(Debug, Default)]
pub struct Recorder {
    pub spoken: Vec<String>,
}

impl Pronouncer for Recorder {
    fn is_ready(&self) -> bool {
        true
    }

    fn speak(&mut self, text: &str) {
        self.spoken.push(text.to_string());
    }
}

pub type TestSession = Session<FileStore, Recorder, StdRng>;

/// Owns the state directory shared by sessions in one test.
pub struct TestContext {
    state_dir: TempDir,
}

impl TestContext {
    pub fn new() -> Self {
        Self {
            state_dir: tempfile::tempdir().expect("create temp dir"),
        }
    }

    /// Start a fresh session over the fixture vocabulary.
    pub fn session(&self) -> TestSession {
        let words = normalize(Some(&fixtures::vocabulary())).expect("fixture vocabulary");
        Session::with_deck(
            words,
            FileStore::new(self.state_dir.path()),
            Recorder::default(),
            DeckEngine::with_rng(StdRng::seed_from_u64(2024)),
        )
    }

    /// Run `lines` through a session and return everything written.
    pub fn run(&self, session: &mut TestSession, lines: &[&str], format: OutputFormat) -> String {
        let input = fixtures::script(lines);
        let mut out = Vec::new();
        vocab_study::drive(session, input.as_bytes(), &mut out, format).expect("drive session");
        String::from_utf8(out).expect("utf-8 output")
    }
}
