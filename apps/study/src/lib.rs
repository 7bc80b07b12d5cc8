pub mod commands;
pub mod config;
pub mod data;
pub mod render;
pub mod speech;

use std::io::{self, BufRead, Write};

use rand::Rng;
use serde::Serialize;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use vocab_core::{
    Action, FileStore, FlashcardView, GlossaryView, KeyValueStore, Pronouncer, Session,
    SettingsView, Tab,
};

use crate::commands::Input;
use crate::config::{OutputFormat, StudyConfig};

/// Everything a front end needs to draw after a command.
#[derive(Debug, Serialize)]
pub struct Screen {
    pub tab: Tab,
    pub flashcard: FlashcardView,
    pub glossary: GlossaryView,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub settings: Option<SettingsView>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl Screen {
    pub fn capture<S, P, R>(session: &Session<S, P, R>) -> Self
    where
        S: KeyValueStore,
        P: Pronouncer,
        R: Rng,
    {
        Self {
            tab: session.active_tab(),
            flashcard: session.flashcard_view(),
            glossary: session.glossary_view(),
            settings: session.settings_open().then(|| session.settings_view()),
            error: None,
        }
    }

    pub fn to_text(&self) -> String {
        let mut out = String::new();
        if let Some(settings) = &self.settings {
            out.push_str(&render::settings(settings));
        }
        match self.tab {
            Tab::Flashcards => out.push_str(&render::flashcard(&self.flashcard)),
            Tab::Glossary => out.push_str(&render::glossary(&self.glossary)),
        }
        if let Some(error) = &self.error {
            out.push_str(&format!("! {error}\n"));
        }
        out
    }
}

pub fn run() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "warn".into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let config = StudyConfig::from_env()?;
    tracing::debug!(?config, "configuration loaded");

    let words = data::load_words(config.data_path.as_deref())?;
    let store = FileStore::new(&config.state_dir);
    let pronouncer = speech::from_config(&config.speech);
    let mut session = Session::start(words, store, pronouncer);

    let stdin = io::stdin();
    drive(&mut session, stdin.lock(), io::stdout(), config.output)?;
    Ok(())
}

/// Read commands from `input` until end of input or `quit`, writing a
/// screen after each one.
///
/// Lines starting with `{` are parsed as JSON [`Action`]s.
pub fn drive<S, P, R>(
    session: &mut Session<S, P, R>,
    input: impl BufRead,
    mut out: impl Write,
    format: OutputFormat,
) -> io::Result<()>
where
    S: KeyValueStore,
    P: Pronouncer,
    R: Rng,
{
    if format == OutputFormat::Text {
        writeln!(out, "Spanish flashcards. Type 'help' for commands.")?;
    }
    write_screen(&mut out, Screen::capture(session), format)?;

    for line in input.lines() {
        let line = line?;
        let parsed = if line.trim_start().starts_with('{') {
            serde_json::from_str::<Action>(&line)
                .map(Input::Action)
                .map_err(|e| format!("invalid action: {e}"))
        } else {
            commands::parse(&line).map_err(|e| e.to_string())
        };

        let error = match parsed {
            Ok(Input::Quit) => break,
            Ok(Input::Empty) => continue,
            Ok(Input::Help) => {
                if format == OutputFormat::Text {
                    writeln!(out, "{}", commands::HELP)?;
                }
                continue;
            }
            Ok(Input::Action(action)) => {
                session.dispatch(action);
                None
            }
            Err(e) => {
                tracing::debug!(line = %line, error = %e, "rejected command");
                Some(e)
            }
        };

        let mut screen = Screen::capture(session);
        screen.error = error;
        write_screen(&mut out, screen, format)?;
    }

    out.flush()
}

fn write_screen(out: &mut impl Write, screen: Screen, format: OutputFormat) -> io::Result<()> {
    match format {
        OutputFormat::Text => write!(out, "\n{}> ", screen.to_text())?,
        OutputFormat::Json => {
            serde_json::to_writer(&mut *out, &screen)?;
            writeln!(out)?;
        }
    }
    out.flush()
}
