//! Text commands read from the terminal.

use thiserror::Error;
use vocab_core::{Action, Category, Tab};

pub const HELP: &str = "\
Commands:
  f, flip          reveal / hide the translation
  n, next          next card
  s, speak         pronounce the current card
  c, cards         show flashcards
  g, glossary      show the glossary
  say <n>          pronounce glossary row n
  o, settings      open / close category settings
  toggle <cat>     switch a category on or off
  on <cat>         enable a category
  off <cat>        disable a category
  all / none       enable / disable every category
  help             show this help
  q, quit          exit";

/// A parsed input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    Action(Action),
    Help,
    Quit,
    Empty,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CommandError {
    #[error("unknown command: {0} (type 'help')")]
    UnknownCommand(String),

    #[error("unknown category: {0}")]
    UnknownCategory(String),

    #[error("{0} needs an argument")]
    MissingArgument(&'static str),

    #[error("invalid glossary row: {0}")]
    InvalidRow(String),
}

/// Parse one input line.
pub fn parse(line: &str) -> Result<Input, CommandError> {
    let line = line.trim();
    let (verb, rest) = match line.split_once(char::is_whitespace) {
        Some((verb, rest)) => (verb, rest.trim()),
        None => (line, ""),
    };

    let action = match verb.to_lowercase().as_str() {
        "" => return Ok(Input::Empty),
        "help" | "?" => return Ok(Input::Help),
        "q" | "quit" | "exit" => return Ok(Input::Quit),
        "f" | "flip" => Action::Flip,
        "n" | "next" => Action::Advance,
        "s" | "speak" => Action::SpeakCurrent,
        "c" | "cards" => Action::ShowTab {
            tab: Tab::Flashcards,
        },
        "g" | "glossary" => Action::ShowTab { tab: Tab::Glossary },
        "o" | "settings" => Action::ToggleSettings,
        "all" => Action::SelectAll,
        "none" => Action::DeselectAll,
        "toggle" => Action::ToggleCategory {
            category: category_arg("toggle", rest)?,
        },
        "on" => Action::SetCategory {
            category: category_arg("on", rest)?,
            enabled: true,
        },
        "off" => Action::SetCategory {
            category: category_arg("off", rest)?,
            enabled: false,
        },
        "say" => Action::SpeakRow {
            index: row_arg(rest)?,
        },
        _ => return Err(CommandError::UnknownCommand(verb.to_string())),
    };
    Ok(Input::Action(action))
}

fn category_arg(verb: &'static str, rest: &str) -> Result<Category, CommandError> {
    if rest.is_empty() {
        return Err(CommandError::MissingArgument(verb));
    }
    Category::from_label(rest).ok_or_else(|| CommandError::UnknownCategory(rest.to_string()))
}

/// 1-based row number to 0-based index.
fn row_arg(rest: &str) -> Result<usize, CommandError> {
    if rest.is_empty() {
        return Err(CommandError::MissingArgument("say"));
    }
    match rest.parse::<usize>() {
        Ok(n) if n >= 1 => Ok(n - 1),
        _ => Err(CommandError::InvalidRow(rest.to_string())),
    }
}
