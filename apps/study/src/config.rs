//! Environment-driven configuration.

use anyhow::{Context, Result};
use std::path::PathBuf;

/// Speech output settings.
#[derive(Debug, Clone, PartialEq)]
pub struct SpeechConfig {
    /// TTS program; `None` disables speech.
    pub program: Option<String>,
    pub voice: String,
    pub lang: String,
    pub rate: f32,
}

impl Default for SpeechConfig {
    fn default() -> Self {
        Self {
            program: Some("espeak-ng".to_string()),
            voice: "Paulina".to_string(),
            lang: "es-MX".to_string(),
            rate: 1.0,
        }
    }
}

/// How screens are written to stdout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Text,
    /// One JSON document per screen, for embedding front ends.
    Json,
}

/// Application configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct StudyConfig {
    /// Vocabulary file; `None` uses the built-in word list.
    pub data_path: Option<PathBuf>,
    /// Directory holding persisted preferences.
    pub state_dir: PathBuf,
    pub speech: SpeechConfig,
    pub output: OutputFormat,
}

impl StudyConfig {
    /// Read configuration from process environment variables.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read configuration through `lookup`, applying defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let defaults = SpeechConfig::default();

        let program = match lookup("VOCAB_TTS") {
            Some(p) if p.trim().is_empty() => None,
            Some(p) => Some(p.trim().to_string()),
            None => defaults.program,
        };

        let rate = match lookup("VOCAB_RATE") {
            Some(raw) => raw
                .trim()
                .parse::<f32>()
                .ok()
                .filter(|r| r.is_finite() && *r > 0.0)
                .with_context(|| format!("VOCAB_RATE must be a positive number, got {raw:?}"))?,
            None => defaults.rate,
        };

        let output = match lookup("VOCAB_OUTPUT").as_deref().map(str::trim) {
            None | Some("") | Some("text") => OutputFormat::Text,
            Some("json") => OutputFormat::Json,
            Some(other) => anyhow::bail!("VOCAB_OUTPUT must be 'text' or 'json', got {other:?}"),
        };

        Ok(Self {
            data_path: lookup("VOCAB_DATA").map(PathBuf::from),
            state_dir: lookup("VOCAB_STATE_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(default_state_dir),
            speech: SpeechConfig {
                program,
                voice: lookup("VOCAB_VOICE").unwrap_or(defaults.voice),
                lang: lookup("VOCAB_LANG").unwrap_or(defaults.lang),
                rate,
            },
            output,
        })
    }
}

fn default_state_dir() -> PathBuf {
    // Use app data directory, fallback to current dir
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("spanish-study")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults() {
        let config = StudyConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config.data_path, None);
        assert!(config.state_dir.ends_with("spanish-study"));
        assert_eq!(config.speech, SpeechConfig::default());
        assert_eq!(config.output, OutputFormat::Text);
    }

    #[test]
    fn overrides() {
        let config = StudyConfig::from_lookup(lookup(&[
            ("VOCAB_DATA", "/tmp/words.json"),
            ("VOCAB_STATE_DIR", "/tmp/state"),
            ("VOCAB_TTS", "say"),
            ("VOCAB_VOICE", "Monica"),
            ("VOCAB_LANG", "es-ES"),
            ("VOCAB_RATE", "0.8"),
            ("VOCAB_OUTPUT", "json"),
        ]))
        .unwrap();
        assert_eq!(config.data_path, Some(PathBuf::from("/tmp/words.json")));
        assert_eq!(config.state_dir, PathBuf::from("/tmp/state"));
        assert_eq!(config.speech.program.as_deref(), Some("say"));
        assert_eq!(config.speech.voice, "Monica");
        assert_eq!(config.speech.lang, "es-ES");
        assert_eq!(config.speech.rate, 0.8);
        assert_eq!(config.output, OutputFormat::Json);
    }

    #[test]
    fn empty_tts_disables_speech() {
        let config = StudyConfig::from_lookup(lookup(&[("VOCAB_TTS", " ")])).unwrap();
        assert_eq!(config.speech.program, None);
    }

    #[test]
    fn invalid_rate_is_rejected() {
        assert!(StudyConfig::from_lookup(lookup(&[("VOCAB_RATE", "fast")])).is_err());
        assert!(StudyConfig::from_lookup(lookup(&[("VOCAB_RATE", "-1")])).is_err());
    }

    #[test]
    fn invalid_output_is_rejected() {
        assert!(StudyConfig::from_lookup(lookup(&[("VOCAB_OUTPUT", "xml")])).is_err());
    }
}
