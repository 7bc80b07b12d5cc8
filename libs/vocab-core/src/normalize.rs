//! Vocabulary normalizer.
//!
//! Flattens a category-keyed source into [`WordEntry`] values.
//!
//! # Format
//! ```json
//! {
//!   "Basics": [
//!     { "spanish": "Y", "english": "and", "phonetic": "ee" }
//!   ],
//!   "verbs (present)": [
//!     { "es": "yo muevo", "en": "I move" }
//!   ]
//! }
//! ```
//!
//! Keys are mapped with [`Category::from_label`]. Record fields accept the
//! aliases listed in [`HEADWORD_FIELDS`], [`TRANSLATION_FIELDS`] and
//! [`PRONUNCIATION_FIELDS`]. The source may also be a script assignment such
//! as `window.SPANISH_DATA = { ... };`, see [`parse_source`].

use crate::error::{Result, VocabError};
use crate::types::{Category, WordEntry};
use serde_json::{Map, Value};

/// Accepted field names for the Spanish headword, in priority order.
pub const HEADWORD_FIELDS: [&str; 3] = ["es", "spanish", "word"];
/// Accepted field names for the English translation, in priority order.
pub const TRANSLATION_FIELDS: [&str; 2] = ["en", "english"];
/// Accepted field names for the pronunciation guide, in priority order.
pub const PRONUNCIATION_FIELDS: [&str; 2] = ["ipa", "phonetic"];

/// Normalize raw vocabulary data.
///
/// Fails only when `raw` is absent or is not an object. Unknown categories
/// and incomplete records are dropped.
pub fn normalize(raw: Option<&Value>) -> Result<Vec<WordEntry>> {
    let source = match raw {
        None | Some(Value::Null) => return Err(VocabError::MissingSource),
        Some(Value::Object(map)) => map,
        Some(other) => {
            return Err(VocabError::NotAMapping {
                found: type_name(other),
            })
        }
    };

    let mut buckets = Buckets::default();
    for (label, records) in source {
        let Some(category) = Category::from_label(label) else {
            tracing::debug!(label = %label, "dropping unrecognized category");
            continue;
        };
        buckets.extend(category, label, records);
    }

    Ok(buckets.into_entries())
}

/// Parse source text, then normalize it.
pub fn normalize_source(text: &str) -> Result<Vec<WordEntry>> {
    let value = parse_source(text)?;
    normalize(Some(&value))
}

/// Parse vocabulary source text into a JSON value.
///
/// Accepts plain JSON or a single script assignment
/// (`window.NAME = {...};`). Whole-line `//` comments are ignored.
pub fn parse_source(text: &str) -> Result<Value> {
    let body = text
        .lines()
        .filter(|line| !line.trim_start().starts_with("//"))
        .collect::<Vec<_>>()
        .join("\n");
    let body = body.trim();

    if body.is_empty() {
        return Err(VocabError::MissingSource);
    }

    let payload = if body.starts_with('{') || body.starts_with('[') {
        body
    } else {
        match body.split_once('=') {
            Some((_, rhs)) => rhs.trim(),
            None => {
                return Err(VocabError::InvalidSource(
                    "expected JSON or an assignment".to_string(),
                ))
            }
        }
    };
    let payload = payload.trim_end_matches(';').trim_end();

    serde_json::from_str(payload).map_err(|e| VocabError::InvalidSource(e.to_string()))
}

/// Entries grouped by canonical category, in source order.
#[derive(Default)]
struct Buckets {
    by_category: [Vec<WordEntry>; 6],
}

impl Buckets {
    fn extend(&mut self, category: Category, label: &str, records: &Value) {
        let Value::Array(records) = records else {
            tracing::debug!(label = %label, "dropping category without a record list");
            return;
        };

        for (idx, record) in records.iter().enumerate() {
            match record.as_object().and_then(|fields| build_entry(category, fields)) {
                Some(entry) => self.by_category[category as usize].push(entry),
                None => tracing::debug!(label = %label, index = idx, "dropping incomplete record"),
            }
        }
    }

    fn into_entries(self) -> Vec<WordEntry> {
        self.by_category.into_iter().flatten().collect()
    }
}

fn build_entry(category: Category, fields: &Map<String, Value>) -> Option<WordEntry> {
    let headword = resolve(fields, &HEADWORD_FIELDS)?;
    let translation = resolve(fields, &TRANSLATION_FIELDS)?;
    let pronunciation = resolve(fields, &PRONUNCIATION_FIELDS).unwrap_or_default();

    Some(WordEntry {
        category,
        headword,
        pronunciation,
        translation,
    })
}

/// First alias holding a present value, stored exactly as written.
///
/// Empty strings and numeric zero count as absent; whitespace does not.
fn resolve(fields: &Map<String, Value>, aliases: &[&str]) -> Option<String> {
    aliases.iter().find_map(|alias| match fields.get(*alias)? {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Number(n) if n.as_f64() != Some(0.0) => Some(n.to_string()),
        _ => None,
    })
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
