//! Word records and deck files.
//!
//! A deck is JSON exported from an Anki note type. Each row is an array of
//! strings in a fixed order:
//!
//! ```text
//! [japanese, pitch, pos, base_form, gaikokugo, chinese, audio, ...flags]
//! ```
//!
//! and the whole deck is either a bare array of rows or `{"data": [...]}`.
//! A `data.js` file (`const data = [...];`) is accepted too. Rows may also be
//! objects with named fields.

use std::path::{Path, PathBuf};

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, warn};

use crate::error::{Error, Result};

/// Minimum array length for a usable row: the word and its accent code.
const MIN_ROW_FIELDS: usize = 2;

static JS_ASSIGNMENT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)^\s*(?:const|let|var)\s+\w+\s*=\s*(.*?);?\s*$").unwrap());

static HTML_TAG: Lazy<Regex> = Lazy::new(|| Regex::new(r"<[^>]*>").unwrap());

/// One word as stored in a deck. Immutable once loaded.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordRecord {
    /// Zero-based position in the deck.
    #[serde(default)]
    pub id: usize,
    /// Annotated text, e.g. `会社[かいしゃ]`.
    pub japanese: String,
    /// Accent code, e.g. `⓪`.
    #[serde(default)]
    pub pitch: String,
    #[serde(default, alias = "wordType")]
    pub pos: Option<String>,
    #[serde(default, alias = "baseForm")]
    pub base_form: Option<String>,
    /// Loan-word source note.
    #[serde(default, alias = "foreign")]
    pub gaikokugo: Option<String>,
    /// Translation; may contain HTML.
    #[serde(default)]
    pub chinese: Option<String>,
    /// Audio file name relative to the deck's media directory.
    #[serde(default)]
    pub audio: Option<String>,
}

fn non_empty(field: Option<&String>) -> Option<String> {
    field.map(|s| s.trim()).filter(|s| !s.is_empty()).map(String::from)
}

impl WordRecord {
    /// Build a record from a positional row. `None` when the row is too short.
    pub fn from_row(id: usize, fields: &[String]) -> Option<Self> {
        if fields.len() < MIN_ROW_FIELDS {
            return None;
        }
        Some(Self {
            id,
            japanese: fields[0].clone(),
            pitch: fields[1].clone(),
            pos: non_empty(fields.get(2)),
            base_form: non_empty(fields.get(3)),
            gaikokugo: non_empty(fields.get(4)),
            chinese: non_empty(fields.get(5)),
            audio: non_empty(fields.get(6)),
        })
    }

    pub fn has_audio(&self) -> bool {
        self.audio.as_deref().is_some_and(|a| !a.trim().is_empty())
    }

    /// Path of the audio file under `media_dir`.
    pub fn audio_path(&self, media_dir: &Path) -> Option<PathBuf> {
        self.audio
            .as_deref()
            .filter(|a| !a.trim().is_empty())
            .map(|a| media_dir.join(a))
    }

    /// Translation with markup removed.
    pub fn translation_text(&self) -> Option<String> {
        self.chinese.as_deref().map(|raw| {
            HTML_TAG
                .replace_all(raw, "")
                .replace("&nbsp;", " ")
                .trim()
                .to_string()
        })
    }

    /// One-line gloss for list views: `...` for markup-heavy entries,
    /// otherwise the text before the first full-width parenthesis.
    pub fn short_translation(&self) -> String {
        match self.chinese.as_deref() {
            None => String::new(),
            Some(raw) if raw.contains('<') => "...".to_string(),
            Some(raw) => raw.split('（').next().unwrap_or_default().trim().to_string(),
        }
    }
}

/// All records of one deck, in file order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Deck {
    records: Vec<WordRecord>,
}

impl Deck {
    pub fn new(records: Vec<WordRecord>) -> Self {
        Self { records }
    }

    /// Load a deck from a `.json` or `.js` file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        let deck = Self::from_json_str(&content)?;
        debug!(path = %path.display(), records = deck.len(), "loaded deck");
        Ok(deck)
    }

    /// Parse deck content. Individual bad rows are skipped with a warning;
    /// only an unreadable overall layout is an error.
    pub fn from_json_str(content: &str) -> Result<Self> {
        let body = JS_ASSIGNMENT
            .captures(content)
            .and_then(|c| c.get(1))
            .map_or(content, |m| m.as_str());
        let value: Value = serde_json::from_str(body)?;

        let rows = match value {
            Value::Array(rows) => rows,
            Value::Object(mut obj) => match obj.remove("data") {
                Some(Value::Array(rows)) => rows,
                _ => {
                    return Err(Error::UnsupportedDeck(
                        "object without a `data` array".to_string(),
                    ))
                }
            },
            other => {
                return Err(Error::UnsupportedDeck(format!(
                    "expected an array or object, found {}",
                    json_kind(&other)
                )))
            }
        };

        let mut records = Vec::with_capacity(rows.len());
        for (id, row) in rows.into_iter().enumerate() {
            match row_to_record(id, row) {
                Some(record) => records.push(record),
                None => warn!(row = id, "skipping malformed deck row"),
            }
        }
        Ok(Self { records })
    }

    pub fn records(&self) -> &[WordRecord] {
        &self.records
    }

    pub fn into_records(self) -> Vec<WordRecord> {
        self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

fn row_to_record(id: usize, row: Value) -> Option<WordRecord> {
    match row {
        Value::Array(cells) => {
            let fields: Vec<String> = cells.into_iter().map(cell_text).collect();
            WordRecord::from_row(id, &fields)
        }
        Value::Object(_) => serde_json::from_value::<WordRecord>(row)
            .ok()
            .map(|record| WordRecord { id, ..record }),
        _ => None,
    }
}

fn cell_text(cell: Value) -> String {
    match cell {
        Value::String(s) => s,
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
