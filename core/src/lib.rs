//! libpitch-core
//!
//! Text processing for Japanese pitch-accent drills, shared by the drill
//! front-end and the deck tools.
//!
//! Public API:
//! - `annotation` - parse `漢字[かんじ]` strings into `Segment`s
//! - `mora` - split kana into morae and count them
//! - `pitch` - decode `⓪①…` accent codes, judge selections, pitch contours
//! - `answer` - expand and match typed readings
//! - `StudyWord`, `Session` - prepared words and session ordering on top
//! - `Config` - learner settings, loaded from TOML
//!
//! The first four modules are pure functions of their inputs and never read
//! `Config`.
use serde::{Deserialize, Serialize};

pub mod kana;

pub mod annotation;
pub use annotation::Segment;

pub mod mora;

pub mod pitch;
pub use pitch::{Evaluation, Hint, Verdict};

pub mod answer;
pub use answer::AnswerSet;

pub mod error;
pub use error::{Error, Result};

pub mod record;
pub use record::{Deck, WordRecord};

pub mod word;
pub use word::StudyWord;

pub mod session;
pub use session::{Session, SortOrder, SortType, WordListEntry};

pub mod quiz;
pub use quiz::{DictationQuestion, PitchQuestion, QuestionState};

/// Keyboard row used to pick accent positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum KeyShortcut {
    #[default]
    Qwerty,
    Alphabet,
    Numeric,
}

impl KeyShortcut {
    /// Keys for positions 0 through 9, in order.
    pub fn keys(&self) -> &'static str {
        match self {
            KeyShortcut::Qwerty => "qwertyuiop",
            KeyShortcut::Alphabet => "abcdefghij",
            KeyShortcut::Numeric => "1234567890",
        }
    }

    /// Position selected by `key`, case-insensitively.
    pub fn position_for(&self, key: char) -> Option<usize> {
        let key = key.to_ascii_lowercase();
        self.keys().chars().position(|k| k == key)
    }

    pub fn key_for(&self, position: usize) -> Option<char> {
        self.keys().chars().nth(position)
    }
}

/// Learner settings.
///
/// Missing fields fall back to their defaults, so an old or partial settings
/// file still loads. Only the session and front-end layers read this.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    pub sort_type: SortType,
    pub sort_order: SortOrder,
    pub key_shortcut: KeyShortcut,
    /// Show part of speech, base form and translation.
    pub show_info: bool,
    /// Play audio when a word is shown.
    pub autoplay: bool,
    /// Reveal answers instead of asking.
    pub learning_mode: bool,
    /// Zero-based session index to resume at.
    pub last_word_index: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            sort_type: SortType::Default,
            sort_order: SortOrder::Asc,
            key_shortcut: KeyShortcut::Qwerty,
            show_info: true,
            autoplay: true,
            learning_mode: false,
            last_word_index: 0,
        }
    }
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load_toml<P: AsRef<std::path::Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        Ok(toml::from_str(&content)?)
    }

    /// Save configuration to a TOML file.
    pub fn save_toml<P: AsRef<std::path::Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content).map_err(|e| Error::io(path, e))
    }

    /// Copy of these settings with `key` set from its textual form, as typed
    /// in a `key=value` command. `true`/`false` and integers are read as
    /// such; anything else is a string (`sort_order=desc`).
    pub fn with_setting(&self, key: &str, value: &str) -> Result<Self> {
        let mut table = match toml::Value::try_from(self)? {
            toml::Value::Table(table) => table,
            _ => return Err(Error::UnknownSetting(key.to_string())),
        };
        if !table.contains_key(key) {
            return Err(Error::UnknownSetting(key.to_string()));
        }
        let value = value.trim();
        let parsed = if let Ok(b) = value.parse::<bool>() {
            toml::Value::Boolean(b)
        } else if let Ok(n) = value.parse::<i64>() {
            toml::Value::Integer(n)
        } else {
            toml::Value::String(value.to_string())
        };
        table.insert(key.to_string(), parsed);
        Ok(toml::Value::Table(table).try_into()?)
    }

    /// Load configuration from TOML string.
    pub fn from_toml_str(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Serialize configuration to TOML string.
    pub fn to_toml_string(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}
