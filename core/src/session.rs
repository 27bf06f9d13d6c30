//! Study sessions: which prepared words are drilled, and in what order.
//!
//! This sits on top of the engine. It filters and orders [`StudyWord`]s and
//! tracks the learner's place; it never changes how a word is parsed,
//! counted or judged.

use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::record::WordRecord;
use crate::word::StudyWord;
use crate::Config;

/// Sort key for a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortType {
    /// Deck order.
    #[default]
    Default,
    /// Shortest words first.
    Length,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
    /// Ignore the sort key and shuffle.
    Random,
}

/// Prepare records and keep those with a usable accent code.
pub fn learnable<I>(records: I) -> Vec<StudyWord>
where
    I: IntoIterator<Item = WordRecord>,
{
    let mut skipped = 0usize;
    let words: Vec<StudyWord> = records
        .into_iter()
        .map(StudyWord::prepare)
        .filter(|w| {
            let keep = w.has_accent();
            if !keep {
                skipped += 1;
            }
            keep
        })
        .collect();
    debug!(kept = words.len(), skipped, "filtered words without accent codes");
    words
}

/// Prepare records and keep those with audio. Accent codes are not required.
pub fn dictation_pool<I>(records: I) -> Vec<StudyWord>
where
    I: IntoIterator<Item = WordRecord>,
{
    let words: Vec<StudyWord> = records
        .into_iter()
        .map(StudyWord::prepare)
        .filter(StudyWord::has_audio)
        .collect();
    debug!(kept = words.len(), "built dictation pool");
    words
}

/// Order words for a session. Sorting is stable, so equal-length words keep
/// deck order.
pub fn order<R: Rng + ?Sized>(
    mut words: Vec<StudyWord>,
    sort_type: SortType,
    sort_order: SortOrder,
    rng: &mut R,
) -> Vec<StudyWord> {
    match sort_type {
        SortType::Default => words.sort_by_key(|w| w.record.id),
        SortType::Length => words.sort_by_key(|w| w.mora_count()),
    }
    match sort_order {
        SortOrder::Asc => {}
        SortOrder::Desc => words.reverse(),
        SortOrder::Random => words.shuffle(rng),
    }
    words
}

/// Row of the word list view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordListEntry {
    /// One-based position in the session.
    pub number: usize,
    pub text: String,
    pub gloss: String,
    pub current: bool,
}

/// Ordered words plus the learner's position.
#[derive(Debug, Clone, Default)]
pub struct Session {
    words: Vec<StudyWord>,
    cursor: usize,
}

impl Session {
    pub fn new(words: Vec<StudyWord>) -> Self {
        Self { words, cursor: 0 }
    }

    /// Order `words` according to `config` and resume at its saved index.
    pub fn build<R: Rng + ?Sized>(words: Vec<StudyWord>, config: &Config, rng: &mut R) -> Self {
        let mut session = Self::new(order(words, config.sort_type, config.sort_order, rng));
        session.resume(config.last_word_index);
        session
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn words(&self) -> &[StudyWord] {
        &self.words
    }

    /// Zero-based index of the current word.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn current(&self) -> Option<&StudyWord> {
        self.words.get(self.cursor)
    }

    /// Advance one word. `false` at the end.
    pub fn next(&mut self) -> bool {
        if self.cursor + 1 < self.words.len() {
            self.cursor += 1;
            true
        } else {
            false
        }
    }

    /// Go back one word. `false` at the start.
    pub fn prev(&mut self) -> bool {
        if self.cursor > 0 {
            self.cursor -= 1;
            true
        } else {
            false
        }
    }

    /// Jump to a one-based word number. Out-of-range numbers leave the
    /// cursor where it is.
    pub fn jump(&mut self, number: usize) -> bool {
        if number >= 1 && number <= self.words.len() {
            self.cursor = number - 1;
            true
        } else {
            false
        }
    }

    /// Restore a saved zero-based index, falling back to the first word.
    pub fn resume(&mut self, index: usize) {
        self.cursor = if index < self.words.len() { index } else { 0 };
    }

    pub fn word_list(&self) -> Vec<WordListEntry> {
        self.words
            .iter()
            .enumerate()
            .map(|(i, w)| WordListEntry {
                number: i + 1,
                text: w.display_text(),
                gloss: w.record.short_translation(),
                current: i == self.cursor,
            })
            .collect()
    }
}
