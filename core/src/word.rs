//! Records prepared for drilling.

use std::collections::BTreeSet;
use std::ops::RangeInclusive;

use crate::annotation::{self, Segment};
use crate::answer::AnswerSet;
use crate::kana;
use crate::mora;
use crate::pitch;
use crate::record::WordRecord;

/// A [`WordRecord`] with everything the drills derive from it computed once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StudyWord {
    pub record: WordRecord,
    pub segments: Vec<Segment>,
    /// Kana transcription used for mora counting.
    pub kana: String,
    pub morae: Vec<String>,
    /// Accepted accent positions.
    pub accents: BTreeSet<usize>,
}

impl StudyWord {
    pub fn prepare(record: WordRecord) -> Self {
        let segments = annotation::parse(&record.japanese);
        let kana = kana::kana_only(&annotation::reading_of(&segments));
        let morae = mora::segment(&kana);
        let accents = pitch::decode(&record.pitch);
        Self {
            record,
            segments,
            kana,
            morae,
            accents,
        }
    }

    pub fn mora_count(&self) -> usize {
        self.morae.len()
    }

    /// Highest offered position: the mora count, capped at what the code
    /// alphabet can express.
    pub fn max_position(&self) -> usize {
        pitch::max_position(self.mora_count()).min(pitch::MAX_POSITION)
    }

    /// Selectable positions, `0..=max_position()`. Never empty.
    pub fn options(&self) -> RangeInclusive<usize> {
        0..=self.max_position()
    }

    /// Usable in a pitch drill: the accent code decoded to something.
    pub fn has_accent(&self) -> bool {
        !self.accents.is_empty()
    }

    /// Usable in a dictation drill: there is audio to dictate.
    pub fn has_audio(&self) -> bool {
        self.record.has_audio()
    }

    pub fn display_text(&self) -> String {
        annotation::display_text(&self.segments)
    }

    pub fn answers(&self) -> AnswerSet {
        AnswerSet::generate(&self.segments)
    }
}
