//! Per-word question state.
//!
//! A pitch question accepts exactly one answer. Once answered (or revealed in
//! learning mode) it is locked: every accepted position is shown and further
//! selections return the stored result unchanged.

use std::collections::BTreeSet;
use std::ops::RangeInclusive;

use rand::Rng;

use crate::answer::AnswerSet;
use crate::pitch::{self, Evaluation, Verdict};
use crate::word::StudyWord;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuestionState {
    Open,
    Answered(Evaluation),
    /// Shown without being asked.
    Revealed,
}

#[derive(Debug, Clone)]
pub struct PitchQuestion {
    accents: BTreeSet<usize>,
    max_position: usize,
    state: QuestionState,
}

impl PitchQuestion {
    pub fn new(word: &StudyWord) -> Self {
        Self {
            accents: word.accents.clone(),
            max_position: word.max_position(),
            state: QuestionState::Open,
        }
    }

    pub fn options(&self) -> RangeInclusive<usize> {
        0..=self.max_position
    }

    pub fn state(&self) -> &QuestionState {
        &self.state
    }

    pub fn is_locked(&self) -> bool {
        !matches!(self.state, QuestionState::Open)
    }

    /// Answer the question.
    ///
    /// The first in-range selection is judged and stored; later calls return
    /// that first result. Positions outside [`options`](Self::options) are
    /// ignored and leave the question open. A revealed question has no
    /// evaluation to return.
    pub fn select(&mut self, position: usize) -> Option<&Evaluation> {
        if matches!(self.state, QuestionState::Open) {
            if !self.options().contains(&position) {
                return None;
            }
            let eval = pitch::assess(position, &self.accents, self.max_position);
            self.state = QuestionState::Answered(eval);
        }
        self.evaluation()
    }

    /// Learning mode: show the answer without asking.
    pub fn reveal(&mut self) {
        if matches!(self.state, QuestionState::Open) {
            self.state = QuestionState::Revealed;
        }
    }

    pub fn evaluation(&self) -> Option<&Evaluation> {
        match &self.state {
            QuestionState::Answered(eval) => Some(eval),
            _ => None,
        }
    }

    /// Positions to mark as correct. Empty until the question is locked.
    pub fn revealed_positions(&self) -> Vec<usize> {
        if self.is_locked() {
            self.accents.iter().copied().collect()
        } else {
            Vec::new()
        }
    }

    /// Position for contour highlighting: the learner's pick when it was
    /// correct, otherwise any accepted position.
    pub fn highlight<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<usize> {
        let picked = self
            .evaluation()
            .filter(|e| e.verdict == Verdict::Correct)
            .map(|e| e.selected);
        pitch::highlight_position(&self.accents, picked, rng)
    }
}

/// Free-text check of a word's reading.
#[derive(Debug, Clone)]
pub struct DictationQuestion {
    answers: AnswerSet,
    attempts: usize,
    solved: bool,
}

impl DictationQuestion {
    pub fn new(word: &StudyWord) -> Self {
        Self {
            answers: word.answers(),
            attempts: 0,
            solved: false,
        }
    }

    pub fn check(&mut self, input: &str) -> bool {
        self.attempts += 1;
        let hit = self.answers.matches(input);
        self.solved |= hit;
        hit
    }

    pub fn attempts(&self) -> usize {
        self.attempts
    }

    pub fn is_solved(&self) -> bool {
        self.solved
    }

    pub fn answers(&self) -> &AnswerSet {
        &self.answers
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::WordRecord;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn word(japanese: &str, pitch: &str) -> StudyWord {
        StudyWord::prepare(WordRecord {
            japanese: japanese.to_string(),
            pitch: pitch.to_string(),
            ..Default::default()
        })
    }

    #[test]
    fn first_selection_locks() {
        // さかな, odaka (3)
        let mut q = PitchQuestion::new(&word("魚[さかな]", "③"));
        assert_eq!(q.options(), 0..=3);
        assert!(q.revealed_positions().is_empty());

        let first = q.select(0).cloned().unwrap();
        assert_eq!(first.verdict, Verdict::Ambiguous);
        assert!(q.is_locked());
        assert_eq!(q.revealed_positions(), vec![3]);

        // later picks are no-ops
        let again = q.select(3).cloned().unwrap();
        assert_eq!(again, first);
    }

    #[test]
    fn out_of_range_selection_is_ignored() {
        let mut q = PitchQuestion::new(&word("雨[あめ]", "①"));
        assert!(q.select(5).is_none());
        assert!(!q.is_locked());
        assert_eq!(q.select(1).unwrap().verdict, Verdict::Correct);
    }

    #[test]
    fn reveal_locks_without_verdict() {
        let mut q = PitchQuestion::new(&word("雨[あめ]", "①"));
        q.reveal();
        assert!(q.is_locked());
        assert!(q.select(1).is_none());
        assert_eq!(q.revealed_positions(), vec![1]);
    }

    #[test]
    fn highlight_uses_correct_pick() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut q = PitchQuestion::new(&word("今日[きょう]", "①⓪"));
        q.select(0);
        assert_eq!(q.highlight(&mut rng), Some(0));

        let mut wrong = PitchQuestion::new(&word("今日[きょう]", "①"));
        wrong.select(2);
        // ambiguous/incorrect picks fall back to an accepted position
        assert_eq!(wrong.highlight(&mut rng), Some(1));
    }

    #[test]
    fn dictation_accepts_mixed_script() {
        let mut q = DictationQuestion::new(&word("日[に] 本[ほん]", "②"));
        assert!(!q.check("にっぽん"));
        assert!(q.check("日ほん"));
        assert!(q.is_solved());
        assert_eq!(q.attempts(), 2);
    }
}
