//! Drill engine for libpitch
//!
//! Owns a study session and the question for the word currently shown. The
//! front-end (terminal, GUI) forwards keystrokes and typed text here and
//! renders what comes back.

use std::path::PathBuf;

use libpitch_core::session::{self, Session};
use libpitch_core::{
    DictationQuestion, Evaluation, PitchQuestion, StudyWord, WordRecord,
};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{debug, info};

use crate::config::DrillConfig;

/// Which kind of question the drill asks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrillMode {
    /// Pick the accent position.
    Pitch,
    /// Type the word after hearing it.
    Dictation,
}

/// Question for the current word.
#[derive(Debug, Clone)]
pub enum Question {
    Pitch(PitchQuestion),
    Dictation(DictationQuestion),
}

/// Public drill engine
pub struct Drill {
    records: Vec<WordRecord>,
    config: DrillConfig,
    mode: DrillMode,
    session: Session,
    question: Option<Question>,
    rng: StdRng,
}

impl Drill {
    /// Construct a drill over `records` with a randomly seeded generator.
    pub fn new(records: Vec<WordRecord>, config: DrillConfig, mode: DrillMode) -> Self {
        Self::with_rng(records, config, mode, StdRng::from_entropy())
    }

    /// Construct with a caller-supplied generator (deterministic shuffles).
    pub fn with_rng(
        records: Vec<WordRecord>,
        config: DrillConfig,
        mode: DrillMode,
        mut rng: StdRng,
    ) -> Self {
        let words = Self::pool(&records, mode);
        let session = Session::build(words, config.base(), &mut rng);
        info!(words = session.len(), ?mode, "drill session ready");
        let mut drill = Self {
            records,
            config,
            mode,
            session,
            question: None,
            rng,
        };
        drill.load_current();
        drill
    }

    fn pool(records: &[WordRecord], mode: DrillMode) -> Vec<StudyWord> {
        let records = records.iter().cloned();
        match mode {
            DrillMode::Pitch => session::learnable(records),
            DrillMode::Dictation => session::dictation_pool(records),
        }
    }

    /// Build the question for the word under the cursor and remember the
    /// position for the next run.
    fn load_current(&mut self) {
        self.config.base.last_word_index = self.session.cursor();
        self.question = self.session.current().map(|word| match self.mode {
            DrillMode::Pitch => {
                let mut q = PitchQuestion::new(word);
                if self.config.base.learning_mode {
                    q.reveal();
                }
                Question::Pitch(q)
            }
            DrillMode::Dictation => Question::Dictation(DictationQuestion::new(word)),
        });
    }

    pub fn config(&self) -> &DrillConfig {
        &self.config
    }

    pub fn mode(&self) -> DrillMode {
        self.mode
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn current(&self) -> Option<&StudyWord> {
        self.session.current()
    }

    pub fn question(&self) -> Option<&Question> {
        self.question.as_ref()
    }

    pub fn pitch_question(&self) -> Option<&PitchQuestion> {
        match &self.question {
            Some(Question::Pitch(q)) => Some(q),
            _ => None,
        }
    }

    /// Answer the pitch question with a position.
    pub fn select(&mut self, position: usize) -> Option<Evaluation> {
        match &mut self.question {
            Some(Question::Pitch(q)) => {
                let eval = q.select(position).cloned();
                if let Some(e) = &eval {
                    debug!(position, verdict = ?e.verdict, "pitch answer");
                }
                eval
            }
            _ => None,
        }
    }

    /// Answer the pitch question through the configured key row.
    pub fn select_key(&mut self, key: char) -> Option<Evaluation> {
        let position = self.config.base.key_shortcut.position_for(key)?;
        self.select(position)
    }

    /// Check typed text against the dictation question.
    pub fn check(&mut self, input: &str) -> Option<bool> {
        match &mut self.question {
            Some(Question::Dictation(q)) => {
                let hit = q.check(input);
                debug!(hit, attempts = q.attempts(), "dictation answer");
                Some(hit)
            }
            _ => None,
        }
    }

    /// Accent position to draw the contour for.
    pub fn highlight(&mut self) -> Option<usize> {
        match &self.question {
            Some(Question::Pitch(q)) => q.highlight(&mut self.rng),
            _ => None,
        }
    }

    /// Audio file for the current word, resolved against the audio dir.
    pub fn audio_path(&self) -> Option<PathBuf> {
        self.current()?.record.audio_path(&self.config.audio_dir)
    }

    pub fn next(&mut self) -> bool {
        let moved = self.session.next();
        if moved {
            self.load_current();
        }
        moved
    }

    pub fn prev(&mut self) -> bool {
        let moved = self.session.prev();
        if moved {
            self.load_current();
        }
        moved
    }

    /// Jump to a one-based word number.
    pub fn jump(&mut self, number: usize) -> bool {
        let moved = self.session.jump(number);
        if moved {
            self.load_current();
        }
        moved
    }

    /// Replace the settings. A new sort key or order rebuilds the session
    /// from the first word; other changes keep the position and re-ask the
    /// current word.
    pub fn apply_settings(&mut self, config: DrillConfig) {
        let reorder = config.base.sort_type != self.config.base.sort_type
            || config.base.sort_order != self.config.base.sort_order;
        self.config = config;
        if reorder {
            let words = Self::pool(&self.records, self.mode);
            let mut base = self.config.base.clone();
            base.last_word_index = 0;
            self.session = Session::build(words, &base, &mut self.rng);
        }
        self.load_current();
    }
}
