//! # libpitch
//!
//! Pitch-accent and dictation drills built on libpitch-core.

pub mod config;
pub mod drill;
pub mod render;

// Re-export the engine types front-ends work with
pub use libpitch_core::{
    Config, Deck, DictationQuestion, Evaluation, Hint, KeyShortcut, PitchQuestion, Session,
    SortOrder, SortType, StudyWord, Verdict, WordRecord,
};

pub use config::DrillConfig;
pub use drill::{Drill, DrillMode, Question};
