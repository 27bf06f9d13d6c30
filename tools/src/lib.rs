//! Helpers for turning an Anki export into a drill deck.

pub mod anki_notes;
pub mod media;
