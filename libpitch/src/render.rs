//! Plain-text rendering for terminal front-ends.

use libpitch_core::pitch::{self, Evaluation, Verdict};
use libpitch_core::{KeyShortcut, Segment, WordRecord};

/// Inline ruby: annotated segments as `漢字(かんじ)`, the rest as written.
pub fn ruby(segments: &[Segment]) -> String {
    segments
        .iter()
        .map(|s| {
            if s.is_annotated() {
                format!("{}({})", s.literal, s.reading)
            } else {
                s.literal.clone()
            }
        })
        .collect()
}

/// Option row: each position's glyph with the key that selects it.
pub fn options_line(max_position: usize, keys: KeyShortcut) -> String {
    (0..=max_position)
        .map(|p| {
            let glyph = pitch::glyph(p).map(String::from).unwrap_or_else(|| p.to_string());
            match keys.key_for(p) {
                Some(k) => format!("{glyph}[{k}]"),
                None => glyph,
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Morae marked high (`‾`) or low (`_`) under `accent`.
pub fn contour_line(morae: &[String], accent: usize) -> String {
    let highs = pitch::contour(accent, morae.len());
    morae
        .iter()
        .zip(highs)
        .map(|(m, high)| format!("{m}{}", if high { '‾' } else { '_' }))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Metadata lines for the info panel. Empty fields are left out.
pub fn info_lines(record: &WordRecord) -> Vec<String> {
    let mut lines = Vec::new();
    if let Some(pos) = &record.pos {
        lines.push(format!("part of speech: {pos}"));
    }
    if let Some(base) = &record.base_form {
        lines.push(format!("base form: {base}"));
    }
    if let Some(loan) = &record.gaikokugo {
        lines.push(format!("loan word: {loan}"));
    }
    if let Some(text) = record.translation_text().filter(|t| !t.is_empty()) {
        lines.push(format!("meaning: {text}"));
    }
    lines
}

pub fn verdict_line(eval: &Evaluation) -> String {
    let head = match eval.verdict {
        Verdict::Correct => "correct",
        Verdict::Ambiguous => "ambiguous",
        Verdict::Incorrect => "incorrect",
    };
    let answers = eval
        .revealed
        .iter()
        .filter_map(|&p| pitch::glyph(p))
        .collect::<String>();
    match eval.message() {
        Some(msg) => format!("{head} (accepted: {answers})\n{msg}"),
        None => format!("{head} (accepted: {answers})"),
    }
}

/// Note for a pick on a question whose answer is already on screen.
pub fn revealed_line(positions: &[usize]) -> String {
    let glyphs = positions
        .iter()
        .filter_map(|&p| pitch::glyph(p))
        .collect::<String>();
    format!("answer shown: {glyphs}")
}
