//! Pitch-accent codes and answer classification.
//!
//! A deck stores the accepted accent positions of a word as circled digits,
//! `⓪` through `⑩`; a word with more than one accepted accentuation simply
//! lists several (`⓪③`). Position `P` means the pitch drops after mora `P`,
//! with `0` for the flat pattern that never drops.

use std::collections::BTreeSet;
use std::fmt;

use rand::seq::IteratorRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// The code alphabet. A glyph's value is its index.
pub const ACCENT_GLYPHS: &str = "⓪①②③④⑤⑥⑦⑧⑨⑩";

/// Largest position the alphabet can express.
pub const MAX_POSITION: usize = 10;

/// Decode an accent code into the set of accepted positions.
///
/// Characters outside the alphabet are noise and are skipped, never read as
/// values. An empty set means the code carried nothing usable.
pub fn decode(code: &str) -> BTreeSet<usize> {
    code.chars()
        .filter_map(|c| ACCENT_GLYPHS.chars().position(|g| g == c))
        .collect()
}

/// Highest selectable position for a word of `mora_count` morae. The options
/// are always `0..=max_position(n)`; a zero-mora word still offers `0`.
pub fn max_position(mora_count: usize) -> usize {
    mora_count
}

/// Glyph for a position, if the alphabet has one.
pub fn glyph(position: usize) -> Option<char> {
    ACCENT_GLYPHS.chars().nth(position)
}

fn label(position: usize) -> String {
    glyph(position)
        .map(String::from)
        .unwrap_or_else(|| position.to_string())
}

/// Outcome of a single selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Verdict {
    Correct,
    /// Sounds right in isolation: flat vs. final-mora drop.
    Ambiguous,
    Incorrect,
}

/// Classify `selected` against the accepted positions of an `n`-mora word.
///
/// Precedence: exact hit, then the flat/final-mora pair, then miss.
pub fn evaluate(selected: usize, correct: &BTreeSet<usize>, n: usize) -> Verdict {
    if correct.contains(&selected) {
        return Verdict::Correct;
    }
    if (correct.contains(&0) && selected == n) || (correct.contains(&n) && selected == 0) {
        return Verdict::Ambiguous;
    }
    Verdict::Incorrect
}

/// Extra text shown alongside a verdict.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Hint {
    /// The selection was right and another accentuation is accepted too.
    AlsoCorrect(usize),
    /// The selection confused the flat pattern with a drop after the last mora.
    FlatFinal { final_position: usize },
}

impl fmt::Display for Hint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Hint::AlsoCorrect(other) => {
                write!(f, "Note: {} is also an accepted accent.", label(*other))
            }
            Hint::FlatFinal { final_position } => write!(
                f,
                "Right by ear! {} (flat) and {} (final-mora drop) only differ when a particle follows: the pitch stays up after a flat word and falls after a final-drop word.",
                label(0),
                label(*final_position)
            ),
        }
    }
}

/// Full result of answering a pitch question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Evaluation {
    pub verdict: Verdict,
    pub selected: usize,
    /// Every accepted position, all of which are revealed after answering.
    pub revealed: Vec<usize>,
    pub hint: Option<Hint>,
}

impl Evaluation {
    pub fn message(&self) -> Option<String> {
        self.hint.as_ref().map(|h| h.to_string())
    }
}

/// Classify a selection and attach the reveal set and hint.
pub fn assess(selected: usize, correct: &BTreeSet<usize>, n: usize) -> Evaluation {
    let verdict = evaluate(selected, correct, n);
    let hint = match verdict {
        Verdict::Correct => correct
            .iter()
            .copied()
            .find(|&p| p != selected)
            .map(Hint::AlsoCorrect),
        Verdict::Ambiguous => Some(Hint::FlatFinal { final_position: n }),
        Verdict::Incorrect => None,
    };
    Evaluation {
        verdict,
        selected,
        revealed: correct.iter().copied().collect(),
        hint,
    }
}

/// Position that drives contour highlighting.
///
/// A caller-supplied position wins; otherwise any accepted position is picked
/// at random. The choice is cosmetic. `None` only when both are absent.
pub fn highlight_position<R: Rng + ?Sized>(
    correct: &BTreeSet<usize>,
    selected: Option<usize>,
    rng: &mut R,
) -> Option<usize> {
    selected.or_else(|| correct.iter().copied().choose(rng))
}

/// Whether mora `index` (1-based) is high under accent `accent`.
///
/// Standard contour: flat rises after the first mora and stays up; head-high
/// starts up and falls; otherwise low-high up to the drop.
pub fn is_high(accent: usize, index: usize) -> bool {
    (accent == 0 && index > 1)
        || (accent == 1 && index == 1)
        || (accent > 1 && 1 < index && index <= accent)
}

/// High/low pattern for every mora of an `n`-mora word.
pub fn contour(accent: usize, n: usize) -> Vec<bool> {
    (1..=n).map(|i| is_high(accent, i)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn set(items: &[usize]) -> BTreeSet<usize> {
        items.iter().copied().collect()
    }

    #[test]
    fn decode_glyphs() {
        assert_eq!(decode("①"), set(&[1]));
        assert_eq!(decode("⓪③"), set(&[0, 3]));
        assert_eq!(decode("⑩"), set(&[10]));
        assert!(decode("xyz").is_empty());
        assert!(decode("").is_empty());
    }

    #[test]
    fn decode_strips_noise() {
        assert_eq!(decode(" ②, ⓪ "), set(&[0, 2]));
        // ASCII digits are noise, not values.
        assert!(decode("3").is_empty());
    }

    #[test]
    fn glyph_lookup() {
        assert_eq!(glyph(0), Some('⓪'));
        assert_eq!(glyph(10), Some('⑩'));
        assert_eq!(glyph(11), None);
    }

    #[test]
    fn evaluate_precedence() {
        let correct = set(&[3]);
        assert_eq!(evaluate(3, &correct, 3), Verdict::Correct);
        assert_eq!(evaluate(0, &correct, 3), Verdict::Ambiguous);
        assert_eq!(evaluate(1, &correct, 3), Verdict::Incorrect);

        let flat = set(&[0]);
        assert_eq!(evaluate(3, &flat, 3), Verdict::Ambiguous);
        assert_eq!(evaluate(2, &flat, 3), Verdict::Incorrect);
    }

    #[test]
    fn exact_hit_beats_ambiguity() {
        let both = set(&[0, 3]);
        assert_eq!(evaluate(0, &both, 3), Verdict::Correct);
        assert_eq!(evaluate(3, &both, 3), Verdict::Correct);
    }

    #[test]
    fn evaluate_is_repeatable() {
        let correct = set(&[2]);
        assert_eq!(evaluate(1, &correct, 4), evaluate(1, &correct, 4));
    }

    #[test]
    fn assess_hints() {
        let eval = assess(0, &set(&[0, 2]), 3);
        assert_eq!(eval.verdict, Verdict::Correct);
        assert_eq!(eval.hint, Some(Hint::AlsoCorrect(2)));
        assert_eq!(eval.revealed, vec![0, 2]);

        let eval = assess(0, &set(&[3]), 3);
        assert_eq!(eval.hint, Some(Hint::FlatFinal { final_position: 3 }));
        assert!(eval.message().unwrap().contains('③'));

        let eval = assess(1, &set(&[3]), 3);
        assert_eq!(eval.verdict, Verdict::Incorrect);
        assert_eq!(eval.hint, None);
        assert_eq!(eval.revealed, vec![3]);
    }

    #[test]
    fn highlight_prefers_selection() {
        let mut rng = StdRng::seed_from_u64(7);
        let correct = set(&[1, 4]);
        assert_eq!(highlight_position(&correct, Some(4), &mut rng), Some(4));
        for _ in 0..16 {
            let p = highlight_position(&correct, None, &mut rng).unwrap();
            assert!(correct.contains(&p));
        }
        assert_eq!(highlight_position(&BTreeSet::new(), None, &mut rng), None);
    }

    #[test]
    fn contour_patterns() {
        // heiban: low then high
        assert_eq!(contour(0, 4), vec![false, true, true, true]);
        // atamadaka: high then low
        assert_eq!(contour(1, 4), vec![true, false, false, false]);
        // nakadaka: rise, drop after mora 2
        assert_eq!(contour(2, 4), vec![false, true, false, false]);
        // odaka: rise through the last mora
        assert_eq!(contour(4, 4), vec![false, true, true, true]);
        assert!(contour(0, 0).is_empty());
    }
}
