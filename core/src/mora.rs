//! Mora segmentation.
//!
//! A mora is a single kana, or a base kana followed by one small kana
//! (`きょ`, `シャ`). The long-vowel mark and `っ` are morae of their own.
//! The count of a word's morae is the `N` that bounds its accent positions.

use crate::annotation;
use crate::kana;

/// Split a kana string into morae, left to right.
///
/// Every character lands in exactly one mora. A small kana merges only into
/// an eligible base: never into `ー` or another small kana, so at the string
/// start or after one of those it stands alone.
pub fn segment(text: &str) -> Vec<String> {
    let chars: Vec<char> = text.chars().collect();
    let mut morae = Vec::with_capacity(chars.len());
    let mut i = 0;
    while i < chars.len() {
        match chars.get(i + 1) {
            Some(&next) if kana::is_small_kana(next) && is_base(chars[i]) => {
                morae.push([chars[i], next].iter().collect::<String>());
                i += 2;
            }
            _ => {
                morae.push(chars[i].to_string());
                i += 1;
            }
        }
    }
    morae
}

fn is_base(c: char) -> bool {
    c != kana::LONG_VOWEL_MARK && !kana::is_small_kana(c)
}

pub fn count(text: &str) -> usize {
    segment(text).len()
}

/// Kana transcription of an annotated word: the readings of every segment,
/// restricted to kana. Digits, punctuation and leftover bracket text are
/// dropped here rather than counted as morae.
pub fn word_kana(raw: &str) -> String {
    kana::kana_only(&annotation::reading_of(&annotation::parse(raw)))
}

/// Mora count of an annotated word.
pub fn count_word(raw: &str) -> usize {
    count(&word_kana(raw))
}
