//! Typed-answer checking for dictation drills.
//!
//! A learner may write each segment of a word in kanji or in kana, so the
//! accepted answers are the product of those choices. Both sides are reduced
//! to a canonical character subset before an exact comparison.

use std::collections::HashSet;

use unicode_normalization::UnicodeNormalization;

use crate::annotation::Segment;
use crate::kana;

/// Every string that counts as a correct typed reading of a word.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnswerSet {
    answers: HashSet<String>,
}

impl AnswerSet {
    /// Expand segments into the answer set.
    ///
    /// Starting from the empty string, each segment appends its literal and,
    /// when it differs, its reading. Identical results collapse. Growth is
    /// exponential in the number of annotated segments, which stays small
    /// for single words.
    pub fn generate(segments: &[Segment]) -> Self {
        let mut acc: HashSet<String> = HashSet::from([String::new()]);
        for seg in segments {
            let mut next = HashSet::with_capacity(acc.len() * 2);
            for prefix in &acc {
                next.insert(format!("{prefix}{}", seg.literal));
                if seg.literal != seg.reading {
                    next.insert(format!("{prefix}{}", seg.reading));
                }
            }
            acc = next;
        }
        Self { answers: acc }
    }

    pub fn len(&self) -> usize {
        self.answers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.answers.is_empty()
    }

    pub fn contains(&self, answer: &str) -> bool {
        self.answers.contains(answer)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.answers.iter().map(String::as_str)
    }

    /// Answers sorted for stable display.
    pub fn sorted(&self) -> Vec<String> {
        let mut v: Vec<String> = self.answers.iter().cloned().collect();
        v.sort();
        v
    }

    /// Whether `input` equals some non-empty answer after normalization.
    pub fn matches(&self, input: &str) -> bool {
        matches(input, self)
    }
}

impl FromIterator<String> for AnswerSet {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        Self {
            answers: iter.into_iter().collect(),
        }
    }
}

/// Shorthand for [`AnswerSet::generate`].
pub fn generate(segments: &[Segment]) -> AnswerSet {
    AnswerSet::generate(segments)
}

fn is_canonical(c: char) -> bool {
    kana::is_kana(c) || kana::is_kanji(c) || c.is_ascii_digit()
}

/// Reduce a string to the characters that matter for comparison: kana, the
/// long-vowel mark, kanji and ASCII digits.
///
/// Input is NFKC-folded first so half-width katakana, full-width digits and
/// decomposed voiced marks compare equal to their usual forms.
pub fn normalize(s: &str) -> String {
    s.nfkc().filter(|&c| is_canonical(c)).collect()
}

/// Exact match after normalization. Answers that normalize to nothing never
/// match, so a garbage record cannot accept empty input.
pub fn matches(input: &str, answers: &AnswerSet) -> bool {
    let input = normalize(input);
    if input.is_empty() {
        return false;
    }
    answers.iter().any(|a| normalize(a) == input)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::annotation::parse;

    fn set(items: &[&str]) -> AnswerSet {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn single_segment() {
        let answers = generate(&[Segment::annotated("日", "ひ")]);
        assert_eq!(answers, set(&["日", "ひ"]));
    }

    #[test]
    fn two_segments_cartesian() {
        let answers = generate(&[Segment::annotated("日", "に"), Segment::annotated("本", "ほん")]);
        assert_eq!(answers, set(&["日本", "日ほん", "に本", "にほん"]));
    }

    #[test]
    fn plain_segments_do_not_branch() {
        let answers = generate(&parse("食[た]べる"));
        assert_eq!(answers, set(&["食べる", "たべる"]));
    }

    #[test]
    fn duplicates_collapse() {
        // か+い社 and かい+社 spell the same string
        let answers = generate(&[Segment::annotated("か", "かい"), Segment::annotated("い社", "社")]);
        assert_eq!(answers, set(&["かい社", "か社", "かいい社"]));
        let answers = generate(&[Segment::plain("か"), Segment::plain("か")]);
        assert_eq!(answers, set(&["かか"]));
    }

    #[test]
    fn no_segments_gives_empty_string() {
        assert_eq!(generate(&[]), set(&[""]));
    }

    #[test]
    fn normalize_strips_formatting() {
        assert_eq!(normalize(" か ん・じ！"), "かんじ");
        assert_eq!(normalize("漢字[かんじ]"), "漢字かんじ");
        assert_eq!(normalize("ｶﾀｶﾅ"), "カタカナ");
        assert_eq!(normalize("１２３abc"), "123");
        assert_eq!(normalize("らーめん"), "らーめん");
    }

    #[test]
    fn rare_kanji_survive_normalization() {
        // U+FA11 is a unified ideograph that NFKC leaves alone.
        assert_eq!(normalize("\u{FA11}"), "\u{FA11}");
        assert_eq!(normalize("𠮷野家"), "𠮷野家");
        let answers = generate(&[Segment::annotated("𠮷", "よし")]);
        assert!(matches("𠮷", &answers));
    }

    #[test]
    fn matches_ignores_punctuation() {
        let answers = generate(&[Segment::annotated("日", "ひ")]);
        assert!(matches("ひ", &answers));
        assert!(matches("「ひ」。", &answers));
        assert!(matches("日", &answers));
        assert!(!matches("び", &answers));
    }

    #[test]
    fn empty_answers_never_match() {
        let answers = set(&["", "!!"]);
        assert!(!matches("", &answers));
        assert!(!matches("...", &answers));
    }
}
