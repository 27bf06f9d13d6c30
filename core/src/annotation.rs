//! Ruby-annotated word strings.
//!
//! Deck entries write readings inline, Anki style: `漢字[かんじ]`. A run of
//! non-whitespace text followed by a bracket is annotated with the bracket
//! contents; text with no bracket stands for itself. Whitespace separates runs
//! and never produces a segment.
//!
//! Parsing is total. Malformed input (an unmatched `[`, a bracket with nothing
//! to annotate) degrades to literal text instead of failing.

use serde::{Deserialize, Serialize};

/// One unit of an annotated word: display text plus its kana reading.
///
/// `reading == literal` when the source supplied no explicit reading.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Segment {
    pub literal: String,
    pub reading: String,
}

impl Segment {
    /// A segment that reads as written.
    pub fn plain<T: Into<String>>(text: T) -> Self {
        let literal = text.into();
        Self {
            reading: literal.clone(),
            literal,
        }
    }

    /// A segment with an explicit reading. An empty reading falls back to the
    /// literal.
    pub fn annotated<L: Into<String>, R: Into<String>>(literal: L, reading: R) -> Self {
        let literal = literal.into();
        let reading = reading.into();
        if reading.is_empty() {
            return Self::plain(literal);
        }
        Self { literal, reading }
    }

    /// Whether this segment needs ruby text when rendered.
    pub fn is_annotated(&self) -> bool {
        self.literal != self.reading
    }
}

/// Parse an annotated string into segments, in source order.
///
/// ```
/// use libpitch_core::annotation::{parse, Segment};
///
/// let segs = parse("漢字[かんじ]");
/// assert_eq!(segs, vec![Segment::annotated("漢字", "かんじ")]);
/// ```
pub fn parse(raw: &str) -> Vec<Segment> {
    let mut segments = Vec::new();
    for run in raw.split_whitespace() {
        parse_run(run, &mut segments);
    }
    segments
}

/// Greedy left-to-right scan of one whitespace-free run.
fn parse_run(run: &str, out: &mut Vec<Segment>) {
    let mut pending = String::new();
    let mut rest = run;

    while let Some(open) = rest.find('[') {
        let inner = &rest[open + 1..];
        match inner.find(|c| c == ']' || c == '[') {
            Some(close) if inner[close..].starts_with(']') => {
                pending.push_str(&rest[..open]);
                // The literal never spans bracket text left over in `pending`.
                let split = pending.rfind(['[', ']']).map_or(0, |i| i + 1);
                if split == pending.len() {
                    // Nothing annotatable precedes the bracket; keep it as text.
                    pending.push_str(&rest[open..open + close + 2]);
                } else {
                    let literal = pending.split_off(split);
                    if !pending.is_empty() {
                        out.push(Segment::plain(std::mem::take(&mut pending)));
                    }
                    out.push(Segment::annotated(literal, &inner[..close]));
                }
                rest = &inner[close + 1..];
            }
            _ => {
                // Unmatched within this run.
                pending.push_str(&rest[..=open]);
                rest = inner;
            }
        }
    }

    pending.push_str(rest);
    if !pending.is_empty() {
        out.push(Segment::plain(pending));
    }
}

/// Full pronunciation: every segment's reading, concatenated.
pub fn reading_of(segments: &[Segment]) -> String {
    segments.iter().map(|s| s.reading.as_str()).collect()
}

/// Display form with all readings removed (e.g. for a word list).
pub fn display_text(segments: &[Segment]) -> String {
    segments.iter().map(|s| s.literal.as_str()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_annotation() {
        assert_eq!(
            parse("漢字[かんじ]"),
            vec![Segment {
                literal: "漢字".to_string(),
                reading: "かんじ".to_string()
            }]
        );
    }

    #[test]
    fn bare_runs_split_on_whitespace() {
        let segs = parse("ひらがな  カタカナ\u{3000}です");
        assert_eq!(
            segs,
            vec![
                Segment::plain("ひらがな"),
                Segment::plain("カタカナ"),
                Segment::plain("です")
            ]
        );
        assert!(segs.iter().all(|s| !s.is_annotated()));
    }

    #[test]
    fn okurigana_after_annotation() {
        let segs = parse("食[た]べる");
        assert_eq!(
            segs,
            vec![Segment::annotated("食", "た"), Segment::plain("べる")]
        );
        assert_eq!(reading_of(&segs), "たべる");
        assert_eq!(display_text(&segs), "食べる");
    }

    #[test]
    fn literal_is_greedy_within_run() {
        let segs = parse("食[た]べ物[もの]");
        assert_eq!(
            segs,
            vec![Segment::annotated("食", "た"), Segment::annotated("べ物", "もの")]
        );

        let spaced = parse("食[た]べ 物[もの]");
        assert_eq!(
            spaced,
            vec![
                Segment::annotated("食", "た"),
                Segment::plain("べ"),
                Segment::annotated("物", "もの")
            ]
        );
    }

    #[test]
    fn unmatched_bracket_is_text() {
        assert_eq!(parse("漢字[かんじ"), vec![Segment::plain("漢字[かんじ")]);
        assert_eq!(parse("]["), vec![Segment::plain("][")]);
    }

    #[test]
    fn reopened_bracket_keeps_first_as_text() {
        let segs = parse("a[b[c]");
        assert_eq!(segs, vec![Segment::plain("a["), Segment::annotated("b", "c")]);
    }

    #[test]
    fn literal_never_contains_brackets() {
        assert_eq!(parse("[[a]"), vec![Segment::plain("[[a]")]);
        assert_eq!(
            parse("[a]漢[かん]"),
            vec![Segment::plain("[a]"), Segment::annotated("漢", "かん")]
        );
        for raw in ["[[a]", "x[[y]z[w]", "][字[じ]", "a[b[c]"] {
            for seg in parse(raw).iter().filter(|s| s.is_annotated()) {
                assert!(!seg.literal.contains(['[', ']']), "{raw}: {seg:?}");
            }
        }
    }

    #[test]
    fn bracket_without_literal_is_text() {
        assert_eq!(parse("[かな]"), vec![Segment::plain("[かな]")]);
    }

    #[test]
    fn empty_reading_falls_back_to_literal() {
        assert_eq!(parse("猫[]"), vec![Segment::plain("猫")]);
    }

    #[test]
    fn empty_and_blank_input() {
        assert!(parse("").is_empty());
        assert!(parse("   \t").is_empty());
    }
}
