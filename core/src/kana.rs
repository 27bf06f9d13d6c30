//! Character classification for Japanese text.
//!
//! Everything downstream (mora segmentation, kana extraction, answer
//! normalization) agrees on these ranges, so they live in one place.

/// The long-vowel mark. Lives in the katakana block but is used in both
/// scripts ("らーめん", "コーヒー").
pub const LONG_VOWEL_MARK: char = 'ー';

/// Small kana that merge with the preceding character into a single mora.
///
/// `っ`/`ッ` are deliberately absent: the geminate stop is a mora of its own.
pub const SMALL_KANA: &[char] = &[
    'ゃ', 'ゅ', 'ょ', 'ぁ', 'ぃ', 'ぅ', 'ぇ', 'ぉ', //
    'ャ', 'ュ', 'ョ', 'ァ', 'ィ', 'ゥ', 'ェ', 'ォ',
];

/// Hiragana letters and iteration marks. Standalone voicing marks are not
/// letters and are excluded.
pub fn is_hiragana(c: char) -> bool {
    ('\u{3041}'..='\u{3096}').contains(&c) || ('\u{309D}'..='\u{309F}').contains(&c)
}

/// Full-width katakana letters, `ー` and iteration marks. The middle dot `・`
/// and the double hyphen `゠` are punctuation.
pub fn is_katakana(c: char) -> bool {
    ('\u{30A1}'..='\u{30FA}').contains(&c) || ('\u{30FC}'..='\u{30FF}').contains(&c)
}

/// Any character that can appear in a kana transcription.
pub fn is_kana(c: char) -> bool {
    is_hiragana(c) || is_katakana(c)
}

pub fn is_small_kana(c: char) -> bool {
    SMALL_KANA.contains(&c)
}

/// CJK unified ideographs with extensions A through H, compatibility
/// ideographs and the iteration mark `々`.
///
/// NFKC folds most compatibility ideographs into the unified block, but the
/// dozen unified ideographs living in `F900..FAFF` (`﨑`, `﨟`) survive it.
pub fn is_kanji(c: char) -> bool {
    ('\u{4E00}'..='\u{9FFF}').contains(&c)
        || ('\u{3400}'..='\u{4DBF}').contains(&c)
        || ('\u{F900}'..='\u{FAFF}').contains(&c)
        // extensions B-F and the compatibility supplement
        || ('\u{20000}'..='\u{2FA1F}').contains(&c)
        // extensions G and H
        || ('\u{30000}'..='\u{323AF}').contains(&c)
        || c == '々'
}

/// Keep only the kana characters of `s`.
pub fn kana_only(s: &str) -> String {
    s.chars().filter(|&c| is_kana(c)).collect()
}
