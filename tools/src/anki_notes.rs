//! Anki note dumps to deck rows.
//!
//! Input is the `flds` column of an Anki collection's `notes` table as JSON,
//! the output of
//! `sqlite3 -json collection.anki21.db "SELECT flds FROM notes"`:
//! `[{"flds": "..."}, ...]`. Fields inside a note are joined by U+001F and
//! may themselves contain newlines, which a line-based dump cannot carry.

use libpitch_core::pitch;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

pub const FIELD_SEPARATOR: char = '\u{1f}';

/// Notes of the pitch-accent note type carry exactly this many fields.
pub const EXPECTED_FIELDS: usize = 11;

const AUDIO_FIELD: usize = 6;

static SOUND_TAG: Lazy<Regex> = Lazy::new(|| Regex::new(r"\[sound:(.*?)\]").unwrap());

/// File name from an Anki `[sound:...]` tag, or an empty string.
pub fn sound_file(field: &str) -> String {
    SOUND_TAG
        .captures(field)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().to_string())
        .unwrap_or_default()
}

/// Split a note into a deck row. `None` when the field count is wrong.
pub fn note_to_row(flds: &str) -> Option<Vec<String>> {
    let mut row: Vec<String> = flds.split(FIELD_SEPARATOR).map(String::from).collect();
    if row.len() != EXPECTED_FIELDS {
        return None;
    }
    row[AUDIO_FIELD] = sound_file(&row[AUDIO_FIELD]);
    Some(row)
}

#[derive(Debug, Deserialize)]
struct NoteRow {
    flds: String,
}

/// Notes of a `sqlite3 -json` dump. `sqlite3` prints nothing at all for an
/// empty table, so blank input is an empty dump.
pub fn parse_dump(content: &str) -> serde_json::Result<Vec<String>> {
    if content.trim().is_empty() {
        return Ok(Vec::new());
    }
    let rows: Vec<NoteRow> = serde_json::from_str(content)?;
    Ok(rows.into_iter().map(|r| r.flds).collect())
}

/// On-disk deck layout: `{"data": [[...], ...]}`.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct DeckFile {
    pub data: Vec<Vec<String>>,
}

#[derive(Debug, Default)]
pub struct Conversion {
    pub deck: DeckFile,
    /// Notes dropped for having the wrong field count.
    pub skipped: usize,
    /// Rows kept whose accent field decodes to nothing.
    pub without_accent: usize,
}

pub fn convert<I, S>(notes: I) -> Conversion
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut out = Conversion::default();
    for note in notes {
        let note = note.as_ref();
        if note.trim().is_empty() {
            continue;
        }
        match note_to_row(note) {
            Some(row) => {
                if pitch::decode(&row[1]).is_empty() {
                    out.without_accent += 1;
                }
                out.deck.data.push(row);
            }
            None => out.skipped += 1,
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use libpitch_core::Deck;

    fn note(fields: &[&str]) -> String {
        fields.join("\u{1f}")
    }

    #[test]
    fn sound_tag_extracted() {
        assert_eq!(sound_file("[sound:ねっしん.mp3]"), "ねっしん.mp3");
        assert_eq!(sound_file("x [sound:a.mp3][sound:b.mp3]"), "a.mp3");
        assert_eq!(sound_file("no audio"), "");
    }

    #[test]
    fn wrong_field_counts_are_skipped() {
        let good = note(&[
            "会社[かいしゃ]", "⓪", "名", "", "", "公司", "[sound:kaisha.mp3]", "", "", "", "",
        ]);
        let short = note(&["雨[あめ]", "①"]);
        let unaccented = note(&["猫[ねこ]", "", "名", "", "", "猫", "", "", "", "", ""]);
        let conv = convert([good, short, String::new(), unaccented]);
        assert_eq!(conv.skipped, 1);
        assert_eq!(conv.without_accent, 1);
        assert_eq!(conv.deck.data.len(), 2);
        assert_eq!(conv.deck.data[0][6], "kaisha.mp3");
    }

    #[test]
    fn multi_line_fields_survive_the_dump() {
        let flds = note(&[
            "会社[かいしゃ]", "⓪", "名", "", "", "公司\n（企业）", "[sound:kaisha.mp3]", "", "", "",
            "",
        ]);
        let dump = serde_json::json!([{ "flds": flds }, { "flds": "雨" }]).to_string();

        let notes = parse_dump(&dump).unwrap();
        assert_eq!(notes.len(), 2);
        let conv = convert(&notes);
        assert_eq!(conv.deck.data.len(), 1);
        assert_eq!(conv.skipped, 1);
        assert_eq!(conv.deck.data[0][5], "公司\n（企业）");
    }

    #[test]
    fn blank_dump_has_no_notes() {
        assert!(parse_dump("").unwrap().is_empty());
        assert!(parse_dump("\n").unwrap().is_empty());
        assert!(parse_dump("not json").is_err());
    }

    #[test]
    fn output_loads_as_deck() {
        let dump = note(&[
            "東京[とうきょう]", "⓪", "名", "", "", "东京", "[sound:tokyo.mp3]", "", "", "", "",
        ]);
        let conv = convert([dump]);
        let json = serde_json::to_string(&conv.deck).unwrap();
        let deck = Deck::from_json_str(&json).unwrap();
        assert_eq!(deck.len(), 1);
        assert_eq!(deck.records()[0].audio.as_deref(), Some("tokyo.mp3"));
    }
}
