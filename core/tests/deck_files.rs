// core/tests/deck_files.rs
//
// File-backed loading: deck JSON on disk, settings TOML save/load, and a
// session built from both.

use std::io::Write;

use libpitch_core::session::{learnable, Session};
use libpitch_core::{Config, Deck, Error, SortType};
use rand::rngs::StdRng;
use rand::SeedableRng;

const DECK: &str = r#"{
    "data": [
        ["会社[かいしゃ]", "⓪", "名", "", "", "公司", "かいしゃ.mp3", "", "", "", ""],
        ["雨[あめ]", "①", "名", "", "", "雨", "あめ.mp3", "", "", "", ""],
        ["猫[ねこ]", "", "名", "", "", "猫", "", "", "", "", ""],
        ["東京[とうきょう]", "⓪", "名", "", "", "东京", "", "", "", "", ""]
    ]
}"#;

#[test]
fn load_deck_from_disk() {
    let mut file = tempfile::NamedTempFile::new().expect("temp deck");
    file.write_all(DECK.as_bytes()).expect("write deck");

    let deck = Deck::load(file.path()).expect("load deck");
    assert_eq!(deck.len(), 4);
    assert_eq!(deck.records()[3].japanese, "東京[とうきょう]");
}

#[test]
fn missing_deck_reports_path() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("nope.json");
    match Deck::load(&path) {
        Err(Error::Io { path: p, .. }) => assert_eq!(p, path),
        other => panic!("expected io error, got {other:?}"),
    }
}

#[test]
fn settings_survive_save_and_load() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("settings.toml");

    let cfg = Config {
        sort_type: SortType::Length,
        last_word_index: 1,
        ..Config::default()
    };
    cfg.save_toml(&path).expect("save");
    assert_eq!(Config::load_toml(&path).expect("load"), cfg);
}

#[test]
fn session_from_deck_and_settings() {
    let deck = Deck::from_json_str(DECK).unwrap();
    let cfg = Config {
        sort_type: SortType::Length,
        last_word_index: 1,
        ..Config::default()
    };
    let mut rng = StdRng::seed_from_u64(0);
    let session = Session::build(learnable(deck.into_records()), &cfg, &mut rng);

    // 猫 has no accent code; the rest sort by mora count
    let order: Vec<String> = session.words().iter().map(|w| w.display_text()).collect();
    assert_eq!(order, vec!["雨", "会社", "東京"]);
    assert_eq!(session.current().unwrap().display_text(), "会社");
}
