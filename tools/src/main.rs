//! Convert an Anki note dump into a drill deck.
//!
//! Usage:
//!   sqlite3 -json collection.anki21.db "SELECT flds FROM notes" > notes.json
//!   cargo run -p deck_tools --bin convert_deck -- --input notes.json --out data.json

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use deck_tools::anki_notes::{self, EXPECTED_FIELDS};

#[derive(Parser, Debug)]
#[command(name = "convert_deck")]
#[command(about = "Convert an Anki note dump into deck JSON")]
struct Args {
    /// `sqlite3 -json` dump of the collection's `notes.flds` column
    #[arg(short, long)]
    input: PathBuf,

    #[arg(short, long, default_value = "data.json")]
    out: PathBuf,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let content = fs::read_to_string(&args.input)
        .with_context(|| format!("Failed to read {}", args.input.display()))?;
    let notes = anki_notes::parse_dump(&content)
        .with_context(|| format!("{} is not a sqlite3 -json dump", args.input.display()))?;
    let conv = anki_notes::convert(&notes);
    println!(
        "Converted {} notes from {}",
        conv.deck.data.len(),
        args.input.display()
    );
    if conv.skipped > 0 {
        println!("  skipped {} notes without {EXPECTED_FIELDS} fields", conv.skipped);
    }
    if conv.without_accent > 0 {
        println!(
            "  {} notes have no accent code and will only appear in dictation",
            conv.without_accent
        );
    }

    let json = serde_json::to_string_pretty(&conv.deck)?;
    fs::write(&args.out, json)
        .with_context(|| format!("Failed to write {}", args.out.display()))?;
    println!("✓ Wrote {}", args.out.display());
    Ok(())
}
