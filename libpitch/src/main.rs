use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use libpitch::render;
use libpitch::{Deck, Drill, DrillConfig, DrillMode, StudyWord, WordRecord};
use libpitch_core::{annotation, pitch};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "pitchdrill", about = "Japanese pitch-accent and dictation drills")]
struct Args {
    /// Settings file (defaults to ~/.pitchdrill/settings.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Deck JSON or data.js, overriding the settings file
    #[arg(long, global = true)]
    deck: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Pick the accent position of each word
    Pitch,
    /// Type each word after hearing it
    Dictation,
    /// Show how an annotated word is read and scored
    Inspect {
        text: String,
        /// Accent code, e.g. ⓪③
        #[arg(long)]
        pitch: Option<String>,
    },
    /// Print the drill's word list
    List {
        #[arg(long, default_value_t = false)]
        dictation: bool,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();
    if let Command::Inspect { text, pitch } = &args.command {
        inspect(text, pitch.as_deref());
        return Ok(());
    }

    let config_path = args.config.clone().unwrap_or_else(DrillConfig::default_path);
    let mut config = if config_path.exists() {
        DrillConfig::load_toml(&config_path)
            .with_context(|| format!("reading settings {}", config_path.display()))?
    } else {
        info!(path = %config_path.display(), "no settings file, using defaults");
        DrillConfig::default()
    };
    if let Some(deck) = args.deck {
        config.deck = deck;
    }

    let deck = Deck::load(&config.deck)
        .with_context(|| format!("loading deck {}", config.deck.display()))?;
    println!("✓ Loaded {} words from {}", deck.len(), config.deck.display());

    let mode = match args.command {
        Command::Dictation | Command::List { dictation: true } => DrillMode::Dictation,
        _ => DrillMode::Pitch,
    };
    let mut drill = Drill::new(deck.into_records(), config, mode);

    if let Command::List { .. } = args.command {
        for entry in drill.session().word_list() {
            let mark = if entry.current { '>' } else { ' ' };
            println!("{mark}{:>5}. {}  {}", entry.number, entry.text, entry.gloss);
        }
        return Ok(());
    }

    if drill.session().is_empty() {
        println!("ℹ No words to drill in this deck");
        return Ok(());
    }

    print_help(mode);
    let stdin = io::stdin();
    run(&mut drill, stdin.lock())?;

    drill
        .config()
        .save_toml(&config_path)
        .with_context(|| format!("writing settings {}", config_path.display()))?;
    Ok(())
}

fn print_help(mode: DrillMode) {
    match mode {
        DrillMode::Pitch => println!("Type a key, glyph or number to answer."),
        DrillMode::Dictation => println!("Type what you hear."),
    }
    println!("Empty line: next word. :p previous, :r audio, :j N jump, :q quit.");
    println!(":set key=value changes a setting, e.g. :set sort_order=desc");
    println!();
}

fn run<R: BufRead>(drill: &mut Drill, input: R) -> Result<()> {
    show_word(drill);
    for line in input.lines() {
        let line = line.context("reading stdin")?;
        let line = line.trim();

        match line {
            "" => {
                if !drill.next() {
                    println!("ℹ Last word reached");
                    break;
                }
                show_word(drill);
            }
            ":q" | ":quit" | "exit" => break,
            ":p" => {
                if drill.prev() {
                    show_word(drill);
                }
            }
            ":r" => print_audio(drill),
            _ if line.starts_with(":set") => set(drill, line[4..].trim()),
            _ if line.starts_with(":j") => {
                match line[2..].trim().parse::<usize>() {
                    Ok(n) if drill.jump(n) => show_word(drill),
                    _ => println!("  → no word number {}", line[2..].trim()),
                }
            }
            _ => answer(drill, line),
        }
        io::stdout().flush().ok();
    }
    Ok(())
}

fn set(drill: &mut Drill, arg: &str) {
    let Some((key, value)) = arg.split_once('=') else {
        println!("  → usage: :set key=value");
        return;
    };
    let mut config = drill.config().clone();
    match config.base().with_setting(key.trim(), value) {
        Ok(base) => {
            *config.base_mut() = base;
            drill.apply_settings(config);
            println!("  ✓ {} = {}", key.trim(), value.trim());
            show_word(drill);
        }
        Err(e) => println!("  → {e}"),
    }
}

fn show_word(drill: &mut Drill) {
    let Some(word) = drill.current().cloned() else {
        return;
    };
    let number = drill.session().cursor() + 1;
    let total = drill.session().len();
    let config = drill.config().base().clone();

    match drill.mode() {
        DrillMode::Pitch => {
            println!("[{number}/{total}] {}", render::ruby(&word.segments));
            if config.show_info {
                for line in render::info_lines(&word.record) {
                    println!("  {line}");
                }
            }
            println!("  {}", render::options_line(word.max_position(), config.key_shortcut));
            if drill.pitch_question().is_some_and(|q| q.is_locked()) {
                print_contour(drill, &word);
            }
        }
        DrillMode::Dictation => {
            println!("[{number}/{total}] ?");
        }
    }
    if config.autoplay {
        print_audio(drill);
    }
}

fn print_audio(drill: &Drill) {
    match drill.audio_path() {
        Some(path) => println!("  ♪ {}", path.display()),
        None => println!("  ♪ (no audio)"),
    }
}

fn print_contour(drill: &mut Drill, word: &StudyWord) {
    if let Some(accent) = drill.highlight() {
        println!("  {}", render::contour_line(&word.morae, accent));
    }
}

fn answer(drill: &mut Drill, line: &str) {
    let Some(word) = drill.current().cloned() else {
        return;
    };
    match drill.mode() {
        DrillMode::Pitch => {
            // learning mode: nothing to answer
            if let Some(q) = drill.pitch_question() {
                if q.is_locked() && q.evaluation().is_none() {
                    println!("  → {}", render::revealed_line(&q.revealed_positions()));
                    return;
                }
            }
            let Some(position) = parse_position(drill, line) else {
                println!("  → not an option: {line}");
                return;
            };
            match drill.select(position) {
                Some(eval) => {
                    println!("  {}", render::verdict_line(&eval).replace('\n', "\n  "));
                    print_contour(drill, &word);
                    if let Some(meaning) = word.record.translation_text() {
                        println!("  {meaning}");
                    }
                }
                None => println!("  → not an option: {line}"),
            }
        }
        DrillMode::Dictation => match drill.check(line) {
            Some(true) => println!("  ✓ {}", render::ruby(&word.segments)),
            Some(false) => println!("  ✗ try again"),
            None => warn!("dictation check without a question"),
        },
    }
}

/// A single key from the configured row, a circled glyph, or a plain number.
fn parse_position(drill: &Drill, line: &str) -> Option<usize> {
    let mut chars = line.chars();
    if let (Some(c), None) = (chars.next(), chars.next()) {
        if let Some(p) = drill.config().base().key_shortcut.position_for(c) {
            return Some(p);
        }
        if let Some(p) = pitch::decode(line).into_iter().next() {
            return Some(p);
        }
    }
    line.parse().ok()
}

fn inspect(text: &str, code: Option<&str>) {
    let record = WordRecord {
        japanese: text.to_string(),
        pitch: code.unwrap_or_default().to_string(),
        ..Default::default()
    };
    let word = StudyWord::prepare(record);
    let morae = &word.morae;

    println!("segments:");
    for seg in annotation::parse(text) {
        println!("  {:?} -> {:?}", seg.literal, seg.reading);
    }
    println!("display:  {}", word.display_text());
    println!("kana:     {}", word.kana);
    println!("morae:    {} ({})", morae.join("|"), word.mora_count());

    let mut answers = word.answers().sorted();
    answers.truncate(20);
    println!("answers:  {}", answers.join(", "));

    if word.has_accent() {
        for &accent in &word.accents {
            let glyph = pitch::glyph(accent).unwrap_or('?');
            println!("contour {glyph}: {}", render::contour_line(morae, accent));
        }
    }
}
