//! Restore audio file names from an Anki `media` map.
//!
//! Usage:
//!   cargo run -p deck_tools --bin rename_media -- --dir audios --map audios/media

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use deck_tools::media;

#[derive(Parser, Debug)]
#[command(name = "rename_media")]
#[command(about = "Rename numbered Anki media files to their original names")]
struct Args {
    /// Directory holding the numbered files
    #[arg(short, long, default_value = ".")]
    dir: PathBuf,

    /// Media map (defaults to <dir>/media)
    #[arg(short, long)]
    map: Option<PathBuf>,

    /// Show what would be renamed without touching any file
    #[arg(long)]
    dry_run: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let map_path = args.map.unwrap_or_else(|| args.dir.join("media"));

    let map = media::load_map(&map_path)?;
    let renames = media::plan(&args.dir, &map)?;
    if renames.is_empty() {
        println!("No files in {} match the media map", args.dir.display());
        return Ok(());
    }

    if args.dry_run {
        println!("[DRY RUN] Would rename:");
        for r in &renames {
            println!("  {} -> {}", r.from.display(), r.to.display());
        }
        return Ok(());
    }

    let (done, failed) = media::apply(&renames);
    for (r, err) in &failed {
        eprintln!("✗ {} -> {}: {err}", r.from.display(), r.to.display());
    }
    println!("✓ Renamed {done} of {} files", renames.len());
    Ok(())
}
