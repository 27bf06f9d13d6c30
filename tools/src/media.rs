//! Anki media map handling.
//!
//! An exported package stores audio as numbered files (`622`) next to a
//! `media` JSON object mapping those numbers to the original names
//! (`{"622": "ねっしん.mp3"}`).

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

pub type MediaMap = HashMap<String, String>;

pub fn load_map(path: &Path) -> Result<MediaMap> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read media map {}", path.display()))?;
    serde_json::from_str(&content)
        .with_context(|| format!("{} is not a JSON object of names", path.display()))
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rename {
    pub from: PathBuf,
    pub to: PathBuf,
}

/// Renames for every file in `dir` whose name without extension is a key of
/// `map`. Sorted by source path.
pub fn plan(dir: &Path, map: &MediaMap) -> Result<Vec<Rename>> {
    let mut renames = Vec::new();
    let entries =
        fs::read_dir(dir).with_context(|| format!("Failed to list {}", dir.display()))?;
    for entry in entries {
        let path = entry?.path();
        if !path.is_file() {
            continue;
        }
        let Some(stem) = path.file_stem().and_then(|s| s.to_str()) else {
            continue;
        };
        if let Some(name) = map.get(stem) {
            renames.push(Rename {
                to: dir.join(name),
                from: path,
            });
        }
    }
    renames.sort_by(|a, b| a.from.cmp(&b.from));
    Ok(renames)
}

/// Perform the renames. Existing targets are left alone and reported as
/// failures along with any I/O error.
pub fn apply(renames: &[Rename]) -> (usize, Vec<(Rename, String)>) {
    let mut done = 0;
    let mut failed = Vec::new();
    for r in renames {
        if r.to.exists() {
            failed.push((r.clone(), "target exists".to_string()));
            continue;
        }
        match fs::rename(&r.from, &r.to) {
            Ok(()) => done += 1,
            Err(e) => failed.push((r.clone(), e.to_string())),
        }
    }
    (done, failed)
}
