use std::path::{Path, PathBuf};

use libpitch_core::{Config, Error, Result};
use serde::{Deserialize, Serialize};

/// Drill front-end configuration that extends the base `Config` from core.
///
/// This configuration includes:
/// - All learner settings from `libpitch_core::Config` (flattened via serde)
/// - The deck file to drill
/// - The directory audio file names are resolved against
///
/// # Example
///
/// ```rust
/// use libpitch::DrillConfig;
///
/// let config = DrillConfig::default();
/// let base_config = config.into_base();
/// assert!(base_config.autoplay);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct DrillConfig {
    /// Learner settings (sorting, key row, toggles, resume index)
    #[serde(flatten)]
    pub base: Config,

    /// Deck JSON (or `data.js`) to load
    pub deck: PathBuf,

    /// Directory holding the deck's audio files
    pub audio_dir: PathBuf,
}

impl Default for DrillConfig {
    fn default() -> Self {
        Self {
            base: Config::default(),
            deck: PathBuf::from("data.json"),
            audio_dir: PathBuf::from("audios"),
        }
    }
}

impl DrillConfig {
    /// Convert this drill config into the base config.
    pub fn into_base(self) -> Config {
        self.base
    }

    /// Get a reference to the base config
    pub fn base(&self) -> &Config {
        &self.base
    }

    /// Get a mutable reference to the base config
    pub fn base_mut(&mut self) -> &mut Config {
        &mut self.base
    }

    /// Settings file under the user's home directory.
    pub fn default_path() -> PathBuf {
        let home = std::env::var("HOME")
            .or_else(|_| std::env::var("USERPROFILE"))
            .unwrap_or_else(|_| ".".to_string());
        PathBuf::from(home).join(".pitchdrill").join("settings.toml")
    }

    pub fn load_toml<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| Error::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        Ok(toml::from_str(&content)?)
    }

    /// Write settings, creating the parent directory if needed.
    pub fn save_toml<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let io_err = |e| Error::Io {
            path: path.to_path_buf(),
            source: e,
        };
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(io_err)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content).map_err(io_err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use libpitch_core::{KeyShortcut, SortOrder};

    #[test]
    fn flattened_fields_parse() {
        let cfg: DrillConfig = toml::from_str(
            r#"
            deck = "n5.json"
            sort_order = "desc"
            key_shortcut = "alphabet"
            "#,
        )
        .unwrap();
        assert_eq!(cfg.deck, PathBuf::from("n5.json"));
        assert_eq!(cfg.audio_dir, PathBuf::from("audios"));
        assert_eq!(cfg.base().sort_order, SortOrder::Desc);
        assert_eq!(cfg.base().key_shortcut, KeyShortcut::Alphabet);
    }

    #[test]
    fn save_creates_parent_dir() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("settings.toml");
        let mut cfg = DrillConfig::default();
        cfg.base_mut().last_word_index = 7;
        cfg.save_toml(&path).unwrap();
        assert_eq!(DrillConfig::load_toml(&path).unwrap(), cfg);
    }
}
