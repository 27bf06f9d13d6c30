//! Errors raised while loading decks and settings.
//!
//! The text-processing operations never fail; malformed words degrade to
//! empty sets or literal text. Only file and format handling returns these.

use std::path::PathBuf;

/// Result type defaulting to [`Error`].
pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Reading or writing a file failed.
    #[error("I/O error on '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    TomlDe(#[from] toml::de::Error),

    #[error(transparent)]
    TomlSer(#[from] toml::ser::Error),

    /// A settings key that `Config` does not have.
    #[error("unknown setting '{0}'")]
    UnknownSetting(String),

    /// The deck parsed as JSON but is neither a row array nor `{"data": [...]}`.
    #[error("unsupported deck layout: {0}")]
    UnsupportedDeck(String),
}

impl Error {
    pub(crate) fn io<P: Into<PathBuf>>(path: P, source: std::io::Error) -> Self {
        Error::Io {
            path: path.into(),
            source,
        }
    }
}
