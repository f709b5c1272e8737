//! Error type shared by the library.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("failed to read roster '{}': {source}", path.display())]
    RosterRead { path: PathBuf, source: io::Error },

    #[error("failed to parse roster: {0}")]
    RosterParse(#[from] serde_json::Error),

    /// Carries the expression exactly as the user wrote it.
    #[error("invalid generation '{0}'")]
    InvalidGeneration(String),

    #[error("empty generation range '{0}'")]
    EmptyRange(String),

    #[error("no roster entry #{0}")]
    MissingEntry(usize),

    #[error("no roster entry named '{0}'")]
    UnknownName(String),

    #[error("{}: {source}", path.display())]
    ArtNotFound { path: PathBuf, source: io::Error },

    #[error(transparent)]
    Io(#[from] io::Error),
}
