use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("failed to read {path}: {source}")]
    Io {
        source: std::io::Error,
        path: PathBuf,
    },

    #[error("failed to parse {path}: {source}")]
    Parse {
        source: ron::error::SpannedError,
        path: PathBuf,
    },

    #[error("failed to serialize output: {0}")]
    Serialize(#[from] ron::Error),

    #[error("user identifiers must not be empty")]
    EmptyUser,
}

pub type Result<T> = std::result::Result<T, Error>;
