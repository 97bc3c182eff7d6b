use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Corrupt roster file {path}: {source}")]
    Corrupt {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("Roster file {path} holds invalid records: {source}")]
    InvalidRecords {
        path: PathBuf,
        #[source]
        source: shared::Error,
    },
    #[error("Failed to encode roster: {0}")]
    Encode(#[source] serde_json::Error),
    #[error(transparent)]
    Roster(#[from] shared::Error),
    #[error("Could not determine a configuration directory; pass --data or set MOOMENU_DATA")]
    NoConfigDir,
    #[error("Unknown person: {0}")]
    UnknownSelector(String),
    #[error("'{0}' matches more than one person; use a position or id")]
    AmbiguousSelector(String),
}

impl StoreError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io { path: path.into(), source }
    }

    /// Load failures that mean the file exists but cannot be trusted.
    pub fn is_corrupt(&self) -> bool {
        matches!(self, Self::Corrupt { .. } | Self::InvalidRecords { .. })
    }
}

pub type StoreResult<T> = Result<T, StoreError>;
