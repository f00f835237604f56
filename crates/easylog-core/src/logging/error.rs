//! Errors raised while setting up a logger
//!
//! Writing a line never returns an error; these only surface from set-up and teardown.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum LogError {
    /// The output file could not be opened; the logger falls back to stdout
    #[error("Failed to open log file {}: {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Process logger is already initialized")]
    AlreadyInitialized,

    #[error("Process logger is not initialized")]
    NotInitialized,

    #[error("Failed to install log bridge: {0}")]
    SetLogger(#[from] log::SetLoggerError),
}

impl LogError {
    pub fn open(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Open {
            path: path.into(),
            source,
        }
    }
}

pub type LogResult<T> = Result<T, LogError>;
