use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Failure to produce usable [`Settings`](crate::settings::Settings).
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to read settings file {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to parse settings file {}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("invalid settings: {0}")]
    Invalid(&'static str),
}

/// Anything that stops the binary before or during a run.
#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Settings(#[from] SettingsError),
    #[error("failed to open log file {}", path.display())]
    LogFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to install logger")]
    Logger(#[from] log::SetLoggerError),
    #[error("failed to serialize snapshot")]
    Snapshot(#[from] serde_json::Error),
    #[error(transparent)]
    Io(#[from] io::Error),
}
