//! Error types for calendar tables, configuration files and readings.

use std::path::PathBuf;

use saju_base::SajuError;
use thiserror::Error;

/// Failure to load a calendar table or configuration file.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("invalid row: {0}")]
    InvalidRow(String),
}

/// Any failure on the way from files to a reading.
#[derive(Debug, Error)]
pub enum ReadingError {
    #[error(transparent)]
    Load(#[from] LoadError),
    #[error(transparent)]
    Saju(#[from] SajuError),
}
