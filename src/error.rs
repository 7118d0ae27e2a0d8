//! Failure kinds for one extraction run.

use std::path::PathBuf;
use thiserror::Error;

/// Result type for extraction phases.
pub type Result<T> = std::result::Result<T, ExtractError>;

/// Each variant halts the current run at the phase that raised it.
/// `Display` is the line shown to the operator.
#[derive(Error, Debug)]
pub enum ExtractError {
    /// Input path does not exist
    #[error("Error: Input file '{}' not found.", path.display())]
    InputNotFound { path: PathBuf },

    /// Input exists but could not be opened or decoded
    #[error("Error reading the input file: {source}")]
    InputReadError {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// Output could not be created or written
    #[error("Error writing to output file: {source}")]
    OutputWriteError {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
}

impl ExtractError {
    /// Path of the file the failing phase was working on.
    pub fn path(&self) -> &PathBuf {
        match self {
            ExtractError::InputNotFound { path }
            | ExtractError::InputReadError { path, .. }
            | ExtractError::OutputWriteError { path, .. } => path,
        }
    }
}
