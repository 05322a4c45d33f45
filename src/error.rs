//! Error types for dataset I/O

use std::path::PathBuf;

use thiserror::Error;

/// Errors produced while reading or writing a dataset
#[derive(Debug, Error)]
pub enum DatasetError {
    /// The input path does not resolve to an existing file
    #[error("file not found at {}", .0.display())]
    FileNotFound(PathBuf),

    /// The input file exists but could not be opened
    #[error("failed to open {}: {source}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The input file could not be read or parsed as delimited text
    #[error("failed to parse {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// The output file could not be written
    #[error("failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
}
