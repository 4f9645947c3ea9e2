//! Error types for the persistence layer

use std::path::PathBuf;
use thiserror::Error;

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Errors that can occur while loading or saving the library file
#[derive(Debug, Error)]
pub enum StoreError {
    /// Failed to read the library file
    #[error("Failed to read library file at {path}: {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Failed to write the library file
    #[error("Failed to write library file at {path}: {source}")]
    WriteError {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The library file is not valid JSON
    #[error("Failed to parse library file at {path}: {source}")]
    ParseError {
        path: PathBuf,
        source: serde_json::Error,
    },

    /// Failed to serialize the collection
    #[error("Failed to serialize library: {0}")]
    SerializeError(#[from] serde_json::Error),

    /// Failed to create the data directory
    #[error("Failed to create data directory at {path}: {source}")]
    DirectoryCreationError {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Data directory path could not be determined
    #[error("Could not determine data directory path: {reason}")]
    PathResolutionError { reason: String },

    /// Failed to create a backup of the old library file
    #[error("Failed to backup library file: {source}")]
    BackupError { source: std::io::Error },

    /// Generic I/O error
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}
