//! Storage error types
//!
//! Defines all errors that can occur while reading or writing place data.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur in the place store
#[derive(Error, Debug)]
pub enum StorageError {
    /// I/O operation failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A data file could not be parsed
    #[error("Invalid data in {path:?}: {error}")]
    InvalidData { path: PathBuf, error: String },

    /// Serialization failed
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Writer expected a different version of the user list
    #[error("Version conflict: expected {expected}, current is {current}")]
    VersionConflict { expected: u64, current: u64 },
}

impl From<serde_json::Error> for StorageError {
    fn from(err: serde_json::Error) -> Self {
        StorageError::Serialization(err.to_string())
    }
}

/// Result type alias for storage operations
pub type StorageResult<T> = Result<T, StorageError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = StorageError::VersionConflict {
            expected: 2,
            current: 5,
        };
        assert_eq!(err.to_string(), "Version conflict: expected 2, current is 5");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let storage_err: StorageError = io_err.into();
        assert!(matches!(storage_err, StorageError::Io(_)));
    }
}
