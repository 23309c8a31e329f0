//! Storage error types.
//!
//! Typed errors for every persistence operation. Callers decide whether
//! to surface them or take the documented degraded path (empty
//! collection); nothing in here is fatal.

use thiserror::Error;

/// Persistence operation errors.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Backend root could not be opened or created.
    #[error("Failed to open store at '{path}': {message}")]
    OpenFailed {
        /// The path where the open was attempted
        path: String,
        /// The underlying I/O error message
        message: String,
    },

    /// Read operation failed.
    #[error("Read failed: {0}")]
    ReadFailed(String),

    /// Write operation failed.
    #[error("Write failed: {0}")]
    WriteFailed(String),

    /// A stored value exists but is not valid JSON for its schema.
    #[error("Stored value under '{key}' is corrupted: {message}")]
    Corrupted {
        /// The key whose value failed to parse
        key: String,
        /// Parser detail
        message: String,
    },

    /// Serializing a record for storage failed.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl StorageError {
    /// True for errors that indicate damaged stored data rather than a
    /// transient I/O problem.
    pub fn is_corruption(&self) -> bool {
        matches!(self, StorageError::Corrupted { .. })
    }
}

/// Convenient Result type for storage operations.
pub type StorageResult<T> = Result<T, StorageError>;

/// Export outcomes that are notices, not failures.
#[derive(Debug, Error)]
pub enum ExportError {
    /// The store is empty; there is nothing to write out.
    #[error("nothing to export")]
    NothingToExport,

    /// The store could not be read at all.
    #[error(transparent)]
    Storage(#[from] StorageError),
}
