//! Storage-specific error types for the in-memory store.
//!
//! These wrap I/O and serialization failures of the snapshot mirror and
//! convert them to the storage-agnostic error types of `advisory_core`.

use advisory_core::errors::{DatabaseError, Error};
use thiserror::Error;

/// Storage-specific errors.
///
/// These errors are internal to the storage layer and are converted to
/// `advisory_core::Error` before being returned to callers.
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("Snapshot I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("Snapshot serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Store lock poisoned: {0}")]
    LockPoisoned(String),

    #[error("Snapshot task failed: {0}")]
    Task(String),
}

impl From<StorageError> for Error {
    fn from(err: StorageError) -> Self {
        match err {
            StorageError::Io(e) => Error::Database(DatabaseError::SnapshotFailed(e.to_string())),
            StorageError::Serialization(e) => {
                Error::Database(DatabaseError::SnapshotFailed(e.to_string()))
            }
            StorageError::LockPoisoned(e) | StorageError::Task(e) => {
                Error::Database(DatabaseError::Internal(e))
            }
        }
    }
}
