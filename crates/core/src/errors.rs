//! Core error types for the advisory application.
//!
//! This module defines storage-agnostic error types. Storage-specific errors
//! (file snapshots, lock poisoning, etc.) are converted to these types by the
//! storage layer.

use thiserror::Error;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for the advisory application.
///
/// The metrics engine never produces one of these; they come from the client
/// registry, the report service and the storage layer.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Database operation failed: {0}")]
    Database(#[from] DatabaseError),

    #[error("Input validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error("Report generation failed: {0}")]
    Report(String),
}

impl Error {
    /// Returns true when the error means the requested record does not exist.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::Database(DatabaseError::NotFound(_)))
    }
}

/// Storage-agnostic error type for repository operations.
#[derive(Error, Debug)]
pub enum DatabaseError {
    /// The requested record was not found.
    #[error("Record not found: {0}")]
    NotFound(String),

    /// A unique constraint was violated (e.g., duplicate id).
    #[error("Unique constraint violation: {0}")]
    UniqueViolation(String),

    /// Mirroring the store to its snapshot file failed.
    #[error("Snapshot write failed: {0}")]
    SnapshotFailed(String),

    /// Internal/unexpected storage error.
    #[error("Internal database error: {0}")]
    Internal(String),
}

/// Validation errors for user input.
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Required field '{0}' is missing")]
    MissingField(String),
}

impl From<csv::Error> for Error {
    fn from(err: csv::Error) -> Self {
        Error::Report(err.to_string())
    }
}
