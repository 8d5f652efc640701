//! Storage-specific error types for data service requests.
//!
//! This module provides error types that wrap reqwest and serde_json errors
//! and convert them to the transport-agnostic error types defined in
//! `eparnova_core`.

use eparnova_core::errors::{DatabaseError, Error};
use thiserror::Error;

/// Storage-specific errors that wrap HTTP and decoding failures.
///
/// These errors are internal to the storage layer and are converted to
/// `eparnova_core::Error` before being returned to callers.
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Data service returned {status}: {message}")]
    Status { status: u16, message: String },

    #[error("Failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),
}

impl From<StorageError> for Error {
    fn from(err: StorageError) -> Self {
        match err {
            StorageError::Transport(e) if e.is_connect() || e.is_timeout() => {
                Error::Database(DatabaseError::ConnectionFailed(e.to_string()))
            }
            StorageError::Transport(e) => Error::Database(DatabaseError::QueryFailed(e.to_string())),
            e @ StorageError::Status { .. } => {
                Error::Database(DatabaseError::QueryFailed(e.to_string()))
            }
            StorageError::Decode(e) => Error::Database(DatabaseError::Internal(e.to_string())),
        }
    }
}

/// Extension trait for converting storage Results to core Results.
pub trait IntoCore<T> {
    fn into_core(self) -> eparnova_core::Result<T>;
}

impl<T> IntoCore<T> for std::result::Result<T, StorageError> {
    fn into_core(self) -> eparnova_core::Result<T> {
        self.map_err(Error::from)
    }
}
