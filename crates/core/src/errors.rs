//! Core error types for the EPARNOVA encours engine.
//!
//! This module defines transport-agnostic error types. Errors raised by the
//! data service client (HTTP, JSON decoding) are converted to these types by
//! the storage layer.

use chrono::ParseError as ChronoParseError;
use thiserror::Error;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for the encours engine.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Data service operation failed: {0}")]
    Database(#[from] DatabaseError),

    #[error("Input validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error("Invalid configuration value: {0}")]
    InvalidConfigValue(String),

    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

/// Errors reported by the data-access collaborator.
///
/// All details are carried as strings so the core stays independent of the
/// HTTP client used by the storage layer.
#[derive(Error, Debug)]
pub enum DatabaseError {
    /// The data service could not be reached.
    #[error("Failed to connect to data service: {0}")]
    ConnectionFailed(String),

    /// The data service rejected or failed a query.
    #[error("Data service query failed: {0}")]
    QueryFailed(String),

    /// The requested record was not found.
    #[error("Record not found: {0}")]
    NotFound(String),

    /// Internal/unexpected data service error.
    #[error("Internal data service error: {0}")]
    Internal(String),
}

/// Validation errors for row data and user input.
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Required field '{0}' is missing")]
    MissingField(String),

    #[error("Failed to parse decimal number: {0}")]
    DecimalParse(#[from] rust_decimal::Error),

    #[error("Failed to parse date/time: {0}")]
    DateTimeParse(#[from] ChronoParseError),
}

impl From<rust_decimal::Error> for Error {
    fn from(err: rust_decimal::Error) -> Self {
        Error::Validation(ValidationError::DecimalParse(err))
    }
}

impl From<ChronoParseError> for Error {
    fn from(err: ChronoParseError) -> Self {
        Error::Validation(ValidationError::DateTimeParse(err))
    }
}

impl Error {
    /// Returns true when the error originates from the data service rather
    /// than from the data it returned.
    pub fn is_data_service_failure(&self) -> bool {
        matches!(
            self,
            Error::Database(
                DatabaseError::ConnectionFailed(_)
                    | DatabaseError::QueryFailed(_)
                    | DatabaseError::Internal(_)
            )
        )
    }
}
