//! # User Errors
//!
//! Error types for the user store and service.

use thiserror::Error;

use super::validation::ValidationError;

/// Result type for user operations
pub type UserResult<T> = Result<T, UserError>;

/// Errors raised by user operations
#[derive(Debug, Clone, Error)]
pub enum UserError {
    /// Payload or path parameter failed boundary validation
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// No record carries the requested id
    #[error("User not found")]
    NotFound(i64),

    /// Store could not be accessed
    #[error("Storage error: {0}")]
    StorageError(String),
}

impl UserError {
    /// Returns the HTTP status code for this error
    pub fn status_code(&self) -> u16 {
        match self {
            UserError::Validation(_) => 422,
            UserError::NotFound(_) => 404,
            UserError::StorageError(_) => 500,
        }
    }
}
