//! Application-wide error types.

use thiserror::Error;

/// Result type alias using `AppError`.
pub type AppResult<T> = Result<T, AppError>;

/// Application error taxonomy.
///
/// Every variant carries a human-readable identification of the offending
/// entity. Failures are never retried; they propagate unchanged to the HTTP
/// boundary, where `status_code` is consulted exactly once.
#[derive(Debug, Error)]
pub enum AppError {
    /// A referenced currency or rate row does not exist.
    #[error("{0}")]
    NotFound(String),

    /// Malformed or out-of-range request fields.
    #[error("{0}")]
    Validation(String),

    /// An insert would violate the pair/code uniqueness invariant.
    #[error("{0}")]
    Conflict(String),

    /// The persistence layer could not complete an operation.
    #[error("Database error: {0}")]
    Database(String),

    /// Internal server error.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// Returns the HTTP status code for this error.
    #[must_use]
    pub const fn status_code(&self) -> u16 {
        match self {
            Self::NotFound(_) => 404,
            Self::Validation(_) => 400,
            Self::Conflict(_) => 409,
            Self::Database(_) | Self::Internal(_) => 500,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_status_codes() {
        assert_eq!(AppError::NotFound(String::new()).status_code(), 404);
        assert_eq!(AppError::Validation(String::new()).status_code(), 400);
        assert_eq!(AppError::Conflict(String::new()).status_code(), 409);
        assert_eq!(AppError::Database(String::new()).status_code(), 500);
        assert_eq!(AppError::Internal(String::new()).status_code(), 500);
    }

    #[test]
    fn test_error_display() {
        assert_eq!(
            AppError::NotFound("Currency with code EUR not found".into()).to_string(),
            "Currency with code EUR not found"
        );
        assert_eq!(
            AppError::Validation("Wrong request parameters".into()).to_string(),
            "Wrong request parameters"
        );
        assert_eq!(
            AppError::Database("msg".into()).to_string(),
            "Database error: msg"
        );
    }
}
