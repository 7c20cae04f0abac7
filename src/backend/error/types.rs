/**
 * Backend Error Types
 *
 * This module defines the errors a registration request can end in.
 * Each variant maps to exactly one HTTP status and one client-facing message.
 *
 * # Error Categories
 *
 * ## Client Errors
 *
 * - Malformed or undecodable request body (400)
 * - Email already registered (409)
 * - Unknown route (404)
 *
 * ## Server Errors
 *
 * - Password hashing failure (500)
 * - Insert failure (500)
 *
 * Downstream causes (`HashError`, `StoreError`) are kept as error sources for
 * logging and never reach the response body.
 */

use axum::http::StatusCode;
use thiserror::Error;

use crate::backend::auth::password::HashError;
use crate::backend::auth::users::StoreError;

/// Backend-specific error types
///
/// # Usage
///
/// ```rust
/// use campusburn::backend::error::BackendError;
/// use axum::http::StatusCode;
///
/// let err = BackendError::invalid_body("expected value at line 1 column 1");
/// assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
/// assert_eq!(err.message(), "Invalid request body");
/// ```
#[derive(Debug, Error)]
pub enum BackendError {
    /// The request body could not be decoded into a registration request
    #[error("Invalid request body: {reason}")]
    InvalidBody {
        /// Decoder diagnostic, logged only
        reason: String,
    },

    /// An account with the submitted email already exists
    #[error("User already exists")]
    UserExists,

    /// Hashing the submitted password failed
    #[error("Cannot save the password in the database")]
    PasswordHash(#[source] HashError),

    /// The store rejected the insert
    #[error("User not created")]
    UserNotCreated(#[source] StoreError),

    /// No route matched the request
    #[error("Not found")]
    NotFound,
}

impl BackendError {
    /// Create an invalid-body error from a decoder diagnostic
    pub fn invalid_body(reason: impl Into<String>) -> Self {
        Self::InvalidBody {
            reason: reason.into(),
        }
    }

    /// Get the HTTP status code for this error
    ///
    /// # Status Code Mapping
    ///
    /// - `InvalidBody` - 400 Bad Request
    /// - `UserExists` - 409 Conflict
    /// - `PasswordHash` - 500 Internal Server Error
    /// - `UserNotCreated` - 500 Internal Server Error
    /// - `NotFound` - 404 Not Found
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::InvalidBody { .. } => StatusCode::BAD_REQUEST,
            Self::UserExists => StatusCode::CONFLICT,
            Self::PasswordHash(_) | Self::UserNotCreated(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::NotFound => StatusCode::NOT_FOUND,
        }
    }

    /// Get the message sent to the client
    ///
    /// Unlike `Display`, this never includes the underlying cause.
    pub fn message(&self) -> &'static str {
        match self {
            Self::InvalidBody { .. } => "Invalid request body",
            Self::UserExists => "User already exists",
            Self::PasswordHash(_) => "Cannot save the password in the database",
            Self::UserNotCreated(_) => "User not created",
            Self::NotFound => "Not found",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_body_error() {
        let error = BackendError::invalid_body("missing field `email`");
        match &error {
            BackendError::InvalidBody { reason } => {
                assert_eq!(reason, "missing field `email`");
            }
            _ => panic!("Expected InvalidBody"),
        }
        assert_eq!(error.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(error.message(), "Invalid request body");
    }

    #[test]
    fn test_status_code_mapping() {
        assert_eq!(BackendError::UserExists.status_code(), StatusCode::CONFLICT);
        assert_eq!(BackendError::NotFound.status_code(), StatusCode::NOT_FOUND);

        let hash_error = BackendError::PasswordHash(HashError::Bcrypt(
            bcrypt::BcryptError::CostNotAllowed(2),
        ));
        assert_eq!(hash_error.status_code(), StatusCode::INTERNAL_SERVER_ERROR);

        let store_error = BackendError::UserNotCreated(StoreError::Database(
            sqlx::Error::PoolTimedOut,
        ));
        assert_eq!(store_error.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_message_hides_cause() {
        let error = BackendError::UserNotCreated(StoreError::Database(sqlx::Error::PoolTimedOut));
        assert_eq!(error.message(), "User not created");
        assert!(std::error::Error::source(&error).is_some());
    }

    #[test]
    fn test_duplicate_message() {
        assert_eq!(BackendError::UserExists.message(), "User already exists");
        assert_eq!(BackendError::UserExists.to_string(), "User already exists");
    }
}
