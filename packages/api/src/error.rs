//! Error taxonomy for the HTTP endpoints.
//!
//! Every failure a handler can produce is a variant here, and
//! `IntoResponse` turns each into the `{"error": ...}` body with the right
//! status code. Infrastructure failures (the 500 class) are logged with the
//! wrapped driver error at conversion time and cross the boundary only as a
//! generic message — no internal detail reaches the caller.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;

use crate::models::ErrorBody;

#[derive(Debug, Error)]
pub enum ApiError {
    /// A field was missing, mistyped, or failed its pattern.
    #[error("invalid registration payload")]
    InvalidInput,

    /// The registration endpoint only accepts POST.
    #[error("method not allowed")]
    MethodNotAllowed,

    /// The duplicate check found an existing record for the email.
    #[error("email already registered")]
    DuplicateEmail,

    /// A lookup or insert against the collection failed.
    #[error("database operation failed: {0}")]
    Database(mongodb::error::Error),

    /// The insert reported no generated id.
    #[error("insert returned no object id")]
    InsertFailed,

    /// The connectivity check could not list collections.
    #[error("could not reach the database: {0}")]
    Connection(mongodb::error::Error),
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            ApiError::InvalidInput => StatusCode::BAD_REQUEST,
            ApiError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            ApiError::DuplicateEmail => StatusCode::CONFLICT,
            ApiError::Database(_) | ApiError::InsertFailed | ApiError::Connection(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// The short human-readable string the caller sees.
    fn public_message(&self) -> &'static str {
        match self {
            ApiError::InvalidInput => "Invalid input data.",
            ApiError::MethodNotAllowed => "Method not allowed. Use POST instead.",
            ApiError::DuplicateEmail => "Email is already registered.",
            ApiError::Database(_) | ApiError::InsertFailed => "Internal server error.",
            ApiError::Connection(_) => "Error connecting to MongoDB",
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        }

        let body = ErrorBody {
            error: self.public_message().to_string(),
        };
        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(ApiError::InvalidInput.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            ApiError::MethodNotAllowed.status(),
            StatusCode::METHOD_NOT_ALLOWED
        );
        assert_eq!(ApiError::DuplicateEmail.status(), StatusCode::CONFLICT);
        assert_eq!(
            ApiError::InsertFailed.status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_public_messages_carry_no_detail() {
        assert_eq!(ApiError::InvalidInput.public_message(), "Invalid input data.");
        assert_eq!(
            ApiError::MethodNotAllowed.public_message(),
            "Method not allowed. Use POST instead."
        );
        assert_eq!(
            ApiError::DuplicateEmail.public_message(),
            "Email is already registered."
        );
        assert_eq!(
            ApiError::InsertFailed.public_message(),
            "Internal server error."
        );
    }
}
