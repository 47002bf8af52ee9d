//! Centralized error handling.
//!
//! Provides a unified error type for the entire application,
//! with automatic HTTP response conversion.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Application error types
#[derive(Error, Debug)]
pub enum AppError {
    // Resource errors
    #[error("ID[{0}] not found")]
    UserNotFound(i32),

    #[error("Post ID[{0}] not found")]
    PostNotFound(i32),

    /// Owner missing while addressing one of its posts
    #[error("User ID[{0}] not found")]
    PostOwnerNotFound(i32),

    // Validation
    #[error("{0}")]
    Validation(String),

    // External service errors
    #[error("Database error")]
    Database(#[from] sea_orm::DbErr),

    // Internal
    #[error("Internal server error")]
    Internal(String),
}

/// Error response body
#[derive(Debug, Serialize)]
struct ErrorResponse {
    error: ErrorBody,
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    code: String,
    message: String,
}

impl AppError {
    /// Get error code for client
    pub fn code(&self) -> &'static str {
        match self {
            AppError::UserNotFound(_) | AppError::PostOwnerNotFound(_) => "USER_NOT_FOUND",
            AppError::PostNotFound(_) => "POST_NOT_FOUND",
            AppError::Validation(_) => "VALIDATION_ERROR",
            AppError::Database(_) => "DATABASE_ERROR",
            AppError::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// Get HTTP status code
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::UserNotFound(_)
            | AppError::PostNotFound(_)
            | AppError::PostOwnerNotFound(_) => StatusCode::NOT_FOUND,
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::Database(_) | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get user-facing message (hides internal details)
    pub fn user_message(&self) -> String {
        match self {
            AppError::Validation(msg) => msg.clone(),

            // Hide details for internal errors
            AppError::Database(e) => {
                tracing::error!("Database error: {:?}", e);
                "A database error occurred".to_string()
            }
            AppError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                "An internal error occurred".to_string()
            }

            // Not-found messages echo the missing ID
            _ => self.to_string(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = ErrorResponse {
            error: ErrorBody {
                code: self.code().to_string(),
                message: self.user_message(),
            },
        };

        (status, Json(body)).into_response()
    }
}

/// Result type alias
pub type AppResult<T> = Result<T, AppError>;

/// Convenience constructors
impl AppError {
    pub fn validation(msg: impl Into<String>) -> Self {
        AppError::Validation(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        AppError::Internal(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_messages_echo_id() {
        assert_eq!(AppError::UserNotFound(7).user_message(), "ID[7] not found");
        assert_eq!(AppError::PostNotFound(12).user_message(), "Post ID[12] not found");
        assert_eq!(
            AppError::PostOwnerNotFound(3).user_message(),
            "User ID[3] not found"
        );
    }

    #[test]
    fn test_status_codes() {
        assert_eq!(AppError::UserNotFound(1).status(), StatusCode::NOT_FOUND);
        assert_eq!(AppError::PostNotFound(1).status(), StatusCode::NOT_FOUND);
        assert_eq!(AppError::PostOwnerNotFound(1).status(), StatusCode::NOT_FOUND);
        assert_eq!(AppError::PostOwnerNotFound(1).code(), "USER_NOT_FOUND");
        assert_eq!(AppError::validation("bad").status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            AppError::internal("boom").status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_internal_details_are_hidden() {
        let err = AppError::internal("connection string leaked");
        assert_eq!(err.user_message(), "An internal error occurred");
    }

    #[test]
    fn test_into_response_status() {
        let response = AppError::UserNotFound(3).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
