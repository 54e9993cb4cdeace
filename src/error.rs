//! Error types for the library server

use axum::{
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Application error codes carried in every error body
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u32)]
pub enum ErrorCode {
    Failure = 1,
    DbFailure = 3,
    NoSuchData = 4,
    BadValue = 5,
    Duplicate = 8,
}

/// Main application error type
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Constraint violation: {0}")]
    Constraint(String),

    #[error("Database error: {0}")]
    Database(sqlx::Error),

    #[error("Internal server error: {0}")]
    Internal(String),
}

/// Error response body
#[derive(Serialize, utoipa::ToSchema)]
pub struct ErrorResponse {
    pub code: u32,
    pub error: String,
}

impl AppError {
    /// HTTP status and error code for this error.
    ///
    /// Only missing lookup targets are distinguished; input and store
    /// failures all answer 500.
    pub fn status(&self) -> (StatusCode, ErrorCode) {
        match self {
            AppError::NotFound(_) => (StatusCode::NOT_FOUND, ErrorCode::NoSuchData),
            AppError::Validation(_) => (StatusCode::INTERNAL_SERVER_ERROR, ErrorCode::BadValue),
            AppError::Constraint(_) => (StatusCode::INTERNAL_SERVER_ERROR, ErrorCode::Duplicate),
            AppError::Database(_) => (StatusCode::INTERNAL_SERVER_ERROR, ErrorCode::DbFailure),
            AppError::Internal(_) => (StatusCode::INTERNAL_SERVER_ERROR, ErrorCode::Failure),
        }
    }
}

impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::RowNotFound => AppError::NotFound("No matching row".to_string()),
            sqlx::Error::Database(db_err)
                if db_err.is_unique_violation()
                    || db_err.is_foreign_key_violation()
                    || db_err.is_check_violation() =>
            {
                AppError::Constraint(db_err.message().to_string())
            }
            other => AppError::Database(other),
        }
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::Validation(rejection.body_text())
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Validation(format!("Failed to deserialize the JSON body into the target type: {}", err))
    }
}

/// A path segment that does not parse as an id cannot name an existing row
impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        AppError::NotFound(rejection.body_text())
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        AppError::Validation(errors.to_string())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code) = self.status();

        let message = match &self {
            AppError::NotFound(msg) | AppError::Validation(msg) | AppError::Constraint(msg) => {
                if status.is_server_error() {
                    tracing::error!("{}", self);
                }
                msg.clone()
            }
            AppError::Database(e) => {
                tracing::error!("Database error: {:?}", e);
                "Database error".to_string()
            }
            AppError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                "Internal server error".to_string()
            }
        };

        let body = Json(ErrorResponse {
            code: code as u32,
            error: message,
        });

        (status, body).into_response()
    }
}

/// Result type alias for application operations
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_is_404() {
        let (status, code) = AppError::NotFound("User 3 not found".into()).status();
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(code, ErrorCode::NoSuchData);
    }

    #[test]
    fn test_input_and_store_failures_are_500() {
        for err in [
            AppError::Validation("bad date".into()),
            AppError::Constraint("UNIQUE constraint failed: users.email".into()),
            AppError::Database(sqlx::Error::PoolTimedOut),
            AppError::Internal("boom".into()),
        ] {
            assert_eq!(err.status().0, StatusCode::INTERNAL_SERVER_ERROR);
        }
    }

    #[test]
    fn test_row_not_found_maps_to_not_found() {
        assert!(matches!(AppError::from(sqlx::Error::RowNotFound), AppError::NotFound(_)));
    }

    #[test]
    fn test_payload_decoding_errors_are_validation_errors() {
        let err = serde_json::from_str::<i64>("\"x\"").unwrap_err();
        assert!(matches!(AppError::from(err), AppError::Validation(_)));
    }

    #[test]
    fn test_other_sqlx_errors_stay_database_errors() {
        assert!(matches!(
            AppError::from(sqlx::Error::PoolClosed),
            AppError::Database(_)
        ));
    }

    #[tokio::test]
    async fn test_error_body_carries_message() {
        let response = AppError::NotFound("Book 9 not found".into()).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["error"], "Book 9 not found");
        assert_eq!(body["code"], ErrorCode::NoSuchData as u32);
    }
}
