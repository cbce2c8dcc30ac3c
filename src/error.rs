//! Error types for Bookshelf server

use axum::{
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use chrono::{SecondsFormat, Utc};
use serde::Serialize;
use thiserror::Error;

/// Main application error type
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Validation error: {}", .0.join(", "))]
    Validation(Vec<String>),

    #[error("Book with id: {0} not found")]
    NotFound(i64),

    #[error("Malformed request: {0}")]
    MalformedRequest(String),

    #[error("Database error: {0}")]
    Database(sqlx::Error),

    #[error("Internal server error: {0}")]
    Internal(String),
}

/// Body returned for requests that fail field validation
#[derive(Debug, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ValidationErrorResponse {
    /// Time the error was produced (RFC 3339, UTC)
    pub timestamp: String,
    pub http_status: u16,
    /// One message per violated constraint
    pub errors: Vec<String>,
}

/// Error response body for unexpected failures
#[derive(Serialize, utoipa::ToSchema)]
pub struct ErrorResponse {
    pub code: u16,
    pub error: String,
    pub message: String,
}

impl From<sqlx::Error> for AppError {
    fn from(e: sqlx::Error) -> Self {
        // CHECK constraints on the books table back the field rules; a row
        // that slips past the validator is a client error, not a 500.
        if let sqlx::Error::Database(ref db) = e {
            if db.is_check_violation() {
                return AppError::MalformedRequest(db.message().to_string());
            }
        }
        AppError::Database(e)
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::MalformedRequest(rejection.body_text())
    }
}

impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        AppError::MalformedRequest(rejection.body_text())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::Validation(errors) => {
                let status = StatusCode::BAD_REQUEST;
                let body = ValidationErrorResponse {
                    timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
                    http_status: status.as_u16(),
                    errors,
                };
                (status, Json(body)).into_response()
            }
            AppError::NotFound(id) => {
                tracing::debug!(id, "Book not found");
                StatusCode::NOT_FOUND.into_response()
            }
            AppError::MalformedRequest(reason) => {
                tracing::debug!("Malformed request: {}", reason);
                StatusCode::BAD_REQUEST.into_response()
            }
            AppError::Database(e) => {
                tracing::error!("Database error: {:?}", e);
                internal_error("Database error")
            }
            AppError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                internal_error("Internal server error")
            }
        }
    }
}

fn internal_error(message: &str) -> Response {
    let status = StatusCode::INTERNAL_SERVER_ERROR;
    let body = Json(ErrorResponse {
        code: status.as_u16(),
        error: "InternalServerError".to_string(),
        message: message.to_string(),
    });
    (status, body).into_response()
}

/// Result type alias for application operations
pub type AppResult<T> = Result<T, AppError>;
