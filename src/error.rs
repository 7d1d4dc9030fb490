// src/error.rs

use axum::{
    Json,
    extract::rejection::{JsonRejection, PathRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use std::fmt;
use utoipa::ToSchema;

/// Global Application Error Enum.
/// Every failure the API reports is one of these two kinds. The optional
/// payload replaces the default message in the response body.
#[derive(Debug)]
pub enum AppError {
    // 400 Bad Request
    BadRequest(Option<String>),

    // 404 Not Found
    NotFound(Option<String>),
}

impl AppError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        AppError::BadRequest(Some(message.into()))
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        AppError::NotFound(Some(message.into()))
    }

    pub fn status(&self) -> StatusCode {
        match self {
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
        }
    }

    pub fn message(&self) -> &str {
        match self {
            AppError::BadRequest(msg) => msg.as_deref().unwrap_or("Bad request"),
            AppError::NotFound(msg) => msg.as_deref().unwrap_or("Resource not found"),
        }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.status().as_u16(), self.message())
    }
}

impl std::error::Error for AppError {}

/// Failure envelope shared by every error response.
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorBody {
    pub success: bool,
    pub error: u16,
    pub message: String,
}

/// Converts the error into `{success: false, error, message}` with the matching status.
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = Json(ErrorBody {
            success: false,
            error: status.as_u16(),
            message: self.message().to_string(),
        });

        (status, body).into_response()
    }
}

/// Store failures never leak to the caller: log, then answer a generic 400.
impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        tracing::error!("Store operation failed: {:?}", err);
        AppError::BadRequest(None)
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        tracing::debug!("Rejected JSON body: {}", rejection.body_text());
        AppError::BadRequest(None)
    }
}

impl From<QueryRejection> for AppError {
    fn from(rejection: QueryRejection) -> Self {
        tracing::debug!("Rejected query string: {}", rejection.body_text());
        AppError::BadRequest(None)
    }
}

/// A path segment that does not parse (e.g. `/questions/abc`) names no resource.
impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        tracing::debug!("Rejected path: {}", rejection.body_text());
        AppError::NotFound(None)
    }
}
