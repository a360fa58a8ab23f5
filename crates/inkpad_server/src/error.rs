//! API and server error mapping.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use inkpad_core::{PageServiceError, RepoError, StoreError};
use thiserror::Error;

/// Request-scoped failure, rendered as a JSON error body.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("page not found: {0}")]
    NotFound(String),

    #[error("{0}")]
    InvalidInput(String),

    #[error("internal error: {0}")]
    Internal(String),
}

impl From<PageServiceError> for ApiError {
    fn from(err: PageServiceError) -> Self {
        match err {
            PageServiceError::PageNotFound(title) => Self::NotFound(title),
            PageServiceError::Validation(err) => Self::InvalidInput(err.to_string()),
            other => Self::Internal(other.to_string()),
        }
    }
}

impl From<RepoError> for ApiError {
    fn from(err: RepoError) -> Self {
        match err {
            RepoError::NotFound(title) => Self::NotFound(title),
            RepoError::Validation(err) => Self::InvalidInput(err.to_string()),
            RepoError::InvalidKey(key) => Self::InvalidInput(format!("unusable title `{key}`")),
            other => Self::Internal(other.to_string()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::InvalidInput(_) => StatusCode::BAD_REQUEST,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        if status.is_server_error() {
            log::error!("event=api_error module=server status={status} error={self}");
        }
        let body = Json(serde_json::json!({ "error": self.to_string() }));
        (status, body).into_response()
    }
}

/// Process-level failure while configuring or running the server.
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("page store error: {0}")]
    Store(#[from] StoreError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("internal error: {0}")]
    Internal(String),
}
