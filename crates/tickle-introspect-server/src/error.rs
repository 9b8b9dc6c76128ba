//! Mapping of request failures onto HTTP responses
//!
//! Bodies are plain text: the status code is the only structured part of an error.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::connectors::ConnectorError;
use crate::dto::HarvestRequestDtoError;
use crate::store::StoreError;

/// Result type alias for route handlers
pub type AppResult<T> = std::result::Result<T, AppError>;

#[derive(Error, Debug)]
pub enum AppError {
    /// Client sent something unusable; the message goes back verbatim
    #[error("{0}")]
    Validation(String),

    /// An external service failed; its message goes back verbatim
    #[error("{0}")]
    Upstream(String),

    #[error("Record store error: {0}")]
    Store(#[from] StoreError),
}

impl From<ConnectorError> for AppError {
    fn from(err: ConnectorError) -> Self {
        match err {
            ConnectorError::Status { body, status, .. } if !body.is_empty() => {
                tracing::debug!(%status, "Upstream rejected request");
                AppError::Upstream(body)
            },
            other => AppError::Upstream(other.to_string()),
        }
    }
}

impl From<HarvestRequestDtoError> for AppError {
    fn from(err: HarvestRequestDtoError) -> Self {
        AppError::Validation(err.to_string())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::Validation(message) => (StatusCode::BAD_REQUEST, message),
            AppError::Upstream(message) => (StatusCode::INTERNAL_SERVER_ERROR, message),
            AppError::Store(ref e) => {
                tracing::error!(error = ?e, "Record store error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "A record store error occurred".to_string(),
                )
            },
        };

        (status, message).into_response()
    }
}
