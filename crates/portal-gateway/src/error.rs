use crate::model::ErrorResponse;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use portal_core::CoreError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, AppError>;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("key not found: {0}")]
    NotFound(String),
    #[error("invalid request: {0}")]
    InvalidRequest(String),
    /// The stored URL cannot be sent as a `Location` header.
    #[error("stored url for key {0} is not a valid redirect target")]
    InvalidRedirect(String),
    #[error("internal server error")]
    Internal,
}

impl AppError {
    fn status(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            AppError::InvalidRedirect(_) | AppError::Internal => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Message exposed to clients. Internal details stay in the logs.
    fn public_message(&self) -> &'static str {
        match self {
            AppError::NotFound(_) => "key not found",
            AppError::InvalidRequest(_) => "invalid request",
            AppError::InvalidRedirect(_) | AppError::Internal => "internal server error",
        }
    }
}

impl From<CoreError> for AppError {
    fn from(value: CoreError) -> Self {
        match value {
            CoreError::NotFound(key) => AppError::NotFound(key),
            CoreError::InvalidShortCode(message) => AppError::InvalidRequest(message),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let body = ErrorResponse {
            error: self.public_message(),
        };
        (self.status(), Json(body)).into_response()
    }
}
