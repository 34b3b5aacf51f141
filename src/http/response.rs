//! Error responses for the HTTP adapter
//!
//! Domain refusals from the core become `400 Bad Request`; anything the adapter
//! itself could not handle (an undecodable body, a panicking handler) becomes
//! `500 Internal Server Error`. Both carry a `{"error": "..."}` JSON body.

use crate::types::{AccountError, ErrorResponse};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use std::any::Any;
use thiserror::Error;

/// Failure of a `/account` request
#[derive(Debug, Error)]
pub enum ApiError {
    /// The core refused the operation
    #[error(transparent)]
    Account(#[from] AccountError),

    /// The request body is not the expected JSON document
    #[error("{0}")]
    MalformedBody(#[from] serde_json::Error),

    /// A handler panicked
    #[error("{0}")]
    Internal(String),
}

impl ApiError {
    /// HTTP status this error is reported with
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Account(_) => StatusCode::BAD_REQUEST,
            ApiError::MalformedBody(_) | ApiError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::warn!(error = %self, %status, "request failed");
        } else {
            tracing::debug!(error = %self, %status, "request rejected");
        }

        let body = ErrorResponse {
            error: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}

/// Turn a caught handler panic into a JSON `500` response
pub fn panic_response(panic: Box<dyn Any + Send + 'static>) -> Response {
    let message = if let Some(message) = panic.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = panic.downcast_ref::<String>() {
        message.clone()
    } else {
        "unknown panic".to_string()
    };

    tracing::error!(panic = %message, "handler panicked");
    ApiError::Internal(message).into_response()
}
