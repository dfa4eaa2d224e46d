//! HTTP error responses
//!
//! Every failure leaves the server as an [`ErrorResponse`] body with a
//! non-2xx status. Success bodies are never reused for errors.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;
use tracing::{error, warn};

use crate::users::{FieldIssue, UserError, ValidationError};

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: u16,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<Vec<FieldIssue>>,
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Errors surfaced by HTTP handlers and extractors
#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    User(#[from] UserError),

    /// Request was rejected by axum before validation (e.g. body too large)
    #[error("{message}")]
    Rejected { status: StatusCode, message: String },

    /// No route matched the request path
    #[error("Not found")]
    RouteNotFound,
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        ApiError::User(UserError::Validation(err))
    }
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::User(e) => {
                StatusCode::from_u16(e.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
            }
            ApiError::Rejected { status, .. } => *status,
            ApiError::RouteNotFound => StatusCode::NOT_FOUND,
        }
    }

    fn to_body(&self) -> ErrorResponse {
        let status = self.status();
        let (error, detail) = match self {
            ApiError::User(UserError::Validation(v)) => {
                ("Validation failed".to_string(), Some(v.issues().to_vec()))
            }
            other => (other.to_string(), None),
        };

        ErrorResponse {
            error,
            code: status.as_u16(),
            detail,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            error!(error = %self, "request failed");
        } else if !matches!(self, ApiError::User(UserError::NotFound(_)) | ApiError::RouteNotFound) {
            warn!(status = status.as_u16(), error = %self, "request rejected");
        }

        (status, Json(self.to_body())).into_response()
    }
}
