//! HTTP error mapping for the Segitiga web front end.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use segitiga_types::SegitigaError;
use serde::Serialize;
use thiserror::Error;
use tracing::{error, warn};

#[derive(Error, Debug)]
pub enum ApiError {
    /// Malformed request (400 Bad Request)
    #[error("Validation error: {message}")]
    Validation { message: String, field: Option<String> },

    /// Resource not found (404 Not Found)
    #[error("Resource not found: {resource}")]
    NotFound { resource: String },

    /// Internal server errors (500 Internal Server Error)
    #[error("Internal server error: {message}")]
    Internal { message: String },
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Validation { .. } => StatusCode::BAD_REQUEST,
            ApiError::NotFound { .. } => StatusCode::NOT_FOUND,
            ApiError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn error_code(&self) -> &'static str {
        match self {
            ApiError::Validation { .. } => "VALIDATION_ERROR",
            ApiError::NotFound { .. } => "NOT_FOUND",
            ApiError::Internal { .. } => "INTERNAL_ERROR",
        }
    }

    pub fn to_response(&self) -> ApiErrorResponse {
        let field = match self {
            ApiError::Validation { field, .. } => field.clone(),
            _ => None,
        };
        ApiErrorResponse {
            code: self.error_code().to_string(),
            message: self.to_string(),
            field,
        }
    }
}

/// JSON body of every error response.
#[derive(Debug, Clone, Serialize)]
pub struct ApiErrorResponse {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
}

impl From<SegitigaError> for ApiError {
    fn from(err: SegitigaError) -> Self {
        match &err {
            SegitigaError::UnknownCalculator { name } => {
                ApiError::NotFound { resource: format!("calculator '{name}'") }
            }
            SegitigaError::UnknownField { name } => {
                ApiError::Validation { message: err.to_string(), field: Some(name.clone()) }
            }
            SegitigaError::MissingInput { .. } | SegitigaError::Configuration { .. } => {
                ApiError::Internal { message: err.to_string() }
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            error!(code = self.error_code(), error = %self, "Request failed");
        } else {
            warn!(code = self.error_code(), error = %self, "Request rejected");
        }
        (status, Json(self.to_response())).into_response()
    }
}

pub type ApiResult<T> = Result<T, ApiError>;
