/// Unified error handling module
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Why a Live acquisition failed
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AcquisitionError {
    /// Request could not be sent, the connection broke, or it timed out
    #[error("network error: {0}")]
    Network(String),

    /// Backend answered with a non-success status or `success: false`
    #[error("backend error from {endpoint} (status {status}): {message}")]
    Backend {
        endpoint: &'static str,
        status: u16,
        message: String,
    },

    /// Body did not match the expected schema
    #[error("malformed response from {endpoint}: {message}")]
    Decode {
        endpoint: &'static str,
        message: String,
    },
}

impl AcquisitionError {
    pub fn kind(&self) -> &'static str {
        match self {
            AcquisitionError::Network(_) => "network",
            AcquisitionError::Backend { .. } => "backend",
            AcquisitionError::Decode { .. } => "decode",
        }
    }

    pub fn timed_out(after: std::time::Duration) -> Self {
        AcquisitionError::Network(format!("request timed out after {}s", after.as_secs_f64()))
    }
}

impl From<reqwest::Error> for AcquisitionError {
    fn from(err: reqwest::Error) -> Self {
        if let Some(status) = err.status() {
            return AcquisitionError::Backend {
                endpoint: "backend",
                status: status.as_u16(),
                message: err.to_string(),
            };
        }
        if err.is_decode() {
            return AcquisitionError::Decode {
                endpoint: "backend",
                message: err.to_string(),
            };
        }
        AcquisitionError::Network(err.to_string())
    }
}

pub type AcquisitionResult<T> = Result<T, AcquisitionError>;

/// Unified error response format
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub ok: bool,
    pub error: ErrorDetail,
}

#[derive(Debug, Serialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
}

/// Errors surfaced on the renderer-facing routes
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (code, message) = match &self {
            ApiError::InvalidInput(msg) => ("INVALID_INPUT", msg.clone()),
        };

        let error_response = ErrorResponse {
            ok: false,
            error: ErrorDetail {
                code: code.to_string(),
                message,
            },
        };

        // Always HTTP 200 with ok=false
        (StatusCode::OK, Json(error_response)).into_response()
    }
}

pub type ApiResult<T> = Result<T, ApiError>;
