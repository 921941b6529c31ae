use crate::config::ConfigError;
use crate::scoring::ValidationError;
use crate::telemetry::TelemetryError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use std::fmt;

pub const INTERNAL_SERVER_ERROR: &str = "Internal Server Error";
pub const UNEXPECTED_ERROR_MESSAGE: &str = "An unexpected error occurred";
pub const PROCESSING_ERROR_MESSAGE: &str = "An error occurred while processing your request";

/// Process-level failures: startup, serving, and the command line. Never sent to HTTP callers.
#[derive(Debug)]
pub enum AppError {
    Config(ConfigError),
    Telemetry(TelemetryError),
    Io(std::io::Error),
    Json(serde_json::Error),
    Input(ValidationError),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Config(err) => write!(f, "configuration error: {}", err),
            AppError::Telemetry(err) => write!(f, "telemetry error: {}", err),
            AppError::Io(err) => write!(f, "io error: {}", err),
            AppError::Json(err) => write!(f, "json error: {}", err),
            AppError::Input(err) => write!(f, "invalid input: {}", err),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Config(err) => Some(err),
            AppError::Telemetry(err) => Some(err),
            AppError::Io(err) => Some(err),
            AppError::Json(err) => Some(err),
            AppError::Input(err) => Some(err),
        }
    }
}

impl From<ConfigError> for AppError {
    fn from(value: ConfigError) -> Self {
        Self::Config(value)
    }
}

impl From<TelemetryError> for AppError {
    fn from(value: TelemetryError) -> Self {
        Self::Telemetry(value)
    }
}

impl From<std::io::Error> for AppError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<serde_json::Error> for AppError {
    fn from(value: serde_json::Error) -> Self {
        Self::Json(value)
    }
}

impl From<ValidationError> for AppError {
    fn from(value: ValidationError) -> Self {
        Self::Input(value)
    }
}

/// Terminal outcome of a rejected prediction request.
#[derive(Debug, thiserror::Error)]
pub enum PredictionError {
    #[error("Request body is required")]
    BadRequest,
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("Please provide x-api-key header")]
    Unauthorized,
    #[error("The provided API key is not valid")]
    Forbidden,
    /// Detail is for the operator log only.
    #[error("{0}")]
    Internal(String),
}

impl PredictionError {
    pub fn status(&self) -> StatusCode {
        match self {
            PredictionError::BadRequest | PredictionError::Validation(_) => {
                StatusCode::BAD_REQUEST
            }
            PredictionError::Unauthorized => StatusCode::UNAUTHORIZED,
            PredictionError::Forbidden => StatusCode::FORBIDDEN,
            PredictionError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Value of the `error` field in the response body.
    pub fn category(&self) -> &'static str {
        match self {
            PredictionError::BadRequest => "Bad Request",
            PredictionError::Validation(_) => "Validation Error",
            PredictionError::Unauthorized => "Authentication required",
            PredictionError::Forbidden => "Invalid API key",
            PredictionError::Internal(_) => INTERNAL_SERVER_ERROR,
        }
    }

    /// Value of the `message` field in the response body.
    pub fn public_message(&self) -> String {
        match self {
            PredictionError::Internal(_) => PROCESSING_ERROR_MESSAGE.to_string(),
            other => other.to_string(),
        }
    }
}

impl IntoResponse for PredictionError {
    fn into_response(self) -> Response {
        let body = Json(json!({
            "error": self.category(),
            "message": self.public_message(),
        }));
        (self.status(), body).into_response()
    }
}
