use std::sync::Arc;

use axum::extract::{Request, State};
use axum::http::HeaderValue;
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};

use crate::config::AuthConfig;
use crate::error::PredictionError;

pub const API_KEY_HEADER: &str = "x-api-key";

/// Optional shared-secret check in front of the prediction endpoint.
///
/// Without a configured secret every request passes. That open default is
/// insecure and kept for compatibility with existing deployments.
#[derive(Clone, Default)]
pub struct AccessGate {
    expected: Option<Arc<str>>,
}

impl AccessGate {
    pub fn new(expected: Option<String>) -> Self {
        Self {
            expected: expected.filter(|key| !key.is_empty()).map(Arc::from),
        }
    }

    pub fn open() -> Self {
        Self::default()
    }

    pub fn is_enabled(&self) -> bool {
        self.expected.is_some()
    }

    /// Exact, case-sensitive comparison against the configured secret.
    pub fn check(&self, provided: Option<&HeaderValue>) -> Result<(), PredictionError> {
        let Some(expected) = self.expected.as_deref() else {
            return Ok(());
        };

        match provided {
            None => Err(PredictionError::Unauthorized),
            Some(value) if value.is_empty() => Err(PredictionError::Unauthorized),
            Some(value) if value.as_bytes() == expected.as_bytes() => Ok(()),
            Some(_) => Err(PredictionError::Forbidden),
        }
    }
}

impl From<&AuthConfig> for AccessGate {
    fn from(config: &AuthConfig) -> Self {
        Self::new(config.api_key.clone())
    }
}

pub async fn require_api_key(
    State(gate): State<AccessGate>,
    request: Request,
    next: Next,
) -> Response {
    if let Err(rejection) = gate.check(request.headers().get(API_KEY_HEADER)) {
        return rejection.into_response();
    }

    next.run(request).await
}
