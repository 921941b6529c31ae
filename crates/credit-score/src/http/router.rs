use axum::handler::Handler;
use axum::middleware::{from_fn, from_fn_with_state};
use axum::routing::post;
use axum::Router;

use super::gate::{require_api_key, AccessGate};
use super::handler::predict_handler;
use super::middleware::{catch_panic, cors, log_request, not_found};

pub const PREDICT_PATH: &str = "/credit/predict";

/// Router exposing the prediction endpoint behind the access gate.
///
/// Only `POST` is gated; other methods on the path fall through to the
/// JSON 404 without consulting the gate.
pub fn credit_router(gate: AccessGate) -> Router {
    let gated = predict_handler.layer(from_fn_with_state(gate, require_api_key));

    Router::new().route(PREDICT_PATH, post(gated).fallback(not_found))
}

/// Wrap a fully assembled router with the JSON 404 fallback, the panic
/// catch-all, request logging and CORS.
pub fn with_service_layers(router: Router) -> Router {
    router
        .fallback(not_found)
        .layer(from_fn(catch_panic))
        .layer(from_fn(log_request))
        .layer(from_fn(cors))
}
