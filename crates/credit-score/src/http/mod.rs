//! HTTP surface of the predictor: the gated endpoint plus shared service layers.

pub mod gate;
pub mod handler;
pub mod middleware;
pub mod router;

pub use gate::{AccessGate, API_KEY_HEADER};
pub use handler::{evaluate_body, evaluate_record, predict_handler};
pub use router::{credit_router, with_service_layers, PREDICT_PATH};
