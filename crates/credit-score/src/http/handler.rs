use axum::body::Bytes;
use axum::extract::rejection::BytesRejection;
use axum::http::header::CONTENT_TYPE;
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::Value;
use tracing::error;

use crate::error::PredictionError;
use crate::scoring::{predict, validate_record, PredictionResult};

/// `POST /credit/predict`.
pub async fn predict_handler(
    headers: HeaderMap,
    body: Result<Bytes, BytesRejection>,
) -> Response {
    let outcome = body
        .map_err(|rejection| PredictionError::Internal(rejection.body_text()))
        .and_then(|bytes| evaluate_body(&headers, &bytes));

    match outcome {
        Ok(result) => (StatusCode::OK, Json(result)).into_response(),
        Err(err) => {
            if let PredictionError::Internal(detail) = &err {
                error!(%detail, "prediction request failed");
            }
            err.into_response()
        }
    }
}

/// Body → validation → score → advice, as a plain result.
///
/// Bodies not declared as JSON are treated as absent, matching a JSON body
/// parser that leaves other content types untouched.
pub fn evaluate_body(
    headers: &HeaderMap,
    body: &[u8],
) -> Result<PredictionResult, PredictionError> {
    if !declares_json(headers) || body.iter().all(u8::is_ascii_whitespace) {
        return Err(PredictionError::BadRequest);
    }

    let record: Value =
        serde_json::from_slice(body).map_err(|err| PredictionError::Internal(err.to_string()))?;

    evaluate_record(&record)
}

pub fn evaluate_record(record: &Value) -> Result<PredictionResult, PredictionError> {
    if is_blank(record) {
        return Err(PredictionError::BadRequest);
    }

    let input = validate_record(record)?;
    Ok(predict(&input))
}

fn is_blank(record: &Value) -> bool {
    match record {
        // A bare `null` reads as no body here; strict JSON body parsers reject it as a parse error.
        Value::Null => true,
        Value::Object(fields) => fields.is_empty(),
        Value::Array(items) => items.is_empty(),
        _ => false,
    }
}

fn declares_json(headers: &HeaderMap) -> bool {
    headers
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.split(';').next())
        .map(|essence| essence.trim().eq_ignore_ascii_case("application/json"))
        .unwrap_or(false)
}
