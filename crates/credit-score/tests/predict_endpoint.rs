use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use axum::response::Response;
use axum::routing::get;
use axum::Router;
use credit_score::http::{credit_router, with_service_layers, AccessGate};
use serde_json::{json, Value};
use tower::ServiceExt;

fn app(gate: AccessGate) -> Router {
    with_service_layers(credit_router(gate))
}

fn predict_request(body: Value, api_key: Option<&str>) -> Request<Body> {
    let mut builder = Request::post("/credit/predict")
        .header(header::CONTENT_TYPE, "application/json");
    if let Some(key) = api_key {
        builder = builder.header("x-api-key", key);
    }
    builder
        .body(Body::from(serde_json::to_vec(&body).expect("serialize body")))
        .expect("request builds")
}

async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 4096)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}

#[tokio::test]
async fn scores_typical_profile() {
    let response = app(AccessGate::open())
        .oneshot(predict_request(
            json!({
                "income": 50000,
                "avg_balance": 2000,
                "on_time_payments": 10,
                "late_payments": 0
            }),
            None,
        ))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response
            .headers()
            .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
            .and_then(|value| value.to_str().ok()),
        Some("*")
    );
    assert_eq!(
        read_json_body(response).await,
        json!({
            "predicted_score": 404,
            "breakdown": {
                "income_contrib": 50,
                "balance_contrib": 4,
                "on_time_contrib": 50,
                "late_penalty": 0
            },
            "advice": "Keep paying on time to maintain growth."
        })
    );
}

#[tokio::test]
async fn clamps_heavy_late_payments_to_floor() {
    let response = app(AccessGate::open())
        .oneshot(predict_request(
            json!({
                "income": 0,
                "avg_balance": 0,
                "on_time_payments": 0,
                "late_payments": 50
            }),
            None,
        ))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    assert_eq!(payload["predicted_score"], 300);
    assert_eq!(payload["breakdown"]["late_penalty"], 750);
    assert_eq!(
        payload["advice"],
        "Reduce late payments to improve your score."
    );
}

#[tokio::test]
async fn empty_object_is_a_bad_request() {
    let response = app(AccessGate::open())
        .oneshot(predict_request(json!({}), None))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        read_json_body(response).await,
        json!({ "error": "Bad Request", "message": "Request body is required" })
    );
}

#[tokio::test]
async fn missing_body_is_a_bad_request() {
    let request = Request::post("/credit/predict")
        .body(Body::empty())
        .expect("request builds");
    let response = app(AccessGate::open())
        .oneshot(request)
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let payload = read_json_body(response).await;
    assert_eq!(payload["error"], "Bad Request");
}

#[tokio::test]
async fn string_income_fails_validation() {
    let response = app(AccessGate::open())
        .oneshot(predict_request(
            json!({
                "income": "high",
                "avg_balance": 100,
                "on_time_payments": 1,
                "late_payments": 0
            }),
            None,
        ))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        read_json_body(response).await,
        json!({
            "error": "Validation Error",
            "message": "Income must be a non-negative number"
        })
    );
}

#[tokio::test]
async fn fractional_on_time_payments_fail_validation() {
    let response = app(AccessGate::open())
        .oneshot(predict_request(
            json!({
                "income": 100,
                "avg_balance": 100,
                "on_time_payments": 2.5,
                "late_payments": 0
            }),
            None,
        ))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let payload = read_json_body(response).await;
    assert_eq!(
        payload["message"],
        "On-time payments must be a non-negative integer"
    );
}

fn raw_predict_request(body: &'static str) -> Request<Body> {
    Request::post("/credit/predict")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body))
        .expect("request builds")
}

#[tokio::test]
async fn out_of_range_numbers_fail_validation_of_their_field() {
    let cases = [
        (
            r#"{"income":1e400,"avg_balance":0,"on_time_payments":0,"late_payments":0}"#,
            "Income must be a non-negative number",
        ),
        (
            r#"{"income":0,"avg_balance":-1e400,"on_time_payments":0,"late_payments":0}"#,
            "Average balance must be a non-negative number",
        ),
        (
            r#"{"income":0,"avg_balance":0,"on_time_payments":1e400,"late_payments":0}"#,
            "On-time payments must be a non-negative integer",
        ),
    ];

    for (body, message) in cases {
        let response = app(AccessGate::open())
            .oneshot(raw_predict_request(body))
            .await
            .expect("route executes");

        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "{body}");
        assert_eq!(
            read_json_body(response).await,
            json!({ "error": "Validation Error", "message": message })
        );
    }
}

#[tokio::test]
async fn malformed_json_yields_generic_internal_error() {
    let response = app(AccessGate::open())
        .oneshot(raw_predict_request("{\"income\": 5000,"))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        read_json_body(response).await,
        json!({
            "error": "Internal Server Error",
            "message": "An error occurred while processing your request"
        })
    );
}

#[tokio::test]
async fn gate_rejects_missing_key() {
    let response = app(AccessGate::new(Some("abc123".to_string())))
        .oneshot(predict_request(json!({ "income": 1 }), None))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(
        read_json_body(response).await,
        json!({
            "error": "Authentication required",
            "message": "Please provide x-api-key header"
        })
    );
}

#[tokio::test]
async fn gate_rejects_wrong_key() {
    let response = app(AccessGate::new(Some("abc123".to_string())))
        .oneshot(predict_request(json!({ "income": 1 }), Some("wrong")))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
    assert_eq!(
        read_json_body(response).await,
        json!({
            "error": "Invalid API key",
            "message": "The provided API key is not valid"
        })
    );
}

#[tokio::test]
async fn gate_admits_matching_key_into_normal_path() {
    let gate = AccessGate::new(Some("abc123".to_string()));

    let response = app(gate.clone())
        .oneshot(predict_request(json!({}), Some("abc123")))
        .await
        .expect("route executes");
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response = app(gate)
        .oneshot(predict_request(
            json!({
                "income": 50000,
                "avg_balance": 2000,
                "on_time_payments": 10,
                "late_payments": 0
            }),
            Some("abc123"),
        ))
        .await
        .expect("route executes");
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(read_json_body(response).await["predicted_score"], 404);
}

#[tokio::test]
async fn unknown_routes_return_json_not_found() {
    let request = Request::get("/credit/score")
        .body(Body::empty())
        .expect("request builds");
    let response = app(AccessGate::open())
        .oneshot(request)
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(
        read_json_body(response).await,
        json!({
            "error": "Not Found",
            "message": "The requested endpoint does not exist"
        })
    );
}

#[tokio::test]
async fn other_methods_on_predict_path_are_not_found_and_ungated() {
    let request = Request::get("/credit/predict")
        .body(Body::empty())
        .expect("request builds");
    let response = app(AccessGate::new(Some("abc123".to_string())))
        .oneshot(request)
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn preflight_is_answered_by_cors_layer() {
    let request = Request::builder()
        .method(Method::OPTIONS)
        .uri("/credit/predict")
        .header(header::ORIGIN, "https://finpilot.example")
        .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
        .header(header::ACCESS_CONTROL_REQUEST_HEADERS, "content-type,x-api-key")
        .body(Body::empty())
        .expect("request builds");
    let response = app(AccessGate::new(Some("abc123".to_string())))
        .oneshot(request)
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::NO_CONTENT);
    let headers = response.headers();
    assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_ORIGIN], "*");
    assert_eq!(
        headers[header::ACCESS_CONTROL_ALLOW_HEADERS],
        "content-type,x-api-key"
    );
    assert!(headers[header::ACCESS_CONTROL_ALLOW_METHODS]
        .to_str()
        .expect("ascii header")
        .contains("POST"));
}

async fn exploding_handler() -> &'static str {
    panic!("handler exploded")
}

#[tokio::test]
async fn handler_panics_become_generic_server_errors() {
    let router = with_service_layers(
        credit_router(AccessGate::open()).route("/explode", get(exploding_handler)),
    );
    let request = Request::get("/explode")
        .body(Body::empty())
        .expect("request builds");
    let response = router.oneshot(request).await.expect("route executes");

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN],
        "*"
    );
    assert_eq!(
        read_json_body(response).await,
        json!({
            "error": "Internal Server Error",
            "message": "An unexpected error occurred"
        })
    );
}
