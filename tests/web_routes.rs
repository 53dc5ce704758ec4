// Route tests: drive the Axum router end to end with `oneshot`.
//
// Covers the route table (known paths, wrong methods, unknown paths), the
// JSON contracts of all three endpoints, 400 handling for bad bodies, and
// the CORS header on responses.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use axum::response::Response;
use axum::Router;
use serde_json::Value;
use tower::ServiceExt;

use brandguard::config::Config;
use brandguard::validation::{ContentScanner, ContentValidator, ValidationResult};
use brandguard::web::{build_router, AppState};

fn app() -> Router {
    let scanner: Arc<dyn ContentScanner> = Arc::new(ContentValidator::builtin().unwrap());
    build_router(AppState::new(Config::default(), scanner))
}

async fn send(method: Method, uri: &str, body: Body) -> Response {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::ORIGIN, "https://orchestrator.example")
        .header(header::CONTENT_TYPE, "application/json")
        .body(body)
        .unwrap();
    app().oneshot(request).await.unwrap()
}

async fn body_bytes(response: Response) -> Vec<u8> {
    axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap()
        .to_vec()
}

async fn body_json(response: Response) -> Value {
    serde_json::from_slice(&body_bytes(response).await).unwrap()
}

async fn validate(body: &str) -> Response {
    send(Method::POST, "/api/validate", Body::from(body.to_string())).await
}

// ============================================================
// POST /api/validate
// ============================================================

#[tokio::test]
async fn validate_flags_content() {
    let response = validate(r#"{"content": "Win big at our casino and get guaranteed returns!"}"#).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["is_safe"], false);
    assert_eq!(json["risk_score"], 50);
    assert_eq!(json["violations"], serde_json::json!(["gambling", "financial_advice"]));
    assert_eq!(json["flagged_terms"].as_array().unwrap().len(), 2);
    assert_eq!(json["message"], "Content violates platform policies");
}

#[tokio::test]
async fn validate_response_has_exact_fields() {
    let json = body_json(validate(r#"{"content": "hello"}"#).await).await;
    let mut keys: Vec<&str> = json.as_object().unwrap().keys().map(String::as_str).collect();
    keys.sort_unstable();
    assert_eq!(
        keys,
        vec!["flagged_terms", "is_safe", "message", "risk_score", "violations"]
    );
}

#[tokio::test]
async fn validate_response_deserializes_into_result() {
    let bytes = body_bytes(validate(r#"{"content": "NFT drop"}"#).await).await;
    let result: ValidationResult = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(result.violations, vec!["cryptocurrency"]);
    assert_eq!(result.risk_score, 25);
}

#[tokio::test]
async fn validate_missing_content_is_safe() {
    let response = validate("{}").await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["is_safe"], true);
    assert_eq!(json["risk_score"], 0);
    assert_eq!(json["message"], "Content is safe for all platforms");
}

#[tokio::test]
async fn validate_without_content_type_still_parses() {
    let request = Request::builder()
        .method(Method::POST)
        .uri("/api/validate")
        .body(Body::from(r#"{"content": "poker"}"#))
        .unwrap();
    let response = app().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["risk_score"], 25);
}

#[tokio::test]
async fn validate_malformed_json_is_400() {
    let response = validate("{not json").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert!(json["error"].as_str().unwrap().starts_with("Invalid JSON body"));
}

#[tokio::test]
async fn validate_empty_body_is_400() {
    let response = validate("").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn validate_non_object_is_400() {
    let response = validate(r#"["casino"]"#).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        body_json(response).await["error"],
        "Request body must be a JSON object"
    );
}

#[tokio::test]
async fn validate_accepts_bodies_over_default_limit() {
    // ~3 MB, above axum's 2 MB default body limit
    let body = format!(r#"{{"content": "{}casino"}}"#, "a ".repeat(1_500_000));
    let response = validate(&body).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["flagged_terms"], serde_json::json!(["casino"]));
    assert_eq!(json["risk_score"], 25);
}

#[tokio::test]
async fn validate_wrong_content_type_is_400() {
    let response = validate(r#"{"content": ["casino"]}"#).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

// ============================================================
// GET|POST /api/discovery
// ============================================================

#[tokio::test]
async fn discovery_get_returns_schema() {
    let response = send(Method::GET, "/api/discovery", Body::empty()).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["functions"][0]["name"], "validateContent");
    assert_eq!(json["functions"][0]["endpoint"], "/api/validate");
    assert_eq!(json["functions"][0]["httpmethod"], "POST");
}

#[tokio::test]
async fn discovery_is_stable_across_calls_and_methods() {
    let first = body_bytes(send(Method::GET, "/api/discovery", Body::empty()).await).await;
    let second = body_bytes(send(Method::GET, "/api/discovery", Body::empty()).await).await;
    let posted = body_bytes(send(Method::POST, "/api/discovery", Body::from("{}")).await).await;
    assert_eq!(first, second);
    assert_eq!(first, posted);
    assert_eq!(
        first,
        serde_json::to_vec(&brandguard::discovery::DISCOVERY_SCHEMA).unwrap()
    );
}

// ============================================================
// GET /api/health
// ============================================================

#[tokio::test]
async fn health_reports_service_name() {
    let response = send(Method::GET, "/api/health", Body::empty()).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(
        json,
        serde_json::json!({ "status": "healthy", "service": "Brand Risk Validator" })
    );
}

#[tokio::test]
async fn health_uses_configured_name() {
    let scanner: Arc<dyn ContentScanner> = Arc::new(ContentValidator::builtin().unwrap());
    let config = Config {
        service_name: "Staging Validator".to_string(),
        ..Config::default()
    };
    let request = Request::builder()
        .uri("/api/health")
        .body(Body::empty())
        .unwrap();
    let response = build_router(AppState::new(config, scanner))
        .oneshot(request)
        .await
        .unwrap();
    assert_eq!(body_json(response).await["service"], "Staging Validator");
}

// ============================================================
// Routing and headers
// ============================================================

#[tokio::test]
async fn unknown_path_is_empty_404() {
    let response = send(Method::GET, "/api/unknown", Body::empty()).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert!(body_bytes(response).await.is_empty());
}

#[tokio::test]
async fn wrong_method_is_empty_404() {
    for (method, uri) in [
        (Method::GET, "/api/validate"),
        (Method::POST, "/api/health"),
        (Method::DELETE, "/api/discovery"),
        (Method::PUT, "/api/validate"),
        (Method::HEAD, "/api/health"),
        (Method::HEAD, "/api/discovery"),
    ] {
        let response = send(method.clone(), uri, Body::empty()).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND, "{method} {uri}");
        assert!(body_bytes(response).await.is_empty());
    }
}

#[tokio::test]
async fn json_responses_allow_any_origin() {
    for response in [
        validate(r#"{"content": "x"}"#).await,
        send(Method::GET, "/api/discovery", Body::empty()).await,
        send(Method::GET, "/api/health", Body::empty()).await,
    ] {
        assert_eq!(
            response
                .headers()
                .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
                .unwrap(),
            "*"
        );
        assert!(response
            .headers()
            .get(header::CONTENT_TYPE)
            .unwrap()
            .to_str()
            .unwrap()
            .starts_with("application/json"));
    }
}
