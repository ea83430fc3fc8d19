mod common;

use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use bfhl_service::services::providers::mock::MockTextProvider;
use bfhl_service::startup::build_router;
use bfhl_service::AppState;
use common::{router, router_with, test_config, TestApp, TEST_EMAIL};
use http_body_util::BodyExt;
use reqwest::Client;
use std::sync::Arc;
use tower::ServiceExt;

async fn get(app: axum::Router, uri: &str) -> (StatusCode, serde_json::Value) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&bytes).unwrap())
}

#[tokio::test]
async fn health_reports_success_and_email() {
    let (status, body) = get(router(), "/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["is_success"], true);
    assert_eq!(body["official_email"], TEST_EMAIL);
}

#[tokio::test]
async fn health_omits_unset_email() {
    let state = AppState::new(test_config(None), Arc::new(MockTextProvider::replying("x")));
    let (status, body) = get(build_router(state), "/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, serde_json::json!({ "is_success": true }));
}

#[tokio::test]
async fn readiness_follows_provider() {
    let (status, body) = get(router(), "/ready").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["service"], "bfhl-service");

    let (status, _) = get(router_with(Arc::new(MockTextProvider::failing())), "/ready").await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
}

#[tokio::test]
async fn responses_carry_request_id_and_security_headers() {
    let response = router()
        .oneshot(
            Request::builder()
                .uri("/health")
                .header("x-request-id", "req-42")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    let headers = response.headers();
    assert_eq!(headers["x-request-id"], "req-42");
    assert_eq!(headers["x-content-type-options"], "nosniff");
}

#[tokio::test]
async fn cors_allows_any_origin() {
    let response = router()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/bfhl")
                .header("origin", "https://example.com")
                .header("content-type", "application/json")
                .body(Body::from(r#"{"hcf": [4, 6]}"#))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.headers()["access-control-allow-origin"], "*");
}

#[tokio::test]
async fn cors_preflight_is_answered() {
    let response = router()
        .oneshot(
            Request::builder()
                .method("OPTIONS")
                .uri("/bfhl")
                .header("origin", "https://example.com")
                .header("access-control-request-method", "POST")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert!(response.status().is_success());
    assert_eq!(response.headers()["access-control-allow-origin"], "*");
}

#[tokio::test]
async fn metrics_endpoint_responds_without_recorder() {
    let response = router()
        .oneshot(Request::builder().uri("/metrics").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn health_check_works_over_tcp() {
    let app = TestApp::spawn().await;
    let client = Client::new();

    let response = client
        .get(format!("{}/health", app.address))
        .send()
        .await
        .expect("Failed to execute request");

    assert!(response.status().is_success());
    let body: serde_json::Value = response.json().await.expect("Failed to parse JSON");
    assert_eq!(body["is_success"], true);
}
