#![allow(dead_code)]

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    Router,
};
use bfhl_service::config::{BfhlConfig, GeminiSettings, DEFAULT_GEMINI_API_BASE};
use bfhl_service::services::providers::mock::MockTextProvider;
use bfhl_service::services::TextProvider;
use bfhl_service::startup::{build_router, Application};
use bfhl_service::AppState;
use http_body_util::BodyExt;
use secrecy::Secret;
use service_core::config::Config;
use std::sync::Arc;
use std::time::Duration;
use tower::ServiceExt;

pub const TEST_EMAIL: &str = "tester@example.com";

pub fn test_config(official_email: Option<&str>) -> BfhlConfig {
    BfhlConfig {
        common: Config { port: 0 },
        official_email: official_email.map(str::to_string),
        gemini: GeminiSettings {
            api_key: Secret::new(String::new()),
            model: "gemini-2.5-flash".to_string(),
            api_base: DEFAULT_GEMINI_API_BASE.to_string(),
            timeout_secs: 5,
        },
    }
}

/// Router backed by the given provider, for in-process `oneshot` requests.
pub fn router_with(provider: Arc<dyn TextProvider>) -> Router {
    build_router(AppState::new(test_config(Some(TEST_EMAIL)), provider))
}

pub fn router() -> Router {
    router_with(Arc::new(MockTextProvider::replying("Paris")))
}

pub async fn post_json(app: Router, body: &str) -> (StatusCode, serde_json::Value) {
    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/bfhl")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json = serde_json::from_slice(&bytes).unwrap_or(serde_json::Value::Null);
    (status, json)
}

/// A server bound to a random local port.
pub struct TestApp {
    pub address: String,
    pub port: u16,
}

impl TestApp {
    pub async fn spawn() -> Self {
        let app = Application::build_with_provider(
            test_config(Some(TEST_EMAIL)),
            Arc::new(MockTextProvider::replying("Paris")),
        )
        .await
        .expect("Failed to build test application");

        let port = app.port();
        let address = format!("http://127.0.0.1:{}", port);

        tokio::spawn(async move {
            app.run_until_stopped().await.ok();
        });

        // Wait for the server to accept connections
        let client = reqwest::Client::new();
        for _ in 0..50 {
            if client
                .get(format!("{}/health", address))
                .send()
                .await
                .is_ok()
            {
                break;
            }
            tokio::time::sleep(Duration::from_millis(20)).await;
        }

        Self { address, port }
    }
}
