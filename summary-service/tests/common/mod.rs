#![allow(dead_code)]

use axum::{
    body::Body,
    http::{HeaderMap, Request, StatusCode},
    Router,
};
use secrecy::Secret;
use serde_json::Value;
use service_core::config::Config as CoreConfig;
use std::sync::Arc;
use std::time::Duration;
use summary_service::config::{ObservabilityConfig, OpenAiSettings, SummaryConfig};
use summary_service::services::providers::CompletionProvider;
use summary_service::startup::{build_router, AppState, Application};
use tower::ServiceExt;

/// Configuration bound to a random localhost port.
pub fn test_config(base_url: &str) -> SummaryConfig {
    SummaryConfig {
        common: CoreConfig {
            host: "127.0.0.1".to_string(),
            port: 0,
        },
        openai: OpenAiSettings {
            api_key: Secret::new("sk-test".to_string()),
            model: "gpt-4.1-mini".to_string(),
            base_url: base_url.to_string(),
            timeout_secs: 5,
        },
        observability: ObservabilityConfig {
            log_level: "debug".to_string(),
            otlp_endpoint: None,
        },
    }
}

pub fn router_with(provider: Arc<dyn CompletionProvider>) -> Router {
    build_router(AppState::new(provider))
}

/// POST `body` to `/summarize` on an in-process router.
pub async fn post_summarize(app: Router, body: &str) -> (StatusCode, HeaderMap, Value) {
    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/summarize")
                .header("content-type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let headers = response.headers().clone();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);

    (status, headers, json)
}

pub struct TestApp {
    pub address: String,
    pub port: u16,
}

impl TestApp {
    /// Start a real server on a random port backed by `provider`.
    pub async fn spawn(provider: Arc<dyn CompletionProvider>) -> Self {
        let app = Application::build_with_provider(test_config("http://127.0.0.1:9"), provider)
            .await
            .expect("Failed to build test application");
        Self::run(app).await
    }

    /// Start a real server using the OpenAI provider pointed at `base_url`.
    pub async fn spawn_openai(base_url: &str) -> Self {
        let app = Application::build(test_config(base_url))
            .await
            .expect("Failed to build test application");
        Self::run(app).await
    }

    async fn run(app: Application) -> Self {
        let port = app.port();
        let address = format!("http://127.0.0.1:{}", port);

        tokio::spawn(async move {
            app.run_until_stopped().await.ok();
        });

        // Wait for the server to accept connections
        let client = reqwest::Client::new();
        let health_url = format!("{}/health", address);
        for _ in 0..50 {
            if client.get(&health_url).send().await.is_ok() {
                break;
            }
            tokio::time::sleep(Duration::from_millis(20)).await;
        }

        Self { address, port }
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.address, path)
    }
}
