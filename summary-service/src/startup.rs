//! Application startup and lifecycle management.

use crate::config::SummaryConfig;
use crate::docs::ApiDoc;
use crate::handlers;
use crate::services::providers::openai::{OpenAiConfig, OpenAiProvider};
use crate::services::providers::CompletionProvider;
use crate::services::Summarizer;
use axum::{
    extract::DefaultBodyLimit,
    middleware::from_fn,
    routing::{get, post},
    Json, Router,
};
use service_core::error::AppError;
use service_core::middleware::cors::permissive_with_credentials;
use service_core::middleware::tracing::{make_request_span, request_id_middleware};
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tokio::signal;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub summarizer: Summarizer,
}

impl AppState {
    pub fn new(provider: Arc<dyn CompletionProvider>) -> Self {
        Self {
            summarizer: Summarizer::new(provider),
        }
    }
}

/// Build the HTTP router with middleware applied.
///
/// OCR text has no length cap, so axum's default body limit is lifted.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/summarize", post(handlers::summarize))
        .route("/health", get(handlers::health_check))
        .route(
            "/.well-known/openapi.json",
            get(|| async { Json(ApiDoc::openapi()) }),
        )
        .with_state(state)
        .layer(DefaultBodyLimit::disable())
        .layer(TraceLayer::new_for_http().make_span_with(make_request_span::<axum::body::Body>))
        .layer(from_fn(request_id_middleware))
        .layer(permissive_with_credentials())
}

/// Construct the OpenAI provider from configuration.
pub fn openai_provider(config: &SummaryConfig) -> Result<OpenAiProvider, AppError> {
    OpenAiProvider::new(OpenAiConfig {
        api_key: config.openai.api_key.clone(),
        model: config.openai.model.clone(),
        base_url: config.openai.base_url.clone(),
        timeout: Duration::from_secs(config.openai.timeout_secs),
    })
    .map_err(|e| AppError::ConfigError(anyhow::Error::new(e)))
}

/// Application container for managing server lifecycle.
pub struct Application {
    port: u16,
    listener: TcpListener,
    router: Router,
}

impl Application {
    /// Build the application with the OpenAI provider from `config`.
    pub async fn build(config: SummaryConfig) -> Result<Self, AppError> {
        let provider = openai_provider(&config)?;

        tracing::info!(
            model = %config.openai.model,
            endpoint = %provider.endpoint(),
            timeout_secs = config.openai.timeout_secs,
            "Initialized OpenAI completion provider"
        );

        Self::build_with_provider(config, Arc::new(provider)).await
    }

    /// Build the application around an already constructed provider.
    pub async fn build_with_provider(
        config: SummaryConfig,
        provider: Arc<dyn CompletionProvider>,
    ) -> Result<Self, AppError> {
        // Port 0 = random port for testing
        let addr = config.common.bind_address()?;
        let listener = TcpListener::bind(addr).await.map_err(|e| {
            tracing::error!("Failed to bind HTTP listener to {}: {}", addr, e);
            AppError::from(e)
        })?;
        let port = listener.local_addr()?.port();

        tracing::info!("Summary service: HTTP on port {}", port);

        Ok(Self {
            port,
            listener,
            router: build_router(AppState::new(provider)),
        })
    }

    /// Get the port the server is listening on.
    pub fn port(&self) -> u16 {
        self.port
    }

    /// Run the application until a shutdown signal arrives.
    pub async fn run_until_stopped(self) -> std::io::Result<()> {
        axum::serve(self.listener, self.router)
            .with_graceful_shutdown(shutdown_signal())
            .await
            .map_err(|e| {
                tracing::error!("HTTP server error: {}", e);
                std::io::Error::other(format!("HTTP server error: {}", e))
            })
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
