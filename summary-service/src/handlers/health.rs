use axum::{extract::State, Json};
use serde_json::{json, Value};

use crate::startup::AppState;

/// Liveness probe. Does not contact the completion API.
#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service is running")
    ),
    tag = "Observability"
)]
pub async fn health_check(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "status": "ok",
        "service": "summary-service",
        "version": env!("CARGO_PKG_VERSION"),
        "model": state.summarizer.model(),
    }))
}
