use axum::{extract::rejection::JsonRejection, extract::State, Json};
use service_core::error::AppError;
use tracing::Instrument;

use crate::models::{SummaryRequest, SummaryResponse};
use crate::startup::AppState;

/// Summarize OCR text with the configured model.
///
/// Upstream and local failures are reported in the body with
/// `success: false`; the status stays 200.
#[utoipa::path(
    post,
    path = "/summarize",
    request_body = SummaryRequest,
    responses(
        (status = 200, description = "Summary or in-band failure", body = SummaryResponse),
        (status = 400, description = "Body is not valid JSON"),
        (status = 422, description = "Body has no string `text` field")
    ),
    tag = "Summary"
)]
#[tracing::instrument(skip(state, payload))]
pub async fn summarize(
    State(state): State<AppState>,
    payload: Result<Json<SummaryRequest>, JsonRejection>,
) -> Result<Json<SummaryResponse>, AppError> {
    let Json(request) = payload?;

    let summarizer = state.summarizer.clone();
    // Run on its own task so a panic in the provider becomes a failure
    // envelope instead of a dropped connection.
    let outcome = tokio::spawn(
        async move { summarizer.summarize(&request.text).await }.in_current_span(),
    )
    .await;

    let response = match outcome {
        Ok(result) => SummaryResponse::from(result),
        Err(join_error) => {
            tracing::error!(error = %join_error, "Summary task aborted");
            SummaryResponse::failure(format!("summary task failed: {}", join_error))
        }
    };

    Ok(Json(response))
}
