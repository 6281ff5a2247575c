use serde::{Deserialize, Serialize};
use std::fmt::Display;
use utoipa::ToSchema;

/// Inbound payload for `POST /summarize`.
#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct SummaryRequest {
    /// Raw OCR output. Passed to the model verbatim.
    pub text: String,
}

/// Outcome envelope returned by `POST /summarize`.
///
/// Exactly one of `summary` and `error` is set, matching `success`. The
/// summary is the model's text as received; it is not parsed even though the
/// prompt asks for JSON.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, ToSchema)]
pub struct SummaryResponse {
    success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    summary: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

impl SummaryResponse {
    pub fn summary(summary: impl Into<String>) -> Self {
        Self {
            success: true,
            summary: Some(summary.into()),
            error: None,
        }
    }

    pub fn failure(error: impl Into<String>) -> Self {
        Self {
            success: false,
            summary: None,
            error: Some(error.into()),
        }
    }

    pub fn is_success(&self) -> bool {
        self.success
    }

    pub fn summary_text(&self) -> Option<&str> {
        self.summary.as_deref()
    }

    pub fn error_message(&self) -> Option<&str> {
        self.error.as_deref()
    }
}

impl<E: Display> From<Result<String, E>> for SummaryResponse {
    fn from(result: Result<String, E>) -> Self {
        match result {
            Ok(summary) => Self::summary(summary),
            Err(e) => Self::failure(e.to_string()),
        }
    }
}
