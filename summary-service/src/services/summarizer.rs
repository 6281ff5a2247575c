use super::prompt::{build_summary_prompt, SUMMARY_TEMPERATURE};
use super::providers::{ChatMessage, CompletionProvider, CompletionRequest, ProviderError};
use std::sync::Arc;
use std::time::Instant;

/// Turns OCR text into a model-written summary.
///
/// Stateless apart from the shared provider handle; cheap to clone.
#[derive(Clone)]
pub struct Summarizer {
    provider: Arc<dyn CompletionProvider>,
}

impl Summarizer {
    pub fn new(provider: Arc<dyn CompletionProvider>) -> Self {
        Self { provider }
    }

    pub fn model(&self) -> &str {
        self.provider.model()
    }

    /// Build the prompt for `text` and make exactly one completion call.
    ///
    /// The returned string is the model output untouched.
    pub async fn summarize(&self, text: &str) -> Result<String, ProviderError> {
        let request = CompletionRequest {
            messages: vec![ChatMessage::user(build_summary_prompt(text))],
            temperature: SUMMARY_TEMPERATURE,
        };

        let started = Instant::now();
        let result = self.provider.complete(&request).await;
        let elapsed_ms = started.elapsed().as_millis() as u64;

        match &result {
            Ok(summary) => tracing::info!(
                model = %self.provider.model(),
                text_len = text.len(),
                summary_len = summary.len(),
                elapsed_ms,
                "Summary generated"
            ),
            Err(e) => tracing::warn!(
                model = %self.provider.model(),
                text_len = text.len(),
                elapsed_ms,
                error = %e,
                "Summary generation failed"
            ),
        }

        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::providers::mock::MockCompletionProvider;
    use crate::services::providers::Role;

    #[tokio::test]
    async fn sends_single_user_message_at_low_temperature() {
        let provider = Arc::new(MockCompletionProvider::replying("{}"));
        let summarizer = Summarizer::new(provider.clone());

        summarizer.summarize("BP 120/80").await.unwrap();

        let requests = provider.requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].messages.len(), 1);
        assert_eq!(requests[0].messages[0].role, Role::User);
        assert!(requests[0].messages[0].content.contains("BP 120/80"));
        assert!((requests[0].temperature - 0.1).abs() < f32::EPSILON);
    }

    #[tokio::test]
    async fn provider_error_is_returned_not_retried() {
        let provider = Arc::new(MockCompletionProvider::failing("connection refused"));
        let summarizer = Summarizer::new(provider.clone());

        let err = summarizer.summarize("text").await.unwrap_err();

        assert_eq!(err.to_string(), "Network error: connection refused");
        assert_eq!(provider.call_count(), 1);
    }
}
