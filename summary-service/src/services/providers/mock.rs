//! Mock provider implementation for testing.

use super::{CompletionProvider, CompletionRequest, ProviderError};
use async_trait::async_trait;
use std::sync::{Mutex, MutexGuard};
use std::time::Duration;

type Responder = dyn Fn(&CompletionRequest) -> Result<String, ProviderError> + Send + Sync;

/// Mock completion provider.
///
/// Answers with a caller-supplied closure and records every request so tests
/// can assert on the exact prompt that would have gone upstream.
pub struct MockCompletionProvider {
    model: String,
    responder: Box<Responder>,
    delay: Option<Duration>,
    requests: Mutex<Vec<CompletionRequest>>,
}

impl MockCompletionProvider {
    pub fn new<F>(responder: F) -> Self
    where
        F: Fn(&CompletionRequest) -> Result<String, ProviderError> + Send + Sync + 'static,
    {
        Self {
            model: "mock-model".to_string(),
            responder: Box::new(responder),
            delay: None,
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Always answer with `reply`.
    pub fn replying(reply: impl Into<String>) -> Self {
        let reply = reply.into();
        Self::new(move |_| Ok(reply.clone()))
    }

    /// Always fail with a network error carrying `message`.
    pub fn failing(message: impl Into<String>) -> Self {
        let message = message.into();
        Self::new(move |_| Err(ProviderError::Network(message.clone())))
    }

    /// Sleep before answering, to keep requests in flight concurrently.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Requests received so far, in arrival order.
    pub fn requests(&self) -> Vec<CompletionRequest> {
        self.lock_requests().clone()
    }

    pub fn call_count(&self) -> usize {
        self.lock_requests().len()
    }

    fn lock_requests(&self) -> MutexGuard<'_, Vec<CompletionRequest>> {
        self.requests.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

#[async_trait]
impl CompletionProvider for MockCompletionProvider {
    fn model(&self) -> &str {
        &self.model
    }

    async fn complete(&self, request: &CompletionRequest) -> Result<String, ProviderError> {
        self.lock_requests().push(request.clone());

        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }

        (self.responder)(request)
    }
}
