//! Mock provider implementation for testing.

use super::{GenerationParams, ProviderError, ProviderResponse, TextProvider};
use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Returns the same scripted outcome on every call and counts invocations.
pub struct MockTextProvider {
    model: String,
    outcome: Result<ProviderResponse, ProviderError>,
    calls: AtomicUsize,
}

impl MockTextProvider {
    pub fn replying(model: &str, text: &str) -> Self {
        Self {
            model: model.to_string(),
            outcome: Ok(ProviderResponse {
                text: text.to_string(),
                input_tokens: None,
                output_tokens: None,
            }),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn failing(model: &str, error: ProviderError) -> Self {
        Self {
            model: model.to_string(),
            outcome: Err(error),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl TextProvider for MockTextProvider {
    fn model(&self) -> &str {
        &self.model
    }

    async fn generate(
        &self,
        _system_prompt: &str,
        _user_prompt: &str,
        _params: &GenerationParams,
    ) -> Result<ProviderResponse, ProviderError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.outcome.clone()
    }
}
