//! AI provider abstractions and implementations.
//!
//! The description service talks to a `TextProvider`; OpenRouter is the
//! production backend and `mock` holds a scripted provider for tests.

pub mod mock;
pub mod openrouter;

use async_trait::async_trait;
use thiserror::Error;

pub use openrouter::OpenRouterProvider;

/// Error type for provider operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ProviderError {
    #[error("Provider not configured: {0}")]
    NotConfigured(String),

    /// Upstream answered with a non-2xx status.
    #[error("API error {status}: {message}")]
    ApiError { status: u16, message: String },

    #[error("Network error: {0}")]
    NetworkError(String),

    #[error("Request timed out")]
    Timeout,

    /// 2xx answer whose body did not contain a usable completion.
    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

impl ProviderError {
    /// Short label for logs and metrics.
    pub fn kind(&self) -> &'static str {
        match self {
            ProviderError::NotConfigured(_) => "not_configured",
            ProviderError::ApiError { .. } => "api_status",
            ProviderError::NetworkError(_) => "network",
            ProviderError::Timeout => "timeout",
            ProviderError::InvalidResponse(_) => "invalid_response",
        }
    }
}

/// Completed generation.
#[derive(Debug, Clone, PartialEq)]
pub struct ProviderResponse {
    /// Completion text, already trimmed and non-empty.
    pub text: String,

    /// Input tokens consumed, when the provider reports usage.
    pub input_tokens: Option<u32>,

    /// Output tokens generated, when the provider reports usage.
    pub output_tokens: Option<u32>,
}

/// Generation parameters for AI requests.
#[derive(Debug, Clone, Default)]
pub struct GenerationParams {
    pub temperature: Option<f32>,
    pub max_tokens: Option<u32>,
}

/// Trait for single-shot chat completion providers.
#[async_trait]
pub trait TextProvider: Send + Sync {
    /// Model identifier reported back to callers.
    fn model(&self) -> &str;

    /// Generate one completion from a system and a user message.
    async fn generate(
        &self,
        system_prompt: &str,
        user_prompt: &str,
        params: &GenerationParams,
    ) -> Result<ProviderResponse, ProviderError>;
}
