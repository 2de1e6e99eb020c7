//! OpenRouter chat-completion provider.
//!
//! One non-streaming `POST {base_url}/chat/completions` per generation, bounded
//! by the configured timeout.

use super::{GenerationParams, ProviderError, ProviderResponse, TextProvider};
use crate::config::OpenRouterConfig;
use async_trait::async_trait;
use reqwest::Client;
use secrecy::{ExposeSecret, Secret};
use serde::{Deserialize, Serialize};

/// Longest upstream error body kept in an `ApiError`.
const MAX_ERROR_BODY_CHARS: usize = 512;

/// OpenRouter text provider.
pub struct OpenRouterProvider {
    config: OpenRouterConfig,
    api_key: Secret<String>,
    client: Client,
}

impl OpenRouterProvider {
    /// Fails with `NotConfigured` when the config carries no usable API key.
    pub fn new(config: OpenRouterConfig) -> Result<Self, ProviderError> {
        let api_key = config.usable_api_key().cloned().ok_or_else(|| {
            ProviderError::NotConfigured("OpenRouter API key not configured".to_string())
        })?;

        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| {
                ProviderError::NotConfigured(format!("Failed to create HTTP client: {}", e))
            })?;

        Ok(Self {
            config,
            api_key,
            client,
        })
    }

    fn api_url(&self) -> String {
        format!(
            "{}/chat/completions",
            self.config.base_url.trim_end_matches('/')
        )
    }
}

fn map_send_error(err: reqwest::Error) -> ProviderError {
    if err.is_timeout() {
        ProviderError::Timeout
    } else {
        ProviderError::NetworkError(err.to_string())
    }
}

#[async_trait]
impl TextProvider for OpenRouterProvider {
    fn model(&self) -> &str {
        &self.config.model
    }

    async fn generate(
        &self,
        system_prompt: &str,
        user_prompt: &str,
        params: &GenerationParams,
    ) -> Result<ProviderResponse, ProviderError> {
        let request = ChatCompletionRequest {
            model: &self.config.model,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: system_prompt,
                },
                ChatMessage {
                    role: "user",
                    content: user_prompt,
                },
            ],
            max_tokens: params.max_tokens,
            temperature: params.temperature,
        };

        tracing::debug!(
            model = %self.config.model,
            prompt_len = user_prompt.len(),
            "Sending request to OpenRouter API"
        );

        let response = self
            .client
            .post(self.api_url())
            .bearer_auth(self.api_key.expose_secret())
            .header("HTTP-Referer", &self.config.app_url)
            .header("X-Title", &self.config.app_title)
            .json(&request)
            .send()
            .await
            .map_err(map_send_error)?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ProviderError::ApiError {
                status: status.as_u16(),
                message: body.chars().take(MAX_ERROR_BODY_CHARS).collect(),
            });
        }

        let completion: ChatCompletionResponse = response.json().await.map_err(|e| {
            if e.is_timeout() {
                ProviderError::Timeout
            } else {
                ProviderError::InvalidResponse(format!("Failed to parse response: {}", e))
            }
        })?;

        let text = completion
            .choices
            .first()
            .and_then(|c| c.message.as_ref())
            .and_then(|m| m.content.as_deref())
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .ok_or_else(|| {
                ProviderError::InvalidResponse(
                    "Response did not contain choices[0].message.content".to_string(),
                )
            })?;

        let usage = completion.usage.unwrap_or_default();

        Ok(ProviderResponse {
            text: text.to_string(),
            input_tokens: usage.prompt_tokens,
            output_tokens: usage.completion_tokens,
        })
    }
}

// ============================================================================
// OpenRouter API Request/Response Types
// ============================================================================

#[derive(Debug, Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_tokens: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    #[serde(default)]
    choices: Vec<Choice>,
    #[serde(default)]
    usage: Option<Usage>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    #[serde(default)]
    message: Option<AssistantMessage>,
}

#[derive(Debug, Deserialize)]
struct AssistantMessage {
    #[serde(default)]
    content: Option<String>,
}

#[derive(Debug, Deserialize, Default)]
struct Usage {
    prompt_tokens: Option<u32>,
    completion_tokens: Option<u32>,
}
