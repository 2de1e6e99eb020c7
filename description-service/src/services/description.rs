//! Description generation: AI first, local templates as the fallback.
//!
//! Every provider failure is absorbed here and turned into a template
//! description with an explanatory note, so callers always get a result.

use crate::config::GenerationConfig;
use crate::dtos::{DescriptionSource, GenerationResult};
use crate::services::prompt::{user_prompt, SYSTEM_PROMPT};
use crate::services::providers::{GenerationParams, ProviderError, TextProvider};
use crate::services::templates::{TemplateGenerator, TemplateSelector};
use metrics::counter;
use std::sync::Arc;

pub const NOTE_API_UNAVAILABLE: &str =
    "API temporairement indisponible, description générée localement";
pub const NOTE_GENERATION_ERROR: &str =
    "Erreur lors de la génération IA, description générée localement";

/// Validated product fields.
#[derive(Debug, Clone, Copy)]
pub struct ProductInput<'a> {
    pub title: &'a str,
    pub category: Option<&'a str>,
    pub features: Option<&'a str>,
}

#[derive(Clone)]
pub struct DescriptionService {
    provider: Option<Arc<dyn TextProvider>>,
    templates: TemplateGenerator<Arc<dyn TemplateSelector>>,
    params: GenerationParams,
}

impl DescriptionService {
    /// `provider` is `None` when no usable credential is configured.
    pub fn new(
        provider: Option<Arc<dyn TextProvider>>,
        selector: Arc<dyn TemplateSelector>,
        generation: &GenerationConfig,
    ) -> Self {
        Self {
            provider,
            templates: TemplateGenerator::new(selector),
            params: GenerationParams {
                temperature: Some(generation.temperature),
                max_tokens: Some(generation.max_tokens),
            },
        }
    }

    pub fn ai_enabled(&self) -> bool {
        self.provider.is_some()
    }

    pub async fn generate(&self, input: ProductInput<'_>) -> GenerationResult {
        let Some(provider) = &self.provider else {
            tracing::debug!("AI provider not configured, using local templates");
            return self.fallback(input, None);
        };

        let prompt = user_prompt(input.title, input.category, input.features);

        match provider.generate(SYSTEM_PROMPT, &prompt, &self.params).await {
            Ok(response) => {
                tracing::info!(
                    model = %provider.model(),
                    input_tokens = ?response.input_tokens,
                    output_tokens = ?response.output_tokens,
                    "AI description generated"
                );
                counter!(
                    "description_generations_total",
                    "source" => DescriptionSource::Ai.as_str()
                )
                .increment(1);
                GenerationResult::ai(response.text, provider.model())
            }
            Err(err) => {
                let note = match &err {
                    ProviderError::ApiError { status, message } => {
                        tracing::warn!(
                            status = *status,
                            body = %message,
                            "OpenRouter API error, falling back to local templates"
                        );
                        NOTE_API_UNAVAILABLE
                    }
                    other => {
                        tracing::error!(
                            error = %other,
                            kind = other.kind(),
                            "AI description generation failed, falling back to local templates"
                        );
                        NOTE_GENERATION_ERROR
                    }
                };
                counter!("description_fallbacks_total", "reason" => err.kind()).increment(1);
                self.fallback(input, Some(note))
            }
        }
    }

    fn fallback(&self, input: ProductInput<'_>, note: Option<&str>) -> GenerationResult {
        counter!(
            "description_generations_total",
            "source" => DescriptionSource::Mock.as_str()
        )
        .increment(1);
        let description = self
            .templates
            .generate(input.title, input.category, input.features);
        GenerationResult::mock(description, note)
    }
}
