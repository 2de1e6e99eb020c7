use serde::{Deserialize, Serialize};
use validator::Validate;

pub const TITLE_REQUIRED_MESSAGE: &str = "Le titre du produit est requis";

/// Body of `POST /api/ai/description`.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct GenerationRequest {
    #[validate(required(message = "Le titre du produit est requis"))]
    pub title: Option<String>,
    pub category: Option<String>,
    pub features: Option<String>,
}

impl GenerationRequest {
    /// Blank strings carry no information; treat them like missing fields.
    /// Non-blank values are kept exactly as sent.
    pub fn normalized(self) -> Self {
        Self {
            title: non_blank(self.title),
            category: non_blank(self.category),
            features: non_blank(self.features),
        }
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

/// Where a description came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DescriptionSource {
    Ai,
    Mock,
}

impl DescriptionSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            DescriptionSource::Ai => "ai",
            DescriptionSource::Mock => "mock",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationResult {
    pub description: String,
    pub source: DescriptionSource,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl GenerationResult {
    pub fn ai(description: String, model: impl Into<String>) -> Self {
        Self {
            description,
            source: DescriptionSource::Ai,
            model: Some(model.into()),
            note: None,
        }
    }

    pub fn mock(description: String, note: Option<&str>) -> Self {
        Self {
            description,
            source: DescriptionSource::Mock,
            model: None,
            note: note.map(str::to_string),
        }
    }
}
