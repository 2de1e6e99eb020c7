//! `POST /api/ai/description`.

use crate::dtos::{GenerationRequest, GenerationResult};
use crate::services::ProductInput;
use crate::startup::AppState;
use axum::{
    extract::{rejection::JsonRejection, State},
    http::header,
    response::IntoResponse,
    Json,
};
use service_core::error::AppError;
use validator::Validate;

pub const METHOD_NOT_ALLOWED_MESSAGE: &str = "Méthode non autorisée";
pub const INVALID_BODY_MESSAGE: &str = "Corps de requête invalide";

/// Generate a marketing description for a product.
///
/// Only malformed requests fail; any AI-side problem still yields 200 with a
/// template description and a `note`.
pub async fn generate_description(
    State(state): State<AppState>,
    payload: Result<Json<GenerationRequest>, JsonRejection>,
) -> Result<Json<GenerationResult>, AppError> {
    let Json(request) = payload.map_err(|rejection| {
        tracing::debug!(error = %rejection.body_text(), "Rejected description request body");
        AppError::BadRequest(anyhow::anyhow!(INVALID_BODY_MESSAGE))
    })?;

    let request = request.normalized();
    request.validate()?;

    // `required` validation guarantees the title is present.
    let title = request.title.as_deref().unwrap_or_default();

    tracing::info!(
        title = %title,
        has_category = request.category.is_some(),
        has_features = request.features.is_some(),
        "Generating product description"
    );

    let result = state
        .descriptions
        .generate(ProductInput {
            title,
            category: request.category.as_deref(),
            features: request.features.as_deref(),
        })
        .await;

    Ok(Json(result))
}

/// Any method other than POST on the description route.
pub async fn method_not_allowed() -> impl IntoResponse {
    (
        [(header::ALLOW, "POST")],
        AppError::MethodNotAllowed(METHOD_NOT_ALLOWED_MESSAGE.to_string()),
    )
}
