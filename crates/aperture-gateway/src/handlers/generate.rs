use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;
use tracing::info;

use crate::error::{ApiError, Result};
use crate::model::{GenerateImageRequest, GenerateImageResponse};
use crate::state::AppState;
use aperture_core::{GenerateParams, ImageSize};

pub async fn generate_handler(
    State(state): State<AppState>,
    body: std::result::Result<Json<GenerateImageRequest>, JsonRejection>,
) -> Result<Json<GenerateImageResponse>> {
    // An unconfigured dependency wins over input validation.
    let provider = state.provider().ok_or(ApiError::ProviderNotConfigured)?;
    let links = state.links().ok_or(ApiError::LinksNotConfigured)?;

    let Json(request) =
        body.map_err(|e| ApiError::Validation(format!("request body must be JSON: {e}")))?;

    let prompt = match request.prompt {
        Some(prompt) if !prompt.is_empty() => prompt,
        _ => {
            return Err(ApiError::Validation(
                "request must carry a non-empty 'prompt'".to_string(),
            ))
        }
    };
    let size = ImageSize::coerce(request.size.as_deref());

    let image = provider.generate(&GenerateParams { prompt, size }).await?;
    let image_url = links.issue(image.url).await?;

    info!(size = %size, "Generated image link");
    Ok(Json(GenerateImageResponse { image_url }))
}
