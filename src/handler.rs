use crate::config::Config;
use crate::error::MockupError;
use crate::gemini::GeminiRequest;
use crate::image_client::ImageModel;
use crate::models::{GenerationRequest, GenerationResult};
use crate::prompt::build_prompt;
use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use bytes::Bytes;
use std::sync::Arc;
use tracing::{debug, info, warn};

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub image_model: Arc<dyn ImageModel>,
}

pub async fn preflight() -> StatusCode {
    StatusCode::NO_CONTENT
}

pub async fn method_not_allowed() -> impl IntoResponse {
    (StatusCode::METHOD_NOT_ALLOWED, "Method not allowed")
}

#[axum_macros::debug_handler]
pub async fn generate_mockup(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<GenerationResult>, MockupError> {
    let request = parse_body(&body)?;
    let validated = request.validate().ok_or(MockupError::MissingFields)?;

    let api_key = state.config.api_key().ok_or(MockupError::MissingApiKey)?;

    let prompt = build_prompt(&validated);
    let gemini_request = GeminiRequest::image_prompt(prompt, state.config.aspect_ratio.clone());

    info!("Generating mockup with model {}", state.config.model);
    let response = state
        .image_model
        .generate_content(api_key, &state.config.model, &gemini_request)
        .await?;

    let Some(image) = response.first_inline_image() else {
        warn!(
            "Model returned no image (finish_reason: {:?}, block_reason: {:?})",
            response.finish_reason(),
            response.block_reason()
        );
        return Err(MockupError::NoImageReturned);
    };

    debug!(
        "Returning {} base64 chars from response {:?}",
        image.data.len(),
        response.response_id
    );
    Ok(Json(GenerationResult::new(
        image.data.clone(),
        image.mime_type.as_deref(),
    )))
}

// An empty body is an empty request; anything that does not decode is incomplete input.
fn parse_body(body: &Bytes) -> Result<GenerationRequest, MockupError> {
    if body.is_empty() {
        return Ok(GenerationRequest::default());
    }
    serde_json::from_slice(body).map_err(|e| {
        debug!("Request body did not decode: {}", e);
        MockupError::MissingFields
    })
}
