use crate::image_client::ImageModelError;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;
use tracing::{error, warn};

#[derive(Debug, Error)]
pub enum MockupError {
    #[error("Missing required fields.")]
    MissingFields,
    #[error("Missing GOOGLE_API_KEY env var.")]
    MissingApiKey,
    #[error("No image returned from model.")]
    NoImageReturned,
    #[error("Generation failed.")]
    Model(#[from] ImageModelError),
}

impl MockupError {
    pub fn status(&self) -> StatusCode {
        match self {
            MockupError::MissingFields => StatusCode::BAD_REQUEST,
            MockupError::MissingApiKey | MockupError::Model(_) => StatusCode::INTERNAL_SERVER_ERROR,
            MockupError::NoImageReturned => StatusCode::BAD_GATEWAY,
        }
    }
}

impl IntoResponse for MockupError {
    fn into_response(self) -> Response {
        match &self {
            // Only the log sees the cause; the caller gets the generic text.
            MockupError::Model(cause) => error!("Image generation failed: {}", cause),
            MockupError::MissingApiKey => error!("Rejecting request: no API key configured"),
            _ => warn!("Rejecting request: {}", self),
        }
        (self.status(), self.to_string()).into_response()
    }
}
