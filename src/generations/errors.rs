use std::time::Duration;

use axum::http::StatusCode;
use thiserror::Error;

use crate::app::models::api_error::ApiError;

#[derive(Debug)]
pub enum GenerationsApiError {
    MissingGarment,
    GenerationFailed(GenerationError),
}

impl GenerationsApiError {
    pub fn value(&self) -> ApiError {
        match self {
            Self::MissingGarment => {
                ApiError::new(StatusCode::BAD_REQUEST, "Please upload a garment image.")
            }
            Self::GenerationFailed(e) => {
                ApiError::new(StatusCode::INTERNAL_SERVER_ERROR, "Failed to generate image")
                    .with_detail(format!("Failed to generate image: {}", e))
            }
        }
    }
}

#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("upstream request timed out after {0:?}")]
    Timeout(Duration),
    #[error("upstream request failed: {0}")]
    Transport(#[source] reqwest::Error),
    #[error("upstream responded with status {status}")]
    Status { status: reqwest::StatusCode },
    #[error("upstream returned an empty response")]
    EmptyResponse,
    #[error("could not extract an image from the upstream response. Response: {snippet}")]
    UnrecognizedResponse { snippet: String },
    #[error("failed to fetch generated image from {url}: {source}")]
    ImageFetch {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("image processing task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}
