use axum::http::StatusCode;

use super::models::api_error::ApiError;

#[derive(Debug)]
pub enum DefaultApiError {
    MalformedMultipart,
    FileTooLarge,
}

impl DefaultApiError {
    pub fn value(&self) -> ApiError {
        match *self {
            Self::MalformedMultipart => {
                ApiError::new(StatusCode::BAD_REQUEST, "Malformed multipart body.")
            }
            Self::FileTooLarge => ApiError::new(StatusCode::PAYLOAD_TOO_LARGE, "File too large."),
        }
    }
}
