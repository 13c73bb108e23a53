use std::collections::HashMap;

use axum::{
    extract::{
        multipart::{Field, MultipartError},
        Multipart,
    },
    http::StatusCode,
};
use bytes::BytesMut;

use crate::app::{errors::DefaultApiError, models::api_error::ApiError};

use super::models::file_properties::FileProperties;

#[derive(Debug, Default)]
pub struct MultipartForm {
    pub files: Vec<FileProperties>,
    pub texts: HashMap<String, String>,
}

impl MultipartForm {
    /// First file uploaded under `field_name`, later ones are ignored.
    pub fn file(&self, field_name: &str) -> Option<&FileProperties> {
        self.files.iter().find(|f| f.field_name == field_name)
    }

    /// Text value for `field_name`, treating an empty value as absent.
    pub fn text(&self, field_name: &str) -> Option<&str> {
        self.texts
            .get(field_name)
            .map(|s| s.as_str())
            .filter(|s| !s.is_empty())
    }

    pub fn text_or(&self, field_name: &str, default: &str) -> String {
        self.text(field_name).unwrap_or(default).to_string()
    }
}

/// Buffers every part of the body. Parts carrying a file name become
/// `FileProperties`, the rest are kept as text fields. A part with an empty
/// file name is what browsers send for an untouched file input and is skipped.
pub async fn get_multipart_form(
    mut multipart: Multipart,
    max_file_size: usize,
) -> Result<MultipartForm, ApiError> {
    let mut form = MultipartForm::default();

    loop {
        let field = match multipart.next_field().await {
            Ok(Some(field)) => field,
            Ok(None) => break,
            Err(e) => {
                tracing::warn!(%e, "failed to read multipart field");
                return Err(multipart_error(e));
            }
        };

        let Some(field_name) = field.name().map(|s| s.to_string()) else {
            continue;
        };

        match field.file_name().map(|s| s.to_string()) {
            Some(file_name) if file_name.is_empty() => continue,
            Some(file_name) => {
                let mime_type = field
                    .content_type()
                    .unwrap_or("application/octet-stream")
                    .to_string();
                let data = read_limited(field, max_file_size).await?;

                form.files.push(FileProperties {
                    field_name,
                    file_name,
                    mime_type,
                    data: data.freeze(),
                });
            }
            None => {
                let text = match field.text().await {
                    Ok(text) => text,
                    Err(e) => {
                        tracing::warn!(%e, %field_name, "failed to read multipart text field");
                        return Err(multipart_error(e));
                    }
                };

                form.texts.entry(field_name).or_insert(text);
            }
        }
    }

    Ok(form)
}

async fn read_limited(mut field: Field<'_>, max_size: usize) -> Result<BytesMut, ApiError> {
    let mut data = BytesMut::new();

    loop {
        match field.chunk().await {
            Ok(Some(chunk)) => {
                if data.len() + chunk.len() > max_size {
                    return Err(DefaultApiError::FileTooLarge.value());
                }
                data.extend_from_slice(&chunk);
            }
            Ok(None) => break,
            Err(e) => {
                tracing::warn!(%e, "failed to read multipart file chunk");
                return Err(multipart_error(e));
            }
        }
    }

    Ok(data)
}

// the body limit surfaces as a multipart error while streaming
fn multipart_error(e: MultipartError) -> ApiError {
    if e.status() == StatusCode::PAYLOAD_TOO_LARGE {
        return DefaultApiError::FileTooLarge.value();
    }
    DefaultApiError::MalformedMultipart.value()
}
