use std::{sync::Arc, time::Duration};

use reqwest::{header, Client};
use serde_json::Value;

use crate::{
    app::util::{data_uri, reqwest::get_bytes, text::truncate_chars},
    generations::{errors::GenerationError, models::encoded_image::EncodedImage},
};

use super::{
    config::{ACTION_EDIT, DEFAULT_IMAGE_MIME, EDIT_IMAGES_PATH, MODEL, TIMEOUT_SECS},
    credentials::ApiKeyProvider,
    models::input_spec::InputSpec,
    structs::nano_banana_response::ImageLocation,
};

pub struct NanoBananaClient {
    client: Client,
    base_url: String,
    api_key: Arc<dyn ApiKeyProvider>,
    timeout: Duration,
}

impl NanoBananaClient {
    pub fn new(base_url: &str, api_key: Arc<dyn ApiKeyProvider>) -> Result<Self, reqwest::Error> {
        Self::with_timeout(base_url, api_key, Duration::from_secs(TIMEOUT_SECS))
    }

    pub fn with_timeout(
        base_url: &str,
        api_key: Arc<dyn ApiKeyProvider>,
        timeout: Duration,
    ) -> Result<Self, reqwest::Error> {
        let client = Client::builder().timeout(timeout).build()?;

        Ok(NanoBananaClient {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key,
            timeout,
        })
    }

    /// Sends the prompt and images (garment first) to the edit endpoint and
    /// returns the generated image as a data URI.
    pub async fn generate_image(
        &self,
        prompt: &str,
        images: &[EncodedImage],
    ) -> Result<String, GenerationError> {
        let body = self.edit_images(prompt, images).await?;

        let (shape, location) = ImageLocation::from_response(&body)?;
        tracing::info!(?shape, "found generated image");

        match location {
            ImageLocation::Inline(data_uri) => Ok(data_uri),
            ImageLocation::Url(url) => self.fetch_as_data_uri(&url).await,
        }
    }

    async fn edit_images(
        &self,
        prompt: &str,
        images: &[EncodedImage],
    ) -> Result<Value, GenerationError> {
        let api_key = self.api_key.api_key();
        let mime_types: Vec<&str> = images.iter().map(EncodedImage::mime_type).collect();
        tracing::info!(
            model = MODEL,
            image_count = images.len(),
            ?mime_types,
            api_key_present = api_key.is_some(),
            "sending request to nano banana"
        );

        let input_spec = InputSpec {
            action: ACTION_EDIT,
            model: MODEL,
            prompt,
            image_urls: images,
        };

        let res = self
            .client
            .post(format!("{}{}", self.base_url, EDIT_IMAGES_PATH))
            .header(
                header::AUTHORIZATION,
                format!("Bearer {}", api_key.unwrap_or_default()),
            )
            .json(&input_spec)
            .send()
            .await
            .map_err(|e| self.transport_error(e))?;

        let status = res.status();
        tracing::info!(%status, "nano banana responded");

        let text = res.text().await.map_err(|e| self.transport_error(e))?;

        if !status.is_success() {
            tracing::error!(%status, body = truncate_chars(&text, 1000), "nano banana request failed");
            return Err(GenerationError::Status { status });
        }

        parse_response_body(text)
    }

    async fn fetch_as_data_uri(&self, url: &str) -> Result<String, GenerationError> {
        tracing::info!(url, "downloading generated image");

        let file = get_bytes(&self.client, url).await.map_err(|e| {
            if e.is_timeout() {
                return GenerationError::Timeout(self.timeout);
            }
            GenerationError::ImageFetch {
                url: url.to_string(),
                source: e,
            }
        })?;

        let mime_type = file.mime_type.as_deref().unwrap_or(DEFAULT_IMAGE_MIME);
        Ok(data_uri::to_data_uri(mime_type, &file.data))
    }

    fn transport_error(&self, e: reqwest::Error) -> GenerationError {
        if e.is_timeout() {
            GenerationError::Timeout(self.timeout)
        } else {
            GenerationError::Transport(e)
        }
    }
}

fn parse_response_body(text: String) -> Result<Value, GenerationError> {
    if text.trim().is_empty() {
        return Err(GenerationError::EmptyResponse);
    }

    // a body that is not JSON still goes through extraction so the caller
    // gets the usual snippet of what came back
    let body = serde_json::from_str::<Value>(&text).unwrap_or(Value::String(text));
    if body.is_null() {
        return Err(GenerationError::EmptyResponse);
    }

    let keys: Vec<&String> = body.as_object().map(|o| o.keys().collect()).unwrap_or_default();
    tracing::info!(?keys, "nano banana response structure");
    tracing::debug!(
        body = truncate_chars(&serde_json::to_string_pretty(&body).unwrap_or_default(), 2000),
        "nano banana full response"
    );

    Ok(body)
}
