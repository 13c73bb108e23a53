use serde_json::Value;

use crate::{
    app::util::{data_uri, text::truncate_chars},
    generations::errors::GenerationError,
};

static SNIPPET_CHARS: usize = 500;

/// Where the generated image lives according to the upstream response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageLocation {
    /// A complete `data:` URI that can be handed to the caller as is.
    Inline(String),
    /// A remote image that still has to be downloaded.
    Url(String),
}

/// The response layouts the generation API is known to produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseShape {
    /// `{ "data": [{ "image_url" | "url" | "b64_json": ... }] }`
    ResultList,
    /// `{ "image": "data:image/..." | "http..." }`
    SingleImage,
    /// `{ "images": ["data:image/..." | "http..."] }`
    ImageList,
}

impl ResponseShape {
    pub const PRECEDENCE: [ResponseShape; 3] = [
        ResponseShape::ResultList,
        ResponseShape::SingleImage,
        ResponseShape::ImageList,
    ];

    pub fn locate(&self, body: &Value) -> Option<ImageLocation> {
        match self {
            Self::ResultList => {
                let first = body.get("data")?.as_array()?.first()?;

                if let Some(url) = non_empty_str(first, "image_url") {
                    return Some(ImageLocation::Url(url.to_string()));
                }
                if let Some(url) = non_empty_str(first, "url") {
                    return Some(ImageLocation::Url(url.to_string()));
                }
                non_empty_str(first, "b64_json")
                    .map(|b64| ImageLocation::Inline(format!("data:image/png;base64,{}", b64)))
            }
            Self::SingleImage => classify(body.get("image")?.as_str()?),
            Self::ImageList => {
                let first = body.get("images")?.as_array()?.first()?;
                classify(first.as_str()?)
            }
        }
    }
}

impl ImageLocation {
    /// Tries every `ResponseShape` in precedence order, stopping at the first match.
    pub fn from_response(body: &Value) -> Result<(ResponseShape, ImageLocation), GenerationError> {
        ResponseShape::PRECEDENCE
            .iter()
            .find_map(|shape| shape.locate(body).map(|location| (*shape, location)))
            .ok_or_else(|| GenerationError::UnrecognizedResponse {
                snippet: truncate_chars(&body.to_string(), SNIPPET_CHARS).to_string(),
            })
    }
}

fn non_empty_str<'a>(value: &'a Value, key: &str) -> Option<&'a str> {
    value
        .get(key)
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
}

fn classify(value: &str) -> Option<ImageLocation> {
    if data_uri::is_image_data_uri(value) {
        return Some(ImageLocation::Inline(value.to_string()));
    }
    if value.starts_with("http") {
        return Some(ImageLocation::Url(value.to_string()));
    }
    None
}
