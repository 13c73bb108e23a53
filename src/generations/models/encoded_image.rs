use serde::Serialize;

use crate::app::util::data_uri;

/// A `data:<mime>;base64,<payload>` string ready to be sent upstream.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct EncodedImage(String);

impl EncodedImage {
    pub fn from_bytes(mime_type: &str, data: &[u8]) -> Self {
        EncodedImage(data_uri::to_data_uri(mime_type, data))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn mime_type(&self) -> &str {
        self.0
            .strip_prefix("data:")
            .and_then(|rest| rest.split(';').next())
            .unwrap_or_default()
    }
}
