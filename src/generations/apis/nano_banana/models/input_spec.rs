use serde::Serialize;

use crate::generations::models::encoded_image::EncodedImage;

#[derive(Debug, Serialize)]
pub struct InputSpec<'a> {
    pub action: &'a str,
    pub model: &'a str,
    pub prompt: &'a str,
    pub image_urls: &'a [EncodedImage],
}
