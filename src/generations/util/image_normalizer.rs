use bytes::Bytes;
use image::{
    codecs::jpeg::JpegEncoder, imageops::FilterType, ColorType, DynamicImage, GenericImageView,
    ImageError,
};

use crate::{
    app::util::multipart::models::file_properties::FileProperties,
    generations::models::encoded_image::EncodedImage,
};

pub static MAX_DIMENSION: u32 = 1024;
pub static JPEG_QUALITY: u8 = 75;

/// Runs `normalize_image` on the blocking pool.
pub async fn normalize_file(
    file: &FileProperties,
) -> Result<EncodedImage, tokio::task::JoinError> {
    tracing::info!(
        field_name = %file.field_name,
        file_name = %file.file_name,
        mime_type = %file.mime_type,
        "normalizing upload"
    );

    let data: Bytes = file.data.clone();
    let mime_type = file.mime_type.to_string();

    tokio::task::spawn_blocking(move || normalize_image(&data, &mime_type)).await
}

/// Shrinks the image to fit within `MAX_DIMENSION` and re-encodes it as JPEG.
/// Falls back to the untouched bytes under their declared mime type when the
/// image cannot be decoded or encoded.
pub fn normalize_image(data: &[u8], mime_type: &str) -> EncodedImage {
    match compress_image(data) {
        Ok(compressed) => {
            tracing::info!(
                "image compressed: {:.2}MB -> {:.2}MB",
                to_megabytes(data.len()),
                to_megabytes(compressed.len())
            );

            EncodedImage::from_bytes(mime::IMAGE_JPEG.essence_str(), &compressed)
        }
        Err(e) => {
            tracing::warn!(%e, mime_type, "image compression failed, using original");

            EncodedImage::from_bytes(mime_type, data)
        }
    }
}

fn compress_image(data: &[u8]) -> Result<Vec<u8>, ImageError> {
    let img = fit_within(image::load_from_memory(data)?, MAX_DIMENSION);
    let rgb = img.to_rgb8();

    let mut buf = Vec::new();
    JpegEncoder::new_with_quality(&mut buf, JPEG_QUALITY).encode(
        rgb.as_raw(),
        rgb.width(),
        rgb.height(),
        ColorType::Rgb8,
    )?;

    Ok(buf)
}

fn fit_within(img: DynamicImage, max: u32) -> DynamicImage {
    let (width, height) = img.dimensions();
    if width <= max && height <= max {
        return img;
    }

    // resize keeps the aspect ratio and fits inside max x max
    img.resize(max, max, FilterType::Lanczos3)
}

fn to_megabytes(len: usize) -> f64 {
    len as f64 / 1024.0 / 1024.0
}
