use super::{
    apis::nano_banana::service::NanoBananaClient,
    dtos::generate_dto::GenerateDto,
    errors::GenerationError,
    util::{image_normalizer, prompt},
};

pub async fn generate_fashion_image(
    dto: &GenerateDto,
    nano_banana: &NanoBananaClient,
) -> Result<String, GenerationError> {
    match run_pipeline(dto, nano_banana).await {
        Ok(image) => Ok(image),
        Err(e) => {
            tracing::error!(error = %e, debug = ?e, "image generation failed");
            Err(e)
        }
    }
}

async fn run_pipeline(
    dto: &GenerateDto,
    nano_banana: &NanoBananaClient,
) -> Result<String, GenerationError> {
    tracing::info!(
        config = %serde_json::to_string(&dto.config).unwrap_or_default(),
        "starting image generation"
    );

    let prompt = prompt::compose_prompt(&dto.config, dto.reference.is_some());

    let mut images = Vec::with_capacity(2);
    images.push(image_normalizer::normalize_file(&dto.garment).await?);
    if let Some(reference) = &dto.reference {
        images.push(image_normalizer::normalize_file(reference).await?);
    }

    nano_banana.generate_image(&prompt, &images).await
}
