use axum::{
    extract::{multipart::MultipartRejection, Multipart, State},
    Json,
};
use serde_json::{json, Value};
use tracing::Instrument;
use uuid::Uuid;

use crate::{
    app::{
        errors::DefaultApiError, models::api_error::ApiError,
        util::multipart::multipart::get_multipart_form,
    },
    AppState,
};

use super::{
    dtos::generate_dto::{GenerateDto, MAX_FILE_SIZE},
    errors::GenerationsApiError,
    service,
};

pub async fn generate(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<Value>, ApiError> {
    let span = tracing::info_span!("generate", request_id = %Uuid::new_v4());

    async move {
        tracing::info!("received generate request");

        let multipart = match multipart {
            Ok(multipart) => multipart,
            Err(e) => {
                tracing::warn!(%e, "rejected non-multipart request");
                return Err(DefaultApiError::MalformedMultipart.value());
            }
        };

        let form = get_multipart_form(multipart, MAX_FILE_SIZE).await?;
        let file_fields: Vec<&str> = form.files.iter().map(|f| f.field_name.as_str()).collect();
        tracing::info!(?file_fields, "uploaded files");

        let Some(dto) = GenerateDto::from_form(&form) else {
            return Err(GenerationsApiError::MissingGarment.value());
        };

        match service::generate_fashion_image(&dto, &state.nano_banana).await {
            Ok(image) => Ok(Json(json!({
                "success": true,
                "image": image,
            }))),
            Err(e) => Err(GenerationsApiError::GenerationFailed(e).value()),
        }
    }
    .instrument(span)
    .await
}
