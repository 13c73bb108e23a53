use crate::{
    app::util::multipart::{models::file_properties::FileProperties, multipart::MultipartForm},
    generations::models::generation_config::{GenerationConfig, GenerationConfigDefault},
};

pub const MAX_FILE_SIZE: usize = 10 * 1024 * 1024;

pub static GARMENT_FIELD: &str = "garment";
pub static REFERENCE_FIELD: &str = "reference";

#[derive(Debug, Clone)]
pub struct GenerateDto {
    pub garment: FileProperties,
    pub reference: Option<FileProperties>,
    pub config: GenerationConfig,
}

impl GenerateDto {
    /// Returns `None` when no garment file was uploaded.
    pub fn from_form(form: &MultipartForm) -> Option<Self> {
        let garment = form.file(GARMENT_FIELD)?.clone();
        let reference = form.file(REFERENCE_FIELD).cloned();

        let config = GenerationConfig {
            model_ethnicity: form
                .text_or("modelEthnicity", GenerationConfigDefault::MODEL_ETHNICITY),
            model_gender: form.text_or("modelGender", GenerationConfigDefault::MODEL_GENDER),
            age_range: form.text_or("ageRange", GenerationConfigDefault::AGE_RANGE),
            scene: form.text_or("scene", GenerationConfigDefault::SCENE),
            style: form.text_or("style", GenerationConfigDefault::STYLE),
            aspect_ratio: form.text_or("aspectRatio", GenerationConfigDefault::ASPECT_RATIO),
        };

        Some(GenerateDto {
            garment,
            reference,
            config,
        })
    }
}
