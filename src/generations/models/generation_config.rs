use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationConfig {
    pub model_ethnicity: String,
    pub model_gender: String,
    pub age_range: String,
    pub scene: String,
    pub style: String,
    pub aspect_ratio: String,
}

pub struct GenerationConfigDefault;

impl GenerationConfigDefault {
    pub const MODEL_ETHNICITY: &str = "Asian";
    pub const MODEL_GENDER: &str = "Female";
    pub const AGE_RANGE: &str = "20-30";
    pub const SCENE: &str = "Studio with neutral background";
    pub const STYLE: &str = "Professional fashion photography lighting";
    pub const ASPECT_RATIO: &str = "1:1";
}

impl Default for GenerationConfig {
    fn default() -> Self {
        GenerationConfig {
            model_ethnicity: GenerationConfigDefault::MODEL_ETHNICITY.to_string(),
            model_gender: GenerationConfigDefault::MODEL_GENDER.to_string(),
            age_range: GenerationConfigDefault::AGE_RANGE.to_string(),
            scene: GenerationConfigDefault::SCENE.to_string(),
            style: GenerationConfigDefault::STYLE.to_string(),
            aspect_ratio: GenerationConfigDefault::ASPECT_RATIO.to_string(),
        }
    }
}
