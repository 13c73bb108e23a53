use crate::generations::models::generation_config::GenerationConfig;

pub static REFERENCE_POSE_BLOCK: &str = "
REFERENCE POSE:
Use the second image as a reference for the model's pose and composition.
Apply the garment from the first image onto this pose.
";

static REQUIREMENTS_BLOCK: &str = "
REQUIREMENTS:
- Maintain exact garment appearance and details
- Natural, realistic skin texture and lighting
- Professional fashion photography quality
- No distorted body parts or faces
- High resolution output

Generate the final fashion photograph.";

pub fn compose_prompt(config: &GenerationConfig, has_reference: bool) -> String {
    let mut prompt = format!(
        "Edit this garment image to create a professional fashion lookbook photo.

TASK:
Create a photorealistic fashion photograph showing a model wearing the garment from the provided image.
The garment must be preserved EXACTLY - same texture, patterns, logos, colors, and cut.

MODEL SPECIFICATIONS:
- Ethnicity: {}
- Gender: {}
- Age Group: {} years old
- Body Type: Professional fashion model proportions

SCENE & ATMOSPHERE:
- Location/Background: {}
- Lighting/Style: {}
- Aspect Ratio: {}
",
        config.model_ethnicity,
        config.model_gender,
        config.age_range,
        config.scene,
        config.style,
        config.aspect_ratio,
    );

    if has_reference {
        prompt.push_str(REFERENCE_POSE_BLOCK);
    }

    prompt.push_str(REQUIREMENTS_BLOCK);
    prompt
}
