pub mod image_normalizer;
pub mod prompt;
