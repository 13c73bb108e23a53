pub mod encoded_image;
pub mod generation_config;
