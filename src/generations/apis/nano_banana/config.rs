pub static API_BASE_URL: &str = "https://api.acedata.cloud";
pub static EDIT_IMAGES_PATH: &str = "/nano-banana/images";
pub static MODEL: &str = "nano-banana-pro";
pub static ACTION_EDIT: &str = "edit";
pub static API_KEY_VAR: &str = "API_KEY";

pub static TIMEOUT_SECS: u64 = 180;

// mime type assumed for fetched images whose response carries no content type
pub static DEFAULT_IMAGE_MIME: &str = "image/png";
