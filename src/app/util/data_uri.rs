pub fn to_data_uri(mime_type: &str, data: &[u8]) -> String {
    format!("data:{};base64,{}", mime_type, base64::encode(data))
}

pub fn is_image_data_uri(value: &str) -> bool {
    value.starts_with("data:image")
}
