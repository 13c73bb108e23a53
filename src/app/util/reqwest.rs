use bytes::Bytes;
use ::reqwest::{header::CONTENT_TYPE, Client};

#[derive(Debug)]
pub struct FetchedFile {
    pub mime_type: Option<String>,
    pub data: Bytes,
}

pub async fn get_bytes(client: &Client, url: &str) -> Result<FetchedFile, ::reqwest::Error> {
    let res = client.get(url).send().await?.error_for_status()?;

    let mime_type = res
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .filter(|value| !value.is_empty())
        .map(|value| value.to_string());

    let data = res.bytes().await?;

    Ok(FetchedFile { mime_type, data })
}
