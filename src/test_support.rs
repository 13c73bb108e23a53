use std::{io::Cursor, net::TcpListener, sync::Arc};

use axum::Router;
use image::{DynamicImage, ImageOutputFormat, Rgb, RgbImage};

use crate::{
    app::env::Envy,
    generations::apis::nano_banana::{credentials::ApiKeyProvider, service::NanoBananaClient},
    AppState,
};

/// Serves `app` on an ephemeral local port and returns its base url.
pub fn spawn_server(app: Router) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    let server = axum::Server::from_tcp(listener)
        .unwrap()
        .serve(app.into_make_service());

    tokio::spawn(server);

    format!("http://{}", addr)
}

pub fn static_key(key: &str) -> Arc<dyn ApiKeyProvider> {
    let key = key.to_string();
    Arc::new(move || Some(key.clone()))
}

pub fn test_state(api_base_url: &str) -> AppState {
    let envy = Envy {
        app_env: Some("test".to_string()),
        port: None,
        public_dir: Some(concat!(env!("CARGO_MANIFEST_DIR"), "/public").to_string()),
        api_base_url: Some(api_base_url.to_string()),
    };
    let nano_banana = NanoBananaClient::new(api_base_url, static_key("test-key")).unwrap();

    AppState {
        envy: Arc::new(envy),
        nano_banana: Arc::new(nano_banana),
    }
}

pub fn png_bytes(width: u32, height: u32) -> Vec<u8> {
    let img = DynamicImage::ImageRgb8(RgbImage::from_pixel(width, height, Rgb([30, 60, 90])));
    let mut buf = Vec::new();
    img.write_to(&mut Cursor::new(&mut buf), ImageOutputFormat::Png)
        .unwrap();
    buf
}

pub static BOUNDARY: &str = "lookbook-test-boundary";

pub struct FilePart<'a> {
    pub field_name: &'a str,
    pub file_name: &'a str,
    pub mime_type: &'a str,
    pub data: &'a [u8],
}

/// Builds a `multipart/form-data` body, returning the content type header value and the body.
pub fn multipart_body(files: &[FilePart], texts: &[(&str, &str)]) -> (String, Vec<u8>) {
    let mut body = Vec::new();

    for (name, value) in texts {
        body.extend_from_slice(
            format!(
                "--{}\r\nContent-Disposition: form-data; name=\"{}\"\r\n\r\n{}\r\n",
                BOUNDARY, name, value
            )
            .as_bytes(),
        );
    }

    for file in files {
        body.extend_from_slice(
            format!(
                "--{}\r\nContent-Disposition: form-data; name=\"{}\"; filename=\"{}\"\r\nContent-Type: {}\r\n\r\n",
                BOUNDARY, file.field_name, file.file_name, file.mime_type
            )
            .as_bytes(),
        );
        body.extend_from_slice(file.data);
        body.extend_from_slice(b"\r\n");
    }

    body.extend_from_slice(format!("--{}--\r\n", BOUNDARY).as_bytes());

    (format!("multipart/form-data; boundary={}", BOUNDARY), body)
}
