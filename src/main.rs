use std::{net::SocketAddr, sync::Arc};

use axum::{
    extract::DefaultBodyLimit,
    http::{header::CONTENT_TYPE, Method},
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    services::ServeDir,
    trace::TraceLayer,
};
use tracing_subscriber::EnvFilter;

use crate::{
    app::env::Envy,
    generations::{
        apis::nano_banana::{config::API_BASE_URL, credentials::EnvApiKey, service::NanoBananaClient},
        dtos::generate_dto::MAX_FILE_SIZE,
    },
};

mod app;
mod generations;
#[cfg(test)]
mod test_support;

// garment + reference + text fields and multipart framing
const MAX_BODY_SIZE: usize = 2 * MAX_FILE_SIZE + 1024 * 1024;

#[derive(Clone)]
pub struct AppState {
    pub envy: Arc<Envy>,
    pub nano_banana: Arc<NanoBananaClient>,
}

#[tokio::main]
async fn main() {
    // tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // environment
    let envy = match Envy::load() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!(%e, "failed to read configuration");
            std::process::exit(1);
        }
    };

    // properties
    let port = envy.port();
    let api_base_url = envy
        .api_base_url
        .clone()
        .unwrap_or(API_BASE_URL.to_string());

    let nano_banana = match NanoBananaClient::new(&api_base_url, Arc::new(EnvApiKey::default())) {
        Ok(client) => client,
        Err(e) => {
            tracing::error!(%e, "failed to build http client");
            std::process::exit(1);
        }
    };

    tracing::info!(app_env = ?envy.app_env, %api_base_url, "configuration loaded");

    let state = AppState {
        envy: Arc::new(envy),
        nano_banana: Arc::new(nano_banana),
    };

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("listening on http://localhost:{}", port);

    if let Err(e) = axum::Server::bind(&addr)
        .serve(router(state).into_make_service())
        .await
    {
        tracing::error!(%e, "server error");
    }
}

fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_headers([CONTENT_TYPE])
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS]);

    let public = ServeDir::new(state.envy.public_dir());

    Router::new()
        .route("/health", get(app::controller::get_health))
        .route("/api/generate", post(generations::controller::generate))
        // front-end bundle, "/" resolves to index.html
        .fallback_service(public)
        // layers
        .layer(DefaultBodyLimit::max(MAX_BODY_SIZE))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
