use serde::Deserialize;

pub static DEFAULT_PORT: u16 = 3005;
pub static DEFAULT_PUBLIC_DIR: &str = "public";

#[derive(Debug, Clone, Deserialize)]
pub struct Envy {
    pub app_env: Option<String>,
    pub port: Option<u16>,

    pub public_dir: Option<String>,

    // API_KEY is intentionally absent: it is read on every upstream call.
    pub api_base_url: Option<String>,
}

impl Envy {
    pub fn load() -> Result<Self, envy::Error> {
        let app_env = std::env::var("APP_ENV").unwrap_or("development".to_string());
        let _ = dotenvy::from_filename(format!(".env.{}", app_env));
        let _ = dotenvy::dotenv();

        envy::from_env::<Envy>()
    }

    pub fn port(&self) -> u16 {
        self.port.unwrap_or(DEFAULT_PORT)
    }

    pub fn public_dir(&self) -> &str {
        self.public_dir.as_deref().unwrap_or(DEFAULT_PUBLIC_DIR)
    }
}
