use super::config::API_KEY_VAR;

/// Source of the bearer credential. Consulted on every upstream call so the
/// key can be rotated without restarting the process.
pub trait ApiKeyProvider: Send + Sync {
    fn api_key(&self) -> Option<String>;
}

#[derive(Debug, Clone)]
pub struct EnvApiKey {
    var: String,
}

impl EnvApiKey {
    pub fn new(var: &str) -> Self {
        EnvApiKey {
            var: var.to_string(),
        }
    }
}

impl Default for EnvApiKey {
    fn default() -> Self {
        EnvApiKey::new(API_KEY_VAR)
    }
}

impl ApiKeyProvider for EnvApiKey {
    fn api_key(&self) -> Option<String> {
        std::env::var(&self.var).ok().filter(|key| !key.is_empty())
    }
}

impl<F> ApiKeyProvider for F
where
    F: Fn() -> Option<String> + Send + Sync,
{
    fn api_key(&self) -> Option<String> {
        self()
    }
}
