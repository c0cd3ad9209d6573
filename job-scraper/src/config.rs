/// Environment variable holding the SuperJob application key.
pub const API_KEY_VAR: &str = "SUPERJOB_API_KEY";
/// Name used by older `.env` files.
const LEGACY_API_KEY_VAR: &str = "X-Api-App-Id";

#[derive(Debug, Clone, Default)]
pub struct Config {
    pub api_key: String,
}

impl Config {
    pub fn new(api_key: String) -> Self {
        Self { api_key }
    }

    /// Read the configuration once at startup.
    /// A missing key is not fatal here, SuperJob answers with an error status instead.
    pub fn from_env() -> Self {
        let api_key = std::env::var(API_KEY_VAR)
            .or_else(|_| std::env::var(LEGACY_API_KEY_VAR))
            .unwrap_or_else(|_| {
                log::warn!("{} not set, SuperJob requests will be rejected", API_KEY_VAR);
                String::new()
            });
        Self { api_key }
    }
}
