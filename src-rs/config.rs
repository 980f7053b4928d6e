use std::env;

use tracing::warn;

pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_BASE_URL: &str = "https://api.openai.com";
pub const DEFAULT_MODEL: &str = "gpt-4o-mini";

/// Fixed parameters of the outbound completion call.
#[derive(Clone, Debug)]
pub struct UpstreamConfig {
    pub base_url: String,
    pub model: String,
    pub temperature: f64,
    pub max_tokens: u32,
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            temperature: 0.8,
            max_tokens: 500,
        }
    }
}

/// Process-wide configuration, loaded once at startup and shared read-only.
#[derive(Clone, Debug)]
pub struct ServiceConfig {
    pub port: u16,
    pub api_key: Option<String>,
    pub upstream: UpstreamConfig,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            api_key: None,
            upstream: UpstreamConfig::default(),
        }
    }
}

impl ServiceConfig {
    pub fn from_env() -> Self {
        let port = env::var("PORT")
            .ok()
            .and_then(|raw| raw.parse::<u16>().ok())
            .unwrap_or(DEFAULT_PORT);

        let api_key = env_opt("OPENAI_API_KEY");
        if api_key.is_none() {
            // Not fatal: valid requests get a 500 until the key is provided.
            warn!("OPENAI_API_KEY is not set, generation requests will fail");
        }

        let mut upstream = UpstreamConfig::default();
        if let Some(base_url) = env_opt("OPENAI_BASE_URL") {
            upstream.base_url = base_url;
        }

        Self {
            port,
            api_key,
            upstream,
        }
    }

    /// The API key, if present and non-blank.
    pub fn api_key(&self) -> Option<&str> {
        self.api_key
            .as_deref()
            .filter(|key| !key.trim().is_empty())
    }
}

fn env_opt(key: &str) -> Option<String> {
    match env::var(key) {
        Ok(value) if !value.trim().is_empty() => Some(value.trim().to_string()),
        _ => None,
    }
}
