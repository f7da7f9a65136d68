use std::env;
use std::fmt;
use std::time::Duration;

use labreport_core::llm_client::config::{
    DEFAULT_API_URL, DEFAULT_MODEL, DEFAULT_TIMEOUT_SECS,
};
use labreport_core::LlmConfig;

/// Application configuration
#[derive(Clone)]
pub struct Settings {
    /// DeepSeek (or other OpenAI-compatible) API key; absent means mock mode
    pub api_key: Option<String>,

    /// Chat-completion endpoint
    pub api_url: String,

    /// Model name for evaluations
    pub model_name: String,

    /// Timeout for the remote call, in seconds
    pub request_timeout_secs: u64,

    /// Server host
    pub host: String,

    /// Server port
    pub port: u16,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8000
}

impl fmt::Debug for Settings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Settings")
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("api_url", &self.api_url)
            .field("model_name", &self.model_name)
            .field("request_timeout_secs", &self.request_timeout_secs)
            .field("host", &self.host)
            .field("port", &self.port)
            .finish()
    }
}

impl Settings {
    /// Load settings from environment variables
    pub fn load() -> Self {
        dotenvy::dotenv().ok(); // Load .env file if it exists

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build settings from any key lookup
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Settings {
            api_key: lookup("DEEPSEEK_API_KEY").filter(|key| !key.trim().is_empty()),
            api_url: lookup("DEEPSEEK_API_URL").unwrap_or_else(|| DEFAULT_API_URL.to_string()),
            model_name: lookup("MODEL_NAME").unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            request_timeout_secs: lookup("REQUEST_TIMEOUT_SECS")
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_TIMEOUT_SECS),
            host: lookup("HOST").unwrap_or_else(default_host),
            port: lookup("PORT")
                .and_then(|p| p.parse().ok())
                .unwrap_or_else(default_port),
        }
    }

    /// Get the server address as a string
    pub fn server_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Evaluator configuration derived from these settings
    pub fn llm_config(&self) -> LlmConfig {
        let config = LlmConfig::new()
            .with_api_url(self.api_url.clone())
            .with_model(self.model_name.clone())
            .with_timeout(Duration::from_secs(self.request_timeout_secs));

        match &self.api_key {
            Some(key) => config.with_api_key(key.clone()),
            None => config,
        }
    }
}
