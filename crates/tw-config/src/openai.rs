//! Chat-completion API configuration for the extraction step.

use serde::{Deserialize, Serialize};

fn default_base_url() -> String {
    "https://api.openai.com/v1".to_string()
}

fn default_model() -> String {
    "gpt-4o-mini".to_string()
}

const fn default_temperature() -> f32 {
    0.1
}

const fn default_timeout_secs() -> u64 {
    30
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct OpenAiConfig {
    /// API key. Also read from the bare `OPENAI_API_KEY` variable.
    #[serde(default)]
    pub api_key: String,

    /// Base URL of an OpenAI-compatible API (no trailing `/chat/completions`).
    #[serde(default = "default_base_url")]
    pub base_url: String,

    #[serde(default = "default_model")]
    pub model: String,

    #[serde(default = "default_temperature")]
    pub temperature: f32,

    /// Whole-request timeout, in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for OpenAiConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            base_url: default_base_url(),
            model: default_model(),
            temperature: default_temperature(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl OpenAiConfig {
    /// Without a key every extraction goes straight to the regex fallback.
    pub fn is_configured(&self) -> bool {
        !self.api_key.is_empty() && !self.base_url.is_empty()
    }
}
