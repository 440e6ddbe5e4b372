//! # tw-extract
//!
//! Turns a free-text to-do note into structured task fields.
//!
//! [`TaskExtractor::extract`] asks an OpenAI-compatible chat-completion API
//! for a JSON object and reads it leniently. When no API key is configured,
//! or the call or parse fails, it logs a warning and falls back to a regex
//! scan for "today"/"tomorrow" and clock times. It never returns an error.

pub mod fallback;
pub mod parse;
pub mod prompt;

mod error;
mod http;
mod openai;

pub use error::ExtractError;
pub use openai::OpenAiClient;

use chrono::NaiveDate;
use tracing::warn;
use tw_config::OpenAiConfig;
use tw_core::extraction::{ExtractedTask, Extraction, ExtractionSource};

/// Model call with regex fallback.
pub struct TaskExtractor {
    client: Option<OpenAiClient>,
}

impl TaskExtractor {
    /// Use the completion API when `config` has a key, otherwise fallback only.
    ///
    /// # Errors
    ///
    /// [`ExtractError::Http`] if the HTTP client cannot be built.
    pub fn from_config(config: &OpenAiConfig) -> Result<Self, ExtractError> {
        if !config.is_configured() {
            return Ok(Self::fallback_only());
        }
        Ok(Self {
            client: Some(OpenAiClient::new(config)?),
        })
    }

    /// An extractor that never calls out.
    #[must_use]
    pub const fn fallback_only() -> Self {
        Self { client: None }
    }

    #[must_use]
    pub const fn uses_model(&self) -> bool {
        self.client.is_some()
    }

    /// Extract fields from `input`, resolving relative dates against `today`.
    pub async fn extract(&self, input: &str, today: NaiveDate) -> Extraction {
        match self.extract_with_model(input, today).await {
            Ok(fields) => Extraction {
                fields,
                source: ExtractionSource::Model,
            },
            Err(error) => {
                warn!(%error, "model extraction failed; using regex fallback");
                Extraction {
                    fields: fallback::fallback_fields(input, today),
                    source: ExtractionSource::Fallback,
                }
            }
        }
    }

    async fn extract_with_model(
        &self,
        input: &str,
        today: NaiveDate,
    ) -> Result<ExtractedTask, ExtractError> {
        let client = self.client.as_ref().ok_or(ExtractError::NotConfigured)?;
        let messages = prompt::build_messages(input, today);
        let content = client.complete_json(&messages).await?;
        parse::parse_reply(&content, input)
    }
}
