//! Extraction error types.
//!
//! None of these reach the user: [`crate::TaskExtractor`] logs them and
//! switches to the regex fallback.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExtractError {
    /// No API key is configured.
    #[error("completion API not configured")]
    NotConfigured,

    /// HTTP transport error, including timeouts and undecodable bodies.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The API returned a non-success status code.
    #[error("API error ({status}): {message}")]
    Api {
        /// HTTP status code returned by the API.
        status: u16,
        /// Response body.
        message: String,
    },

    /// The API returned 429 Too Many Requests.
    #[error("rate limited, retry after {retry_after_secs}s")]
    RateLimited {
        /// Seconds the API asked us to wait.
        retry_after_secs: u64,
    },

    /// The reply carried no message content.
    #[error("empty completion reply")]
    EmptyReply,

    /// The message content was not a JSON object.
    #[error("parse error: {0}")]
    Parse(String),
}
