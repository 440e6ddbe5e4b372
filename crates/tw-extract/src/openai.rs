//! Chat-completion client for OpenAI-compatible APIs.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use tw_config::OpenAiConfig;

use crate::error::ExtractError;
use crate::http::check_response;
use crate::prompt::ChatMessage;

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: &'a [ChatMessage],
    response_format: ResponseFormat,
    temperature: f32,
}

#[derive(Serialize)]
struct ResponseFormat {
    #[serde(rename = "type")]
    kind: &'static str,
}

#[derive(Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: ReplyMessage,
}

#[derive(Deserialize)]
struct ReplyMessage {
    content: Option<String>,
}

/// HTTP client for `{base_url}/chat/completions`.
pub struct OpenAiClient {
    http: reqwest::Client,
    endpoint: String,
    api_key: String,
    model: String,
    temperature: f32,
}

impl OpenAiClient {
    /// Build a client from the `[openai]` config section.
    ///
    /// # Errors
    ///
    /// [`ExtractError::NotConfigured`] without an API key, or
    /// [`ExtractError::Http`] if the `reqwest` client cannot be built.
    pub fn new(config: &OpenAiConfig) -> Result<Self, ExtractError> {
        if !config.is_configured() {
            return Err(ExtractError::NotConfigured);
        }
        let http = reqwest::Client::builder()
            .user_agent(concat!("taskwise/", env!("CARGO_PKG_VERSION")))
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        Ok(Self {
            http,
            endpoint: format!("{}/chat/completions", config.base_url.trim_end_matches('/')),
            api_key: config.api_key.clone(),
            model: config.model.clone(),
            temperature: config.temperature,
        })
    }

    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    #[must_use]
    pub fn model(&self) -> &str {
        &self.model
    }

    /// Send `messages` in JSON-object mode and return the first reply's content.
    ///
    /// # Errors
    ///
    /// Transport, status, and empty-reply errors; see [`ExtractError`].
    pub async fn complete_json(&self, messages: &[ChatMessage]) -> Result<String, ExtractError> {
        let request = ChatRequest {
            model: &self.model,
            messages,
            response_format: ResponseFormat {
                kind: "json_object",
            },
            temperature: self.temperature,
        };
        tracing::debug!(endpoint = %self.endpoint, model = %self.model, "requesting completion");
        let resp = self
            .http
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await?;
        read_reply(resp).await
    }
}

/// Status check, then the first choice's non-empty message content.
async fn read_reply(resp: reqwest::Response) -> Result<String, ExtractError> {
    let data: ChatResponse = check_response(resp).await?.json().await?;
    data.choices
        .into_iter()
        .next()
        .and_then(|choice| choice.message.content)
        .filter(|content| !content.trim().is_empty())
        .ok_or(ExtractError::EmptyReply)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::tests::mock_response;
    use crate::prompt::Role;

    fn config(base_url: &str) -> OpenAiConfig {
        OpenAiConfig {
            api_key: "sk-test".into(),
            base_url: base_url.into(),
            ..Default::default()
        }
    }

    #[test]
    fn missing_key_is_not_configured() {
        let result = OpenAiClient::new(&OpenAiConfig::default());
        assert!(matches!(result, Err(ExtractError::NotConfigured)));
    }

    #[test]
    fn endpoint_joins_base_url() {
        let client = OpenAiClient::new(&config("http://localhost:8080/v1/")).unwrap();
        assert_eq!(client.endpoint(), "http://localhost:8080/v1/chat/completions");
        assert_eq!(client.model(), "gpt-4o-mini");
    }

    #[test]
    fn request_body_uses_json_object_mode() {
        let messages = vec![ChatMessage {
            role: Role::User,
            content: "hi".into(),
        }];
        let body = serde_json::to_value(ChatRequest {
            model: "gpt-4o-mini",
            messages: &messages,
            response_format: ResponseFormat {
                kind: "json_object",
            },
            temperature: 0.5,
        })
        .unwrap();
        assert_eq!(body["response_format"]["type"], "json_object");
        assert_eq!(body["model"], "gpt-4o-mini");
        assert_eq!(body["messages"][0]["role"], "user");
        assert_eq!(body["temperature"], 0.5);
    }

    #[tokio::test]
    async fn read_reply_returns_first_choice_content() {
        let resp = mock_response(
            200,
            r#"{"choices":[{"message":{"role":"assistant","content":"{\"title\":\"A\"}"}}]}"#,
        );
        assert_eq!(read_reply(resp).await.unwrap(), r#"{"title":"A"}"#);
    }

    #[tokio::test]
    async fn read_reply_rejects_empty_content() {
        let resp = mock_response(200, r#"{"choices":[{"message":{"content":"  "}}]}"#);
        assert!(matches!(read_reply(resp).await, Err(ExtractError::EmptyReply)));

        let resp = mock_response(200, r#"{"choices":[]}"#);
        assert!(matches!(read_reply(resp).await, Err(ExtractError::EmptyReply)));

        let resp = mock_response(200, r#"{"choices":[{"message":{"content":null}}]}"#);
        assert!(matches!(read_reply(resp).await, Err(ExtractError::EmptyReply)));
    }

    #[tokio::test]
    async fn read_reply_maps_status_errors() {
        let resp = mock_response(500, "upstream exploded");
        assert!(matches!(
            read_reply(resp).await,
            Err(ExtractError::Api { status: 500, .. })
        ));
    }

    #[tokio::test]
    async fn read_reply_rejects_non_json_body() {
        let resp = mock_response(200, "<html>gateway</html>");
        assert!(matches!(read_reply(resp).await, Err(ExtractError::Http(_))));
    }

    #[tokio::test]
    async fn unreachable_endpoint_is_an_http_error() {
        let mut cfg = config("http://127.0.0.1:9/v1");
        cfg.timeout_secs = 2;
        let client = OpenAiClient::new(&cfg).unwrap();
        let messages = crate::prompt::build_messages(
            "x",
            chrono::NaiveDate::from_ymd_opt(2026, 1, 1).unwrap(),
        );
        assert!(matches!(
            client.complete_json(&messages).await,
            Err(ExtractError::Http(_))
        ));
    }
}
