//! HTTP status handling for the completion client.
//!
//! 429 becomes [`ExtractError::RateLimited`] (with `Retry-After` parsing),
//! any other non-success status becomes [`ExtractError::Api`].

use crate::error::ExtractError;

/// Return the response unchanged on success, otherwise a typed error.
pub async fn check_response(resp: reqwest::Response) -> Result<reqwest::Response, ExtractError> {
    if resp.status() == 429 {
        let retry_after = parse_retry_after(&resp);
        return Err(ExtractError::RateLimited {
            retry_after_secs: retry_after,
        });
    }
    if !resp.status().is_success() {
        return Err(ExtractError::Api {
            status: resp.status().as_u16(),
            message: resp.text().await.unwrap_or_default(),
        });
    }
    Ok(resp)
}

/// Parse the `Retry-After` header as seconds, falling back to 60 s.
fn parse_retry_after(resp: &reqwest::Response) -> u64 {
    resp.headers()
        .get(reqwest::header::RETRY_AFTER)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.parse::<u64>().ok())
        .unwrap_or(60)
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    pub(crate) fn mock_response(status: u16, body: &str) -> reqwest::Response {
        reqwest::Response::from(
            ::http::Response::builder()
                .status(status)
                .header("content-type", "application/json")
                .body(body.to_string())
                .unwrap(),
        )
    }

    fn mock_response_with_retry_after(status: u16, value: &str) -> reqwest::Response {
        reqwest::Response::from(
            ::http::Response::builder()
                .status(status)
                .header("Retry-After", value)
                .body("")
                .unwrap(),
        )
    }

    #[test]
    fn parse_retry_after_from_header() {
        let resp = mock_response_with_retry_after(429, "20");
        assert_eq!(parse_retry_after(&resp), 20);
    }

    #[test]
    fn parse_retry_after_defaults() {
        assert_eq!(parse_retry_after(&mock_response(429, "")), 60);
        let resp = mock_response_with_retry_after(429, "Wed, 21 Oct 2026 07:28:00 GMT");
        assert_eq!(parse_retry_after(&resp), 60);
    }

    #[tokio::test]
    async fn check_response_rate_limited() {
        let resp = mock_response_with_retry_after(429, "5");
        let err = check_response(resp).await.unwrap_err();
        assert!(matches!(
            err,
            ExtractError::RateLimited {
                retry_after_secs: 5
            }
        ));
    }

    #[tokio::test]
    async fn check_response_api_error_keeps_body() {
        let resp = mock_response(401, r#"{"error":{"message":"Incorrect API key"}}"#);
        let err = check_response(resp).await.unwrap_err();
        match err {
            ExtractError::Api { status, message } => {
                assert_eq!(status, 401);
                assert!(message.contains("Incorrect API key"));
            }
            other => panic!("expected Api error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn check_response_success() {
        assert!(check_response(mock_response(200, "{}")).await.is_ok());
    }
}
