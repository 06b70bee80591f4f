//! Shared HTTP response helpers.
//!
//! Centralizes status-code mapping (401/403/404, 429 with `Retry-After`,
//! other non-success → [`ApiError::Api`]) so resource modules stay focused
//! on request construction and response mapping.

use serde::Deserialize;

use crate::error::ApiError;

/// Error body shape the server uses: `{"message": ...}` or `{"error": ...}`.
#[derive(Deserialize)]
struct ErrorBody {
    message: Option<String>,
    error: Option<String>,
}

/// Check an HTTP response for error conditions.
///
/// Returns the response unchanged on success.
pub async fn check_response(resp: reqwest::Response) -> Result<reqwest::Response, ApiError> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }
    if status == 429 {
        return Err(ApiError::RateLimited {
            retry_after_secs: parse_retry_after(&resp),
        });
    }
    if status == 401 {
        return Err(ApiError::Unauthorized);
    }

    let path = resp.url().path().to_string();
    let message = extract_message(&resp.text().await.unwrap_or_default());
    match status.as_u16() {
        403 => Err(ApiError::Forbidden(if message.is_empty() { path } else { message })),
        404 => Err(ApiError::NotFound(path)),
        code => Err(ApiError::Api {
            status: code,
            message,
        }),
    }
}

/// Parse the `Retry-After` header as seconds, falling back to 60 s.
fn parse_retry_after(resp: &reqwest::Response) -> u64 {
    resp.headers()
        .get(reqwest::header::RETRY_AFTER)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.parse::<u64>().ok())
        .unwrap_or(60)
}

/// Prefer the server's `message`/`error` field; fall back to the raw body.
fn extract_message(body: &str) -> String {
    serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|parsed| parsed.message.or(parsed.error))
        .unwrap_or_else(|| body.trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mock_response(status: u16, body: &str) -> reqwest::Response {
        reqwest::Response::from(
            ::http::Response::builder()
                .status(status)
                .body(body.to_string())
                .unwrap(),
        )
    }

    fn mock_response_with_retry_after(status: u16, value: &str) -> reqwest::Response {
        reqwest::Response::from(
            ::http::Response::builder()
                .status(status)
                .header("Retry-After", value)
                .body(String::new())
                .unwrap(),
        )
    }

    #[test]
    fn parse_retry_after_from_header() {
        let resp = mock_response_with_retry_after(429, "120");
        assert_eq!(parse_retry_after(&resp), 120);
    }

    #[test]
    fn parse_retry_after_non_numeric() {
        let resp = mock_response_with_retry_after(429, "soon");
        assert_eq!(parse_retry_after(&resp), 60);
    }

    #[test]
    fn message_prefers_json_field() {
        assert_eq!(extract_message(r#"{"message":"Task not found"}"#), "Task not found");
        assert_eq!(extract_message(r#"{"error":"Invalid status"}"#), "Invalid status");
        assert_eq!(extract_message("  plain text  "), "plain text");
    }

    #[tokio::test]
    async fn check_response_success() {
        assert!(check_response(mock_response(200, "[]")).await.is_ok());
    }

    #[tokio::test]
    async fn check_response_unauthorized() {
        let err = check_response(mock_response(401, "")).await.unwrap_err();
        assert!(matches!(err, ApiError::Unauthorized));
    }

    #[tokio::test]
    async fn check_response_forbidden_keeps_message() {
        let err = check_response(mock_response(403, r#"{"message":"Admins only"}"#))
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::Forbidden(ref message) if message == "Admins only"));
    }

    #[tokio::test]
    async fn check_response_not_found() {
        let err = check_response(mock_response(404, "")).await.unwrap_err();
        assert!(matches!(err, ApiError::NotFound(_)));
    }

    #[tokio::test]
    async fn check_response_rate_limited_with_header() {
        let resp = mock_response_with_retry_after(429, "30");
        let err = check_response(resp).await.unwrap_err();
        assert!(matches!(
            err,
            ApiError::RateLimited {
                retry_after_secs: 30
            }
        ));
    }

    #[tokio::test]
    async fn check_response_api_error_carries_message() {
        let err = check_response(mock_response(500, r#"{"error":"boom"}"#))
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::Api { status: 500, ref message } if message == "boom"));
    }
}
