//! API error taxonomy and mapping from client/transport errors.

/// Errors from a provider, news, or posting API call.
///
/// `RateLimited`, `Timeout`, and `Connection` are transient: the user may simply retry.
/// The rest are permanent and carry the provider-reported detail.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("API Rate Limit Error: {0}")]
    RateLimited(String),
    #[error("API Timeout: {0}")]
    Timeout(String),
    #[error("API Connection Error: {0}")]
    Connection(String),
    #[error("API Authentication Error: check the API key. {0}")]
    Authentication(String),
    #[error("API Request Error: {0}")]
    BadRequest(String),
    #[error("Not Found: {0}")]
    NotFound(String),
    #[error("API Error: {0}")]
    Api(String),
    #[error("Unexpected API response: {0}")]
    UnexpectedResponse(String),
    #[error("{0}")]
    Other(String),
}

/// Invalid user input, rejected before any request is sent.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InputError {
    #[error("Please enter a text prompt or provide an image")]
    EmptyQuery,
    #[error("Please enter a prompt for the image")]
    EmptyPrompt,
    #[error("Unsupported image size: {0} (expected 1024x1024, 1792x1024 or 1024x1792)")]
    UnsupportedSize(String),
    #[error("Unknown model '{0}' for this command (see `toolhub models`)")]
    UnknownModel(String),
}

impl ApiError {
    pub fn is_transient(&self) -> bool {
        matches!(
            self,
            ApiError::RateLimited(_) | ApiError::Timeout(_) | ApiError::Connection(_)
        )
    }

    /// Classify an HTTP error status with its response body.
    pub fn from_status(status: reqwest::StatusCode, body: &str) -> Self {
        let detail = extract_message(body).unwrap_or_else(|| {
            if body.trim().is_empty() {
                status.to_string()
            } else {
                body.trim().to_string()
            }
        });
        match status.as_u16() {
            429 => ApiError::RateLimited(detail),
            401 | 403 => ApiError::Authentication(detail),
            404 => ApiError::NotFound(detail),
            400 | 422 => ApiError::BadRequest(detail),
            408 | 504 => ApiError::Timeout(detail),
            _ => ApiError::Api(format!("status {}: {}", status.as_u16(), detail)),
        }
    }

    /// Classify a transport error from `reqwest`.
    pub fn from_reqwest(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            ApiError::Timeout(e.to_string())
        } else if e.is_connect() || e.is_request() {
            ApiError::Connection(e.to_string())
        } else if e.is_decode() {
            ApiError::UnexpectedResponse(e.to_string())
        } else if let Some(status) = e.status() {
            ApiError::from_status(status, "")
        } else {
            ApiError::Other(e.to_string())
        }
    }
}

/// Map async-openai (or any displayable) errors into ApiError by their rendered text.
pub fn map_api_error<E>(e: E) -> ApiError
where
    E: std::fmt::Display,
{
    let s = e.to_string();
    let lower = s.to_lowercase();
    let detail = extract_message(&s).unwrap_or_else(|| s.clone());

    if lower.contains("429") || lower.contains("rate limit") || lower.contains("rate_limit") {
        ApiError::RateLimited(detail)
    } else if lower.contains("401")
        || lower.contains("invalid_api_key")
        || lower.contains("incorrect api key")
        || lower.contains("api key not valid")
        || lower.contains("authentication")
    {
        ApiError::Authentication(detail)
    } else if lower.contains("404")
        || lower.contains("model_not_found")
        || lower.contains("does not exist")
        || lower.contains("not found")
    {
        ApiError::NotFound(detail)
    } else if lower.contains("timed out") || lower.contains("timeout") {
        ApiError::Timeout(detail)
    } else if lower.contains("error sending request") || lower.contains("connection") {
        ApiError::Connection(detail)
    } else if lower.contains("400")
        || lower.contains("invalid_request")
        || lower.contains("bad request")
    {
        ApiError::BadRequest(detail)
    } else if s.contains("\"error\"") {
        ApiError::Api(detail)
    } else {
        ApiError::Other(s)
    }
}

/// Pull `message` out of an `{"error":{"message":...}}` or `{"message":...}` body.
fn extract_message(body: &str) -> Option<String> {
    if let Ok(v) = serde_json::from_str::<serde_json::Value>(body) {
        let msg = v
            .pointer("/error/message")
            .or_else(|| v.get("message"))
            .or_else(|| v.pointer("/errors/0/message"))
            .or_else(|| v.get("detail"))
            .and_then(|m| m.as_str());
        if let Some(msg) = msg {
            return Some(msg.to_string());
        }
    }
    if body.contains("\"error\"")
        && let Some((_, rest)) = body.split_once("\"message\":\"")
        && let Some((msg, _)) = rest.split_once('"')
    {
        return Some(msg.to_string());
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::StatusCode;

    #[test]
    fn map_api_error_rate_limit() {
        let e = std::io::Error::other(r#"{"error":{"message":"Rate limit exceeded"}}"#);
        match map_api_error(e) {
            ApiError::RateLimited(msg) => assert_eq!(msg, "Rate limit exceeded"),
            other => panic!("expected RateLimited, got {:?}", other),
        }
    }

    #[test]
    fn map_api_error_auth() {
        let e = std::io::Error::other("invalid_request_error: Incorrect API key provided");
        let err = map_api_error(e);
        assert!(matches!(err, ApiError::Authentication(_)), "{:?}", err);
        assert!(!err.is_transient());
    }

    #[test]
    fn map_api_error_model_not_found() {
        let e = std::io::Error::other("The model `gpt-9` does not exist");
        assert!(matches!(map_api_error(e), ApiError::NotFound(_)));
    }

    #[test]
    fn map_api_error_connection_is_transient() {
        let e = std::io::Error::other("http error: error sending request for url");
        let err = map_api_error(e);
        assert!(matches!(err, ApiError::Connection(_)));
        assert!(err.is_transient());
    }

    #[test]
    fn map_api_error_embedded_message() {
        let e = std::io::Error::other(r#"failed: {"error":{"message":"quota", "x":1}} trailing"#);
        match map_api_error(e) {
            ApiError::Api(msg) => assert_eq!(msg, "quota"),
            other => panic!("expected Api, got {:?}", other),
        }
    }

    #[test]
    fn map_api_error_generic() {
        let e = std::io::Error::other("something odd");
        assert!(matches!(map_api_error(e), ApiError::Other(_)));
    }

    #[test]
    fn from_status_classifies_codes() {
        let body = r#"{"error":{"message":"slow down"}}"#;
        assert!(matches!(
            ApiError::from_status(StatusCode::TOO_MANY_REQUESTS, body),
            ApiError::RateLimited(ref m) if m == "slow down"
        ));
        assert!(matches!(
            ApiError::from_status(StatusCode::UNAUTHORIZED, ""),
            ApiError::Authentication(_)
        ));
        assert!(matches!(
            ApiError::from_status(StatusCode::BAD_REQUEST, "bad size"),
            ApiError::BadRequest(ref m) if m == "bad size"
        ));
        assert!(matches!(
            ApiError::from_status(StatusCode::INTERNAL_SERVER_ERROR, ""),
            ApiError::Api(_)
        ));
    }

    #[test]
    fn from_status_reads_news_api_message() {
        let body = r#"{"status":"error","code":"apiKeyInvalid","message":"Your API key is invalid"}"#;
        match ApiError::from_status(StatusCode::UNAUTHORIZED, body) {
            ApiError::Authentication(msg) => assert_eq!(msg, "Your API key is invalid"),
            other => panic!("expected Authentication, got {:?}", other),
        }
    }
}
