//! Image generation over the provider's `images/generations` endpoint.

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use serde_json::{Value, json};

use crate::core::client::ApiClient;

use super::error::{ApiError, InputError};

/// Sizes accepted by the image models.
pub const IMAGE_SIZES: &[&str] = &["1024x1024", "1792x1024", "1024x1792"];

/// Check the prompt and size before any request is made.
pub fn validate_request(prompt: &str, size: &str) -> Result<(), InputError> {
    if prompt.trim().is_empty() {
        return Err(InputError::EmptyPrompt);
    }
    if !IMAGE_SIZES.contains(&size) {
        return Err(InputError::UnsupportedSize(size.to_string()));
    }
    Ok(())
}

/// Generate one image and return its decoded bytes.
pub async fn generate_image(
    client: &ApiClient,
    model: &str,
    prompt: &str,
    size: &str,
) -> Result<Vec<u8>, ApiError> {
    let response = client
        .http()
        .post(client.endpoint("images/generations"))
        .bearer_auth(client.api_key())
        .json(&json!({
            "model": model,
            "prompt": prompt,
            "n": 1,
            "size": size,
            "response_format": "b64_json",
        }))
        .send()
        .await
        .map_err(ApiError::from_reqwest)?;

    let status = response.status();
    let body = response.text().await.map_err(ApiError::from_reqwest)?;
    if !status.is_success() {
        return Err(ApiError::from_status(status, &body));
    }

    let value: Value = serde_json::from_str(&body)
        .map_err(|e| ApiError::UnexpectedResponse(format!("invalid JSON: {}", e)))?;
    let b64 = value
        .pointer("/data/0/b64_json")
        .and_then(|v| v.as_str())
        .ok_or_else(|| {
            ApiError::UnexpectedResponse("response did not contain b64_json data".into())
        })?;
    STANDARD
        .decode(b64)
        .map_err(|e| ApiError::UnexpectedResponse(format!("error decoding base64 image: {}", e)))
}

/// File name derived from the first 30 characters of the prompt.
pub fn default_file_name(prompt: &str) -> String {
    let stem: String = prompt
        .trim()
        .chars()
        .take(30)
        .map(|c| match c {
            ' ' => '_',
            '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|' => '-',
            c => c,
        })
        .collect();
    if stem.is_empty() {
        "image.png".to_string()
    } else {
        format!("{}.png", stem)
    }
}
