//! Chat and multimodal completions (non-streaming).

use std::path::Path;

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use serde_json::{Value, json};

use crate::core::client::ApiClient;
use crate::core::message;

use super::error::{ApiError, InputError, map_api_error};

/// Completion token cap for every chat request.
pub const MAX_TOKENS: u32 = 1024;

/// An image attached to a multimodal query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageInput {
    pub bytes: Vec<u8>,
    pub mime_type: String,
}

impl ImageInput {
    /// Read an image file; the MIME type is guessed from the extension (default `image/jpeg`).
    pub fn from_path(path: &Path) -> std::io::Result<Self> {
        let bytes = std::fs::read(path)?;
        let mime_type = match path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase())
            .as_deref()
        {
            Some("png") => "image/png",
            Some("gif") => "image/gif",
            Some("webp") => "image/webp",
            _ => "image/jpeg",
        };
        Ok(Self {
            bytes,
            mime_type: mime_type.to_string(),
        })
    }

    /// `data:` URI carrying the base64 payload.
    pub fn data_uri(&self) -> String {
        format!("data:{};base64,{}", self.mime_type, STANDARD.encode(&self.bytes))
    }
}

/// Build the content parts for a multimodal user message.
/// At least one of a non-blank text prompt or an image is required.
pub fn multimodal_parts(
    text: Option<&str>,
    image: Option<&ImageInput>,
) -> Result<Vec<Value>, InputError> {
    let mut parts = Vec::new();
    if let Some(t) = text.map(str::trim).filter(|t| !t.is_empty()) {
        parts.push(json!({ "type": "text", "text": t }));
    }
    if let Some(img) = image {
        parts.push(json!({
            "type": "image_url",
            "image_url": { "url": img.data_uri() },
        }));
    }
    if parts.is_empty() {
        return Err(InputError::EmptyQuery);
    }
    Ok(parts)
}

/// Send `messages` to `model` and return the first choice's text.
pub async fn chat(client: &ApiClient, model: &str, messages: &[Value]) -> Result<String, ApiError> {
    log::debug!(
        "Chat request: provider={} endpoint={} model={} messages={}",
        client.provider(),
        client.base_url(),
        model,
        messages.len()
    );
    let chat_api = client.openai().chat();
    let response: Value = chat_api
        .create_byot::<_, Value>(json!({
            "model": model,
            "messages": messages,
            "max_tokens": MAX_TOKENS,
        }))
        .await
        .map_err(map_api_error)?;

    if let Some(err) = response.get("error") {
        return Err(map_api_error(err));
    }

    message::first_choice_content(&response)
        .ok_or_else(|| ApiError::UnexpectedResponse("response contained no message content".into()))
}

/// Single-turn multimodal query.
pub async fn ask(client: &ApiClient, model: &str, parts: Vec<Value>) -> Result<String, ApiError> {
    chat(client, model, &[message::user_parts(parts)]).await
}
