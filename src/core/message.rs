//! Helpers for building and reading chat API messages.

use serde_json::{Value, json};

/// A plain text message with the given role.
pub fn text(role: &str, content: &str) -> Value {
    json!({ "role": role, "content": content })
}

/// A user message whose content is a list of parts (text and/or image_url).
pub fn user_parts(parts: Vec<Value>) -> Value {
    json!({ "role": "user", "content": parts })
}

/// Role of a message, if present.
pub fn role(msg: &Value) -> Option<&str> {
    msg.get("role").and_then(|r| r.as_str())
}

/// Extract text content from an API message (user or assistant).
/// Handles both string content and array-of-parts format (first text part).
pub fn extract_content(msg: &Value) -> Option<String> {
    let content = msg.get("content")?;
    if let Some(s) = content.as_str() {
        return Some(s.to_string());
    }
    content
        .as_array()?
        .iter()
        .find_map(|part| part.get("text").and_then(|t| t.as_str()))
        .map(str::to_string)
}

/// Text of the first choice in a chat completion response.
pub fn first_choice_content(response: &Value) -> Option<String> {
    response
        .get("choices")?
        .as_array()?
        .first()?
        .get("message")
        .and_then(extract_content)
}
