//! Provider call tests against a local mock server.

use std::sync::Arc;
use std::time::Duration;

use serde_json::json;
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use crate::core::client::{ApiClient, ClientCache, OpenAiCompatFactory};
use crate::core::config::ProviderConfig;
use crate::core::message;

use super::*;

fn client_for(server: &MockServer) -> Arc<ApiClient> {
    let config =
        ProviderConfig::new("OpenAI", Some("test-key".into()), Some(server.uri())).unwrap();
    ClientCache::new(OpenAiCompatFactory).get_client(&config).unwrap()
}

#[tokio::test]
async fn chat_returns_first_choice_text() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .and(body_partial_json(json!({"model": "gpt-4o", "max_tokens": 1024})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "cmpl-1",
            "object": "chat.completion",
            "model": "gpt-4o",
            "choices": [{
                "index": 0,
                "message": {"role": "assistant", "content": "Hello there"},
                "finish_reason": "stop"
            }]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let reply = chat(&client, "gpt-4o", &[message::text("user", "hi")])
        .await
        .unwrap();
    assert_eq!(reply, "Hello there");
}

#[tokio::test]
async fn chat_maps_missing_model_to_not_found() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({
            "error": {
                "message": "The model `gpt-x` does not exist",
                "type": "invalid_request_error",
                "code": "model_not_found"
            }
        })))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let err = chat(&client, "gpt-x", &[message::text("user", "hi")])
        .await
        .unwrap_err();
    assert!(matches!(err, ApiError::NotFound(_)), "got {:?}", err);
}

#[tokio::test]
async fn chat_rate_limit_is_returned_without_retry() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(429).set_body_json(json!({
            "error": {
                "message": "Rate limit reached for gpt-4o",
                "type": "requests",
                "code": "rate_limit_exceeded"
            }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let err = tokio::time::timeout(
        Duration::from_secs(5),
        chat(&client, "gpt-4o", &[message::text("user", "hi")]),
    )
    .await
    .expect("rate limited call was retried")
    .unwrap_err();
    assert!(matches!(err, ApiError::RateLimited(_)), "got {:?}", err);
    assert!(err.is_transient());
}

#[tokio::test]
async fn chat_server_error_is_returned_without_retry() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(503).set_body_json(json!({
            "error": {"message": "The server is overloaded", "type": "server_error"}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let result = tokio::time::timeout(
        Duration::from_secs(5),
        chat(&client, "gpt-4o", &[message::text("user", "hi")]),
    )
    .await
    .expect("server error was retried");
    assert!(result.is_err());
}

#[tokio::test]
async fn chat_without_choices_is_unexpected() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"choices": []})))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let err = chat(&client, "gpt-4o", &[message::text("user", "hi")])
        .await
        .unwrap_err();
    assert!(matches!(err, ApiError::UnexpectedResponse(_)));
}

#[tokio::test]
async fn ask_sends_content_parts() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .and(body_partial_json(json!({
            "messages": [{
                "role": "user",
                "content": [{"type": "text", "text": "what is this?"}]
            }]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "choices": [{"index": 0, "message": {"role": "assistant", "content": "A cat"}}]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let parts = multimodal_parts(Some("what is this?"), None).unwrap();
    assert_eq!(ask(&client, "gpt-4o", parts).await.unwrap(), "A cat");
}

#[tokio::test]
async fn generate_image_decodes_b64_payload() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/images/generations"))
        .and(header("authorization", "Bearer test-key"))
        .and(body_partial_json(json!({
            "model": "dall-e-3",
            "n": 1,
            "size": "1024x1024",
            "response_format": "b64_json"
        })))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"data": [{"b64_json": "aGVsbG8="}]})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let bytes = generate_image(&client, "dall-e-3", "a city", "1024x1024")
        .await
        .unwrap();
    assert_eq!(bytes, b"hello");
}

#[tokio::test]
async fn generate_image_without_payload_is_unexpected() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/images/generations"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"data": [{"url": "https://x"}]})),
        )
        .mount(&server)
        .await;

    let client = client_for(&server);
    let err = generate_image(&client, "dall-e-3", "a city", "1024x1024")
        .await
        .unwrap_err();
    assert!(matches!(err, ApiError::UnexpectedResponse(_)));
}

#[tokio::test]
async fn generate_image_auth_failure_is_permanent() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/images/generations"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "error": {"message": "Incorrect API key provided"}
        })))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let err = generate_image(&client, "dall-e-3", "a city", "1024x1024")
        .await
        .unwrap_err();
    match &err {
        ApiError::Authentication(msg) => assert_eq!(msg, "Incorrect API key provided"),
        other => panic!("expected Authentication, got {:?}", other),
    }
    assert!(!LlmError::from(err).is_transient());
}
