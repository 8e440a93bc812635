//! Generation client tests against a mock service.

use std::time::Duration;

use serde_json::json;
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use rlens_ai_client::{AiClient, AiClientConfig, AiError};

fn test_config(base_url: String) -> AiClientConfig {
    AiClientConfig {
        base_url,
        api_key: "test-key".to_string(),
        model: "gpt-4o".to_string(),
        temperature: 0.7,
        timeout: Duration::from_secs(5),
    }
}

fn completion_with_content(content: &str) -> serde_json::Value {
    json!({
        "choices": [
            { "message": { "role": "assistant", "content": content } }
        ]
    })
}

#[tokio::test]
async fn parses_json_object_content() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .and(header("authorization", "Bearer test-key"))
        .and(body_partial_json(json!({
            "model": "gpt-4o",
            "response_format": { "type": "json_object" }
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(completion_with_content(
            r#"{"reasons": ["a", "b"], "suggestion": "c"}"#,
        )))
        .expect(1)
        .mount(&server)
        .await;

    let client = AiClient::new(test_config(server.uri())).expect("failed to build client");
    let value = client
        .generate_json("explain this hotspot")
        .await
        .expect("request should succeed");

    assert_eq!(value["reasons"][0], "a");
    assert_eq!(value["suggestion"], "c");
}

#[tokio::test]
async fn error_status_is_request_failed() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .mount(&server)
        .await;

    let client = AiClient::new(test_config(server.uri())).expect("failed to build client");
    let err = client.generate_json("prompt").await.unwrap_err();

    assert!(matches!(err, AiError::RequestFailed(_)));
}

#[tokio::test]
async fn non_json_content_is_rejected() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(completion_with_content("sorry, here is prose instead")),
        )
        .mount(&server)
        .await;

    let client = AiClient::new(test_config(server.uri())).expect("failed to build client");
    let err = client.generate_json("prompt").await.unwrap_err();

    assert!(matches!(err, AiError::Json(_)));
}

#[tokio::test]
async fn missing_content_is_invalid_response() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "choices": [] })))
        .mount(&server)
        .await;

    let client = AiClient::new(test_config(server.uri())).expect("failed to build client");
    let err = client.generate_json("prompt").await.unwrap_err();

    assert!(matches!(err, AiError::InvalidResponse(_)));
}
