use crate::domain::ports::{ChatMessage, CompletionRequest, GenerativeClient};
use crate::utils::error::{Result, TutorError};
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// OpenAI-compatible chat-completions client. One request per call, no
/// retries; anything that goes wrong on the wire becomes `ExternalCall`.
#[derive(Debug, Clone)]
pub struct OpenAiClient {
    client: Client,
    base_url: String,
    api_key: String,
}

impl OpenAiClient {
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into(),
            api_key: api_key.into(),
        }
    }

    /// Same client with a request timeout. Without one, a hung upstream call
    /// blocks its pipeline indefinitely.
    pub fn with_timeout(
        base_url: impl Into<String>,
        api_key: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| TutorError::ConfigError {
                message: format!("failed to build HTTP client: {}", e),
            })?;
        Ok(Self {
            client,
            base_url: base_url.into(),
            api_key: api_key.into(),
        })
    }
}

#[derive(Serialize)]
struct ChatCompletionBody<'a> {
    model: &'a str,
    messages: &'a [ChatMessage],
    temperature: f32,
    max_tokens: u32,
}

#[derive(Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: AssistantMessage,
}

#[derive(Deserialize)]
struct AssistantMessage {
    content: String,
}

#[async_trait]
impl GenerativeClient for OpenAiClient {
    async fn complete(&self, request: CompletionRequest) -> Result<String> {
        let url = format!(
            "{}/chat/completions",
            self.base_url.trim_end_matches('/')
        );
        tracing::debug!("POST {} (model: {})", url, request.model);

        let body = ChatCompletionBody {
            model: &request.model,
            messages: &request.messages,
            temperature: request.temperature,
            max_tokens: request.max_tokens,
        };

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| TutorError::external_call(e.to_string()))?;

        let status = response.status();
        tracing::debug!("Completion response status: {}", status);
        if !status.is_success() {
            let detail = response.text().await.unwrap_or_default();
            return Err(TutorError::external_call(format!(
                "generative API returned {}: {}",
                status, detail
            )));
        }

        let payload: ChatCompletionResponse = response
            .json()
            .await
            .map_err(|e| TutorError::external_call(e.to_string()))?;

        payload
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .ok_or_else(|| TutorError::external_call("response contained no choices"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;

    fn request() -> CompletionRequest {
        CompletionRequest {
            model: "gpt-4".to_string(),
            messages: vec![
                ChatMessage::system("You are a tutor."),
                ChatMessage::user("Say hello."),
            ],
            temperature: 0.7,
            max_tokens: 100,
        }
    }

    #[tokio::test]
    async fn returns_first_choice_content() {
        let server = MockServer::start();
        let api_mock = server.mock(|when, then| {
            when.method(POST)
                .path("/chat/completions")
                .header("authorization", "Bearer test-key")
                .body_contains("\"model\":\"gpt-4\"");
            then.status(200)
                .header("Content-Type", "application/json")
                .json_body(serde_json::json!({
                    "choices": [
                        {"message": {"role": "assistant", "content": "Hello there!"}}
                    ]
                }));
        });

        let client = OpenAiClient::new(server.base_url(), "test-key");
        let content = client.complete(request()).await.unwrap();

        api_mock.assert();
        assert_eq!(content, "Hello there!");
    }

    #[tokio::test]
    async fn serializes_roles_lowercase() {
        let server = MockServer::start();
        let api_mock = server.mock(|when, then| {
            when.method(POST)
                .path("/chat/completions")
                .body_contains("\"role\":\"system\"")
                .body_contains("\"role\":\"user\"");
            then.status(200)
                .header("Content-Type", "application/json")
                .json_body(serde_json::json!({
                    "choices": [{"message": {"role": "assistant", "content": "ok"}}]
                }));
        });

        let client = OpenAiClient::new(server.base_url(), "test-key");
        client.complete(request()).await.unwrap();
        api_mock.assert();
    }

    #[tokio::test]
    async fn non_success_status_is_an_external_call_failure() {
        let server = MockServer::start();
        let api_mock = server.mock(|when, then| {
            when.method(POST).path("/chat/completions");
            then.status(429).body("quota exceeded");
        });

        let client = OpenAiClient::new(server.base_url(), "test-key");
        let err = client.complete(request()).await.unwrap_err();

        api_mock.assert();
        match err {
            TutorError::ExternalCall { message } => {
                assert!(message.contains("429"));
                assert!(message.contains("quota exceeded"));
            }
            other => panic!("expected ExternalCall, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn empty_choices_is_an_external_call_failure() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(POST).path("/chat/completions");
            then.status(200)
                .header("Content-Type", "application/json")
                .json_body(serde_json::json!({"choices": []}));
        });

        let client = OpenAiClient::new(server.base_url(), "test-key");
        let err = client.complete(request()).await.unwrap_err();
        assert!(matches!(err, TutorError::ExternalCall { .. }));
    }

    #[tokio::test]
    async fn unreachable_host_is_an_external_call_failure() {
        // Nothing listens on this port.
        let client = OpenAiClient::new("http://127.0.0.1:1", "test-key");
        let err = client.complete(request()).await.unwrap_err();
        assert!(matches!(err, TutorError::ExternalCall { .. }));
    }
}
