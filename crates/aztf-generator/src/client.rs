//! OpenAI chat-completion client.
//!
//! One POST per completion, awaited to finish before the next begins.
//! No retries, no rate-limit handling, transport-default timeouts. A
//! non-success status carries the raw response body so the caller can see
//! exactly what the API said.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::config::Settings;

/// Chat-completions endpoint.
const OPENAI_API_URL: &str = "https://api.openai.com/v1/chat/completions";

/// A single role/content message in a completion request.
#[derive(Debug, Clone, Serialize)]
pub struct Message {
    pub role: String,
    pub content: String,
}

impl Message {
    /// Build a user-role message.
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            content: content.into(),
        }
    }
}

/// Request body for one completion call.
///
/// Generation parameters are fixed: bounded output, moderate randomness,
/// full nucleus sampling, a single completion, no stop sequence, no
/// penalty adjustments.
#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<Message>,
    max_tokens: u32,
    temperature: f64,
    top_p: f64,
    n: u32,
    stop: Option<Vec<String>>,
    frequency_penalty: f64,
    presence_penalty: f64,
}

impl<'a> ChatRequest<'a> {
    fn for_prompt(model: &'a str, prompt: &str) -> Self {
        Self {
            model,
            messages: vec![Message::user(prompt)],
            max_tokens: 500,
            temperature: 0.7,
            top_p: 1.0,
            n: 1,
            stop: None,
            frequency_penalty: 0.0,
            presence_penalty: 0.0,
        }
    }
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    content: String,
}

impl ChatResponse {
    /// Content of the first choice, if any.
    fn into_first_content(self) -> Option<String> {
        self.choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
    }
}

/// One completion exchange with a text-generation backend.
///
/// The generator only needs prompt-in, text-out; the trait keeps the
/// orchestration testable without a live endpoint.
#[async_trait]
pub trait CompletionClient: Send + Sync {
    /// Return the model's message content for `prompt`.
    async fn complete(&self, prompt: &str) -> Result<String, ClientError>;
}

/// Client for the OpenAI chat-completions endpoint.
pub struct OpenAiClient {
    http: reqwest::Client,
    api_key: String,
    model: String,
}

impl OpenAiClient {
    /// Build a client from loaded settings. The credential is carried in
    /// the client value, not in any process-wide state.
    pub fn new(settings: &Settings) -> Self {
        Self {
            http: reqwest::Client::new(),
            api_key: settings.api_key.clone(),
            model: settings.model.clone(),
        }
    }

    /// Model identifier sent with every request.
    pub fn model(&self) -> &str {
        &self.model
    }
}

#[async_trait]
impl CompletionClient for OpenAiClient {
    async fn complete(&self, prompt: &str) -> Result<String, ClientError> {
        let request = ChatRequest::for_prompt(&self.model, prompt);

        let response = self
            .http
            .post(OPENAI_API_URL)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ClientError::Api {
                status: status.as_u16(),
                body,
            });
        }

        let body = response.text().await?;
        let decoded: ChatResponse = serde_json::from_str(&body)?;

        decoded
            .into_first_content()
            .ok_or(ClientError::EmptyResponse)
    }
}

/// Completion-call failures.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// Transport-level failure (connect, TLS, body read).
    #[error("request to OpenAI API failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Non-success HTTP status; `body` is the raw server response.
    #[error("OpenAI API error {status}: {body}")]
    Api { status: u16, body: String },

    /// Response body did not match the expected completion shape.
    #[error("failed to decode OpenAI API response: {0}")]
    Decode(#[from] serde_json::Error),

    /// The API answered with an empty choice list.
    #[error("OpenAI API returned no choices")]
    EmptyResponse,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_carries_fixed_parameters() {
        let request = ChatRequest::for_prompt("gpt-3.5-turbo", "describe a teapot");
        let body = serde_json::to_value(&request).unwrap();

        assert_eq!(body["model"], "gpt-3.5-turbo");
        assert_eq!(body["max_tokens"], 500);
        assert_eq!(body["temperature"], 0.7);
        assert_eq!(body["top_p"], 1.0);
        assert_eq!(body["n"], 1);
        assert_eq!(body["frequency_penalty"], 0.0);
        assert_eq!(body["presence_penalty"], 0.0);
        assert!(body["stop"].is_null());

        assert_eq!(body["messages"][0]["role"], "user");
        assert_eq!(body["messages"][0]["content"], "describe a teapot");
        assert_eq!(body["messages"].as_array().unwrap().len(), 1);
    }

    #[test]
    fn test_decode_canonical_response() {
        let body = r#"{
            "id": "chatcmpl-123",
            "object": "chat.completion",
            "choices": [
                { "index": 0, "message": { "role": "assistant", "content": "resource \"azurerm\" {}" } }
            ],
            "usage": { "total_tokens": 42 }
        }"#;

        let decoded: ChatResponse = serde_json::from_str(body).unwrap();
        assert_eq!(
            decoded.into_first_content().as_deref(),
            Some("resource \"azurerm\" {}")
        );
    }

    #[test]
    fn test_decode_rejects_shape_mismatch() {
        // `content` as a number is a shape error, not a crash.
        let body = r#"{ "choices": [ { "message": { "content": 7 } } ] }"#;
        assert!(serde_json::from_str::<ChatResponse>(body).is_err());
    }

    #[test]
    fn test_empty_choice_list_has_no_content() {
        let decoded: ChatResponse = serde_json::from_str(r#"{ "choices": [] }"#).unwrap();
        assert!(decoded.into_first_content().is_none());
    }

    #[test]
    fn test_client_carries_settings() {
        let settings = Settings {
            api_key: "sk-test".to_string(),
            model: "gpt-4o".to_string(),
        };
        let client = OpenAiClient::new(&settings);
        assert_eq!(client.model(), "gpt-4o");
    }
}
