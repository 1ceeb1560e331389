use anyhow::{Context, Result};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::config::ChatConfig;
use crate::models::{ChatMessage, ChatRole};

mod error;
mod retry;

pub use error::ChatError;
pub use retry::RetryConfig;

/// Reply used when the model returns no content
pub const EMPTY_REPLY: &str = "Sorry, I could not generate a response.";

/// Sends a prompt with conversation history to a hosted language model
#[allow(async_fn_in_trait)]
pub trait ChatGateway {
    async fn complete(
        &self,
        system_prompt: &str,
        history: &[ChatMessage],
        user_message: &str,
    ) -> Result<String, ChatError>;
}

/// Chat completion request payload
#[derive(Debug, Serialize)]
pub struct ChatCompletionRequest<'a> {
    pub model: &'a str,
    pub messages: Vec<WireMessage<'a>>,
    pub max_tokens: u32,
    pub temperature: f32,
}

#[derive(Debug, Serialize)]
pub struct WireMessage<'a> {
    pub role: ChatRole,
    pub content: &'a str,
}

/// Chat completion response from API
#[derive(Debug, Deserialize)]
pub struct ChatCompletionResponse {
    #[serde(default)]
    pub choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
pub struct Choice {
    pub message: Option<ResponseMessage>,
}

#[derive(Debug, Deserialize)]
pub struct ResponseMessage {
    pub content: Option<String>,
}

impl ChatCompletionResponse {
    /// Text of the first choice, or the canned apology when empty
    pub fn reply(self) -> String {
        self.choices
            .into_iter()
            .next()
            .and_then(|c| c.message)
            .and_then(|m| m.content)
            .filter(|c| !c.trim().is_empty())
            .unwrap_or_else(|| EMPTY_REPLY.to_string())
    }
}

/// HTTP client for an OpenAI-compatible chat completion endpoint
pub struct ChatClient {
    client: Client,
    config: ChatConfig,
    api_key: String,
    retry_config: RetryConfig,
}

impl ChatClient {
    /// Create a new chat client
    pub fn new(config: ChatConfig, api_key: impl Into<String>) -> Result<Self> {
        Self::with_retry_config(config, api_key, RetryConfig::default())
    }

    /// Create a new chat client with custom retry configuration
    pub fn with_retry_config(
        config: ChatConfig,
        api_key: impl Into<String>,
        retry_config: RetryConfig,
    ) -> Result<Self> {
        let timeout = Duration::from_secs(config.timeout_seconds);

        let client = Client::builder()
            .timeout(timeout)
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            client,
            config,
            api_key: api_key.into(),
            retry_config,
        })
    }

    fn completions_url(&self) -> String {
        format!(
            "{}/v1/chat/completions",
            self.config.base_url.trim_end_matches('/')
        )
    }

    async fn send_once(&self, request: &ChatCompletionRequest<'_>) -> Result<String, ChatError> {
        let response = self
            .client
            .post(self.completions_url())
            .bearer_auth(&self.api_key)
            .json(request)
            .send()
            .await?;

        let status = response.status();

        if status.is_success() {
            let completion: ChatCompletionResponse = response.json().await?;
            Ok(completion.reply())
        } else {
            let error_text = response.text().await.unwrap_or_default();
            Err(ChatError::from_status(status, error_text))
        }
    }
}

impl ChatGateway for ChatClient {
    async fn complete(
        &self,
        system_prompt: &str,
        history: &[ChatMessage],
        user_message: &str,
    ) -> Result<String, ChatError> {
        if self.api_key.is_empty() {
            return Err(ChatError::NotConfigured);
        }

        let mut messages = Vec::with_capacity(history.len() + 2);
        messages.push(WireMessage {
            role: ChatRole::System,
            content: system_prompt,
        });
        messages.extend(history.iter().map(|m| WireMessage {
            role: m.role,
            content: &m.content,
        }));
        messages.push(WireMessage {
            role: ChatRole::User,
            content: user_message,
        });

        let request = ChatCompletionRequest {
            model: &self.config.model,
            messages,
            max_tokens: self.config.max_tokens,
            temperature: self.config.temperature,
        };

        tracing::debug!(
            "Sending chat completion with {} messages to {}",
            request.messages.len(),
            self.config.model
        );

        let reply = self
            .retry_config
            .execute(|| self.send_once(&request))
            .await?;

        tracing::info!("Received coach reply ({} chars)", reply.len());
        Ok(reply)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chat_client_creation() {
        let client = ChatClient::new(ChatConfig::default(), "sk-test");
        assert!(client.is_ok());
    }

    #[test]
    fn test_completions_url_trims_trailing_slash() {
        let config = ChatConfig {
            base_url: "http://localhost:8080/".to_string(),
            ..Default::default()
        };
        let client = ChatClient::new(config, "sk-test").unwrap();
        assert_eq!(
            client.completions_url(),
            "http://localhost:8080/v1/chat/completions"
        );
    }

    #[test]
    fn test_empty_choices_use_fallback_reply() {
        let response: ChatCompletionResponse = serde_json::from_str(r#"{"choices":[]}"#).unwrap();
        assert_eq!(response.reply(), EMPTY_REPLY);

        let response: ChatCompletionResponse =
            serde_json::from_str(r#"{"choices":[{"message":{"content":"Hydrate well."}}]}"#)
                .unwrap();
        assert_eq!(response.reply(), "Hydrate well.");
    }

    #[tokio::test]
    async fn test_missing_api_key_is_not_configured() {
        let client = ChatClient::new(ChatConfig::default(), "").unwrap();
        let result = client.complete("system", &[], "hello").await;
        assert_eq!(result, Err(ChatError::NotConfigured));
    }
}
