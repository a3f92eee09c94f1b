use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::application::ports::{ChatClient, ChatClientError, ChatMessage, CompletionParams};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// OpenAI-compatible chat-completions client (DeepSeek by default). One-shot
/// requests with a fixed timeout; no retries.
pub struct DeepseekClient {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
    model: String,
}

impl DeepseekClient {
    pub fn new(base_url: String, api_key: String, model: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url,
            api_key,
            model,
        }
    }

    fn endpoint(&self) -> String {
        format!("{}/chat/completions", self.base_url.trim_end_matches('/'))
    }
}

#[derive(Serialize)]
struct ChatCompletionsRequest<'a> {
    model: &'a str,
    messages: &'a [ChatMessage],
    temperature: f32,
    top_p: f32,
    max_tokens: u32,
}

#[derive(Deserialize)]
struct ChatCompletionsResponse {
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Deserialize)]
struct ChoiceMessage {
    content: String,
}

#[async_trait]
impl ChatClient for DeepseekClient {
    #[tracing::instrument(skip(self, messages), fields(message_count = messages.len()))]
    async fn complete(
        &self,
        messages: &[ChatMessage],
        params: CompletionParams,
    ) -> Result<String, ChatClientError> {
        if self.api_key.is_empty() {
            tracing::warn!("AI mode called but no API key configured");
            return Err(ChatClientError::NotConfigured);
        }

        let request = ChatCompletionsRequest {
            model: &self.model,
            messages,
            temperature: params.temperature,
            top_p: params.top_p,
            max_tokens: params.max_tokens,
        };

        let response = self
            .client
            .post(self.endpoint())
            .timeout(REQUEST_TIMEOUT)
            .header(
                reqwest::header::AUTHORIZATION,
                format!("Bearer {}", self.api_key),
            )
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    ChatClientError::Timeout
                } else {
                    ChatClientError::Transport(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::error!(status = status.as_u16(), "chat completions request failed");
            return Err(ChatClientError::BadStatus {
                status: status.as_u16(),
                body,
            });
        }

        let parsed: ChatCompletionsResponse = response
            .json()
            .await
            .map_err(|e| ChatClientError::InvalidResponse(e.to_string()))?;

        parsed
            .choices
            .into_iter()
            .next()
            .map(|c| c.message.content)
            .ok_or_else(|| ChatClientError::InvalidResponse("no choices in response".to_string()))
    }
}
