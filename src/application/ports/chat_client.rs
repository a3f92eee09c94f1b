use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// One message in a chat-completion conversation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: "system".to_string(),
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            content: content.into(),
        }
    }
}

/// Sampling parameters for one completion request.
#[derive(Debug, Clone, Copy)]
pub struct CompletionParams {
    pub temperature: f32,
    pub top_p: f32,
    pub max_tokens: u32,
}

impl Default for CompletionParams {
    fn default() -> Self {
        Self {
            temperature: 0.1,
            top_p: 0.1,
            max_tokens: 2000,
        }
    }
}

#[async_trait]
pub trait ChatClient: Send + Sync {
    /// Issues one chat-completion request and returns the first choice's
    /// content verbatim.
    async fn complete(
        &self,
        messages: &[ChatMessage],
        params: CompletionParams,
    ) -> Result<String, ChatClientError>;
}

/// Remote AI failures, distinguished so the responder can map each one to a
/// deterministic user-facing message instead of swallowing them.
#[derive(Debug, thiserror::Error)]
pub enum ChatClientError {
    #[error("no API key configured")]
    NotConfigured,
    #[error("request timed out")]
    Timeout,
    #[error("HTTP {status}: {body}")]
    BadStatus { status: u16, body: String },
    #[error("{0}")]
    Transport(String),
    #[error("invalid response: {0}")]
    InvalidResponse(String),
}
