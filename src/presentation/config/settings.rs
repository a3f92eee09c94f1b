use std::str::FromStr;

use crate::domain::ChatMode;

#[derive(Debug, Clone)]
pub struct Settings {
    pub server: ServerSettings,
    pub llm: LlmSettings,
    pub upload: UploadSettings,
    pub chat: ChatSettings,
}

#[derive(Debug, Clone)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone)]
pub struct LlmSettings {
    pub api_key: String,
    pub base_url: String,
    pub model: String,
}

#[derive(Debug, Clone)]
pub struct UploadSettings {
    pub max_content_length_mb: usize,
}

#[derive(Debug, Clone)]
pub struct ChatSettings {
    pub enable_ai_mode: bool,
    pub default_mode: ChatMode,
    pub history_limit: usize,
}

impl Settings {
    /// Reads all settings from the environment; every value has a working
    /// default so the server starts with no configuration at all.
    pub fn from_env() -> Self {
        Self {
            server: ServerSettings {
                host: env_or("SERVER_HOST", "0.0.0.0"),
                port: env_parse("SERVER_PORT", 5000),
            },
            llm: LlmSettings {
                api_key: env_or("DEEPSEEK_API_KEY", ""),
                base_url: env_or("DEEPSEEK_BASE_URL", "https://api.deepseek.com"),
                model: env_or("MODEL_NAME", "deepseek-chat"),
            },
            upload: UploadSettings {
                max_content_length_mb: env_parse("MAX_CONTENT_LENGTH_MB", 16),
            },
            chat: ChatSettings {
                enable_ai_mode: env_bool("ENABLE_AI_MODE", true),
                default_mode: std::env::var("DEFAULT_CHAT_MODE")
                    .ok()
                    .and_then(|v| ChatMode::try_from(v.as_str()).ok())
                    .unwrap_or(ChatMode::NoAi),
                history_limit: env_parse("CHAT_HISTORY_LIMIT", 100),
            },
        }
    }
}

impl UploadSettings {
    pub fn max_body_bytes(&self) -> usize {
        self.max_content_length_mb * 1024 * 1024
    }
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

fn env_parse<T: FromStr>(key: &str, default: T) -> T {
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

fn env_bool(key: &str, default: bool) -> bool {
    std::env::var(key)
        .map(|v| v.to_lowercase() == "true")
        .unwrap_or(default)
}
