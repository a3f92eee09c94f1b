use std::fmt;

use serde::{Deserialize, Serialize};

/// Selects rule-based vs AI response generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChatMode {
    #[serde(rename = "no_ai")]
    NoAi,
    #[serde(rename = "ai")]
    Ai,
}

impl ChatMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ChatMode::NoAi => "no_ai",
            ChatMode::Ai => "ai",
        }
    }

    /// Human label used in the mode-switch confirmation message.
    pub fn label(&self) -> &'static str {
        match self {
            ChatMode::NoAi => "Basic",
            ChatMode::Ai => "AI",
        }
    }
}

impl TryFrom<&str> for ChatMode {
    type Error = String;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s {
            "no_ai" => Ok(Self::NoAi),
            "ai" => Ok(Self::Ai),
            other => Err(format!("Invalid mode: {}. Expected: no_ai or ai", other)),
        }
    }
}

impl fmt::Display for ChatMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
