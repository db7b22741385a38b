//! Chat messages for the sustainability assistant.

use serde::{Deserialize, Serialize};

/// Who authored a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageRole {
    User,
    Assistant,
}

/// One chat bubble.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: MessageRole,
    pub content: String,
}

impl ChatMessage {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: MessageRole::User,
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: MessageRole::Assistant,
            content: content.into(),
        }
    }
}

/// The opening assistant message.
pub const GREETING: &str = "Hi! How can I help you make your business more sustainable today?";

/// Suggested prompts offered while the conversation is fresh.
pub const PROMPT_STARTERS: [&str; 3] = [
    "How to reduce packaging waste?",
    "Suggest eco-friendly office supplies",
    "Explain carbon offsetting",
];
