//! HTTP DTOs for the assistant endpoints.

pub use crate::domain::assistant::ChatMessage;

use serde::{Deserialize, Serialize};

use crate::domain::assistant::{GREETING, PROMPT_STARTERS};

/// Body for sending a message.
#[derive(Debug, Clone, Deserialize)]
pub struct SendMessageRequest {
    #[serde(default)]
    pub message: String,
}

/// The exchange produced by a send: the user's bubble plus the reply.
#[derive(Debug, Clone, Serialize)]
pub struct ExchangeResponse {
    pub messages: Vec<ChatMessage>,
}

/// Conversation bootstrap: the greeting and the prompt starters.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConversationBootstrap {
    pub greeting: ChatMessage,
    pub prompt_starters: Vec<&'static str>,
}

impl ConversationBootstrap {
    pub fn current() -> Self {
        Self {
            greeting: ChatMessage::assistant(GREETING),
            prompt_starters: PROMPT_STARTERS.to_vec(),
        }
    }
}
