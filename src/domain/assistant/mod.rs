//! The scripted sustainability assistant.

mod message;

pub use message::{ChatMessage, MessageRole, GREETING, PROMPT_STARTERS};
