use async_trait::async_trait;

use crate::domain::assistant::ChatMessage;

/// Port for the sustainability assistant.
///
/// The reply has no failure path: implementations always produce an
/// assistant message (the staged adapter does so after its pacing
/// delay).
#[async_trait]
pub trait Assistant: Send + Sync {
    /// Produces the assistant's reply to the user's message.
    async fn reply(&self, message: &str) -> ChatMessage;
}
