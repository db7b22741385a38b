//! SendMessageHandler - one assistant exchange.

use std::sync::Arc;

use crate::domain::assistant::ChatMessage;
use crate::domain::foundation::ValidationError;
use crate::ports::Assistant;

/// Command carrying the user's message.
#[derive(Debug, Clone)]
pub struct SendMessageCommand {
    pub message: String,
}

/// Handler producing the scripted exchange: the user's bubble plus the
/// assistant's reply.
pub struct SendMessageHandler {
    assistant: Arc<dyn Assistant>,
}

impl SendMessageHandler {
    pub fn new(assistant: Arc<dyn Assistant>) -> Self {
        Self { assistant }
    }

    /// Blank messages are ignored at the edge, exactly like the send
    /// button on an empty input.
    pub async fn handle(
        &self,
        command: SendMessageCommand,
    ) -> Result<Vec<ChatMessage>, ValidationError> {
        let text = command.message.trim();
        if text.is_empty() {
            return Err(ValidationError::empty_field("message"));
        }

        let reply = self.assistant.reply(text).await;
        Ok(vec![ChatMessage::user(text), reply])
    }
}
