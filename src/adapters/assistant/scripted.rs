//! Scripted assistant.
//!
//! Staged stand-in for the real advisory pipeline: every question gets
//! the same canned answer after a pacing delay that mimics inference
//! time. The port seam lets a live provider slot in without touching
//! the conversation surface.

use async_trait::async_trait;
use std::time::Duration;
use tokio::time::sleep;

use crate::domain::assistant::ChatMessage;
use crate::ports::Assistant;

const SCRIPTED_REPLY: &str = "I'm here to help with sustainability questions. In a full implementation, I would provide detailed, actionable advice based on your query using AI.";

/// Assistant that always answers from the script.
#[derive(Debug, Clone)]
pub struct ScriptedAssistant {
    delay: Duration,
}

impl ScriptedAssistant {
    /// Production pacing: one second of simulated thinking.
    pub fn new() -> Self {
        Self {
            delay: Duration::from_secs(1),
        }
    }

    /// Overrides the pacing delay (tests use zero).
    pub fn with_delay(delay: Duration) -> Self {
        Self { delay }
    }
}

impl Default for ScriptedAssistant {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Assistant for ScriptedAssistant {
    async fn reply(&self, _message: &str) -> ChatMessage {
        if !self.delay.is_zero() {
            sleep(self.delay).await;
        }
        ChatMessage::assistant(SCRIPTED_REPLY)
    }
}
