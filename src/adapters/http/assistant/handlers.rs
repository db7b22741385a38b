//! HTTP handlers for the assistant endpoints.

use std::sync::Arc;

use axum::extract::{Json, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;

use crate::application::handlers::assistant::{SendMessageCommand, SendMessageHandler};
use crate::ports::Assistant;

use super::super::error::ErrorResponse;
use super::dto::{ConversationBootstrap, ExchangeResponse, SendMessageRequest};

/// Assistant API error.
#[derive(Debug)]
pub struct EmptyMessage;

impl IntoResponse for EmptyMessage {
    fn into_response(self) -> axum::response::Response {
        let error = ErrorResponse::bad_request("Message must not be empty");
        (StatusCode::BAD_REQUEST, Json(error)).into_response()
    }
}

/// Shared state for assistant endpoints.
#[derive(Clone)]
pub struct AssistantAppState {
    pub assistant: Arc<dyn Assistant>,
}

impl AssistantAppState {
    pub fn send_handler(&self) -> SendMessageHandler {
        SendMessageHandler::new(self.assistant.clone())
    }
}

/// GET /api/assistant/conversation
pub async fn get_conversation() -> Json<ConversationBootstrap> {
    Json(ConversationBootstrap::current())
}

/// POST /api/assistant/messages
pub async fn send_message(
    State(state): State<AssistantAppState>,
    Json(body): Json<SendMessageRequest>,
) -> Result<Json<ExchangeResponse>, EmptyMessage> {
    let messages = state
        .send_handler()
        .handle(SendMessageCommand {
            message: body.message,
        })
        .await
        .map_err(|_| EmptyMessage)?;
    Ok(Json(ExchangeResponse { messages }))
}
