//! HTTP routes for the assistant endpoints.

use axum::routing::{get, post};
use axum::Router;

use super::handlers::{get_conversation, send_message, AssistantAppState};

/// Creates the assistant router with all routes.
pub fn assistant_routes(state: AssistantAppState) -> Router {
    Router::new()
        // GET /api/assistant/conversation
        .route("/api/assistant/conversation", get(get_conversation))
        // POST /api/assistant/messages
        .route("/api/assistant/messages", post(send_message))
        .with_state(state)
}
