//! HTTP handlers for the result logging endpoint.

use std::sync::Arc;

use axum::extract::{Json, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;

use crate::application::handlers::reporting::{LogResultCommand, LogResultHandler};
use crate::ports::ResultSink;

use super::dto::{LogFailedResponse, LogResultRequest, LoggedResponse};

/// Shared state for the logging endpoint.
#[derive(Clone)]
pub struct ReportingAppState {
    pub sink: Arc<dyn ResultSink>,
}

impl ReportingAppState {
    pub fn log_handler(&self) -> LogResultHandler {
        LogResultHandler::new(self.sink.clone())
    }
}

/// POST /api/result
///
/// Any sink failure collapses to the fixed 500 body; there is nothing
/// for the caller to retry or recover.
pub async fn log_result(
    State(state): State<ReportingAppState>,
    Json(body): Json<LogResultRequest>,
) -> axum::response::Response {
    match state
        .log_handler()
        .handle(LogResultCommand {
            result: body.result,
        })
        .await
    {
        Ok(()) => (StatusCode::OK, Json(LoggedResponse::logged())).into_response(),
        Err(_) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(LogFailedResponse::failed()),
        )
            .into_response(),
    }
}
