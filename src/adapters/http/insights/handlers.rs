//! HTTP handlers for the insight page endpoints.

use std::sync::Arc;

use axum::extract::{Json, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;

use crate::application::handlers::insights::{
    GetExecutiveSnapshotHandler, ListOffsetProjectsHandler, ListStrategiesHandler,
    RunWorkflowError, RunWorkflowHandler,
};
use crate::ports::{BackendError, BackendGateway};

use super::super::error::ErrorResponse;
use super::dto::{
    ProjectsResponse, SnapshotResponse, StrategiesResponse, WorkflowOutcome, WorkflowRequest,
};

// ════════════════════════════════════════════════════════════════════
// Error Type
// ════════════════════════════════════════════════════════════════════

/// Insights API error; only the workflow endpoint can produce one.
pub enum InsightsApiError {
    BadRequest(String),
    Upstream(String),
}

impl IntoResponse for InsightsApiError {
    fn into_response(self) -> axum::response::Response {
        let (status, error) = match self {
            InsightsApiError::BadRequest(msg) => {
                (StatusCode::BAD_REQUEST, ErrorResponse::bad_request(msg))
            }
            InsightsApiError::Upstream(msg) => {
                (StatusCode::BAD_GATEWAY, ErrorResponse::bad_gateway(msg))
            }
        };
        (status, Json(error)).into_response()
    }
}

impl From<RunWorkflowError> for InsightsApiError {
    fn from(error: RunWorkflowError) -> Self {
        match error {
            RunWorkflowError::Validation(e) => InsightsApiError::BadRequest(e.to_string()),
            RunWorkflowError::Backend(BackendError::Status { message, .. }) => {
                InsightsApiError::Upstream(message)
            }
            RunWorkflowError::Backend(e) => InsightsApiError::Upstream(e.to_string()),
        }
    }
}

// ════════════════════════════════════════════════════════════════════
// Application State
// ════════════════════════════════════════════════════════════════════

/// Shared state for insight endpoints.
#[derive(Clone)]
pub struct InsightsAppState {
    pub gateway: Arc<dyn BackendGateway>,
}

impl InsightsAppState {
    pub fn snapshot_handler(&self) -> GetExecutiveSnapshotHandler {
        GetExecutiveSnapshotHandler::new(self.gateway.clone())
    }

    pub fn strategies_handler(&self) -> ListStrategiesHandler {
        ListStrategiesHandler::new(self.gateway.clone())
    }

    pub fn projects_handler(&self) -> ListOffsetProjectsHandler {
        ListOffsetProjectsHandler::new(self.gateway.clone())
    }

    pub fn workflow_handler(&self) -> RunWorkflowHandler {
        RunWorkflowHandler::new(self.gateway.clone())
    }
}

// ════════════════════════════════════════════════════════════════════
// Handlers
// ════════════════════════════════════════════════════════════════════

/// GET /api/executive-snapshot
pub async fn get_executive_snapshot(
    State(state): State<InsightsAppState>,
) -> Json<SnapshotResponse> {
    let snapshot = state.snapshot_handler().handle().await;
    Json(SnapshotResponse::from(snapshot))
}

/// GET /api/strategy-library
pub async fn get_strategy_library(
    State(state): State<InsightsAppState>,
) -> Json<StrategiesResponse> {
    let strategies = state.strategies_handler().handle().await;
    Json(StrategiesResponse { strategies })
}

/// GET /api/offset-projects
pub async fn get_offset_projects(State(state): State<InsightsAppState>) -> Json<ProjectsResponse> {
    let projects = state.projects_handler().handle().await;
    Json(ProjectsResponse::from(projects))
}

/// POST /api/workflow
pub async fn run_workflow(
    State(state): State<InsightsAppState>,
    Json(request): Json<WorkflowRequest>,
) -> Result<Json<WorkflowOutcome>, InsightsApiError> {
    let outcome = state.workflow_handler().handle(request).await?;
    Ok(Json(outcome))
}
