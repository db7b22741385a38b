//! HTTP routes for the insight page endpoints.

use axum::routing::{get, post};
use axum::Router;

use super::handlers::{
    get_executive_snapshot, get_offset_projects, get_strategy_library, run_workflow,
    InsightsAppState,
};

/// Creates the insights router with all routes.
pub fn insights_routes(state: InsightsAppState) -> Router {
    Router::new()
        // GET /api/executive-snapshot
        .route("/api/executive-snapshot", get(get_executive_snapshot))
        // GET /api/strategy-library
        .route("/api/strategy-library", get(get_strategy_library))
        // GET /api/offset-projects
        .route("/api/offset-projects", get(get_offset_projects))
        // POST /api/workflow
        .route("/api/workflow", post(run_workflow))
        .with_state(state)
}
