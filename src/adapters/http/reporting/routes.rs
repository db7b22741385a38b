//! HTTP routes for the result logging endpoint.

use axum::routing::post;
use axum::Router;

use super::handlers::{log_result, ReportingAppState};

/// Creates the reporting router with all routes.
pub fn reporting_routes(state: ReportingAppState) -> Router {
    Router::new()
        // POST /api/result
        .route("/api/result", post(log_result))
        .with_state(state)
}
