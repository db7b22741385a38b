//! HTTP routes for the calculator endpoints.

use axum::routing::{get, post};
use axum::Router;

use super::handlers::{
    calculate, get_calculation, get_catalog, get_report, go_back, reset_calculation,
    start_calculation, submit_cargo, submit_route, CalculatorAppState,
};

/// Creates the calculator router with all routes.
pub fn calculator_routes(state: CalculatorAppState) -> Router {
    Router::new()
        // POST /api/calculations
        .route("/api/calculations", post(start_calculation))
        // GET /api/calculations/:id
        .route("/api/calculations/:id", get(get_calculation))
        // POST /api/calculations/:id/route
        .route("/api/calculations/:id/route", post(submit_route))
        // POST /api/calculations/:id/cargo
        .route("/api/calculations/:id/cargo", post(submit_cargo))
        // POST /api/calculations/:id/transport
        .route("/api/calculations/:id/transport", post(calculate))
        // POST /api/calculations/:id/back
        .route("/api/calculations/:id/back", post(go_back))
        // POST /api/calculations/:id/reset
        .route("/api/calculations/:id/reset", post(reset_calculation))
        // GET /api/calculations/:id/report
        .route("/api/calculations/:id/report", get(get_report))
        // GET /api/calculator/catalog
        .route("/api/calculator/catalog", get(get_catalog))
        .with_state(state)
}
