//! HTTP adapters - REST API implementations.
//!
//! Each feature has its own router; `app_router` merges them with the
//! health probe into the full application surface.

pub mod assistant;
pub mod calculator;
pub mod directory;
mod error;
pub mod insights;
pub mod reporting;

pub use assistant::{assistant_routes, AssistantAppState};
pub use calculator::{calculator_routes, CalculatorAppState};
pub use directory::directory_routes;
pub use error::ErrorResponse;
pub use insights::{insights_routes, InsightsAppState};
pub use reporting::{reporting_routes, ReportingAppState};

use axum::routing::get;
use axum::Router;

/// GET /health
async fn health() -> &'static str {
    "ok"
}

/// Composes every feature router into the application surface.
pub fn app_router(
    calculator: CalculatorAppState,
    insights: InsightsAppState,
    assistant: AssistantAppState,
    reporting: ReportingAppState,
) -> Router {
    Router::new()
        .route("/health", get(health))
        .merge(calculator_routes(calculator))
        .merge(insights_routes(insights))
        .merge(assistant_routes(assistant))
        .merge(directory_routes())
        .merge(reporting_routes(reporting))
}
