//! Insights HTTP adapter.

pub mod dto;
pub mod handlers;
pub mod routes;

pub use handlers::InsightsAppState;
pub use routes::insights_routes;
