//! Reporting HTTP adapter.

pub mod dto;
pub mod handlers;
pub mod routes;

pub use handlers::ReportingAppState;
pub use routes::reporting_routes;
