//! Calculator HTTP adapter.

pub mod dto;
pub mod handlers;
pub mod routes;

pub use handlers::CalculatorAppState;
pub use routes::calculator_routes;
