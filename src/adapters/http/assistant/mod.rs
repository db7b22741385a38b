//! Assistant HTTP adapter.

pub mod dto;
pub mod handlers;
pub mod routes;

pub use handlers::AssistantAppState;
pub use routes::assistant_routes;
