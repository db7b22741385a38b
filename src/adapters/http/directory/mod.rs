//! Directory HTTP adapter.

pub mod dto;
pub mod handlers;
pub mod routes;

pub use routes::directory_routes;
