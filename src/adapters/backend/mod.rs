//! Peripheral backend adapters.

mod http_gateway;

pub use http_gateway::HttpBackendGateway;
