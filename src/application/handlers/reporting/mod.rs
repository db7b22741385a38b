//! Reporting handlers.

mod log_result;

pub use log_result::{LogResultCommand, LogResultHandler};
