//! HTTP DTOs for the result logging endpoint.

use serde::{Deserialize, Serialize};

/// Body for the logging sink; a missing result coerces to the empty string.
#[derive(Debug, Clone, Deserialize)]
pub struct LogResultRequest {
    #[serde(default)]
    pub result: String,
}

/// Fixed success body.
#[derive(Debug, Clone, Serialize)]
pub struct LoggedResponse {
    pub status: &'static str,
}

impl LoggedResponse {
    pub fn logged() -> Self {
        Self { status: "logged" }
    }
}

/// Fixed failure body.
#[derive(Debug, Clone, Serialize)]
pub struct LogFailedResponse {
    pub error: &'static str,
}

impl LogFailedResponse {
    pub fn failed() -> Self {
        Self {
            error: "Failed to log result",
        }
    }
}
