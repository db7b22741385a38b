//! Forecast workflow request/outcome shapes.
//!
//! The pilot-studio page posts a lane payload to the peripheral
//! backend's `/workflow` endpoint and renders whatever the orchestrator
//! sends back. Emissions and weather blocks are passed through opaque;
//! their shape belongs to the backend.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::ValidationError;

/// A lane to forecast.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkflowRequest {
    /// Activity headline, e.g. `Reefer run Chicago -> Detroit`.
    #[serde(default)]
    pub activity: String,
    /// Lane distance in km.
    pub distance: f64,
    pub lat: f64,
    pub lon: f64,
}

impl WorkflowRequest {
    /// The numeric fields must be finite for the forecast to mean anything.
    pub fn validate(&self) -> Result<(), ValidationError> {
        for (field, value) in [
            ("distance", self.distance),
            ("lat", self.lat),
            ("lon", self.lon),
        ] {
            if !value.is_finite() {
                return Err(ValidationError::not_a_number(field, value.to_string()));
            }
        }
        Ok(())
    }
}

/// What the orchestrator returned for a lane.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkflowOutcome {
    #[serde(default = "default_forecast_result")]
    pub forecast_result: String,
    #[serde(default = "default_decision")]
    pub decision: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub emissions: Option<serde_json::Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weather: Option<serde_json::Value>,
    #[serde(default)]
    pub analysis_attempts: Vec<serde_json::Value>,
    #[serde(default)]
    pub playbook: Vec<String>,
}

fn default_forecast_result() -> String {
    "No suggestion available".to_string()
}

fn default_decision() -> String {
    "pending".to_string()
}
