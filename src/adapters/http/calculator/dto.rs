//! HTTP DTOs for the calculator endpoints.
//!
//! The results report serializes straight from the domain view model;
//! everything else maps here.

pub use crate::domain::calculator::EmissionReport;

use serde::{Deserialize, Serialize};

use crate::domain::calculator::{
    vehicle_options, Calculation, CalculationPhase, CalculatorStep, ShipmentDraft, TransportMode,
    VehicleClass,
};
use crate::domain::foundation::CalculationId;

// ════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════

/// Body for the Route step submission.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitRouteRequest {
    #[serde(default)]
    pub source: String,
    #[serde(default)]
    pub destination: String,
}

/// Raw weight as the form sends it: either a JSON number or a string.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum WeightField {
    Number(f64),
    Text(String),
}

impl WeightField {
    /// Normalizes to the raw string the domain parser expects.
    pub fn into_raw(self) -> String {
        match self {
            WeightField::Number(value) => value.to_string(),
            WeightField::Text(text) => text,
        }
    }
}

/// Body for the Cargo step submission.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitCargoRequest {
    pub weight: WeightField,
}

/// Body for the paced Transport step submission.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculateRequest {
    pub mode: TransportMode,
    pub vehicle_type: String,
}

// ════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════

/// The wizard view a client renders: step, phase, progress, and draft.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculationView {
    pub id: CalculationId,
    pub step: CalculatorStep,
    pub step_number: u8,
    pub step_label: &'static str,
    pub progress_percent: u8,
    pub phase: CalculationPhase,
    pub show_results: bool,
    pub draft: ShipmentDraft,
}

impl From<&Calculation> for CalculationView {
    fn from(calculation: &Calculation) -> Self {
        Self {
            id: calculation.id(),
            step: calculation.step(),
            step_number: calculation.step().number(),
            step_label: calculation.step().label(),
            progress_percent: calculation.progress_percent(),
            phase: calculation.phase(),
            show_results: calculation.shows_results(),
            draft: calculation.draft().clone(),
        }
    }
}

/// One mode entry of the vehicle catalog.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogEntry {
    pub mode: TransportMode,
    pub label: &'static str,
    pub vehicles: &'static [VehicleClass],
}

/// The full selectable catalog.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogResponse {
    pub modes: Vec<CatalogEntry>,
}

impl CatalogResponse {
    pub fn current() -> Self {
        Self {
            modes: TransportMode::ALL
                .into_iter()
                .map(|mode| CatalogEntry {
                    mode,
                    label: mode.label(),
                    vehicles: vehicle_options(mode),
                })
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_view_reflects_the_session() {
        let calculation = Calculation::new();
        let view = CalculationView::from(&calculation);

        assert_eq!(view.step, CalculatorStep::Route);
        assert_eq!(view.step_number, 1);
        assert_eq!(view.progress_percent, 33);
        assert!(!view.show_results);

        let json = serde_json::to_value(&view).unwrap();
        assert_eq!(json["step"], "route");
        assert_eq!(json["phase"], "collecting");
        assert_eq!(json["stepLabel"], "Route");
    }

    #[test]
    fn test_weight_field_accepts_number_or_string() {
        let request: SubmitCargoRequest = serde_json::from_str(r#"{"weight": "5000"}"#).unwrap();
        assert_eq!(request.weight.into_raw(), "5000");

        let request: SubmitCargoRequest = serde_json::from_str(r#"{"weight": 12.5}"#).unwrap();
        assert_eq!(request.weight.into_raw(), "12.5");
    }

    #[test]
    fn test_calculate_request_parses_mode_key() {
        let request: CalculateRequest =
            serde_json::from_str(r#"{"mode": "road", "vehicleType": "hgv_avg"}"#).unwrap();
        assert_eq!(request.mode, TransportMode::Road);
        assert_eq!(request.vehicle_type, "hgv_avg");
    }

    #[test]
    fn test_catalog_lists_all_four_modes() {
        let catalog = CatalogResponse::current();
        assert_eq!(catalog.modes.len(), 4);

        let json = serde_json::to_value(&catalog).unwrap();
        assert_eq!(json["modes"][0]["mode"], "road");
        assert_eq!(json["modes"][0]["vehicles"][0]["key"], "hgv_avg");
    }
}
