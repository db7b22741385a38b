//! EmissionReport - the results view model.
//!
//! Composed from the accumulated draft plus the estimated emission and
//! the suggested alternatives. Absent draft fields render as a literal
//! "N/A"; the report never fails to render for a well-scored emission.

use serde::{Deserialize, Serialize};

use super::scoring::{score_emission, ImpactScore, ScoringError};
use super::shipment::ShipmentDraft;
use super::transport::vehicle_label;

/// Placeholder for fields the user never filled in.
const PLACEHOLDER: &str = "N/A";

/// One suggested lower-carbon option, shown next to the result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Alternative {
    /// Headline, e.g. `Switch to Electric Train`.
    pub title: String,
    /// Claimed reduction against the computed emission, in percent.
    pub reduction_percent: u8,
    /// Estimated emission of the alternative, kg CO2e.
    pub emission_kg: f64,
}

impl Alternative {
    pub fn new(title: impl Into<String>, reduction_percent: u8, emission_kg: f64) -> Self {
        Self {
            title: title.into(),
            reduction_percent,
            emission_kg,
        }
    }
}

/// The composed results view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmissionReport {
    /// Total emission, kg CO2e.
    pub emission_kg: f64,
    /// Two-decimal rendering of the emission, e.g. `452.78`.
    pub emission_display: String,
    /// Grade and qualitative level.
    pub score: ImpactScore,
    /// Verbatim echo of the draft, "N/A" where absent.
    pub summary: CalculationSummary,
    /// Fixed list of lower-carbon suggestions.
    pub alternatives: Vec<Alternative>,
}

/// Echo of what the user entered, ready for display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculationSummary {
    pub source: String,
    pub destination: String,
    pub weight: String,
    pub mode: String,
    pub vehicle: String,
}

impl EmissionReport {
    /// Composes the report for a scored emission.
    ///
    /// Fails only when the emission itself is unscorable (negative or
    /// non-finite); any draft, including an empty one, renders.
    pub fn compose(
        draft: &ShipmentDraft,
        emission_kg: f64,
        alternatives: Vec<Alternative>,
    ) -> Result<Self, ScoringError> {
        let score = score_emission(emission_kg)?;
        Ok(Self {
            emission_kg,
            emission_display: format!("{:.2}", emission_kg),
            score,
            summary: CalculationSummary::from_draft(draft),
            alternatives,
        })
    }
}

impl CalculationSummary {
    fn from_draft(draft: &ShipmentDraft) -> Self {
        let vehicle = match (draft.mode, draft.vehicle_type.as_deref()) {
            // Prefer the catalog label; an unknown key echoes verbatim.
            (Some(mode), Some(key)) => vehicle_label(mode, key).unwrap_or(key).to_string(),
            (None, Some(key)) => key.to_string(),
            _ => PLACEHOLDER.to_string(),
        };
        Self {
            source: draft.source.clone().unwrap_or_else(|| PLACEHOLDER.to_string()),
            destination: draft
                .destination
                .clone()
                .unwrap_or_else(|| PLACEHOLDER.to_string()),
            weight: draft
                .weight_kg
                .map(|kg| format!("{} kg", kg))
                .unwrap_or_else(|| PLACEHOLDER.to_string()),
            mode: draft
                .mode
                .map(|mode| mode.label().to_string())
                .unwrap_or_else(|| PLACEHOLDER.to_string()),
            vehicle,
        }
    }
}
