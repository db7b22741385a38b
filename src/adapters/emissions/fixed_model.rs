//! Fixed emission model.
//!
//! Staged stand-in for a real methodology: every shipment estimates to
//! the same baseline, and the alternatives table is a fixed pair. The
//! collected route, weight, and vehicle inputs are accepted but unused
//! here; they become meaningful once factor-based computation replaces
//! this adapter behind the same port.
//!
//! TODO: replace the baseline with DEFRA-factor computation (distance ×
//! weight × mode factor) once the methodology integration lands.

use async_trait::async_trait;

use crate::domain::calculator::{Alternative, ShipmentDraft};
use crate::ports::{EmissionModel, EmissionModelError};

/// Baseline emission reported for every shipment, kg CO2e.
const BASELINE_EMISSION_KG: f64 = 452.78;

/// The staged emission model.
#[derive(Debug, Clone, Copy, Default)]
pub struct FixedEmissionModel;

impl FixedEmissionModel {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl EmissionModel for FixedEmissionModel {
    async fn estimate(&self, _draft: &ShipmentDraft) -> Result<f64, EmissionModelError> {
        Ok(BASELINE_EMISSION_KG)
    }

    async fn suggest_alternatives(&self, _draft: &ShipmentDraft) -> Vec<Alternative> {
        vec![
            Alternative::new("Switch to Electric Train", 95, 20.41),
            Alternative::new("Optimize with Average Truck", 22, 353.12),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::calculator::{score_emission, Grade};

    #[tokio::test]
    async fn test_every_shipment_estimates_to_the_baseline() {
        let model = FixedEmissionModel::new();
        let estimate = model.estimate(&ShipmentDraft::new()).await.unwrap();
        assert_eq!(estimate, 452.78);
    }

    #[tokio::test]
    async fn test_baseline_grades_as_c() {
        let model = FixedEmissionModel::new();
        let estimate = model.estimate(&ShipmentDraft::new()).await.unwrap();
        assert_eq!(score_emission(estimate).unwrap().grade, Grade::C);
    }

    #[tokio::test]
    async fn test_suggests_the_two_fixed_alternatives() {
        let model = FixedEmissionModel::new();
        let alternatives = model.suggest_alternatives(&ShipmentDraft::new()).await;

        assert_eq!(alternatives.len(), 2);
        assert_eq!(alternatives[0].title, "Switch to Electric Train");
        assert_eq!(alternatives[0].reduction_percent, 95);
        assert_eq!(alternatives[0].emission_kg, 20.41);
        assert_eq!(alternatives[1].title, "Optimize with Average Truck");
        assert_eq!(alternatives[1].emission_kg, 353.12);
    }
}
