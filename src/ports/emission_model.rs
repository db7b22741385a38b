use async_trait::async_trait;

use crate::domain::calculator::{Alternative, ShipmentDraft};

/// Port for emission estimation and alternative suggestions.
///
/// The narrow seam that keeps the calculator presentation independent
/// of the methodology: swapping the staged model for a factor-based one
/// must not touch the aggregate, the report, or the HTTP layer.
#[async_trait]
pub trait EmissionModel: Send + Sync {
    /// Estimates the shipment's emission in kg CO2e.
    async fn estimate(&self, draft: &ShipmentDraft) -> Result<f64, EmissionModelError>;

    /// Suggests lower-carbon options for the shipment.
    async fn suggest_alternatives(&self, draft: &ShipmentDraft) -> Vec<Alternative>;
}

/// Errors from the emission model.
#[derive(Debug, thiserror::Error)]
pub enum EmissionModelError {
    #[error("Emission model unavailable: {0}")]
    Unavailable(String),

    #[error("Shipment cannot be estimated: {0}")]
    Unestimable(String),
}
