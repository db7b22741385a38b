//! GetReportHandler - re-derives the results report for a finished session.

use std::sync::Arc;

use crate::domain::calculator::EmissionReport;
use crate::domain::foundation::CalculationId;
use crate::ports::{CalculationStore, EmissionModel};

use super::WizardFlowError;

/// Query for the results report.
#[derive(Debug, Clone)]
pub struct GetReportQuery {
    pub calculation_id: CalculationId,
}

/// Handler composing the report for a session in the Results phase.
pub struct GetReportHandler {
    store: Arc<dyn CalculationStore>,
    model: Arc<dyn EmissionModel>,
}

impl GetReportHandler {
    pub fn new(store: Arc<dyn CalculationStore>, model: Arc<dyn EmissionModel>) -> Self {
        Self { store, model }
    }

    pub async fn handle(&self, query: GetReportQuery) -> Result<EmissionReport, WizardFlowError> {
        let calculation = self.store.load(query.calculation_id).await?;
        if !calculation.shows_results() {
            return Err(WizardFlowError::ReportNotReady);
        }

        let estimate = self.model.estimate(calculation.draft()).await?;
        let alternatives = self.model.suggest_alternatives(calculation.draft()).await;
        Ok(EmissionReport::compose(
            calculation.draft(),
            estimate,
            alternatives,
        )?)
    }
}
