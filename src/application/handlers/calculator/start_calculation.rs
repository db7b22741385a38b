//! StartCalculationHandler - opens a fresh calculator session.

use std::sync::Arc;

use crate::domain::calculator::Calculation;
use crate::ports::CalculationStore;

use super::WizardFlowError;

/// Handler for starting a calculator session.
pub struct StartCalculationHandler {
    store: Arc<dyn CalculationStore>,
}

impl StartCalculationHandler {
    pub fn new(store: Arc<dyn CalculationStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self) -> Result<Calculation, WizardFlowError> {
        let calculation = Calculation::new();
        self.store.save(calculation.clone()).await?;
        Ok(calculation)
    }
}
