//! GetCalculationHandler - query for the current wizard view.

use std::sync::Arc;

use crate::domain::calculator::Calculation;
use crate::domain::foundation::CalculationId;
use crate::ports::CalculationStore;

use super::WizardFlowError;

/// Query for a session's current state.
#[derive(Debug, Clone)]
pub struct GetCalculationQuery {
    pub calculation_id: CalculationId,
}

/// Handler returning the session for rendering.
pub struct GetCalculationHandler {
    store: Arc<dyn CalculationStore>,
}

impl GetCalculationHandler {
    pub fn new(store: Arc<dyn CalculationStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self, query: GetCalculationQuery) -> Result<Calculation, WizardFlowError> {
        Ok(self.store.load(query.calculation_id).await?)
    }
}
