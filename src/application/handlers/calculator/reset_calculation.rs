//! ResetCalculationHandler - the "New Calculation" action.

use std::sync::Arc;

use crate::domain::calculator::Calculation;
use crate::domain::foundation::CalculationId;
use crate::ports::CalculationStore;

use super::WizardFlowError;

/// Command to reset a session.
#[derive(Debug, Clone)]
pub struct ResetCalculationCommand {
    pub calculation_id: CalculationId,
}

/// Handler for resetting a session back to the first step.
pub struct ResetCalculationHandler {
    store: Arc<dyn CalculationStore>,
}

impl ResetCalculationHandler {
    pub fn new(store: Arc<dyn CalculationStore>) -> Self {
        Self { store }
    }

    pub async fn handle(
        &self,
        command: ResetCalculationCommand,
    ) -> Result<Calculation, WizardFlowError> {
        let mut calculation = self.store.load(command.calculation_id).await?;
        calculation.reset();
        self.store.save(calculation.clone()).await?;
        Ok(calculation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::storage::InMemoryCalculationStore;
    use crate::domain::calculator::{CalculatorStep, CargoDetails, RouteLeg};

    #[tokio::test]
    async fn test_reset_returns_to_an_empty_first_step() {
        let store = Arc::new(InMemoryCalculationStore::new());
        let mut calculation = Calculation::new();
        calculation
            .submit_route(RouteLeg::parse("Mumbai", "Delhi").unwrap())
            .unwrap();
        calculation
            .submit_cargo(CargoDetails::parse("5000").unwrap())
            .unwrap();
        let id = calculation.id();
        store.save(calculation).await.unwrap();

        let handler = ResetCalculationHandler::new(store.clone());
        let calculation = handler
            .handle(ResetCalculationCommand { calculation_id: id })
            .await
            .unwrap();

        assert_eq!(calculation.step(), CalculatorStep::Route);
        assert!(calculation.draft().is_empty());
        assert!(!calculation.shows_results());

        let loaded = store.load(id).await.unwrap();
        assert!(loaded.draft().is_empty());
    }

    #[tokio::test]
    async fn test_reset_of_a_fresh_session_is_harmless() {
        let store = Arc::new(InMemoryCalculationStore::new());
        let calculation = Calculation::new();
        let id = calculation.id();
        store.save(calculation).await.unwrap();

        let handler = ResetCalculationHandler::new(store);
        let calculation = handler
            .handle(ResetCalculationCommand { calculation_id: id })
            .await
            .unwrap();

        assert_eq!(calculation.step(), CalculatorStep::Route);
        assert!(calculation.draft().is_empty());
    }
}
