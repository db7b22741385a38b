//! GoBackHandler - step back one wizard step.

use std::sync::Arc;

use crate::domain::calculator::Calculation;
use crate::domain::foundation::CalculationId;
use crate::ports::CalculationStore;

use super::WizardFlowError;

/// Command to step back.
#[derive(Debug, Clone)]
pub struct GoBackCommand {
    pub calculation_id: CalculationId,
}

/// Handler for backwards navigation.
pub struct GoBackHandler {
    store: Arc<dyn CalculationStore>,
}

impl GoBackHandler {
    pub fn new(store: Arc<dyn CalculationStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self, command: GoBackCommand) -> Result<Calculation, WizardFlowError> {
        let mut calculation = self.store.load(command.calculation_id).await?;
        calculation.go_back()?;
        self.store.save(calculation.clone()).await?;
        Ok(calculation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::storage::InMemoryCalculationStore;
    use crate::domain::calculator::{
        CalculationError, CalculatorStep, CargoDetails, RouteLeg,
    };

    #[tokio::test]
    async fn test_go_back_returns_to_the_previous_step() {
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

        let handler = GoBackHandler::new(store.clone());
        let calculation = handler
            .handle(GoBackCommand { calculation_id: id })
            .await
            .unwrap();

        assert_eq!(calculation.step(), CalculatorStep::Cargo);
        // Collected input survives the navigation.
        assert_eq!(calculation.draft().weight_kg, Some(5000.0));
    }

    #[tokio::test]
    async fn test_go_back_at_the_first_step_fails_loudly() {
        let store = Arc::new(InMemoryCalculationStore::new());
        let calculation = Calculation::new();
        let id = calculation.id();
        store.save(calculation).await.unwrap();

        let handler = GoBackHandler::new(store);
        let result = handler.handle(GoBackCommand { calculation_id: id }).await;

        assert!(matches!(
            result,
            Err(WizardFlowError::State(CalculationError::AlreadyAtFirstStep))
        ));
    }
}
