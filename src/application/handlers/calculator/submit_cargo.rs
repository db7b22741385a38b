//! SubmitCargoHandler - the Cargo step submission.

use std::sync::Arc;

use crate::domain::calculator::{Calculation, CargoDetails};
use crate::domain::foundation::CalculationId;
use crate::ports::CalculationStore;

use super::WizardFlowError;

/// Command carrying the raw weight form value.
#[derive(Debug, Clone)]
pub struct SubmitCargoCommand {
    pub calculation_id: CalculationId,
    /// Raw form value; parsed as a non-negative weight in kg.
    pub weight: String,
}

/// Handler for the Cargo step.
pub struct SubmitCargoHandler {
    store: Arc<dyn CalculationStore>,
}

impl SubmitCargoHandler {
    pub fn new(store: Arc<dyn CalculationStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self, command: SubmitCargoCommand) -> Result<Calculation, WizardFlowError> {
        let cargo = CargoDetails::parse(&command.weight)?;

        let mut calculation = self.store.load(command.calculation_id).await?;
        calculation.submit_cargo(cargo)?;
        self.store.save(calculation.clone()).await?;

        Ok(calculation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::storage::InMemoryCalculationStore;
    use crate::application::handlers::calculator::{SubmitRouteCommand, SubmitRouteHandler};
    use crate::domain::calculator::CalculatorStep;

    async fn session_at_cargo(store: &Arc<InMemoryCalculationStore>) -> CalculationId {
        let calculation = Calculation::new();
        let id = calculation.id();
        store.save(calculation).await.unwrap();
        SubmitRouteHandler::new(store.clone())
            .handle(SubmitRouteCommand {
                calculation_id: id,
                source: "Mumbai".to_string(),
                destination: "Delhi".to_string(),
            })
            .await
            .unwrap();
        id
    }

    #[tokio::test]
    async fn test_raw_weight_string_becomes_numeric() {
        let store = Arc::new(InMemoryCalculationStore::new());
        let id = session_at_cargo(&store).await;
        let handler = SubmitCargoHandler::new(store.clone());

        let calculation = handler
            .handle(SubmitCargoCommand {
                calculation_id: id,
                weight: "5000".to_string(),
            })
            .await
            .unwrap();

        assert_eq!(calculation.step(), CalculatorStep::Transport);
        assert_eq!(calculation.draft().weight_kg, Some(5000.0));
        // Route fields persist through the merge.
        assert_eq!(calculation.draft().source.as_deref(), Some("Mumbai"));
    }

    #[tokio::test]
    async fn test_negative_weight_is_rejected() {
        let store = Arc::new(InMemoryCalculationStore::new());
        let id = session_at_cargo(&store).await;
        let handler = SubmitCargoHandler::new(store.clone());

        let result = handler
            .handle(SubmitCargoCommand {
                calculation_id: id,
                weight: "-10".to_string(),
            })
            .await;

        assert!(matches!(result, Err(WizardFlowError::Validation(_))));
        let loaded = store.load(id).await.unwrap();
        assert_eq!(loaded.step(), CalculatorStep::Cargo);
    }

    #[tokio::test]
    async fn test_cargo_before_route_reports_wrong_step() {
        let store = Arc::new(InMemoryCalculationStore::new());
        let calculation = Calculation::new();
        let id = calculation.id();
        store.save(calculation).await.unwrap();
        let handler = SubmitCargoHandler::new(store);

        let result = handler
            .handle(SubmitCargoCommand {
                calculation_id: id,
                weight: "5000".to_string(),
            })
            .await;

        assert!(matches!(result, Err(WizardFlowError::State(_))));
    }
}
