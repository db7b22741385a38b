//! SubmitRouteHandler - the Route step submission.

use std::sync::Arc;

use crate::domain::calculator::{Calculation, RouteLeg};
use crate::domain::foundation::CalculationId;
use crate::ports::CalculationStore;

use super::WizardFlowError;

/// Command carrying the raw Route form values.
#[derive(Debug, Clone)]
pub struct SubmitRouteCommand {
    pub calculation_id: CalculationId,
    pub source: String,
    pub destination: String,
}

/// Handler for the Route step.
pub struct SubmitRouteHandler {
    store: Arc<dyn CalculationStore>,
}

impl SubmitRouteHandler {
    pub fn new(store: Arc<dyn CalculationStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self, command: SubmitRouteCommand) -> Result<Calculation, WizardFlowError> {
        let leg = RouteLeg::parse(&command.source, &command.destination)?;

        let mut calculation = self.store.load(command.calculation_id).await?;
        calculation.submit_route(leg)?;
        self.store.save(calculation.clone()).await?;

        Ok(calculation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::storage::InMemoryCalculationStore;
    use crate::domain::calculator::CalculatorStep;

    async fn fresh_session(store: &Arc<InMemoryCalculationStore>) -> CalculationId {
        let calculation = Calculation::new();
        let id = calculation.id();
        store.save(calculation).await.unwrap();
        id
    }

    #[tokio::test]
    async fn test_route_submission_advances_to_cargo() {
        let store = Arc::new(InMemoryCalculationStore::new());
        let id = fresh_session(&store).await;
        let handler = SubmitRouteHandler::new(store.clone());

        let calculation = handler
            .handle(SubmitRouteCommand {
                calculation_id: id,
                source: "Mumbai".to_string(),
                destination: "Delhi".to_string(),
            })
            .await
            .unwrap();

        assert_eq!(calculation.step(), CalculatorStep::Cargo);
        assert_eq!(calculation.draft().source.as_deref(), Some("Mumbai"));
        assert_eq!(calculation.draft().destination.as_deref(), Some("Delhi"));

        // The advance is persisted, not just returned.
        let loaded = store.load(id).await.unwrap();
        assert_eq!(loaded.step(), CalculatorStep::Cargo);
    }

    #[tokio::test]
    async fn test_empty_source_rejects_without_touching_state() {
        let store = Arc::new(InMemoryCalculationStore::new());
        let id = fresh_session(&store).await;
        let handler = SubmitRouteHandler::new(store.clone());

        let result = handler
            .handle(SubmitRouteCommand {
                calculation_id: id,
                source: "   ".to_string(),
                destination: "Delhi".to_string(),
            })
            .await;

        assert!(matches!(result, Err(WizardFlowError::Validation(_))));
        let loaded = store.load(id).await.unwrap();
        assert_eq!(loaded.step(), CalculatorStep::Route);
        assert!(loaded.draft().is_empty());
    }

    #[tokio::test]
    async fn test_unknown_session_is_not_found() {
        let store = Arc::new(InMemoryCalculationStore::new());
        let handler = SubmitRouteHandler::new(store);

        let result = handler
            .handle(SubmitRouteCommand {
                calculation_id: CalculationId::new(),
                source: "Mumbai".to_string(),
                destination: "Delhi".to_string(),
            })
            .await;

        assert!(matches!(result, Err(WizardFlowError::NotFound(_))));
    }
}
