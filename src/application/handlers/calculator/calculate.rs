//! CalculateHandler - the paced Transport step submission.
//!
//! Arms the aggregate's begin/complete ticket, waits the pacing delay
//! that stands in for real computation time, then estimates and
//! composes the results report. While the delay runs, the session is in
//! the Calculating phase and every other submission is rejected; if the
//! session is reset or dropped mid-delay the completion dissolves into
//! a no-op and the handler reports nothing happened.

use std::sync::Arc;
use std::time::Duration;
use tokio::time::sleep;

use crate::domain::calculator::{EmissionReport, TransportChoice, TransportMode};
use crate::domain::foundation::CalculationId;
use crate::ports::{CalculationStore, CalculationStoreError, EmissionModel};

use super::WizardFlowError;

/// Default "Calculating…" interval shown to the user.
const DEFAULT_PACING: Duration = Duration::from_millis(1500);

/// Command carrying the Transport step selection.
#[derive(Debug, Clone)]
pub struct CalculateCommand {
    pub calculation_id: CalculationId,
    pub mode: TransportMode,
    pub vehicle_type: String,
}

/// Handler for the final, paced submission.
pub struct CalculateHandler {
    store: Arc<dyn CalculationStore>,
    model: Arc<dyn EmissionModel>,
    pacing: Duration,
}

impl CalculateHandler {
    pub fn new(store: Arc<dyn CalculationStore>, model: Arc<dyn EmissionModel>) -> Self {
        Self {
            store,
            model,
            pacing: DEFAULT_PACING,
        }
    }

    /// Overrides the pacing delay (tests use zero).
    pub fn with_pacing(mut self, pacing: Duration) -> Self {
        self.pacing = pacing;
        self
    }

    /// Runs the paced calculation.
    ///
    /// `Ok(None)` means the completion went stale: the session was
    /// reset or dropped while the delay ran, and nothing was changed.
    pub async fn handle(
        &self,
        command: CalculateCommand,
    ) -> Result<Option<EmissionReport>, WizardFlowError> {
        let choice = TransportChoice::parse(command.mode, &command.vehicle_type)?;

        let mut calculation = self.store.load(command.calculation_id).await?;
        let ticket = calculation.begin_calculation()?;
        self.store.save(calculation).await?;

        if !self.pacing.is_zero() {
            sleep(self.pacing).await;
        }

        // The session may be gone by now; that is the no-op path, not a fault.
        let mut calculation = match self.store.load(command.calculation_id).await {
            Ok(calculation) => calculation,
            Err(CalculationStoreError::NotFound(_)) => return Ok(None),
            Err(e) => return Err(e.into()),
        };

        let estimate = match self.model.estimate(calculation.draft()).await {
            Ok(value) => value,
            Err(e) => {
                // Re-open input collection before surfacing the failure.
                if !calculation.abort_calculation(ticket).is_stale() {
                    self.store.save(calculation).await?;
                }
                return Err(e.into());
            }
        };

        if calculation
            .complete_calculation(ticket, choice)?
            .is_stale()
        {
            return Ok(None);
        }
        self.store.save(calculation.clone()).await?;

        let alternatives = self.model.suggest_alternatives(calculation.draft()).await;
        let report = EmissionReport::compose(calculation.draft(), estimate, alternatives)?;
        Ok(Some(report))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use crate::adapters::emissions::FixedEmissionModel;
    use crate::adapters::storage::InMemoryCalculationStore;
    use crate::domain::calculator::{
        Alternative, Calculation, CalculationError, CalculationPhase, CargoDetails, Grade,
        RouteLeg, ShipmentDraft,
    };
    use crate::ports::EmissionModelError;

    struct FailingModel;

    #[async_trait]
    impl EmissionModel for FailingModel {
        async fn estimate(&self, _draft: &ShipmentDraft) -> Result<f64, EmissionModelError> {
            Err(EmissionModelError::Unavailable("factors offline".to_string()))
        }

        async fn suggest_alternatives(&self, _draft: &ShipmentDraft) -> Vec<Alternative> {
            Vec::new()
        }
    }

    async fn session_at_transport(store: &Arc<InMemoryCalculationStore>) -> CalculationId {
        let mut calculation = Calculation::new();
        calculation
            .submit_route(RouteLeg::parse("Mumbai", "Delhi").unwrap())
            .unwrap();
        calculation
            .submit_cargo(CargoDetails::parse("5000").unwrap())
            .unwrap();
        let id = calculation.id();
        store.save(calculation).await.unwrap();
        id
    }

    fn truck_command(id: CalculationId) -> CalculateCommand {
        CalculateCommand {
            calculation_id: id,
            mode: TransportMode::Road,
            vehicle_type: "hgv_avg".to_string(),
        }
    }

    #[tokio::test]
    async fn test_calculation_composes_the_report() {
        let store = Arc::new(InMemoryCalculationStore::new());
        let id = session_at_transport(&store).await;
        let handler = CalculateHandler::new(store.clone(), Arc::new(FixedEmissionModel::new()))
            .with_pacing(Duration::ZERO);

        let report = handler.handle(truck_command(id)).await.unwrap().unwrap();

        assert_eq!(report.emission_display, "452.78");
        assert_eq!(report.score.grade, Grade::C);
        assert_eq!(report.summary.vehicle, "Average Truck");
        assert_eq!(report.alternatives.len(), 2);

        let loaded = store.load(id).await.unwrap();
        assert!(loaded.shows_results());
    }

    #[tokio::test]
    async fn test_unknown_vehicle_is_rejected_before_any_state_change() {
        let store = Arc::new(InMemoryCalculationStore::new());
        let id = session_at_transport(&store).await;
        let handler = CalculateHandler::new(store.clone(), Arc::new(FixedEmissionModel::new()))
            .with_pacing(Duration::ZERO);

        let result = handler
            .handle(CalculateCommand {
                calculation_id: id,
                mode: TransportMode::Road,
                vehicle_type: "electric".to_string(),
            })
            .await;

        assert!(matches!(result, Err(WizardFlowError::Validation(_))));
        let loaded = store.load(id).await.unwrap();
        assert_eq!(loaded.phase(), CalculationPhase::Collecting);
    }

    #[tokio::test(start_paused = true)]
    async fn test_second_submit_while_pending_is_rejected() {
        let store = Arc::new(InMemoryCalculationStore::new());
        let id = session_at_transport(&store).await;
        let handler = Arc::new(
            CalculateHandler::new(store.clone(), Arc::new(FixedEmissionModel::new()))
                .with_pacing(Duration::from_millis(1500)),
        );

        let first = handler.handle(truck_command(id));
        let second = handler.handle(truck_command(id));
        let (first, second) = tokio::join!(first, second);

        // Exactly one submission landed; the rapid double-click bounced
        // off the Calculating phase.
        assert!(first.unwrap().is_some());
        assert!(matches!(
            second,
            Err(WizardFlowError::State(CalculationError::CalculationPending))
        ));
    }

    #[tokio::test(start_paused = true)]
    async fn test_reset_mid_delay_makes_completion_a_no_op() {
        let store = Arc::new(InMemoryCalculationStore::new());
        let id = session_at_transport(&store).await;
        let handler = CalculateHandler::new(store.clone(), Arc::new(FixedEmissionModel::new()))
            .with_pacing(Duration::from_millis(1500));

        let reset_during_delay = async {
            let mut calculation = store.load(id).await.unwrap();
            calculation.reset();
            store.save(calculation).await.unwrap();
        };
        let (outcome, ()) = tokio::join!(handler.handle(truck_command(id)), reset_during_delay);

        assert!(outcome.unwrap().is_none());
        let loaded = store.load(id).await.unwrap();
        assert!(loaded.draft().is_empty());
        assert!(!loaded.shows_results());
    }

    #[tokio::test(start_paused = true)]
    async fn test_dropped_session_mid_delay_is_a_no_op() {
        let store = Arc::new(InMemoryCalculationStore::new());
        let id = session_at_transport(&store).await;
        let handler = CalculateHandler::new(store.clone(), Arc::new(FixedEmissionModel::new()))
            .with_pacing(Duration::from_millis(1500));

        let drop_during_delay = async {
            store.remove(id).await.unwrap();
        };
        let (outcome, ()) = tokio::join!(handler.handle(truck_command(id)), drop_during_delay);

        assert!(outcome.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_model_failure_reopens_input_collection() {
        let store = Arc::new(InMemoryCalculationStore::new());
        let id = session_at_transport(&store).await;
        let handler = CalculateHandler::new(store.clone(), Arc::new(FailingModel))
            .with_pacing(Duration::ZERO);

        let result = handler.handle(truck_command(id)).await;

        assert!(matches!(result, Err(WizardFlowError::Model(_))));
        let loaded = store.load(id).await.unwrap();
        assert_eq!(loaded.phase(), CalculationPhase::Collecting);
        // A retry can go through once the model recovers.
        let retry = CalculateHandler::new(store.clone(), Arc::new(FixedEmissionModel::new()))
            .with_pacing(Duration::ZERO)
            .handle(truck_command(id))
            .await
            .unwrap();
        assert!(retry.is_some());
    }
}
