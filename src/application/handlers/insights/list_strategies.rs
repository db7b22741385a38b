//! ListStrategiesHandler - the playbook library loader.

use std::sync::Arc;
use tracing::warn;

use crate::domain::insights::{fallback_strategies, Strategy};
use crate::ports::BackendGateway;

/// Handler serving the strategy library, live or staged.
pub struct ListStrategiesHandler {
    gateway: Arc<dyn BackendGateway>,
}

impl ListStrategiesHandler {
    pub fn new(gateway: Arc<dyn BackendGateway>) -> Self {
        Self { gateway }
    }

    /// Never fails; an empty live list also keeps the fixture.
    pub async fn handle(&self) -> Vec<Strategy> {
        match self.gateway.strategy_library().await {
            Ok(live) if !live.is_empty() => live,
            Ok(_) => fallback_strategies(),
            Err(e) if e.is_cancelled() => fallback_strategies(),
            Err(e) => {
                warn!(error = %e, "strategy library unavailable, serving fixture");
                fallback_strategies()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use crate::domain::insights::{OffsetProject, SnapshotPatch, WorkflowOutcome, WorkflowRequest};
    use crate::ports::BackendError;

    struct MockGateway {
        strategies: Result<Vec<Strategy>, BackendError>,
    }

    #[async_trait]
    impl BackendGateway for MockGateway {
        async fn executive_snapshot(&self) -> Result<SnapshotPatch, BackendError> {
            unimplemented!()
        }

        async fn strategy_library(&self) -> Result<Vec<Strategy>, BackendError> {
            match &self.strategies {
                Ok(list) => Ok(list.clone()),
                Err(BackendError::Cancelled) => Err(BackendError::Cancelled),
                Err(e) => Err(BackendError::Unreachable(e.to_string())),
            }
        }

        async fn offset_projects(&self) -> Result<Vec<OffsetProject>, BackendError> {
            unimplemented!()
        }

        async fn run_workflow(
            &self,
            _request: &WorkflowRequest,
        ) -> Result<WorkflowOutcome, BackendError> {
            unimplemented!()
        }
    }

    fn live_strategy() -> Strategy {
        serde_json::from_str(r#"{"id": "strategy-live", "name": "Cold Chain Audit"}"#).unwrap()
    }

    #[tokio::test]
    async fn test_live_list_replaces_the_fixture() {
        let gateway = Arc::new(MockGateway {
            strategies: Ok(vec![live_strategy()]),
        });
        let strategies = ListStrategiesHandler::new(gateway).handle().await;
        assert_eq!(strategies.len(), 1);
        assert_eq!(strategies[0].id, "strategy-live");
    }

    #[tokio::test]
    async fn test_empty_live_list_keeps_the_fixture() {
        let gateway = Arc::new(MockGateway {
            strategies: Ok(Vec::new()),
        });
        let strategies = ListStrategiesHandler::new(gateway).handle().await;
        assert_eq!(strategies, fallback_strategies());
    }

    #[tokio::test]
    async fn test_backend_failure_keeps_the_fixture() {
        let gateway = Arc::new(MockGateway {
            strategies: Err(BackendError::Status {
                status: 500,
                message: "boom".to_string(),
            }),
        });
        let strategies = ListStrategiesHandler::new(gateway).handle().await;
        assert_eq!(strategies, fallback_strategies());
    }
}
