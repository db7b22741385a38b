use async_trait::async_trait;

use crate::domain::insights::{
    OffsetProject, SnapshotPatch, Strategy, WorkflowOutcome, WorkflowRequest,
};

/// Port for the peripheral backend that feeds the insight pages.
///
/// No implementation retries: a page either gets live data or falls
/// back to its fixture. Cancellation (the caller abandoned the load) is
/// its own variant so loaders can swallow it silently instead of
/// logging a spurious failure.
#[async_trait]
pub trait BackendGateway: Send + Sync {
    /// `GET /executive-snapshot` — a partial snapshot to overlay on the fixture.
    async fn executive_snapshot(&self) -> Result<SnapshotPatch, BackendError>;

    /// `GET /strategy-library` — the live strategy list.
    async fn strategy_library(&self) -> Result<Vec<Strategy>, BackendError>;

    /// `GET /offset-projects` — the live marketplace listings.
    async fn offset_projects(&self) -> Result<Vec<OffsetProject>, BackendError>;

    /// `POST /workflow` — runs a lane forecast; errors surface to the caller.
    async fn run_workflow(&self, request: &WorkflowRequest)
        -> Result<WorkflowOutcome, BackendError>;
}

/// Errors that can occur talking to the peripheral backend.
#[derive(Debug, thiserror::Error)]
pub enum BackendError {
    /// The load was abandoned (navigation away); never user-visible.
    #[error("Request cancelled")]
    Cancelled,

    #[error("Backend unreachable: {0}")]
    Unreachable(String),

    #[error("Backend returned status {status}: {message}")]
    Status { status: u16, message: String },

    #[error("Backend response could not be decoded: {0}")]
    InvalidResponse(String),
}

impl BackendError {
    /// True for the abandoned-load case that loaders swallow silently.
    pub fn is_cancelled(&self) -> bool {
        matches!(self, BackendError::Cancelled)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct MockBackendGateway;

    #[async_trait]
    impl BackendGateway for MockBackendGateway {
        async fn executive_snapshot(&self) -> Result<SnapshotPatch, BackendError> {
            Err(BackendError::Cancelled)
        }

        async fn strategy_library(&self) -> Result<Vec<Strategy>, BackendError> {
            Ok(Vec::new())
        }

        async fn offset_projects(&self) -> Result<Vec<OffsetProject>, BackendError> {
            Ok(Vec::new())
        }

        async fn run_workflow(
            &self,
            _request: &WorkflowRequest,
        ) -> Result<WorkflowOutcome, BackendError> {
            Err(BackendError::Status {
                status: 503,
                message: "maintenance".to_string(),
            })
        }
    }

    #[tokio::test]
    async fn test_gateway_trait_compiles() {
        let gateway: Box<dyn BackendGateway> = Box::new(MockBackendGateway);
        assert!(gateway
            .executive_snapshot()
            .await
            .unwrap_err()
            .is_cancelled());
    }

    #[test]
    fn test_only_cancelled_reports_cancelled() {
        assert!(BackendError::Cancelled.is_cancelled());
        assert!(!BackendError::Unreachable("refused".to_string()).is_cancelled());
        let status = BackendError::Status {
            status: 500,
            message: "boom".to_string(),
        };
        assert!(!status.is_cancelled());
        assert_eq!(status.to_string(), "Backend returned status 500: boom");
    }
}
