//! RunWorkflowHandler - the lane forecast pass-through.
//!
//! Unlike the GET loaders there is no fixture to hide behind: the
//! pilot-studio page shows workflow failures to the user, so this
//! handler surfaces them.

use std::sync::Arc;

use crate::domain::foundation::ValidationError;
use crate::domain::insights::{WorkflowOutcome, WorkflowRequest};
use crate::ports::{BackendError, BackendGateway};

/// Errors from running a forecast workflow.
#[derive(Debug, thiserror::Error)]
pub enum RunWorkflowError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Backend(#[from] BackendError),
}

/// Handler posting a lane to the orchestrator.
pub struct RunWorkflowHandler {
    gateway: Arc<dyn BackendGateway>,
}

impl RunWorkflowHandler {
    pub fn new(gateway: Arc<dyn BackendGateway>) -> Self {
        Self { gateway }
    }

    pub async fn handle(
        &self,
        request: WorkflowRequest,
    ) -> Result<WorkflowOutcome, RunWorkflowError> {
        request.validate()?;
        Ok(self.gateway.run_workflow(&request).await?)
    }
}
