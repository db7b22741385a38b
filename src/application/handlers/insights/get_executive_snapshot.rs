//! GetExecutiveSnapshotHandler - the leadership recap loader.

use std::sync::Arc;
use tracing::warn;

use crate::domain::insights::ExecutiveSnapshot;
use crate::ports::BackendGateway;

/// Handler serving the executive snapshot, live or staged.
pub struct GetExecutiveSnapshotHandler {
    gateway: Arc<dyn BackendGateway>,
}

impl GetExecutiveSnapshotHandler {
    pub fn new(gateway: Arc<dyn BackendGateway>) -> Self {
        Self { gateway }
    }

    /// Never fails: backend problems degrade to the fixture.
    pub async fn handle(&self) -> ExecutiveSnapshot {
        match self.gateway.executive_snapshot().await {
            Ok(patch) => ExecutiveSnapshot::fallback().merged_with(patch),
            Err(e) if e.is_cancelled() => ExecutiveSnapshot::fallback(),
            Err(e) => {
                warn!(error = %e, "executive snapshot unavailable, serving fixture");
                ExecutiveSnapshot::fallback()
            }
        }
    }
}
