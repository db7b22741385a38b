//! ListOffsetProjectsHandler - the marketplace loader.

use std::sync::Arc;
use tracing::warn;

use crate::domain::insights::{fallback_projects, OffsetProject};
use crate::ports::BackendGateway;

/// Handler serving the marketplace listings, live or staged.
pub struct ListOffsetProjectsHandler {
    gateway: Arc<dyn BackendGateway>,
}

impl ListOffsetProjectsHandler {
    pub fn new(gateway: Arc<dyn BackendGateway>) -> Self {
        Self { gateway }
    }

    /// Never fails; an empty live list also keeps the fixture.
    pub async fn handle(&self) -> Vec<OffsetProject> {
        match self.gateway.offset_projects().await {
            Ok(live) if !live.is_empty() => live,
            Ok(_) => fallback_projects(),
            Err(e) if e.is_cancelled() => fallback_projects(),
            Err(e) => {
                warn!(error = %e, "offset projects unavailable, serving fixture");
                fallback_projects()
            }
        }
    }
}
