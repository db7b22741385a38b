//! HTTP DTOs for the insight page endpoints.
//!
//! Responses keep the envelope shapes the pages already consume:
//! `{snapshot}`, `{strategies}`, `{projects}`.

pub use crate::domain::insights::{
    ExecutiveSnapshot, OffsetProject, Strategy, WorkflowOutcome, WorkflowRequest,
};

use serde::Serialize;

use crate::domain::insights::live_count;

/// Envelope for the executive snapshot page.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SnapshotResponse {
    pub snapshot: ExecutiveSnapshot,
    /// Pre-rendered `±x.x% vs last week` caption.
    pub weekly_delta_label: String,
}

impl From<ExecutiveSnapshot> for SnapshotResponse {
    fn from(snapshot: ExecutiveSnapshot) -> Self {
        let weekly_delta_label = snapshot.weekly_delta_label();
        Self {
            snapshot,
            weekly_delta_label,
        }
    }
}

/// Envelope for the strategy library page.
#[derive(Debug, Clone, Serialize)]
pub struct StrategiesResponse {
    pub strategies: Vec<Strategy>,
}

/// Envelope for the marketplace page, with the header stats.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectsResponse {
    pub projects: Vec<OffsetProject>,
    pub curated: usize,
    pub live_now: usize,
}

impl From<Vec<OffsetProject>> for ProjectsResponse {
    fn from(projects: Vec<OffsetProject>) -> Self {
        let curated = projects.len();
        let live_now = live_count(&projects);
        Self {
            projects,
            curated,
            live_now,
        }
    }
}
