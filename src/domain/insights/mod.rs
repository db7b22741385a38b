//! Insight page data: executive snapshot, strategy library, offset
//! marketplace, and the forecast workflow.
//!
//! Each type ships with the staged fixture the page falls back to when
//! the peripheral backend is unreachable.

mod project;
mod snapshot;
mod strategy;
mod workflow;

pub use project::{fallback_projects, live_count, OffsetProject, ProjectStatus};
pub use snapshot::{ExecutiveSnapshot, SnapshotPatch};
pub use strategy::{fallback_strategies, Strategy};
pub use workflow::{WorkflowOutcome, WorkflowRequest};
