//! Insight page loaders.
//!
//! The GET loaders never fail: live data merges over the fixture, any
//! backend failure quietly keeps the fixture, and a cancelled load (the
//! reader navigated away; in practice the request future is simply
//! dropped) is never even logged. The workflow POST is the exception —
//! its failures surface to the caller.

mod get_executive_snapshot;
mod list_offset_projects;
mod list_strategies;
mod run_workflow;

pub use get_executive_snapshot::GetExecutiveSnapshotHandler;
pub use list_offset_projects::ListOffsetProjectsHandler;
pub use list_strategies::ListStrategiesHandler;
pub use run_workflow::{RunWorkflowError, RunWorkflowHandler};
