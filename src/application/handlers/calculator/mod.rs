//! Calculator wizard handlers.
//!
//! One command/query handler per wizard operation. Handlers load the
//! session aggregate from the store, apply the operation, and persist
//! the result; all validation happens in the domain input types before
//! the aggregate is touched.

mod calculate;
mod get_calculation;
mod get_report;
mod go_back;
mod reset_calculation;
mod start_calculation;
mod submit_cargo;
mod submit_route;

pub use calculate::{CalculateCommand, CalculateHandler};
pub use get_calculation::{GetCalculationHandler, GetCalculationQuery};
pub use get_report::{GetReportHandler, GetReportQuery};
pub use go_back::{GoBackCommand, GoBackHandler};
pub use reset_calculation::{ResetCalculationCommand, ResetCalculationHandler};
pub use start_calculation::StartCalculationHandler;
pub use submit_cargo::{SubmitCargoCommand, SubmitCargoHandler};
pub use submit_route::{SubmitRouteCommand, SubmitRouteHandler};

use crate::domain::calculator::{CalculationError, ScoringError};
use crate::domain::foundation::{CalculationId, ValidationError};
use crate::ports::{CalculationStoreError, EmissionModelError};

/// Errors surfaced by the wizard handlers.
#[derive(Debug, thiserror::Error)]
pub enum WizardFlowError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    State(#[from] CalculationError),

    #[error("Calculation not found: {0}")]
    NotFound(CalculationId),

    #[error("The calculator has not finished; no report to show")]
    ReportNotReady,

    #[error("Session storage failed: {0}")]
    Storage(String),

    #[error("Emission model failed: {0}")]
    Model(String),

    #[error("Emission could not be scored: {0}")]
    Scoring(#[from] ScoringError),
}

impl From<CalculationStoreError> for WizardFlowError {
    fn from(error: CalculationStoreError) -> Self {
        match error {
            CalculationStoreError::NotFound(id) => WizardFlowError::NotFound(id),
            CalculationStoreError::Storage(msg) => WizardFlowError::Storage(msg),
        }
    }
}

impl From<EmissionModelError> for WizardFlowError {
    fn from(error: EmissionModelError) -> Self {
        WizardFlowError::Model(error.to_string())
    }
}
