use async_trait::async_trait;

use crate::domain::calculator::Calculation;
use crate::domain::foundation::CalculationId;

/// Port for keeping calculator sessions between requests.
///
/// Sessions are transient: implementations may drop them at any time
/// (process restart, eviction), and callers must treat a missing id as
/// an expired session rather than a fault.
#[async_trait]
pub trait CalculationStore: Send + Sync {
    /// Persists a session, replacing any previous state under its id.
    async fn save(&self, calculation: Calculation) -> Result<(), CalculationStoreError>;

    /// Loads a session by id.
    async fn load(&self, id: CalculationId) -> Result<Calculation, CalculationStoreError>;

    /// Removes a session; removing an unknown id is not an error.
    async fn remove(&self, id: CalculationId) -> Result<(), CalculationStoreError>;
}

/// Errors that can occur in the session store.
#[derive(Debug, thiserror::Error)]
pub enum CalculationStoreError {
    #[error("Calculation not found: {0}")]
    NotFound(CalculationId),

    #[error("Storage error: {0}")]
    Storage(String),
}
