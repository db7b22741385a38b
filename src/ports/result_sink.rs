use async_trait::async_trait;

use crate::domain::reporting::ResultRecord;

/// Port for the append-only result log.
///
/// Fire-and-forget from the UI's perspective: one append per reported
/// result, no retries, no partial-write recovery.
#[async_trait]
pub trait ResultSink: Send + Sync {
    /// Appends one record to the log.
    async fn append(&self, record: &ResultRecord) -> Result<(), ResultSinkError>;
}

/// Errors from the result sink.
#[derive(Debug, thiserror::Error)]
pub enum ResultSinkError {
    #[error("I/O error: {0}")]
    Io(String),

    #[error("Serialization error: {0}")]
    Serialization(String),
}
