//! HTTP gateway to the peripheral backend.
//!
//! Thin reqwest client over the four backend endpoints. Non-success
//! statuses become `BackendError::Status`, carrying the backend's own
//! `error` message when its body provides one; connection problems and
//! timeouts become `Unreachable`. No retries at this layer.

use async_trait::async_trait;
use serde::Deserialize;
use std::time::Duration;

use crate::config::BackendConfig;
use crate::domain::insights::{
    OffsetProject, SnapshotPatch, Strategy, WorkflowOutcome, WorkflowRequest,
};
use crate::ports::{BackendError, BackendGateway};

/// Peripheral backend client.
#[derive(Debug, Clone)]
pub struct HttpBackendGateway {
    client: reqwest::Client,
    config: BackendConfig,
}

/// Envelope for the snapshot endpoint.
#[derive(Debug, Deserialize)]
struct SnapshotEnvelope {
    #[serde(default)]
    snapshot: Option<SnapshotPatch>,
}

/// Envelope for the strategy endpoint.
#[derive(Debug, Deserialize)]
struct StrategyEnvelope {
    #[serde(default)]
    strategies: Vec<Strategy>,
}

/// Envelope for the marketplace endpoint.
#[derive(Debug, Deserialize)]
struct ProjectEnvelope {
    #[serde(default)]
    projects: Vec<OffsetProject>,
}

/// Error body the backend sends alongside non-success statuses.
#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: Option<String>,
}

impl HttpBackendGateway {
    /// Builds the gateway from injected configuration.
    pub fn new(config: BackendConfig) -> Result<Self, BackendError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()
            .map_err(|e| BackendError::Unreachable(e.to_string()))?;
        Ok(Self { client, config })
    }

    async fn check_status(response: reqwest::Response) -> Result<reqwest::Response, BackendError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let message = response
            .json::<ErrorEnvelope>()
            .await
            .ok()
            .and_then(|body| body.error)
            .unwrap_or_else(|| "Request failed".to_string());
        Err(BackendError::Status {
            status: status.as_u16(),
            message,
        })
    }

    async fn get_json<T: serde::de::DeserializeOwned>(&self, path: &str) -> Result<T, BackendError> {
        let response = self
            .client
            .get(self.config.endpoint(path))
            .send()
            .await
            .map_err(map_transport_error)?;
        Self::check_status(response)
            .await?
            .json::<T>()
            .await
            .map_err(|e| BackendError::InvalidResponse(e.to_string()))
    }
}

fn map_transport_error(error: reqwest::Error) -> BackendError {
    if error.is_timeout() {
        BackendError::Unreachable(format!("request timed out: {}", error))
    } else if error.is_decode() {
        BackendError::InvalidResponse(error.to_string())
    } else {
        BackendError::Unreachable(error.to_string())
    }
}

#[async_trait]
impl BackendGateway for HttpBackendGateway {
    async fn executive_snapshot(&self) -> Result<SnapshotPatch, BackendError> {
        let envelope: SnapshotEnvelope = self.get_json("/executive-snapshot").await?;
        Ok(envelope.snapshot.unwrap_or_default())
    }

    async fn strategy_library(&self) -> Result<Vec<Strategy>, BackendError> {
        let envelope: StrategyEnvelope = self.get_json("/strategy-library").await?;
        Ok(envelope.strategies)
    }

    async fn offset_projects(&self) -> Result<Vec<OffsetProject>, BackendError> {
        let envelope: ProjectEnvelope = self.get_json("/offset-projects").await?;
        Ok(envelope.projects)
    }

    async fn run_workflow(
        &self,
        request: &WorkflowRequest,
    ) -> Result<WorkflowOutcome, BackendError> {
        let response = self
            .client
            .post(self.config.endpoint("/workflow"))
            .json(request)
            .send()
            .await
            .map_err(map_transport_error)?;
        Self::check_status(response)
            .await?
            .json::<WorkflowOutcome>()
            .await
            .map_err(|e| BackendError::InvalidResponse(e.to_string()))
    }
}
