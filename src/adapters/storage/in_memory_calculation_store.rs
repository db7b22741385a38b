//! In-memory calculation session store.
//!
//! Sessions live in a `RwLock<HashMap>` for the lifetime of the
//! process. One writer at a time per map; the aggregate's generation
//! guard handles the paced-completion races above this layer.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::calculator::Calculation;
use crate::domain::foundation::CalculationId;
use crate::ports::{CalculationStore, CalculationStoreError};

/// Process-local session store.
#[derive(Debug, Clone, Default)]
pub struct InMemoryCalculationStore {
    sessions: Arc<RwLock<HashMap<CalculationId, Calculation>>>,
}

impl InMemoryCalculationStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of live sessions (test and diagnostics helper).
    pub async fn len(&self) -> usize {
        self.sessions.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.sessions.read().await.is_empty()
    }
}

#[async_trait]
impl CalculationStore for InMemoryCalculationStore {
    async fn save(&self, calculation: Calculation) -> Result<(), CalculationStoreError> {
        self.sessions
            .write()
            .await
            .insert(calculation.id(), calculation);
        Ok(())
    }

    async fn load(&self, id: CalculationId) -> Result<Calculation, CalculationStoreError> {
        self.sessions
            .read()
            .await
            .get(&id)
            .cloned()
            .ok_or(CalculationStoreError::NotFound(id))
    }

    async fn remove(&self, id: CalculationId) -> Result<(), CalculationStoreError> {
        self.sessions.write().await.remove(&id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::calculator::RouteLeg;

    #[tokio::test]
    async fn test_save_and_load_round_trip() {
        let store = InMemoryCalculationStore::new();
        let calculation = Calculation::new();
        let id = calculation.id();

        store.save(calculation.clone()).await.unwrap();
        let loaded = store.load(id).await.unwrap();
        assert_eq!(loaded, calculation);
    }

    #[tokio::test]
    async fn test_load_unknown_id_is_not_found() {
        let store = InMemoryCalculationStore::new();
        let result = store.load(CalculationId::new()).await;
        assert!(matches!(result, Err(CalculationStoreError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_save_replaces_previous_state() {
        let store = InMemoryCalculationStore::new();
        let mut calculation = Calculation::new();
        let id = calculation.id();
        store.save(calculation.clone()).await.unwrap();

        calculation
            .submit_route(RouteLeg::parse("Mumbai", "Delhi").unwrap())
            .unwrap();
        store.save(calculation.clone()).await.unwrap();

        let loaded = store.load(id).await.unwrap();
        assert_eq!(loaded.draft().source.as_deref(), Some("Mumbai"));
        assert_eq!(store.len().await, 1);
    }

    #[tokio::test]
    async fn test_remove_is_idempotent() {
        let store = InMemoryCalculationStore::new();
        let calculation = Calculation::new();
        let id = calculation.id();
        store.save(calculation).await.unwrap();

        store.remove(id).await.unwrap();
        assert!(store.is_empty().await);
        // Removing again is fine.
        store.remove(id).await.unwrap();
    }
}
