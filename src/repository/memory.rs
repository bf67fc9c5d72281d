//! In-memory mock source

use async_trait::async_trait;
use std::sync::{Arc, RwLock};
use std::time::Duration;
use uuid::Uuid;

use super::RecordSource;
use crate::{
    error::{AppError, AppResult},
    models::Record,
};

/// Vec-backed source standing in for a backend.
///
/// Every call waits `latency` first, like the mock timers of a prototype UI.
/// Clone-friendly via Arc: clones share the same records.
#[derive(Clone)]
pub struct InMemorySource<R> {
    records: Arc<RwLock<Vec<R>>>,
    latency: Duration,
}

impl<R: Record> Default for InMemorySource<R> {
    fn default() -> Self {
        Self::seeded(Vec::new())
    }
}

impl<R: Record> InMemorySource<R> {
    pub fn seeded(records: Vec<R>) -> Self {
        Self {
            records: Arc::new(RwLock::new(records)),
            latency: Duration::ZERO,
        }
    }

    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    /// Current contents, bypassing latency
    pub fn snapshot(&self) -> Vec<R> {
        self.records.read().map(|r| r.clone()).unwrap_or_default()
    }

    async fn delay(&self) {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
    }

    fn poisoned<E>(_: E) -> AppError {
        AppError::Internal(format!("{} store lock poisoned", R::RESOURCE))
    }

    fn not_found(id: &str) -> AppError {
        AppError::NotFound(format!("{} {} not found", R::LABEL, id))
    }
}

#[async_trait]
impl<R: Record> RecordSource<R> for InMemorySource<R> {
    async fn fetch_all(&self) -> AppResult<Vec<R>> {
        self.delay().await;
        let records = self.records.read().map_err(Self::poisoned)?;
        Ok(records.clone())
    }

    async fn create(&self, record: &R) -> AppResult<R> {
        self.delay().await;
        let mut created = record.clone();
        created.set_id(Uuid::new_v4().to_string());
        self.records
            .write()
            .map_err(Self::poisoned)?
            .push(created.clone());
        Ok(created)
    }

    async fn update(&self, id: &str, record: &R) -> AppResult<R> {
        self.delay().await;
        let mut records = self.records.write().map_err(Self::poisoned)?;
        let slot = records
            .iter_mut()
            .find(|r| r.id() == Some(id))
            .ok_or_else(|| Self::not_found(id))?;
        let mut updated = record.clone();
        updated.set_id(id.to_string());
        *slot = updated.clone();
        Ok(updated)
    }

    async fn remove(&self, id: &str) -> AppResult<()> {
        self.delay().await;
        let mut records = self.records.write().map_err(Self::poisoned)?;
        let index = records
            .iter()
            .position(|r| r.id() == Some(id))
            .ok_or_else(|| Self::not_found(id))?;
        records.remove(index);
        Ok(())
    }
}
