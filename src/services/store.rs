//! Record store: the page-owned collection

use std::sync::Arc;

use crate::{
    error::{AppError, AppResult},
    models::Record,
    repository::RecordSource,
    services::{
        lifecycle::Teardown,
        notify::{Notification, Notifier},
    },
};

/// Authoritative collection of one page.
///
/// Only ever replaced wholesale by [`RecordStore::load`]. A failed load
/// leaves the previous contents in place (empty on first load).
pub struct RecordStore<R: Record> {
    source: Arc<dyn RecordSource<R>>,
    notifier: Arc<dyn Notifier>,
    teardown: Teardown,
    records: Vec<R>,
    loads: usize,
}

impl<R: Record> RecordStore<R> {
    pub fn new(
        source: Arc<dyn RecordSource<R>>,
        notifier: Arc<dyn Notifier>,
        teardown: Teardown,
    ) -> Self {
        Self {
            source,
            notifier,
            teardown,
            records: Vec::new(),
            loads: 0,
        }
    }

    pub fn records(&self) -> &[R] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&R> {
        self.records.iter().find(|r| r.id() == Some(id))
    }

    /// Number of successful loads so far
    pub fn loads(&self) -> usize {
        self.loads
    }

    pub fn source(&self) -> &Arc<dyn RecordSource<R>> {
        &self.source
    }

    /// Fetch the whole collection and replace the current one.
    ///
    /// Failures raise a "Failed to fetch ..." notification and are returned.
    pub async fn load(&mut self) -> AppResult<()> {
        match self.teardown.guard(self.source.fetch_all()).await {
            Ok(records) => {
                tracing::info!("Loaded {} {}", records.len(), R::RESOURCE);
                self.records = records;
                self.loads += 1;
                Ok(())
            }
            Err(AppError::Cancelled) => Err(AppError::Cancelled),
            Err(e) => {
                tracing::error!("Loading {} failed: {}", R::RESOURCE, e);
                self.notifier
                    .notify(Notification::error(format!("Failed to fetch {}", R::RESOURCE)));
                Err(e)
            }
        }
    }
}
