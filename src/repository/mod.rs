//! Data-source layer: where page collections come from and where mutations go.

pub mod fixtures;
pub mod memory;
pub mod rest;

use async_trait::async_trait;
use std::sync::Arc;

use crate::{
    config::{AppConfig, SourceKind},
    error::AppResult,
    models::{Author, Book, Message, Record, SettingItem, UserProfile},
};

pub use memory::InMemorySource;
pub use rest::RestSource;

/// CRUD boundary for one record type.
///
/// Implementations report every failure as an error; callers decide how to
/// surface it.
#[async_trait]
pub trait RecordSource<R: Record>: Send + Sync {
    /// Whole collection in display order
    async fn fetch_all(&self) -> AppResult<Vec<R>>;

    /// Persist a new record; the returned copy carries the assigned id.
    async fn create(&self, record: &R) -> AppResult<R>;

    async fn update(&self, id: &str, record: &R) -> AppResult<R>;

    async fn remove(&self, id: &str) -> AppResult<()>;
}

/// One source per page
#[derive(Clone)]
pub struct Repository {
    pub books: Arc<dyn RecordSource<Book>>,
    pub authors: Arc<dyn RecordSource<Author>>,
    pub messages: Arc<dyn RecordSource<Message>>,
    pub settings: Arc<dyn RecordSource<SettingItem>>,
    pub profile: Arc<dyn RecordSource<UserProfile>>,
}

impl Repository {
    /// Books follow `data.source`; the other pages always use fixtures.
    pub fn from_config(config: &AppConfig) -> AppResult<Self> {
        let latency = config.data.mock_latency();

        let books: Arc<dyn RecordSource<Book>> = match config.data.source {
            SourceKind::Remote => {
                tracing::info!("Books served by {}", config.api.base_url);
                Arc::new(RestSource::new(&config.api.base_url, config.api.timeout())?)
            }
            SourceKind::Mock => {
                Arc::new(InMemorySource::seeded(fixtures::books()).with_latency(latency))
            }
        };

        Ok(Self {
            books,
            authors: Arc::new(InMemorySource::seeded(fixtures::authors()).with_latency(latency)),
            messages: Arc::new(InMemorySource::seeded(fixtures::messages()).with_latency(latency)),
            settings: Arc::new(InMemorySource::seeded(fixtures::settings()).with_latency(latency)),
            profile: Arc::new(InMemorySource::seeded(vec![fixtures::profile()]).with_latency(latency)),
        })
    }
}
