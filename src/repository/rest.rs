//! REST-backed source

use async_trait::async_trait;
use reqwest::{Client, Response};
use std::marker::PhantomData;
use std::time::Duration;

use super::RecordSource;
use crate::{
    error::{AppError, AppResult},
    models::Record,
};

/// JSON client for `{base_url}/{resource}` and `{base_url}/{resource}/{id}`
pub struct RestSource<R> {
    client: Client,
    endpoint: String,
    _record: PhantomData<fn() -> R>,
}

impl<R: Record> RestSource<R> {
    pub fn new(base_url: &str, timeout: Duration) -> AppResult<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| AppError::Internal(format!("HTTP client setup failed: {}", e)))?;

        Ok(Self {
            client,
            endpoint: format!("{}/{}", base_url.trim_end_matches('/'), R::RESOURCE),
            _record: PhantomData,
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn item_url(&self, id: &str) -> String {
        format!("{}/{}", self.endpoint, id)
    }

    fn remote(action: &str, err: reqwest::Error) -> AppError {
        tracing::error!("{} {} failed: {}", action, R::RESOURCE, err);
        AppError::Remote(format!("{} {}: {}", action, R::RESOURCE, err))
    }

    async fn read<T: serde::de::DeserializeOwned>(action: &str, response: Response) -> AppResult<T> {
        response
            .error_for_status()
            .map_err(|e| Self::remote(action, e))?
            .json::<T>()
            .await
            .map_err(|e| Self::remote(action, e))
    }
}

#[async_trait]
impl<R: Record> RecordSource<R> for RestSource<R> {
    async fn fetch_all(&self) -> AppResult<Vec<R>> {
        let response = self
            .client
            .get(&self.endpoint)
            .send()
            .await
            .map_err(|e| Self::remote("fetch", e))?;
        Self::read("fetch", response).await
    }

    async fn create(&self, record: &R) -> AppResult<R> {
        // Records skip serializing an absent id, so the server assigns one
        let response = self
            .client
            .post(&self.endpoint)
            .json(record)
            .send()
            .await
            .map_err(|e| Self::remote("create", e))?;
        Self::read("create", response).await
    }

    async fn update(&self, id: &str, record: &R) -> AppResult<R> {
        let response = self
            .client
            .put(self.item_url(id))
            .json(record)
            .send()
            .await
            .map_err(|e| Self::remote("update", e))?;
        Self::read("update", response).await
    }

    async fn remove(&self, id: &str) -> AppResult<()> {
        self.client
            .delete(self.item_url(id))
            .send()
            .await
            .map_err(|e| Self::remote("delete", e))?
            .error_for_status()
            .map_err(|e| Self::remote("delete", e))?;
        Ok(())
    }
}
