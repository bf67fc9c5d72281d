//! Mutation dispatcher.
//!
//! Sends create/update/delete to the page's source, reports the outcome as a
//! notification and reloads the store on success. A failed mutation never
//! touches the collection. Nothing is retried.

use std::sync::Arc;

use tracing::{info, warn};

use crate::{
    error::{AppError, AppResult},
    models::Record,
    repository::RecordSource,
    services::{
        lifecycle::Teardown,
        notify::{Notification, Notifier},
        session::{Draft, EditSession, SessionMode},
        store::RecordStore,
    },
};

/// Blocking yes/no prompt shown before a delete
pub trait Confirm {
    fn confirm(&self, prompt: &str) -> bool;
}

impl<F> Confirm for F
where
    F: Fn(&str) -> bool,
{
    fn confirm(&self, prompt: &str) -> bool {
        self(prompt)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Removal {
    Deleted,
    /// The user said no; nothing was sent
    Declined,
}

pub struct MutationDispatcher<R: Record> {
    source: Arc<dyn RecordSource<R>>,
    notifier: Arc<dyn Notifier>,
    teardown: Teardown,
    toasts: bool,
}

impl<R: Record> MutationDispatcher<R> {
    pub fn new(
        source: Arc<dyn RecordSource<R>>,
        notifier: Arc<dyn Notifier>,
        teardown: Teardown,
    ) -> Self {
        Self {
            source,
            notifier,
            teardown,
            toasts: true,
        }
    }

    /// Same dispatcher without notifications, for pages that word their own
    pub fn quiet(&self) -> Self {
        Self {
            source: self.source.clone(),
            notifier: self.notifier.clone(),
            teardown: self.teardown.clone(),
            toasts: false,
        }
    }

    fn toast(&self, notification: Notification) {
        if self.toasts {
            self.notifier.notify(notification);
        }
    }

    fn lowercase_label() -> String {
        R::LABEL.to_lowercase()
    }

    /// Reload after a committed mutation; a failed reload is already
    /// reported by the store and does not undo the mutation.
    async fn refresh(&self, store: &mut RecordStore<R>) {
        if let Err(e) = store.load().await {
            warn!("Reload after {} mutation failed: {}", R::RESOURCE, e);
        }
    }

    pub async fn create(&self, store: &mut RecordStore<R>, record: &R) -> AppResult<R> {
        let result = self.teardown.guard(self.source.create(record)).await;
        self.finish(store, result, "added", "saving").await
    }

    pub async fn update(&self, store: &mut RecordStore<R>, id: &str, record: &R) -> AppResult<R> {
        let result = self.teardown.guard(self.source.update(id, record)).await;
        self.finish(store, result, "updated", "saving").await
    }

    async fn finish(
        &self,
        store: &mut RecordStore<R>,
        result: AppResult<R>,
        done: &str,
        doing: &str,
    ) -> AppResult<R> {
        match result {
            Ok(saved) => {
                info!(
                    resource = R::RESOURCE,
                    id = saved.id().unwrap_or_default(),
                    "{} {}",
                    R::LABEL,
                    done
                );
                self.toast(Notification::success(format!("{} {} successfully!", R::LABEL, done)));
                self.refresh(store).await;
                Ok(saved)
            }
            Err(AppError::Cancelled) => Err(AppError::Cancelled),
            Err(e) => {
                tracing::error!("Error {} {}: {}", doing, Self::lowercase_label(), e);
                self.toast(Notification::error(format!(
                    "Error {} {}",
                    doing,
                    Self::lowercase_label()
                )));
                Err(e)
            }
        }
    }

    /// Delete after an explicit confirmation.
    pub async fn remove(
        &self,
        store: &mut RecordStore<R>,
        id: &str,
        confirm: &dyn Confirm,
    ) -> AppResult<Removal> {
        let prompt = format!(
            "Are you sure you want to delete this {}?",
            Self::lowercase_label()
        );
        if !confirm.confirm(&prompt) {
            warn!(resource = R::RESOURCE, id, "Delete declined");
            return Ok(Removal::Declined);
        }

        match self.teardown.guard(self.source.remove(id)).await {
            Ok(()) => {
                info!(resource = R::RESOURCE, id, "{} deleted", R::LABEL);
                self.toast(Notification::success(format!("{} deleted successfully!", R::LABEL)));
                self.refresh(store).await;
                Ok(Removal::Deleted)
            }
            Err(AppError::Cancelled) => Err(AppError::Cancelled),
            Err(e) => {
                tracing::error!("Error deleting {}: {}", Self::lowercase_label(), e);
                self.toast(Notification::error(format!(
                    "Error deleting {}",
                    Self::lowercase_label()
                )));
                Err(e)
            }
        }
    }
}

impl<R: Draft> MutationDispatcher<R> {
    /// Submit an edit session: validate, dispatch, then close or reopen it.
    pub async fn save(
        &self,
        store: &mut RecordStore<R>,
        session: &mut EditSession<R>,
    ) -> AppResult<R> {
        let payload = session.begin_submit()?;
        let result = match session.mode().clone() {
            SessionMode::Create => self.create(store, &payload).await,
            SessionMode::Edit { id } => self.update(store, &id, &payload).await,
        };
        match result {
            Ok(saved) => {
                session.complete();
                Ok(saved)
            }
            Err(e) => {
                session.fail();
                Err(e)
            }
        }
    }
}
