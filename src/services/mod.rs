//! Page-independent logic shared by every page controller

pub mod auth;
pub mod dispatcher;
pub mod lifecycle;
pub mod notify;
pub mod session;
pub mod stats;
pub mod store;

use std::sync::Arc;

use crate::{models::Record, repository::RecordSource};

use dispatcher::MutationDispatcher;
use lifecycle::MountScope;
use notify::Notifier;
use store::RecordStore;

/// Store and dispatcher wired to the same source and mount scope
pub fn wire<R: Record>(
    source: Arc<dyn RecordSource<R>>,
    notifier: Arc<dyn Notifier>,
    scope: &MountScope,
) -> (RecordStore<R>, MutationDispatcher<R>) {
    (
        RecordStore::new(source.clone(), notifier.clone(), scope.teardown()),
        MutationDispatcher::new(source, notifier, scope.teardown()),
    )
}
