//! Page mount scope.
//!
//! A page creates a [`MountScope`] when it mounts. Anything that outlives a
//! single call (in-flight requests, event subscriptions) races against the
//! scope's [`Teardown`] signal so nothing updates a page that has navigated
//! away.

use std::future::Future;
use std::sync::Arc;

use tokio::sync::watch;

use crate::error::{AppError, AppResult};

/// Cloneable handle owning the mounted/unmounted flag of one page
#[derive(Debug, Clone)]
pub struct MountScope {
    tx: Arc<watch::Sender<bool>>,
}

impl Default for MountScope {
    fn default() -> Self {
        Self::new()
    }
}

impl MountScope {
    pub fn new() -> Self {
        let (tx, _rx) = watch::channel(false);
        Self { tx: Arc::new(tx) }
    }

    pub fn teardown(&self) -> Teardown {
        Teardown {
            rx: self.tx.subscribe(),
        }
    }

    pub fn unmount(&self) {
        self.tx.send_replace(true);
    }

    pub fn is_mounted(&self) -> bool {
        !*self.tx.borrow()
    }
}

/// Receiving side of a [`MountScope`]
#[derive(Debug, Clone)]
pub struct Teardown {
    rx: watch::Receiver<bool>,
}

impl Teardown {
    /// Resolves once the page unmounts or every scope handle is gone
    pub async fn signalled(&self) {
        let mut rx = self.rx.clone();
        loop {
            if *rx.borrow_and_update() {
                return;
            }
            if rx.changed().await.is_err() {
                return;
            }
        }
    }

    /// Run `request` unless the page unmounts first
    pub async fn guard<T, F>(&self, request: F) -> AppResult<T>
    where
        F: Future<Output = AppResult<T>>,
    {
        tokio::select! {
            biased;
            _ = self.signalled() => Err(AppError::Cancelled),
            result = request => result,
        }
    }
}
