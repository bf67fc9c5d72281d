//! Profile page

use std::sync::Arc;

use crate::{
    error::{AppError, AppResult},
    models::UserProfile,
    repository::RecordSource,
    services::{
        dispatcher::MutationDispatcher,
        lifecycle::MountScope,
        notify::{Notification, Notifier},
        session::EditSession,
        store::RecordStore,
    },
};

/// Signed-in user's profile with an inline edit mode
pub struct ProfilePage {
    scope: MountScope,
    store: RecordStore<UserProfile>,
    dispatcher: MutationDispatcher<UserProfile>,
    notifier: Arc<dyn Notifier>,
    session: Option<EditSession<UserProfile>>,
}

impl ProfilePage {
    pub fn new(source: Arc<dyn RecordSource<UserProfile>>, notifier: Arc<dyn Notifier>) -> Self {
        let scope = MountScope::new();
        let (store, dispatcher) = crate::services::wire(source, notifier.clone(), &scope);
        Self {
            scope,
            store,
            dispatcher: dispatcher.quiet(),
            notifier,
            session: None,
        }
    }

    pub async fn mount(&mut self) -> AppResult<()> {
        self.store.load().await
    }

    pub fn scope(&self) -> MountScope {
        self.scope.clone()
    }

    pub fn profile(&self) -> Option<&UserProfile> {
        self.store.records().first()
    }

    pub fn session(&self) -> Option<&EditSession<UserProfile>> {
        self.session.as_ref()
    }

    pub fn is_editing(&self) -> bool {
        self.session.is_some()
    }

    pub fn start_edit(&mut self) -> AppResult<()> {
        let profile = self
            .profile()
            .ok_or_else(|| AppError::NotFound("no profile loaded".to_string()))?;
        self.session = Some(EditSession::edit(profile)?);
        Ok(())
    }

    pub fn edit_field(&mut self, field: &str, raw: &str) -> AppResult<()> {
        match self.session.as_mut() {
            Some(session) => session.update_field(field, raw),
            None => Err(AppError::Busy("profile is not in edit mode".to_string())),
        }
    }

    pub fn cancel_edit(&mut self) -> AppResult<()> {
        if let Some(session) = self.session.as_mut() {
            session.cancel()?;
        }
        self.session = None;
        Ok(())
    }

    pub async fn save(&mut self) -> AppResult<UserProfile> {
        let Some(session) = self.session.as_mut() else {
            return Err(AppError::Busy("profile is not in edit mode".to_string()));
        };

        match self.dispatcher.save(&mut self.store, session).await {
            Ok(saved) => {
                self.session = None;
                self.notifier
                    .notify(Notification::success("Profile updated successfully!"));
                Ok(saved)
            }
            Err(e @ AppError::Validation(_)) => {
                self.notifier
                    .notify(Notification::error("Please fix the errors below"));
                Err(e)
            }
            Err(AppError::Cancelled) => Err(AppError::Cancelled),
            // a submit already in flight
            Err(e @ AppError::Busy(_)) => Err(e),
            Err(e) => {
                self.notifier.notify(Notification::error(
                    "Failed to update profile. Please try again.",
                ));
                Err(e)
            }
        }
    }
}
