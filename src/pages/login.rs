//! Login page

use std::sync::Arc;

use crate::{
    config::AuthConfig,
    error::{AppError, AppResult},
    services::{
        auth::{CredentialVerifier, Session},
        notify::{Notification, Notifier},
    },
    validation::FieldErrors,
};

pub struct LoginPage {
    verifier: Arc<dyn CredentialVerifier>,
    notifier: Arc<dyn Notifier>,
    demo: AuthConfig,
    email: String,
    password: String,
    submitting: bool,
    errors: FieldErrors,
}

impl LoginPage {
    pub fn new(verifier: Arc<dyn CredentialVerifier>, notifier: Arc<dyn Notifier>, demo: AuthConfig) -> Self {
        Self {
            verifier,
            notifier,
            demo,
            email: String::new(),
            password: String::new(),
            submitting: false,
            errors: FieldErrors::new(),
        }
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn password(&self) -> &str {
        &self.password
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    pub fn set_email(&mut self, email: impl Into<String>) {
        self.email = email.into();
        self.errors.clear_field("email");
    }

    pub fn set_password(&mut self, password: impl Into<String>) {
        self.password = password.into();
        self.errors.clear_field("password");
    }

    /// Prefill the demo account
    pub fn fill_demo(&mut self) {
        self.set_email(self.demo.demo_email.clone());
        self.set_password(self.demo.demo_password.clone());
    }

    pub async fn submit(&mut self) -> AppResult<Session> {
        if self.submitting {
            return Err(AppError::Busy("sign-in already in progress".to_string()));
        }

        let mut errors = FieldErrors::new();
        if self.email.trim().is_empty() {
            errors.insert("email", "Email is required");
        }
        if self.password.is_empty() {
            errors.insert("password", "Password is required");
        }
        if !errors.is_empty() {
            self.errors = errors.clone();
            return Err(AppError::Validation(errors));
        }

        self.submitting = true;
        let result = self.verifier.verify(self.email.trim(), &self.password).await;
        self.submitting = false;

        match result {
            Ok(session) => {
                tracing::info!(email = %session.email, "Signed in");
                self.notifier
                    .notify(Notification::success("Login successful! Redirecting..."));
                Ok(session)
            }
            Err(e) => {
                tracing::warn!("Sign-in rejected: {}", e);
                self.notifier.notify(Notification::error(
                    "Invalid email or password. Please try again.",
                ));
                Err(e)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::{auth::DemoVerifier, notify::NotificationLog};

    fn page() -> (LoginPage, Arc<NotificationLog>) {
        let log = Arc::new(NotificationLog::new());
        let config = AuthConfig::default();
        let page = LoginPage::new(Arc::new(DemoVerifier::new(config.clone())), log.clone(), config);
        (page, log)
    }

    #[tokio::test]
    async fn test_demo_login() {
        let (mut page, log) = page();
        page.fill_demo();
        assert_eq!(page.email(), "john.doe@bookdash.com");

        page.submit().await.unwrap();
        assert_eq!(log.last(), Some(Notification::success("Login successful! Redirecting...")));
        assert!(!page.is_submitting());
    }

    #[tokio::test]
    async fn test_wrong_password() {
        let (mut page, log) = page();
        page.set_email("john.doe@bookdash.com");
        page.set_password("hunter2");

        let result = page.submit().await;
        assert!(matches!(result, Err(AppError::Authentication(_))));
        assert_eq!(
            log.last(),
            Some(Notification::error("Invalid email or password. Please try again."))
        );
    }

    #[tokio::test]
    async fn test_empty_fields_are_not_sent() {
        let (mut page, log) = page();
        let err = page.submit().await.unwrap_err();
        assert_eq!(err.field_errors().map(|e| e.len()), Some(2));
        assert!(log.entries().is_empty());

        page.set_email("someone@bookdash.com");
        assert!(page.errors().get("email").is_none());
    }
}
