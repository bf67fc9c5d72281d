//! Credential check for the login page

use async_trait::async_trait;

use crate::{
    config::AuthConfig,
    error::{AppError, AppResult},
};

/// Signed-in identity returned by a successful check
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub email: String,
}

/// Anything able to accept or reject an email/password pair
#[async_trait]
pub trait CredentialVerifier: Send + Sync {
    async fn verify(&self, email: &str, password: &str) -> AppResult<Session>;
}

/// Accepts exactly the configured demo account
#[derive(Debug, Clone)]
pub struct DemoVerifier {
    config: AuthConfig,
}

impl DemoVerifier {
    pub fn new(config: AuthConfig) -> Self {
        Self { config }
    }

    pub fn demo_email(&self) -> &str {
        &self.config.demo_email
    }

    pub fn demo_password(&self) -> &str {
        &self.config.demo_password
    }
}

#[async_trait]
impl CredentialVerifier for DemoVerifier {
    async fn verify(&self, email: &str, password: &str) -> AppResult<Session> {
        if email == self.config.demo_email && password == self.config.demo_password {
            Ok(Session {
                email: email.to_string(),
            })
        } else {
            Err(AppError::Authentication(
                "Invalid email or password".to_string(),
            ))
        }
    }
}
