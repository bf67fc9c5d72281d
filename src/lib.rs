//! BookDash
//!
//! List management core of a library dashboard: page collections loaded from
//! a mock or REST source, search/filter/paginate, stat cards, edit sessions
//! with field validation, and confirmed mutations.

use std::sync::Arc;

pub mod config;
pub mod error;
pub mod listing;
pub mod models;
pub mod pages;
pub mod repository;
pub mod services;
pub mod validation;

pub use config::AppConfig;
pub use error::{AppError, AppResult};

use pages::{
    authors::AuthorsPage, books::BooksPage, layout::LayoutBus, login::LoginPage,
    messages::MessagesPage, profile::ProfilePage, settings::SettingsPage,
};
use repository::Repository;
use services::{auth::DemoVerifier, notify::Notifier};

/// Application state shared by every page
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub repository: Repository,
    pub notifier: Arc<dyn Notifier>,
    pub layout: LayoutBus,
}

impl AppState {
    pub fn new(config: AppConfig, notifier: Arc<dyn Notifier>) -> AppResult<Self> {
        let repository = Repository::from_config(&config)?;
        Ok(Self {
            config: Arc::new(config),
            repository,
            notifier,
            layout: LayoutBus::new(),
        })
    }

    fn page_size(&self) -> usize {
        self.config.ui.page_size
    }

    pub fn books_page(&self) -> BooksPage {
        BooksPage::new(self.repository.books.clone(), self.notifier.clone(), self.page_size())
    }

    pub fn authors_page(&self) -> AuthorsPage {
        AuthorsPage::new(self.repository.authors.clone(), self.notifier.clone(), self.page_size())
    }

    pub fn messages_page(&self) -> MessagesPage {
        MessagesPage::new(self.repository.messages.clone(), self.notifier.clone(), self.page_size())
    }

    pub fn settings_page(&self) -> SettingsPage {
        SettingsPage::new(self.repository.settings.clone(), self.notifier.clone(), self.page_size())
    }

    pub fn profile_page(&self) -> ProfilePage {
        ProfilePage::new(self.repository.profile.clone(), self.notifier.clone())
    }

    pub fn login_page(&self) -> LoginPage {
        let auth = self.config.auth.clone();
        LoginPage::new(Arc::new(DemoVerifier::new(auth.clone())), self.notifier.clone(), auth)
    }
}
