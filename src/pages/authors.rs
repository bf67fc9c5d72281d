//! Authors page

use std::ops::{Deref, DerefMut};
use std::sync::Arc;

use crate::{
    error::AppResult,
    models::{Author, AuthorStatus},
    repository::RecordSource,
    services::{
        notify::Notifier,
        stats::{author_stats, AuthorStats},
    },
};

use super::{closed_selector, ListView};

pub struct AuthorsPage {
    list: ListView<Author>,
}

impl AuthorsPage {
    pub fn new(source: Arc<dyn RecordSource<Author>>, notifier: Arc<dyn Notifier>, page_size: usize) -> Self {
        Self {
            list: ListView::new(source, notifier, page_size),
        }
    }

    pub fn filter_status(&mut self, value: &str) -> AppResult<()> {
        let selector = closed_selector::<AuthorStatus>(value)?;
        self.list.set_status(selector);
        Ok(())
    }

    pub fn open_add(&mut self) -> AppResult<()> {
        self.list.open_create(Author::default())
    }

    pub fn stats(&self) -> AuthorStats {
        author_stats(self.list.records())
    }
}

impl Deref for AuthorsPage {
    type Target = ListView<Author>;

    fn deref(&self) -> &Self::Target {
        &self.list
    }
}

impl DerefMut for AuthorsPage {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.list
    }
}
