//! Books page

use std::ops::{Deref, DerefMut};
use std::sync::Arc;

use crate::{
    error::AppResult,
    listing::Selector,
    models::{Book, BookStatus},
    repository::RecordSource,
    services::{
        notify::Notifier,
        stats::{book_stats, BookStats},
    },
};

use super::{closed_selector, ListView, PageView};

/// Catalog list with search, genre and status filters, and the add/edit modal
pub struct BooksPage {
    list: ListView<Book>,
}

impl BooksPage {
    pub fn new(source: Arc<dyn RecordSource<Book>>, notifier: Arc<dyn Notifier>, page_size: usize) -> Self {
        Self {
            list: ListView::new(source, notifier, page_size),
        }
    }

    /// Status dropdown: `All`, `Available` or `Issued`
    pub fn filter_status(&mut self, value: &str) -> AppResult<()> {
        let selector = closed_selector::<BookStatus>(value)?;
        self.list.set_status(selector);
        Ok(())
    }

    pub fn filter_genre(&mut self, value: &str) {
        self.list.set_category(Selector::from(value));
    }

    pub fn status_options() -> Vec<&'static str> {
        std::iter::once(crate::listing::filter::ALL)
            .chain(BookStatus::ALL.iter().map(|s| s.as_str()))
            .collect()
    }

    pub fn open_add(&mut self) -> AppResult<()> {
        self.list.open_create(Book::default())
    }

    /// Stat cards over the whole catalog
    pub fn stats(&self) -> BookStats {
        book_stats(self.list.records())
    }

    /// "Showing X of Y books"; the only figure scoped to the current filters
    pub fn showing(&self) -> String {
        self.list.page().showing_label("books")
    }

    pub fn view(&self) -> PageView<'_, Book> {
        self.list.page()
    }
}

impl Deref for BooksPage {
    type Target = ListView<Book>;

    fn deref(&self) -> &Self::Target {
        &self.list
    }
}

impl DerefMut for BooksPage {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.list
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        error::AppError,
        repository::{fixtures, InMemorySource},
        services::notify::{Notification, NotificationLog},
    };

    async fn page() -> (BooksPage, Arc<NotificationLog>) {
        let log = Arc::new(NotificationLog::new());
        let mut page = BooksPage::new(
            Arc::new(InMemorySource::seeded(fixtures::books())),
            log.clone(),
            10,
        );
        page.mount().await.unwrap();
        (page, log)
    }

    #[tokio::test]
    async fn test_showing_counts_follow_filters_but_stats_do_not() {
        let (mut page, _) = page().await;
        page.filter_status("Issued").unwrap();

        assert_eq!(page.showing(), "Showing 1 of 4 books");
        assert_eq!(page.stats().total, 4);
        assert_eq!(page.stats().issued, 1);
    }

    #[tokio::test]
    async fn test_unknown_status_is_rejected() {
        let (mut page, _) = page().await;
        assert!(matches!(page.filter_status("Lost"), Err(AppError::InvalidValue(_))));
        assert_eq!(page.filters().status, Selector::All);
    }

    #[tokio::test]
    async fn test_edit_flow_updates_record() {
        let (mut page, log) = page().await;
        page.open_edit("3").unwrap();
        page.edit_field("status", "Issued").unwrap();
        page.submit().await.unwrap();

        assert!(page.session().is_none());
        assert_eq!(page.store().get("3").unwrap().status, BookStatus::Issued);
        assert_eq!(log.last(), Some(Notification::success("Book updated successfully!")));
    }

    #[tokio::test]
    async fn test_rejected_submit_keeps_modal_open() {
        let (mut page, _) = page().await;
        page.open_add().unwrap();
        page.edit_field("title", "A").unwrap();

        let err = page.submit().await.unwrap_err();
        let errors = err.field_errors().unwrap();
        assert_eq!(errors.first().map(|(field, _)| field), Some("title"));
        assert!(errors.get("author").is_some());
        assert!(page.session().unwrap().is_open());
    }

    #[test]
    fn test_status_options() {
        assert_eq!(BooksPage::status_options(), vec!["All", "Available", "Issued"]);
    }
}
