//! Page controllers.
//!
//! Each page owns its collection, filter controls, pager and (for editable
//! records) the open edit session. [`ListView`] holds the parts every list
//! page shares; the page modules add their own stats and controls on top.

pub mod authors;
pub mod books;
pub mod layout;
pub mod login;
pub mod messages;
pub mod profile;
pub mod settings;

use std::sync::Arc;

use crate::{
    error::{AppError, AppResult},
    listing::{category_options, paginate, FilterState, Pager, Selector},
    models::Record,
    repository::RecordSource,
    services::{
        dispatcher::{Confirm, MutationDispatcher, Removal},
        lifecycle::MountScope,
        notify::Notifier,
        session::{Draft, EditSession},
        store::RecordStore,
    },
};

/// What the list area renders
#[derive(Debug, Clone, PartialEq)]
pub struct PageView<'a, R> {
    pub rows: Vec<&'a R>,
    pub number: usize,
    pub total_pages: usize,
    /// Records passing the current filters
    pub matching: usize,
    /// Size of the whole collection
    pub total: usize,
}

impl<R> PageView<'_, R> {
    pub fn has_prev(&self) -> bool {
        self.number > 1
    }

    pub fn has_next(&self) -> bool {
        self.number < self.total_pages
    }

    /// Nothing to list: render the empty state
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn showing_label(&self, plural: &str) -> String {
        format!("Showing {} of {} {}", self.matching, self.total, plural)
    }
}

/// Extra page-specific predicate ANDed with the filter state
pub type Refinement<R> = fn(&R) -> bool;

/// Shared state of a search/filter/paginate/CRUD page
pub struct ListView<R: Record> {
    scope: MountScope,
    store: RecordStore<R>,
    dispatcher: MutationDispatcher<R>,
    filters: FilterState,
    refinement: Option<Refinement<R>>,
    pager: Pager,
    session: Option<EditSession<R>>,
}

impl<R: Record> ListView<R> {
    pub fn new(source: Arc<dyn RecordSource<R>>, notifier: Arc<dyn Notifier>, page_size: usize) -> Self {
        let scope = MountScope::new();
        let (store, dispatcher) = crate::services::wire(source, notifier, &scope);
        Self {
            scope,
            store,
            dispatcher,
            filters: FilterState::default(),
            refinement: None,
            pager: Pager::new(page_size),
            session: None,
        }
    }

    /// Initial load. A failure is already reported as a notification and
    /// leaves the collection empty; the error is returned for the caller.
    pub async fn mount(&mut self) -> AppResult<()> {
        let result = self.store.load().await;
        self.settle();
        result
    }

    pub async fn reload(&mut self) -> AppResult<()> {
        self.mount().await
    }

    /// Handle that outlives borrows of the page, for unmounting from elsewhere
    pub fn scope(&self) -> MountScope {
        self.scope.clone()
    }

    pub fn unmount(&self) {
        self.scope.unmount();
    }

    pub fn records(&self) -> &[R] {
        self.store.records()
    }

    pub fn store(&self) -> &RecordStore<R> {
        &self.store
    }

    pub fn dispatcher(&self) -> &MutationDispatcher<R> {
        &self.dispatcher
    }

    pub fn filters(&self) -> &FilterState {
        &self.filters
    }

    pub fn current_page(&self) -> usize {
        self.pager.current()
    }

    pub fn set_search(&mut self, text: impl Into<String>) {
        self.filters.search_text = text.into();
        self.settle();
    }

    pub fn set_category(&mut self, category: Selector) {
        self.filters.category = category;
        self.settle();
    }

    pub fn set_status(&mut self, status: Selector) {
        self.filters.status = status;
        self.settle();
    }

    pub fn set_refinement(&mut self, refinement: Option<Refinement<R>>) {
        self.refinement = refinement;
        self.settle();
    }

    pub fn reset_filters(&mut self) {
        self.filters = FilterState::default();
        self.refinement = None;
        self.settle();
    }

    /// Records passing the filters and refinement, in collection order
    pub fn filtered(&self) -> Vec<&R> {
        crate::listing::filter(self.store.records(), &self.filters)
            .into_iter()
            .filter(|r| self.refinement.map_or(true, |keep| keep(*r)))
            .collect()
    }

    pub fn categories(&self) -> Vec<String> {
        category_options(self.store.records())
    }

    pub fn next_page(&mut self) -> bool {
        let count = self.filtered().len();
        self.pager.next(count)
    }

    pub fn prev_page(&mut self) -> bool {
        self.pager.prev()
    }

    pub fn go_to_page(&mut self, page: usize) {
        let count = self.filtered().len();
        self.pager.go_to(page, count);
    }

    pub fn page(&self) -> PageView<'_, R> {
        let filtered = self.filtered();
        let page = paginate(&filtered, self.pager.current(), self.pager.page_size());
        PageView {
            rows: page.visible.to_vec(),
            number: page.number,
            total_pages: page.total_pages,
            matching: filtered.len(),
            total: self.store.len(),
        }
    }

    /// Keep the pager inside the filtered range
    fn settle(&mut self) {
        let count = self.filtered().len();
        self.pager.clamp(count);
    }

    pub async fn update(&mut self, id: &str, record: &R) -> AppResult<R> {
        let result = self.dispatcher.update(&mut self.store, id, record).await;
        self.settle();
        result
    }

    /// Update without success or failure toasts
    pub async fn update_quietly(&mut self, id: &str, record: &R) -> AppResult<R> {
        let result = self.dispatcher.quiet().update(&mut self.store, id, record).await;
        self.settle();
        result
    }

    pub async fn remove(&mut self, id: &str, confirm: &dyn Confirm) -> AppResult<Removal> {
        let result = self.dispatcher.remove(&mut self.store, id, confirm).await;
        self.settle();
        result
    }

    fn find(&self, id: &str) -> AppResult<&R> {
        self.store
            .get(id)
            .ok_or_else(|| AppError::NotFound(format!("{} {} not found", R::LABEL, id)))
    }
}

impl<R: Draft> ListView<R> {
    pub fn session(&self) -> Option<&EditSession<R>> {
        self.session.as_ref()
    }

    /// Open the add modal; an open session is replaced.
    pub fn open_create(&mut self, blank: R) -> AppResult<()> {
        self.ensure_not_submitting()?;
        self.session = Some(EditSession::create(blank));
        Ok(())
    }

    pub fn open_edit(&mut self, id: &str) -> AppResult<()> {
        self.ensure_not_submitting()?;
        let session = EditSession::edit(self.find(id)?)?;
        self.session = Some(session);
        Ok(())
    }

    pub fn edit_field(&mut self, field: &str, raw: &str) -> AppResult<()> {
        self.session_mut()?.update_field(field, raw)
    }

    /// Submit the open session. On success the modal closes; on any failure
    /// it stays open with its draft intact.
    pub async fn submit(&mut self) -> AppResult<R> {
        let Some(session) = self.session.as_mut() else {
            return Err(AppError::Busy("no form is open".to_string()));
        };
        let result = self.dispatcher.save(&mut self.store, session).await;
        if result.is_ok() {
            self.session = None;
        }
        self.settle();
        result
    }

    /// Close the modal, discarding the draft.
    pub fn cancel_edit(&mut self) -> AppResult<()> {
        if let Some(session) = self.session.as_mut() {
            session.cancel()?;
        }
        self.session = None;
        Ok(())
    }

    fn session_mut(&mut self) -> AppResult<&mut EditSession<R>> {
        self.session
            .as_mut()
            .ok_or_else(|| AppError::Busy("no form is open".to_string()))
    }

    fn ensure_not_submitting(&self) -> AppResult<()> {
        match &self.session {
            Some(session) if session.is_submitting() => {
                Err(AppError::Busy("a save is in flight".to_string()))
            }
            _ => Ok(()),
        }
    }
}

/// Parse a selector for a closed value set; anything else is rejected.
pub(crate) fn closed_selector<T: std::str::FromStr<Err = AppError>>(value: &str) -> AppResult<Selector> {
    match Selector::from(value) {
        Selector::All => Ok(Selector::All),
        Selector::Only(v) => {
            v.parse::<T>()?;
            Ok(Selector::Only(v))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        models::{Book, BookStatus},
        repository::{fixtures, InMemorySource},
        services::notify::NotificationLog,
    };

    async fn mounted(books: Vec<Book>, page_size: usize) -> ListView<Book> {
        let mut view = ListView::new(
            Arc::new(InMemorySource::seeded(books)),
            Arc::new(NotificationLog::new()),
            page_size,
        );
        view.mount().await.unwrap();
        view
    }

    fn shelf(count: usize) -> Vec<Book> {
        (0..count)
            .map(|i| Book {
                id: Some(i.to_string()),
                ..Book::new(format!("Volume {}", i), "Anon", "Reference", 2000, BookStatus::Available)
            })
            .collect()
    }

    #[tokio::test]
    async fn test_narrowing_search_clamps_page() {
        let mut view = mounted(shelf(25), 10).await;
        view.go_to_page(3);
        assert_eq!(view.current_page(), 3);
        assert_eq!(view.page().rows.len(), 5);

        // "Volume 1" matches 1 and 10..=19
        view.set_search("volume 1");
        let page = view.page();
        assert_eq!(page.number, 2);
        assert_eq!(page.total_pages, 2);
        assert_eq!(page.rows.len(), 1);
        assert_eq!(page.matching, 11);
        assert_eq!(page.total, 25);
    }

    #[tokio::test]
    async fn test_prev_and_next_are_noops_at_edges() {
        let mut view = mounted(fixtures::books(), 10).await;
        assert!(!view.prev_page());
        assert!(!view.next_page());
        assert_eq!(view.current_page(), 1);
    }

    #[tokio::test]
    async fn test_refinement_composes_with_filters() {
        let mut view = mounted(fixtures::books(), 10).await;
        fn before_1950(book: &Book) -> bool {
            book.published_year < 1950
        }
        view.set_refinement(Some(before_1950 as Refinement<Book>));
        view.set_category(Selector::from("Fiction"));
        let titles: Vec<_> = view.page().rows.iter().map(|b| b.title.clone()).collect();
        assert_eq!(titles, vec!["The Great Gatsby"]);

        view.reset_filters();
        assert_eq!(view.page().matching, 4);
    }

    #[test]
    fn test_closed_selector_rejects_unknown_values() {
        assert_eq!(closed_selector::<BookStatus>("All").unwrap(), Selector::All);
        assert!(closed_selector::<BookStatus>("Issued").is_ok());
        assert!(matches!(
            closed_selector::<BookStatus>("Lost"),
            Err(AppError::InvalidValue(_))
        ));
    }
}
