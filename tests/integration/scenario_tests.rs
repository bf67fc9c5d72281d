//! End-to-end page scenarios against the in-memory source and mocked
//! failing sources.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use mockall::mock;
use tokio_test::{assert_err, assert_ok};

use bookdash::{
    listing::{filter, paginate, FilterState, Selector},
    models::{Book, BookStatus, Record},
    pages::books::BooksPage,
    repository::{fixtures, InMemorySource, RecordSource},
    services::{
        dispatcher::Removal,
        notify::{Level, Notification, NotificationLog},
        session::SessionState,
    },
    AppError, AppResult,
};

mock! {
    pub Books {}

    #[async_trait]
    impl RecordSource<Book> for Books {
        async fn fetch_all(&self) -> AppResult<Vec<Book>>;
        async fn create(&self, record: &Book) -> AppResult<Book>;
        async fn update(&self, id: &str, record: &Book) -> AppResult<Book>;
        async fn remove(&self, id: &str) -> AppResult<()>;
    }
}

async fn books_page(source: Arc<dyn RecordSource<Book>>) -> (BooksPage, Arc<NotificationLog>) {
    let log = Arc::new(NotificationLog::new());
    let mut page = BooksPage::new(source, log.clone(), 10);
    let _ = page.mount().await;
    (page, log)
}

fn fill_book(page: &mut BooksPage, title: &str, author: &str, genre: &str, year: &str) {
    page.edit_field("title", title).unwrap();
    page.edit_field("author", author).unwrap();
    page.edit_field("genre", genre).unwrap();
    page.edit_field("publishedYear", year).unwrap();
    page.edit_field("status", "Available").unwrap();
}

#[tokio::test]
async fn add_book_to_empty_collection() {
    let source = InMemorySource::<Book>::default();
    let (mut page, log) = books_page(Arc::new(source.clone())).await;
    assert!(page.view().is_empty());

    page.open_add().unwrap();
    fill_book(&mut page, "1984", "George Orwell", "Dystopian", "1949");
    assert_ok!(page.submit().await);

    let records = page.records();
    assert_eq!(records.len(), 1);
    let book = &records[0];
    assert!(book.id().is_some());
    assert_eq!(
        (book.title.as_str(), book.author.as_str(), book.genre.as_str()),
        ("1984", "George Orwell", "Dystopian")
    );
    assert_eq!(book.published_year, 1949);
    assert_eq!(book.status, BookStatus::Available);
    assert_eq!(source.snapshot(), page.records());
    assert_eq!(log.last(), Some(Notification::success("Book added successfully!")));
}

#[tokio::test]
async fn edit_then_cancel_leaves_collection_alone() {
    let (mut page, _) = books_page(Arc::new(InMemorySource::seeded(fixtures::books()))).await;
    let loads = page.store().loads();

    page.open_edit("1").unwrap();
    page.edit_field("title", "Something Else").unwrap();
    assert_eq!(page.session().unwrap().draft().title, "Something Else");
    page.cancel_edit().unwrap();

    assert!(page.session().is_none());
    assert_eq!(page.store().get("1").unwrap().title, "The Great Gatsby");
    assert_eq!(page.store().loads(), loads);
}

#[tokio::test]
async fn delete_confirmed_versus_declined() {
    let (mut page, _) = books_page(Arc::new(InMemorySource::seeded(fixtures::books()))).await;
    let loads = page.store().loads();

    let removal = page.remove("2", &|_: &str| false).await.unwrap();
    assert_eq!(removal, Removal::Declined);
    assert_eq!(page.store().loads(), loads);
    assert!(page.store().get("2").is_some());

    let removal = page.remove("2", &|_: &str| true).await.unwrap();
    assert_eq!(removal, Removal::Deleted);
    assert_eq!(page.store().loads(), loads + 1);
    assert!(page.store().get("2").is_none());
}

#[test]
fn search_and_status_filter_compose() {
    let collection = vec![
        Book {
            id: Some("1".into()),
            ..Book::new("1984", "George Orwell", "Dystopian", 1949, BookStatus::Available)
        },
        Book {
            id: Some("2".into()),
            ..Book::new("Gatsby", "F. Scott Fitzgerald", "Fiction", 1925, BookStatus::Issued)
        },
    ];

    let by_search = FilterState {
        search_text: "1984".into(),
        ..FilterState::default()
    };
    let found = filter(&collection, &by_search);
    assert_eq!(found, vec![&collection[0]]);

    let by_status = FilterState {
        status: Selector::from("Issued"),
        ..FilterState::default()
    };
    let found = filter(&collection, &by_status);
    assert_eq!(found, vec![&collection[1]]);

    // identity filter, then every page together is the whole list
    let all = filter(&collection, &FilterState::default());
    assert_eq!(all.len(), collection.len());
    let first = paginate(&all, 1, 1);
    let second = paginate(&all, 2, 1);
    assert_eq!(first.total_pages, 2);
    assert_eq!([first.visible, second.visible].concat(), all);
}

#[tokio::test]
async fn initial_load_failure_renders_empty_page() {
    let mut source = MockBooks::new();
    source
        .expect_fetch_all()
        .returning(|| Err(AppError::Remote("503 Service Unavailable".into())));

    let (page, log) = books_page(Arc::new(source)).await;
    let view = page.view();
    assert!(view.is_empty());
    assert_eq!(view.total_pages, 1);
    assert_eq!(log.last(), Some(Notification::error("Failed to fetch books")));
}

#[tokio::test]
async fn failed_save_reopens_session_and_keeps_collection() {
    let mut source = MockBooks::new();
    source.expect_fetch_all().returning(|| Ok(fixtures::books()));
    source
        .expect_create()
        .times(1)
        .returning(|_| Err(AppError::Remote("500 Internal Server Error".into())));

    let (mut page, log) = books_page(Arc::new(source)).await;
    page.open_add().unwrap();
    fill_book(&mut page, "Dune", "Frank Herbert", "Science Fiction", "1965");

    assert_err!(page.submit().await);
    let session = page.session().unwrap();
    assert_eq!(session.state(), SessionState::Open);
    assert_eq!(session.draft().title, "Dune");
    assert_eq!(page.records().len(), 4);
    assert_eq!(page.store().loads(), 1);

    let last = log.last().unwrap();
    assert_eq!(last.level, Level::Error);
    assert_eq!(last.message, "Error saving book");
}

#[tokio::test]
async fn unmount_cancels_in_flight_save() {
    let source = InMemorySource::seeded(fixtures::books()).with_latency(Duration::from_secs(5));
    let log = Arc::new(NotificationLog::new());
    let mut page = BooksPage::new(Arc::new(source.clone()), log.clone(), 10);

    // skip the slow initial load
    page.open_add().unwrap();
    fill_book(&mut page, "Dune", "Frank Herbert", "Science Fiction", "1965");

    let scope = page.scope();
    tokio::spawn(async move {
        tokio::time::sleep(Duration::from_millis(20)).await;
        scope.unmount();
    });

    let result = page.submit().await;
    assert!(matches!(result, Err(AppError::Cancelled)));
    assert!(page.session().unwrap().is_open());
    assert!(log.entries().is_empty());
    assert_eq!(source.snapshot().len(), 4);
}
