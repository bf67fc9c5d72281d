//! REST source integration tests.
//!
//! Starts an in-process axum stub of the books backend and exercises
//! `RestSource` against it with real HTTP.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde_json::{json, Value};

use bookdash::{
    models::{Book, BookStatus, Record},
    repository::{RecordSource, RestSource},
    AppError,
};

#[derive(Clone, Default)]
struct Backend {
    books: Arc<Mutex<Vec<Value>>>,
    next_id: Arc<Mutex<i64>>,
}

async fn list(State(backend): State<Backend>) -> Json<Value> {
    Json(Value::Array(backend.books.lock().unwrap().clone()))
}

async fn create(State(backend): State<Backend>, Json(mut body): Json<Value>) -> (StatusCode, Json<Value>) {
    let mut next = backend.next_id.lock().unwrap();
    *next += 1;
    // numeric ids, like a json-server backend
    body["id"] = json!(*next);
    backend.books.lock().unwrap().push(body.clone());
    (StatusCode::CREATED, Json(body))
}

async fn update(
    State(backend): State<Backend>,
    Path(id): Path<String>,
    Json(mut body): Json<Value>,
) -> Result<Json<Value>, StatusCode> {
    let mut books = backend.books.lock().unwrap();
    let slot = books
        .iter_mut()
        .find(|b| b["id"].to_string() == id)
        .ok_or(StatusCode::NOT_FOUND)?;
    body["id"] = slot["id"].clone();
    *slot = body.clone();
    Ok(Json(body))
}

async fn remove(State(backend): State<Backend>, Path(id): Path<String>) -> StatusCode {
    let mut books = backend.books.lock().unwrap();
    let before = books.len();
    books.retain(|b| b["id"].to_string() != id);
    if books.len() < before {
        StatusCode::OK
    } else {
        StatusCode::NOT_FOUND
    }
}

/// Bind to port 0 and return the base URL.
async fn start_backend(backend: Backend) -> String {
    let app = Router::new()
        .route("/books", get(list).post(create))
        .route("/books/:id", axum::routing::put(update).delete(remove))
        .with_state(backend);
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}")
}

fn source(base: &str) -> RestSource<Book> {
    RestSource::new(base, Duration::from_secs(5)).unwrap()
}

#[tokio::test]
async fn create_assigns_id_and_fetch_returns_it() {
    let base = start_backend(Backend::default()).await;
    let books = source(&base);

    let created = books
        .create(&Book::new("1984", "George Orwell", "Dystopian", 1949, BookStatus::Available))
        .await
        .unwrap();
    assert_eq!(created.id(), Some("1"));

    let all = books.fetch_all().await.unwrap();
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].title, "1984");
    assert_eq!(all[0].published_year, 1949);
}

#[tokio::test]
async fn update_and_remove_by_id() {
    let base = start_backend(Backend::default()).await;
    let books = source(&base);
    let created = books
        .create(&Book::new("Gatsby", "F. Scott Fitzgerald", "Fiction", 1925, BookStatus::Available))
        .await
        .unwrap();

    let mut issued = created.clone();
    issued.status = BookStatus::Issued;
    let updated = books.update("1", &issued).await.unwrap();
    assert_eq!(updated.status, BookStatus::Issued);
    assert_eq!(updated.id(), Some("1"));

    books.remove("1").await.unwrap();
    assert!(books.fetch_all().await.unwrap().is_empty());
}

#[tokio::test]
async fn non_success_status_is_remote_error() {
    let base = start_backend(Backend::default()).await;
    let books = source(&base);

    let result = books.remove("42").await;
    assert!(matches!(result, Err(AppError::Remote(_))));

    let result = books.update("42", &Book::default()).await;
    assert!(matches!(result, Err(AppError::Remote(_))));
}

#[tokio::test]
async fn unknown_status_in_payload_is_rejected() {
    let backend = Backend::default();
    backend.books.lock().unwrap().push(json!({
        "id": "9",
        "title": "Dune",
        "author": "Frank Herbert",
        "genre": "Science Fiction",
        "publishedYear": 1965,
        "status": "Lost"
    }));
    let base = start_backend(backend).await;

    let result = source(&base).fetch_all().await;
    assert!(matches!(result, Err(AppError::Remote(_))));
}

#[tokio::test]
async fn slow_backend_hits_timeout() {
    let app = Router::new().route(
        "/books",
        get(|| async {
            tokio::time::sleep(Duration::from_secs(2)).await;
            Json(json!([]))
        }),
    );
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    let books = RestSource::<Book>::new(&format!("http://{addr}"), Duration::from_millis(100)).unwrap();
    let result = books.fetch_all().await;
    assert!(matches!(result, Err(AppError::Remote(_))));
}
