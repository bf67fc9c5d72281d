//! BookDash - library dashboard list core
//!
//! Mounts the books page against the configured source and prints the first
//! page with its stat cards. An optional argument is used as the search text.

use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use bookdash::{config::AppConfig, services::notify::TracingNotifier, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let config = AppConfig::load()?;

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| format!("bookdash={}", config.logging.level).into());

    let registry = tracing_subscriber::registry().with(filter);
    if config.logging.format == "json" {
        registry.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }

    tracing::info!("Starting BookDash v{}", env!("CARGO_PKG_VERSION"));
    tracing::info!("Books source: {:?}", config.data.source);

    let state = AppState::new(config, Arc::new(TracingNotifier))?;

    let mut books = state.books_page();
    // A failed load is already reported; the page just renders empty.
    let _ = books.mount().await;

    if let Some(search) = std::env::args().nth(1) {
        books.set_search(search);
    }

    let stats = books.stats();
    println!(
        "Books: {} total, {} available, {} issued",
        stats.total, stats.available, stats.issued
    );
    for entry in &stats.by_genre {
        println!("  {:<20} {}", entry.label, entry.value);
    }

    let view = books.view();
    if view.is_empty() {
        println!("No books found");
    } else {
        for book in &view.rows {
            println!(
                "{:<6} {:<32} {:<24} {:<12} {:<6} {}",
                book.id.as_deref().unwrap_or("-"),
                book.title,
                book.author,
                book.genre,
                book.published_year,
                book.status
            );
        }
    }
    println!(
        "{} (page {} of {})",
        view.showing_label("books"),
        view.number,
        view.total_pages
    );

    Ok(())
}
