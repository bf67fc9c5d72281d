//! Book model

use chrono::{Datelike, Local};
use serde::{Deserialize, Serialize};

use super::{enums::BookStatus, Record};

/// Catalog book as exchanged with the `books` resource
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Book {
    /// Server-assigned; absent until the book is persisted
    #[serde(
        default,
        deserialize_with = "super::deserialize_id",
        skip_serializing_if = "Option::is_none"
    )]
    pub id: Option<String>,
    pub title: String,
    pub author: String,
    pub genre: String,
    pub published_year: i32,
    pub status: BookStatus,
}

impl Book {
    pub fn new(
        title: impl Into<String>,
        author: impl Into<String>,
        genre: impl Into<String>,
        published_year: i32,
        status: BookStatus,
    ) -> Self {
        Self {
            id: None,
            title: title.into(),
            author: author.into(),
            genre: genre.into(),
            published_year,
            status,
        }
    }

    pub fn is_available(&self) -> bool {
        self.status == BookStatus::Available
    }
}

impl Default for Book {
    /// Blank form state: empty text fields, this year, available.
    fn default() -> Self {
        Self::new("", "", "", Local::now().year(), BookStatus::Available)
    }
}

impl Record for Book {
    const RESOURCE: &'static str = "books";
    const LABEL: &'static str = "Book";

    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    fn set_id(&mut self, id: String) {
        self.id = Some(id);
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![self.title.as_str(), self.author.as_str()]
    }

    fn category(&self) -> Option<&str> {
        Some(&self.genre)
    }

    fn status(&self) -> Option<&str> {
        Some(self.status.as_str())
    }
}
