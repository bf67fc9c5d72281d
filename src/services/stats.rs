//! Dashboard stat cards.
//!
//! Every function here takes the whole, unfiltered collection: the cards
//! describe the dataset, not the current search. The one filtered figure on
//! the books page ("Showing X of Y") is computed by the page itself.

use serde::Serialize;

use crate::models::{
    Author, AuthorStatus, Book, BookStatus, Message, MessageType, SettingItem, SettingStatus,
    SettingValue,
};

/// Label/count pair for breakdowns
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatEntry {
    pub label: String,
    pub value: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BookStats {
    pub total: usize,
    pub available: usize,
    pub issued: usize,
    /// Counts per genre, largest first, ties in first-seen order
    pub by_genre: Vec<StatEntry>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AuthorStats {
    pub total: usize,
    pub active: usize,
    pub total_articles: u64,
    /// 0.0 for an empty collection
    pub average_rating: f64,
}

impl AuthorStats {
    pub fn average_rating_label(&self) -> String {
        format!("{:.1}", self.average_rating)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MessageStats {
    pub total: usize,
    pub unread: usize,
    pub overdue: usize,
    pub requests: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SettingStats {
    pub total: usize,
    pub active: usize,
    /// Distinct categories
    pub categories: usize,
    /// Toggle settings switched on
    pub enabled: usize,
    pub by_category: Vec<StatEntry>,
}

fn breakdown<'a>(labels: impl Iterator<Item = &'a str>) -> Vec<StatEntry> {
    let mut entries: Vec<StatEntry> = Vec::new();
    for label in labels {
        match entries.iter_mut().find(|e| e.label == label) {
            Some(entry) => entry.value += 1,
            None => entries.push(StatEntry {
                label: label.to_string(),
                value: 1,
            }),
        }
    }
    // stable sort keeps first-seen order among equal counts
    entries.sort_by(|a, b| b.value.cmp(&a.value));
    entries
}

pub fn book_stats(books: &[Book]) -> BookStats {
    BookStats {
        total: books.len(),
        available: books.iter().filter(|b| b.status == BookStatus::Available).count(),
        issued: books.iter().filter(|b| b.status == BookStatus::Issued).count(),
        by_genre: breakdown(books.iter().map(|b| b.genre.as_str())),
    }
}

pub fn author_stats(authors: &[Author]) -> AuthorStats {
    let average_rating = if authors.is_empty() {
        0.0
    } else {
        authors.iter().map(|a| a.rating).sum::<f64>() / authors.len() as f64
    };
    AuthorStats {
        total: authors.len(),
        active: authors.iter().filter(|a| a.status == AuthorStatus::Active).count(),
        total_articles: authors.iter().map(|a| u64::from(a.articles_count)).sum(),
        average_rating,
    }
}

pub fn message_stats(messages: &[Message]) -> MessageStats {
    MessageStats {
        total: messages.len(),
        unread: messages.iter().filter(|m| !m.is_read).count(),
        overdue: messages.iter().filter(|m| m.kind == MessageType::Overdue).count(),
        requests: messages.iter().filter(|m| m.kind == MessageType::Request).count(),
    }
}

pub fn setting_stats(settings: &[SettingItem]) -> SettingStats {
    let by_category = breakdown(settings.iter().map(|s| s.category.as_str()));
    SettingStats {
        total: settings.len(),
        active: settings.iter().filter(|s| s.status == SettingStatus::Active).count(),
        categories: by_category.len(),
        enabled: settings
            .iter()
            .filter(|s| matches!(s.value, SettingValue::Toggle { value: true }))
            .count(),
        by_category,
    }
}
