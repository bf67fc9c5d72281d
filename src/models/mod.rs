//! Data models for BookDash

pub mod author;
pub mod book;
pub mod enums;
pub mod message;
pub mod setting;
pub mod user;

use serde::{de::DeserializeOwned, Deserialize, Deserializer, Serialize};

// Re-export commonly used types
pub use author::Author;
pub use book::Book;
pub use enums::{AuthorStatus, BookStatus, MessageType, Priority, Role, SettingStatus};
pub use message::Message;
pub use setting::{SettingItem, SettingValue};
pub use user::UserProfile;

/// One entity of a page collection.
///
/// Implementors describe which text fields the search box looks at and which
/// fields the category and status selectors compare against.
pub trait Record: Clone + Send + Sync + Serialize + DeserializeOwned + 'static {
    /// REST resource name, also used in log lines
    const RESOURCE: &'static str;
    /// Human label used in notifications ("Book added successfully!")
    const LABEL: &'static str;

    fn id(&self) -> Option<&str>;

    fn set_id(&mut self, id: String);

    /// Fields matched by the free-text search, any of them may match
    fn search_fields(&self) -> Vec<&str>;

    fn category(&self) -> Option<&str> {
        None
    }

    fn status(&self) -> Option<&str> {
        None
    }
}

/// Accepts ids sent either as JSON strings or numbers.
pub(crate) fn deserialize_id<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawId {
        Text(String),
        Number(i64),
    }

    Ok(Option::<RawId>::deserialize(deserializer)?.map(|raw| match raw {
        RawId::Text(s) => s,
        RawId::Number(n) => n.to_string(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numeric_id_is_normalized() {
        let book: Book = serde_json::from_str(
            r#"{"id": 7, "title": "Dune", "author": "Frank Herbert", "genre": "Science", "publishedYear": 1965, "status": "Available"}"#,
        )
        .unwrap();
        assert_eq!(book.id(), Some("7"));
    }

    #[test]
    fn test_missing_id_is_none() {
        let book: Book = serde_json::from_str(
            r#"{"title": "Dune", "author": "Frank Herbert", "genre": "Science", "publishedYear": 1965, "status": "Issued"}"#,
        )
        .unwrap();
        assert_eq!(book.id(), None);
    }
}
