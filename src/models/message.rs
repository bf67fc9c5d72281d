//! Inbox message model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{
    enums::{MessageType, Priority},
    Record,
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    #[serde(
        default,
        deserialize_with = "super::deserialize_id",
        skip_serializing_if = "Option::is_none"
    )]
    pub id: Option<String>,
    #[serde(rename = "type")]
    pub kind: MessageType,
    pub title: String,
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub book_title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_name: Option<String>,
    pub timestamp: DateTime<Utc>,
    #[serde(default)]
    pub is_read: bool,
    pub priority: Priority,
}

impl Message {
    /// Whole days elapsed since the message was sent, as shown in the inbox.
    /// Timestamps ahead of `now` count as today.
    pub fn age_label(&self, now: DateTime<Utc>) -> String {
        match (now - self.timestamp).num_days() {
            days if days <= 0 => "Today".to_string(),
            1 => "Yesterday".to_string(),
            days => format!("{} days ago", days),
        }
    }
}

impl Record for Message {
    const RESOURCE: &'static str = "messages";
    const LABEL: &'static str = "Message";

    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    fn set_id(&mut self, id: String) {
        self.id = Some(id);
    }

    fn search_fields(&self) -> Vec<&str> {
        let mut fields = vec![self.title.as_str(), self.content.as_str()];
        if let Some(book_title) = &self.book_title {
            fields.push(book_title);
        }
        fields
    }

    fn status(&self) -> Option<&str> {
        Some(self.kind.as_str())
    }
}
