//! User profile model

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{enums::Role, Record};

/// Signed-in user's profile and borrowing summary
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    #[serde(
        default,
        deserialize_with = "super::deserialize_id",
        skip_serializing_if = "Option::is_none"
    )]
    pub id: Option<String>,
    pub name: String,
    pub email: String,
    pub role: Role,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    pub joined_date: NaiveDate,
    #[serde(default)]
    pub issued_books: u32,
    #[serde(default)]
    pub total_issued: u32,
    #[serde(default)]
    pub overdue_books: u32,
}

impl UserProfile {
    /// Letter shown in the avatar slot when no picture is set
    pub fn initial(&self) -> Option<char> {
        self.name.chars().next()
    }
}

impl Record for UserProfile {
    const RESOURCE: &'static str = "profile";
    const LABEL: &'static str = "Profile";

    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    fn set_id(&mut self, id: String) {
        self.id = Some(id);
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![self.name.as_str(), self.email.as_str()]
    }
}
