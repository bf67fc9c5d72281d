//! Author model

use serde::{Deserialize, Serialize};

use super::{enums::AuthorStatus, Record};

/// Contributing author profile
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Author {
    #[serde(
        default,
        deserialize_with = "super::deserialize_id",
        skip_serializing_if = "Option::is_none"
    )]
    pub id: Option<String>,
    pub name: String,
    pub specialty: String,
    #[serde(default)]
    pub bio: String,
    pub status: AuthorStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub joined_year: Option<i32>,
    #[serde(default)]
    pub articles_count: u32,
    /// 0.0 to 5.0
    #[serde(default)]
    pub rating: f64,
}

impl Record for Author {
    const RESOURCE: &'static str = "authors";
    const LABEL: &'static str = "Author";

    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    fn set_id(&mut self, id: String) {
        self.id = Some(id);
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![self.name.as_str(), self.specialty.as_str()]
    }

    fn status(&self) -> Option<&str> {
        Some(self.status.as_str())
    }
}
