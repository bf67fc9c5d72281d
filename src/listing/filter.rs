//! Search and selector filtering over a page collection.

use crate::models::Record;

/// Label of the catch-all selector option
pub const ALL: &str = "All";

/// A category or status dropdown: everything, or one exact value
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Selector {
    #[default]
    All,
    Only(String),
}

impl Selector {
    pub fn matches(&self, value: Option<&str>) -> bool {
        match self {
            Selector::All => true,
            Selector::Only(wanted) => value == Some(wanted.as_str()),
        }
    }

    pub fn label(&self) -> &str {
        match self {
            Selector::All => ALL,
            Selector::Only(value) => value,
        }
    }
}

impl From<&str> for Selector {
    fn from(value: &str) -> Self {
        if value == ALL {
            Selector::All
        } else {
            Selector::Only(value.to_string())
        }
    }
}

/// Page-local filter controls
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterState {
    pub search_text: String,
    pub category: Selector,
    pub status: Selector,
}

impl FilterState {
    pub fn is_identity(&self) -> bool {
        self.search_text.is_empty() && self.category == Selector::All && self.status == Selector::All
    }

    /// Conjunction of the search, category and status predicates
    pub fn matches<R: Record>(&self, record: &R) -> bool {
        self.matches_search(record)
            && self.category.matches(record.category())
            && self.status.matches(record.status())
    }

    fn matches_search<R: Record>(&self, record: &R) -> bool {
        if self.search_text.is_empty() {
            return true;
        }
        let needle = self.search_text.to_lowercase();
        record
            .search_fields()
            .iter()
            .any(|field| field.to_lowercase().contains(&needle))
    }
}

/// Records passing `state`, in collection order
pub fn filter<'a, R: Record>(collection: &'a [R], state: &FilterState) -> Vec<&'a R> {
    let filtered: Vec<&R> = collection.iter().filter(|r| state.matches(*r)).collect();
    tracing::debug!(
        resource = R::RESOURCE,
        total = collection.len(),
        filtered = filtered.len(),
        "filter applied"
    );
    filtered
}

/// Selector options for the category dropdown: `All`, then each distinct
/// category in first-seen order.
pub fn category_options<R: Record>(collection: &[R]) -> Vec<String> {
    let mut options = vec![ALL.to_string()];
    for category in collection.iter().filter_map(Record::category) {
        if !options.iter().any(|o| o == category) {
            options.push(category.to_string());
        }
    }
    options
}
