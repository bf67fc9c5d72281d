//! Form field sanitization and validation.
//!
//! Each text field has a [`TextRule`]: the rule strips disallowed characters
//! as the user types (`sanitize`) and checks the settled value on submit
//! (`validate`). Per-record rule sets live in the submodules together with the
//! record's [`Draft`](crate::services::session::Draft) implementation.

pub mod author;
pub mod book;
pub mod profile;

use chrono::{Datelike, Local};
use indexmap::IndexMap;
use regex::Regex;
use serde::Serialize;

/// Field name to message, in form display order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FieldErrors(IndexMap<String, String>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.0.insert(field.into(), message.into());
    }

    /// Record `message` for `field` when present
    pub fn check(&mut self, field: &str, message: Option<String>) {
        if let Some(message) = message {
            self.insert(field, message);
        }
    }

    pub fn clear_field(&mut self, field: &str) -> Option<String> {
        self.0.shift_remove(field)
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    /// The error of the first invalid field in form order
    pub fn first(&self) -> Option<(&str, &str)> {
        self.0.first().map(|(f, m)| (f.as_str(), m.as_str()))
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(f, m)| (f.as_str(), m.as_str()))
    }
}

impl std::fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let parts: Vec<String> = self
            .iter()
            .map(|(field, message)| format!("{}: {}", field, message))
            .collect();
        write!(f, "{}", parts.join("; "))
    }
}

/// Sanitization and length rule for a free-text field
#[derive(Debug)]
pub struct TextRule {
    label: &'static str,
    disallowed: Option<Regex>,
    required: bool,
    min: usize,
    max: usize,
}

impl TextRule {
    /// `disallowed` is a character class matching what gets stripped on input.
    pub fn new(
        label: &'static str,
        disallowed: Option<&str>,
        required: bool,
        min: usize,
        max: usize,
    ) -> Self {
        Self {
            label,
            disallowed: disallowed.map(|pattern| Regex::new(pattern).expect("valid character class")),
            required,
            min,
            max,
        }
    }

    pub fn sanitize(&self, raw: &str) -> String {
        match &self.disallowed {
            Some(re) => re.replace_all(raw, "").into_owned(),
            None => raw.to_string(),
        }
    }

    /// Length is measured in characters on the trimmed value.
    pub fn validate(&self, value: &str) -> Option<String> {
        let len = value.trim().chars().count();
        if len == 0 {
            return self.required.then(|| format!("{} is required", self.label));
        }
        if len < self.min || len > self.max {
            return Some(format!(
                "{} must be between {} and {} characters",
                self.label, self.min, self.max
            ));
        }
        None
    }
}

pub fn current_year() -> i32 {
    Local::now().year()
}
