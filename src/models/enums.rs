//! Closed domain enums.
//!
//! Every enum here rejects values outside its declared set: serde
//! deserialization fails and `FromStr` returns [`AppError::InvalidValue`].

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::AppError;

fn invalid(kind: &str, value: &str) -> AppError {
    AppError::InvalidValue(format!("'{}' is not a valid {}", value, kind))
}

// ---------------------------------------------------------------------------
// BookStatus
// ---------------------------------------------------------------------------

/// Circulation status of a book
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum BookStatus {
    #[default]
    Available,
    Issued,
}

impl BookStatus {
    pub const ALL: [BookStatus; 2] = [BookStatus::Available, BookStatus::Issued];

    pub fn as_str(&self) -> &'static str {
        match self {
            BookStatus::Available => "Available",
            BookStatus::Issued => "Issued",
        }
    }
}

impl FromStr for BookStatus {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Available" => Ok(BookStatus::Available),
            "Issued" => Ok(BookStatus::Issued),
            other => Err(invalid("book status", other)),
        }
    }
}

impl std::fmt::Display for BookStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ---------------------------------------------------------------------------
// AuthorStatus / SettingStatus
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum AuthorStatus {
    #[default]
    Active,
    Inactive,
}

impl AuthorStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            AuthorStatus::Active => "Active",
            AuthorStatus::Inactive => "Inactive",
        }
    }
}

impl FromStr for AuthorStatus {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Active" => Ok(AuthorStatus::Active),
            "Inactive" => Ok(AuthorStatus::Inactive),
            other => Err(invalid("author status", other)),
        }
    }
}

impl std::fmt::Display for AuthorStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Whether a setting is currently in effect
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum SettingStatus {
    #[default]
    Active,
    Inactive,
}

impl SettingStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            SettingStatus::Active => "Active",
            SettingStatus::Inactive => "Inactive",
        }
    }
}

// ---------------------------------------------------------------------------
// MessageType / Priority
// ---------------------------------------------------------------------------

/// Inbox message kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageType {
    Request,
    Overdue,
    Return,
    Notification,
}

impl MessageType {
    pub fn as_str(&self) -> &'static str {
        match self {
            MessageType::Request => "request",
            MessageType::Overdue => "overdue",
            MessageType::Return => "return",
            MessageType::Notification => "notification",
        }
    }
}

impl FromStr for MessageType {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "request" => Ok(MessageType::Request),
            "overdue" => Ok(MessageType::Overdue),
            "return" => Ok(MessageType::Return),
            "notification" => Ok(MessageType::Notification),
            other => Err(invalid("message type", other)),
        }
    }
}

impl std::fmt::Display for MessageType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl FromStr for Priority {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "high" => Ok(Priority::High),
            "medium" => Ok(Priority::Medium),
            "low" => Ok(Priority::Low),
            other => Err(invalid("priority", other)),
        }
    }
}

// ---------------------------------------------------------------------------
// Role
// ---------------------------------------------------------------------------

/// Account role shown on the profile page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    Admin,
    Librarian,
    Member,
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Role::Admin => "Admin",
            Role::Librarian => "Librarian",
            Role::Member => "Member",
        };
        write!(f, "{}", label)
    }
}
