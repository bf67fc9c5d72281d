//! Edit session for the add/edit modal.
//!
//! ```text
//! create()/edit() ──► Open ──begin_submit()──► Submitting ──complete()──► Closed(Saved)
//!                      ▲  │   (errors: stays Open)   │
//!                      │  └──cancel()──► Closed(Cancelled)
//!                      └──────────fail()─────────────┘
//! ```
//!
//! The draft is an owned copy of the record; nothing reaches the collection
//! until the dispatcher commits it and the store reloads.

use tracing::warn;

use crate::{
    error::{AppError, AppResult},
    models::Record,
    validation::FieldErrors,
};

/// A record type that can be edited through a form
pub trait Draft: Record {
    /// Form fields in display order
    const FIELDS: &'static [&'static str];

    /// Sanitize `raw` for `field` and store it
    fn set_field(&mut self, field: &str, raw: &str) -> AppResult<()>;

    fn validate(&self) -> FieldErrors;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionMode {
    Create,
    Edit { id: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Saved,
    Cancelled,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Open,
    Submitting,
    Closed(Outcome),
}

#[derive(Debug, Clone)]
pub struct EditSession<R> {
    mode: SessionMode,
    draft: R,
    errors: FieldErrors,
    state: SessionState,
}

impl<R: Draft> EditSession<R> {
    /// Open a session for a new record starting from `blank`
    pub fn create(blank: R) -> Self {
        Self {
            mode: SessionMode::Create,
            draft: blank,
            errors: FieldErrors::new(),
            state: SessionState::Open,
        }
    }

    /// Open a session seeded with a copy of `record`
    pub fn edit(record: &R) -> AppResult<Self> {
        let id = record.id().ok_or_else(|| {
            AppError::InvalidValue(format!("cannot edit a {} that has no id", R::LABEL))
        })?;
        Ok(Self {
            mode: SessionMode::Edit { id: id.to_string() },
            draft: record.clone(),
            errors: FieldErrors::new(),
            state: SessionState::Open,
        })
    }

    pub fn mode(&self) -> &SessionMode {
        &self.mode
    }

    pub fn draft(&self) -> &R {
        &self.draft
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn is_open(&self) -> bool {
        self.state == SessionState::Open
    }

    pub fn is_submitting(&self) -> bool {
        self.state == SessionState::Submitting
    }

    /// Form inputs are disabled unless the session is open.
    pub fn update_field(&mut self, field: &str, raw: &str) -> AppResult<()> {
        self.ensure_open("edit")?;
        self.draft.set_field(field, raw)?;
        self.errors.clear_field(field);
        Ok(())
    }

    /// Validate the draft and, when clean, move to `Submitting`.
    ///
    /// Returns the payload to dispatch. On validation failure the session
    /// stays open with every field error recorded.
    pub fn begin_submit(&mut self) -> AppResult<R> {
        self.ensure_open("submit")?;
        let errors = self.draft.validate();
        if !errors.is_empty() {
            warn!(
                resource = R::RESOURCE,
                invalid_fields = errors.len(),
                "Rejected submission with invalid fields"
            );
            self.errors = errors.clone();
            return Err(AppError::Validation(errors));
        }
        self.errors = FieldErrors::new();
        self.state = SessionState::Submitting;
        Ok(self.draft.clone())
    }

    pub fn complete(&mut self) {
        if self.state == SessionState::Submitting {
            self.state = SessionState::Closed(Outcome::Saved);
        }
    }

    /// The dispatch failed; reopen so the user can retry or cancel.
    pub fn fail(&mut self) {
        if self.state == SessionState::Submitting {
            self.state = SessionState::Open;
        }
    }

    pub fn cancel(&mut self) -> AppResult<()> {
        match self.state {
            SessionState::Submitting => Err(AppError::Busy(
                "cannot cancel while a save is in flight".to_string(),
            )),
            SessionState::Closed(_) => Ok(()),
            SessionState::Open => {
                self.errors = FieldErrors::new();
                self.state = SessionState::Closed(Outcome::Cancelled);
                Ok(())
            }
        }
    }

    fn ensure_open(&self, action: &str) -> AppResult<()> {
        match self.state {
            SessionState::Open => Ok(()),
            SessionState::Submitting => Err(AppError::Busy(format!(
                "cannot {} while a save is in flight",
                action
            ))),
            SessionState::Closed(_) => {
                Err(AppError::Busy(format!("cannot {} a closed session", action)))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Book, BookStatus};

    fn gatsby() -> Book {
        Book {
            id: Some("1".into()),
            ..Book::new("The Great Gatsby", "F. Scott Fitzgerald", "Fiction", 1925, BookStatus::Available)
        }
    }

    #[test]
    fn test_edit_draft_is_a_copy() {
        let original = gatsby();
        let mut session = EditSession::edit(&original).unwrap();
        session.update_field("title", "Gatsby Reloaded").unwrap();

        assert_eq!(session.draft().title, "Gatsby Reloaded");
        assert_eq!(original.title, "The Great Gatsby");
        assert_eq!(session.mode(), &SessionMode::Edit { id: "1".into() });
    }

    #[test]
    fn test_edit_requires_id() {
        let unsaved = Book::new("Dune", "Frank Herbert", "Science", 1965, BookStatus::Available);
        assert!(EditSession::edit(&unsaved).is_err());
    }

    #[test]
    fn test_invalid_submit_stays_open_with_all_errors() {
        let mut session = EditSession::create(Book::default());
        let err = session.begin_submit().unwrap_err();

        assert!(matches!(err, AppError::Validation(_)));
        assert!(session.is_open());
        assert!(!session.is_submitting());
        assert_eq!(session.errors().len(), 3);
        assert_eq!(session.errors().first().map(|(f, _)| f), Some("title"));
    }

    #[test]
    fn test_editing_a_field_clears_only_its_error() {
        let mut session = EditSession::create(Book::default());
        let _ = session.begin_submit();
        session.update_field("title", "X").unwrap();

        assert!(session.errors().get("title").is_none());
        assert!(session.errors().get("author").is_some());
    }

    #[test]
    fn test_submitting_blocks_input_and_cancel() {
        let mut session = EditSession::edit(&gatsby()).unwrap();
        let payload = session.begin_submit().unwrap();
        assert_eq!(payload.title, "The Great Gatsby");
        assert!(session.is_submitting());

        assert!(matches!(session.update_field("title", "Y"), Err(AppError::Busy(_))));
        assert!(matches!(session.begin_submit(), Err(AppError::Busy(_))));
        assert!(matches!(session.cancel(), Err(AppError::Busy(_))));

        session.fail();
        assert!(session.is_open());
        session.begin_submit().unwrap();
        session.complete();
        assert_eq!(session.state(), SessionState::Closed(Outcome::Saved));
    }

    #[test]
    fn test_cancel_discards_errors() {
        let mut session = EditSession::create(Book::default());
        let _ = session.begin_submit();
        session.cancel().unwrap();

        assert_eq!(session.state(), SessionState::Closed(Outcome::Cancelled));
        assert!(session.errors().is_empty());
        assert!(session.update_field("title", "Late").is_err());
    }
}
