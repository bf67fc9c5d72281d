//! Book form rules

use once_cell::sync::Lazy;

use super::{current_year, FieldErrors, TextRule};
use crate::{
    error::{AppError, AppResult},
    models::Book,
    services::session::Draft,
};

static TITLE: Lazy<TextRule> =
    Lazy::new(|| TextRule::new("Title", Some(r#"[^A-Za-z0-9 \-:.,!?'"()&]"#), true, 2, 100));
static AUTHOR: Lazy<TextRule> =
    Lazy::new(|| TextRule::new("Author", Some(r"[^A-Za-z \-'.]"), true, 2, 50));
static GENRE: Lazy<TextRule> =
    Lazy::new(|| TextRule::new("Genre", Some(r"[^A-Za-z \-]"), true, 2, 30));

/// Oldest publication year the form accepts
pub const MIN_YEAR: i32 = 1000;

pub fn sanitize_title(raw: &str) -> String {
    TITLE.sanitize(raw)
}

pub fn validate_title(value: &str) -> Option<String> {
    TITLE.validate(value)
}

pub fn sanitize_author(raw: &str) -> String {
    AUTHOR.sanitize(raw)
}

pub fn validate_author(value: &str) -> Option<String> {
    AUTHOR.validate(value)
}

pub fn sanitize_genre(raw: &str) -> String {
    GENRE.sanitize(raw)
}

pub fn validate_genre(value: &str) -> Option<String> {
    GENRE.validate(value)
}

/// Unparseable input falls back to the current year.
pub fn sanitize_year(raw: &str) -> i32 {
    raw.trim().parse().unwrap_or_else(|_| current_year())
}

pub fn validate_year(year: i32) -> Option<String> {
    let max = current_year();
    if year < MIN_YEAR || year > max {
        return Some(format!("Published year must be between {} and {}", MIN_YEAR, max));
    }
    None
}

impl Draft for Book {
    const FIELDS: &'static [&'static str] = &["title", "author", "genre", "publishedYear", "status"];

    fn set_field(&mut self, field: &str, raw: &str) -> AppResult<()> {
        match field {
            "title" => self.title = sanitize_title(raw),
            "author" => self.author = sanitize_author(raw),
            "genre" => self.genre = sanitize_genre(raw),
            "publishedYear" => self.published_year = sanitize_year(raw),
            "status" => self.status = raw.parse()?,
            other => {
                return Err(AppError::InvalidValue(format!("Book has no field '{}'", other)));
            }
        }
        Ok(())
    }

    fn validate(&self) -> FieldErrors {
        let mut errors = FieldErrors::new();
        errors.check("title", validate_title(&self.title));
        errors.check("author", validate_author(&self.author));
        errors.check("genre", validate_genre(&self.genre));
        errors.check("publishedYear", validate_year(self.published_year));
        errors
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::BookStatus;

    #[test]
    fn test_title_length_bounds() {
        assert_eq!(validate_title(""), Some("Title is required".to_string()));
        assert_eq!(validate_title("AB"), None);
        assert!(validate_title("A").is_some());
        assert_eq!(validate_title(&"x".repeat(100)), None);
        assert!(validate_title(&"x".repeat(101)).is_some());
    }

    #[test]
    fn test_sanitizers_strip_disallowed_chars() {
        assert_eq!(sanitize_title("Book!!@@##"), "Book!!");
        assert_eq!(sanitize_title(r#"Tom & Jerry: "Part 2" (Vol. 1)?"#), r#"Tom & Jerry: "Part 2" (Vol. 1)?"#);
        assert_eq!(sanitize_author("12abc"), "abc");
        assert_eq!(sanitize_author("J.R.R. O'Brien-Smith"), "J.R.R. O'Brien-Smith");
        assert_eq!(sanitize_genre("Sci-Fi 2"), "Sci-Fi ");
    }

    #[test]
    fn test_year_rules() {
        assert_eq!(sanitize_year(" 1949 "), 1949);
        assert_eq!(sanitize_year("19a9"), current_year());
        assert!(validate_year(999).is_some());
        assert_eq!(validate_year(1000), None);
        assert_eq!(validate_year(current_year()), None);
        assert!(validate_year(current_year() + 1).is_some());
    }

    #[test]
    fn test_set_field_sanitizes_before_storing() {
        let mut book = Book::default();
        book.set_field("title", "Dune###").unwrap();
        book.set_field("status", "Issued").unwrap();
        assert_eq!(book.title, "Dune");
        assert_eq!(book.status, BookStatus::Issued);

        assert!(matches!(
            book.set_field("status", "Missing"),
            Err(AppError::InvalidValue(_))
        ));
        assert!(matches!(
            book.set_field("isbn", "123"),
            Err(AppError::InvalidValue(_))
        ));
    }

    #[test]
    fn test_validate_reports_every_invalid_field() {
        let book = Book::new("", "G", "Dystopian", 1949, BookStatus::Available);
        let errors = book.validate();
        assert_eq!(errors.len(), 2);
        assert_eq!(errors.first(), Some(("title", "Title is required")));
        assert!(errors.get("author").is_some());
    }
}
