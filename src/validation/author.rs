//! Author form rules

use once_cell::sync::Lazy;

use super::{FieldErrors, TextRule};
use crate::{
    error::{AppError, AppResult},
    models::Author,
    services::session::Draft,
};

static NAME: Lazy<TextRule> =
    Lazy::new(|| TextRule::new("Name", Some(r"[^A-Za-z \-'.]"), true, 2, 50));
static SPECIALTY: Lazy<TextRule> =
    Lazy::new(|| TextRule::new("Specialty", Some(r"[^A-Za-z &\-]"), true, 2, 50));
static BIO: Lazy<TextRule> = Lazy::new(|| TextRule::new("Bio", None, false, 0, 300));

pub const MAX_RATING: f64 = 5.0;

/// Keeps digits only; empty input counts as zero.
pub fn sanitize_count(raw: &str) -> u32 {
    let digits: String = raw.chars().filter(char::is_ascii_digit).collect();
    digits.parse().unwrap_or(0)
}

pub fn sanitize_rating(raw: &str) -> f64 {
    raw.trim().parse().unwrap_or(0.0)
}

pub fn validate_rating(rating: f64) -> Option<String> {
    if !rating.is_finite() || !(0.0..=MAX_RATING).contains(&rating) {
        return Some(format!("Rating must be between 0 and {}", MAX_RATING));
    }
    None
}

impl Draft for Author {
    const FIELDS: &'static [&'static str] =
        &["name", "specialty", "bio", "status", "articlesCount", "rating"];

    fn set_field(&mut self, field: &str, raw: &str) -> AppResult<()> {
        match field {
            "name" => self.name = NAME.sanitize(raw),
            "specialty" => self.specialty = SPECIALTY.sanitize(raw),
            "bio" => self.bio = BIO.sanitize(raw),
            "status" => self.status = raw.parse()?,
            "articlesCount" => self.articles_count = sanitize_count(raw),
            "rating" => self.rating = sanitize_rating(raw),
            other => {
                return Err(AppError::InvalidValue(format!("Author has no field '{}'", other)));
            }
        }
        Ok(())
    }

    fn validate(&self) -> FieldErrors {
        let mut errors = FieldErrors::new();
        errors.check("name", NAME.validate(&self.name));
        errors.check("specialty", SPECIALTY.validate(&self.specialty));
        errors.check("bio", BIO.validate(&self.bio));
        errors.check("rating", validate_rating(self.rating));
        errors
    }
}
