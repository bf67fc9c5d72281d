//! Profile form rules

use once_cell::sync::Lazy;
use regex::Regex;
use std::borrow::Cow;
use validator::{Validate, ValidateEmail, ValidationError};

use super::FieldErrors;
use crate::{
    error::{AppError, AppResult},
    models::UserProfile,
    services::session::Draft,
};

static PHONE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[+]?[\d\s\-()]{10,}$").unwrap());

fn failure(code: &'static str, message: &'static str) -> ValidationError {
    let mut error = ValidationError::new(code);
    error.message = Some(Cow::Borrowed(message));
    error
}

fn validate_name(name: &str) -> Result<(), ValidationError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(failure("required", "Name is required"));
    }
    if name.chars().count() < 2 {
        return Err(failure("length", "Name must be at least 2 characters"));
    }
    Ok(())
}

fn validate_email(email: &str) -> Result<(), ValidationError> {
    let email = email.trim();
    if email.is_empty() {
        return Err(failure("required", "Email is required"));
    }
    if !email.validate_email() {
        return Err(failure("email", "Please enter a valid email address"));
    }
    Ok(())
}

fn validate_phone(phone: &str) -> Result<(), ValidationError> {
    let phone = phone.trim();
    if !phone.is_empty() && !PHONE.is_match(phone) {
        return Err(failure("phone", "Please enter a valid phone number"));
    }
    Ok(())
}

/// Editable part of the profile
#[derive(Debug, Validate)]
pub struct ProfileForm {
    #[validate(custom(function = "validate_name"))]
    pub name: String,
    #[validate(custom(function = "validate_email"))]
    pub email: String,
    #[validate(custom(function = "validate_phone"))]
    pub phone: String,
}

impl From<&UserProfile> for ProfileForm {
    fn from(profile: &UserProfile) -> Self {
        Self {
            name: profile.name.clone(),
            email: profile.email.clone(),
            phone: profile.phone.clone().unwrap_or_default(),
        }
    }
}

impl ProfileForm {
    /// Validation result as field errors in form order
    pub fn field_errors(&self) -> FieldErrors {
        let mut errors = FieldErrors::new();
        if let Err(report) = self.validate() {
            let by_field = report.field_errors();
            for field in UserProfile::FIELDS {
                let message = by_field
                    .get(*field)
                    .and_then(|list| list.first())
                    .map(|e| {
                        e.message
                            .as_ref()
                            .map(|m| m.to_string())
                            .unwrap_or_else(|| e.code.to_string())
                    });
                errors.check(field, message);
            }
        }
        errors
    }
}

impl Draft for UserProfile {
    const FIELDS: &'static [&'static str] = &["name", "email", "phone"];

    fn set_field(&mut self, field: &str, raw: &str) -> AppResult<()> {
        match field {
            "name" => self.name = raw.to_string(),
            "email" => self.email = raw.to_string(),
            "phone" => {
                self.phone = if raw.trim().is_empty() {
                    None
                } else {
                    Some(raw.to_string())
                }
            }
            other => {
                return Err(AppError::InvalidValue(format!("Profile has no field '{}'", other)));
            }
        }
        Ok(())
    }

    fn validate(&self) -> FieldErrors {
        ProfileForm::from(self).field_errors()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(name: &str, email: &str, phone: &str) -> ProfileForm {
        ProfileForm {
            name: name.into(),
            email: email.into(),
            phone: phone.into(),
        }
    }

    #[test]
    fn test_valid_profile() {
        assert!(form("John Doe", "john.doe@bookdash.com", "+91 98765 43210")
            .field_errors()
            .is_empty());
        assert!(form("John Doe", "john.doe@bookdash.com", "").field_errors().is_empty());
    }

    #[test]
    fn test_profile_errors_in_form_order() {
        let errors = form(" ", "not-an-email", "12-34").field_errors();
        assert_eq!(errors.len(), 3);
        assert_eq!(errors.first(), Some(("name", "Name is required")));
        assert_eq!(errors.get("email"), Some("Please enter a valid email address"));
        assert_eq!(errors.get("phone"), Some("Please enter a valid phone number"));
    }

    #[test]
    fn test_short_name() {
        let errors = form("J", "j@x.io", "").field_errors();
        assert_eq!(errors.get("name"), Some("Name must be at least 2 characters"));
    }
}
