use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

use super::fields::{ContactFields, FieldName};

/// Host-level input check failures.
///
/// These mirror what a browser enforces for `required` and `type=email`
/// inputs before the submit event ever reaches the workflow.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{0} is required")]
    Missing(FieldName),
    #[error("invalid email address: {0}")]
    InvalidEmail(String),
}

// WHATWG "valid email address" production.
static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)*$",
    )
    .expect("valid hardcoded regex")
});

/// Validates that a required field has any value at all.
pub fn validate_required(field: FieldName, value: &str) -> Result<(), ValidationError> {
    if field.is_required() && value.is_empty() {
        Err(ValidationError::Missing(field))
    } else {
        Ok(())
    }
}

/// Validates an email address the way an HTML `type=email` input does.
///
/// An empty value passes; presence is [`validate_required`]'s concern.
pub fn validate_email(email: &str) -> Result<(), ValidationError> {
    if email.is_empty() || EMAIL_RE.is_match(email) {
        Ok(())
    } else {
        Err(ValidationError::InvalidEmail(email.to_string()))
    }
}

/// Runs every host-level check, returning the failures per field.
pub fn validate_fields(fields: &ContactFields) -> Vec<(FieldName, ValidationError)> {
    let mut errors = Vec::new();
    for field in FieldName::ALL {
        if let Err(e) = validate_required(field, fields.get(field)) {
            errors.push((field, e));
        }
    }
    if let Err(e) = validate_email(&fields.email) {
        errors.push((FieldName::Email, e));
    }
    errors
}
