use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Errors raised when addressing a form field by key.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error("unknown form field: {0:?}")]
    Unknown(String),
}

/// The five recognized contact form keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldName {
    Name,
    Company,
    Email,
    Phone,
    Message,
}

impl FieldName {
    /// All fields in display order.
    pub const ALL: [FieldName; 5] = [
        FieldName::Name,
        FieldName::Company,
        FieldName::Email,
        FieldName::Phone,
        FieldName::Message,
    ];

    /// The key used by hosts to address this field.
    pub fn key(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Company => "company",
            Self::Email => "email",
            Self::Phone => "phone",
            Self::Message => "message",
        }
    }

    /// Position in [`FieldName::ALL`].
    pub fn index(self) -> usize {
        self as usize
    }

    /// Whether the host must check this field for presence before submitting.
    pub fn is_required(self) -> bool {
        !matches!(self, Self::Phone)
    }
}

impl fmt::Display for FieldName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for FieldName {
    type Err = FieldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|field| field.key() == s)
            .ok_or_else(|| FieldError::Unknown(s.to_string()))
    }
}

/// Current values of the contact form inputs.
///
/// Every field defaults to the empty string.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ContactFields {
    pub name: String,
    pub company: String,
    pub email: String,
    pub phone: String,
    pub message: String,
}

impl ContactFields {
    /// Returns the value of `field`.
    pub fn get(&self, field: FieldName) -> &str {
        match field {
            FieldName::Name => &self.name,
            FieldName::Company => &self.company,
            FieldName::Email => &self.email,
            FieldName::Phone => &self.phone,
            FieldName::Message => &self.message,
        }
    }

    /// Replaces the value of exactly one field.
    pub fn set(&mut self, field: FieldName, value: impl Into<String>) {
        let slot = match field {
            FieldName::Name => &mut self.name,
            FieldName::Company => &mut self.company,
            FieldName::Email => &mut self.email,
            FieldName::Phone => &mut self.phone,
            FieldName::Message => &mut self.message,
        };
        *slot = value.into();
    }

    /// Returns `true` if every field is empty.
    pub fn is_empty(&self) -> bool {
        FieldName::ALL.iter().all(|f| self.get(*f).is_empty())
    }

    /// Restores every field to the empty string.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
