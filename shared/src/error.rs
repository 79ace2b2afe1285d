//! # Validation Errors
//!
//! Error kinds produced by field validation and the per-field message catalog
//! used to render them.
//!
//! Validation failures are ordinary values: validators return
//! `Option<ValidationError>` and the form keeps them for display.

use std::fmt;

use crate::fields::FieldId;

/// Category of a validation failure
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    InvalidLength,
    InvalidFormat,
    PasswordMismatch,
    /// Generated at submit time for an empty required field
    Required,
}

/// Message catalog keyed by field and error kind
static MESSAGES: &[(FieldId, ErrorKind, &str)] = &[
    (FieldId::UserId, ErrorKind::InvalidLength, "Must be at least 5 characters."),
    (FieldId::UserId, ErrorKind::InvalidFormat, "Only letters and numbers are allowed."),
    (
        FieldId::UserPw,
        ErrorKind::InvalidFormat,
        "8+ characters including letters, numbers and symbols.",
    ),
    (FieldId::UserPwConfirm, ErrorKind::PasswordMismatch, "Passwords do not match."),
    (FieldId::UserEmail, ErrorKind::InvalidFormat, "Invalid email address."),
];

/// A validation failure for one field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidationError {
    pub field: FieldId,
    pub kind: ErrorKind,
}

impl ValidationError {
    pub fn new(field: FieldId, kind: ErrorKind) -> Self {
        Self { field, kind }
    }

    pub fn required(field: FieldId) -> Self {
        Self::new(field, ErrorKind::Required)
    }

    /// Catalog entry for this error, if the field declares one.
    /// `Required` messages are built from the field label instead.
    pub fn catalog_message(&self) -> Option<&'static str> {
        MESSAGES
            .iter()
            .find(|(field, kind, _)| *field == self.field && *kind == self.kind)
            .map(|(_, _, message)| *message)
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.kind == ErrorKind::Required {
            return write!(f, "{} is required.", self.field.definition().label);
        }
        match self.catalog_message() {
            Some(message) => f.write_str(message),
            None => write!(f, "Invalid value for {}.", self.field.definition().label),
        }
    }
}

impl std::error::Error for ValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_messages() {
        let err = ValidationError::new(FieldId::UserId, ErrorKind::InvalidLength);
        assert_eq!(err.to_string(), "Must be at least 5 characters.");

        let err = ValidationError::new(FieldId::UserPwConfirm, ErrorKind::PasswordMismatch);
        assert_eq!(err.to_string(), "Passwords do not match.");
    }

    #[test]
    fn test_required_message_uses_label() {
        assert_eq!(ValidationError::required(FieldId::UserId).to_string(), "User ID is required.");
        assert_eq!(
            ValidationError::required(FieldId::UserPwConfirm).to_string(),
            "Confirm Password is required."
        );
    }

    #[test]
    fn test_uncatalogued_kind_falls_back_to_label() {
        let err = ValidationError::new(FieldId::UserEmail, ErrorKind::PasswordMismatch);
        assert!(err.catalog_message().is_none());
        assert_eq!(err.to_string(), "Invalid value for Email.");
    }
}
