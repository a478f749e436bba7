//! # Field Validation Types
//!
//! Field identifiers, field-level validation errors and the result of a
//! validation pass.
//!
//! A [`ValidationResult`] holds at most one message per field. Validators
//! push every failing field into it in one pass rather than stopping at the
//! first failure, so the form can show all messages at once.
//!
//! ## Usage
//!
//! ```rust,ignore
//! let mut result = ValidationResult::default();
//! result.push(ValidationError::required(Field::Size));
//! assert_eq!(result.get(Field::Size), Some("Size is required"));
//! ```

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use crate::errors::OrderError;

/// A validated field on the order form
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Field {
    /// Customer name
    FullName,
    /// Pizza size
    Size,
}

impl Field {
    /// Get all validated fields in display order.
    #[must_use]
    pub fn all() -> &'static [Self] {
        &[Self::FullName, Self::Size]
    }

    /// Form identifier (element id / state key)
    #[must_use]
    pub fn key(self) -> &'static str {
        match self {
            Self::FullName => "fullName",
            Self::Size => "size",
        }
    }

    /// Label shown next to the input
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::FullName => "Full Name",
            Self::Size => "Size",
        }
    }

    /// Lower-case name used inside constraint messages
    #[must_use]
    pub fn path(self) -> &'static str {
        match self {
            Self::FullName => "full name",
            Self::Size => "size",
        }
    }
}

impl FromStr for Field {
    type Err = OrderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::all()
            .iter()
            .copied()
            .find(|field| field.key() == s)
            .ok_or_else(|| OrderError::UnknownField(s.to_string()))
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}

/// Validation error for a specific field
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ValidationError {
    /// Field the message belongs to
    pub field: Field,
    /// Human-readable error message
    pub message: String,
}

impl ValidationError {
    /// Create a new validation error
    #[must_use]
    pub fn new(field: Field, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }

    /// Create a validation error for a required field
    #[must_use]
    pub fn required(field: Field) -> Self {
        Self::new(field, format!("{} is required", field.label()))
    }

    /// Create a validation error for a field that's too short
    #[must_use]
    pub fn too_short(field: Field, min: usize) -> Self {
        Self::new(
            field,
            format!("{} must be at least {min} characters", field.path()),
        )
    }

    /// Create a validation error for a field that's too long
    #[must_use]
    pub fn too_long(field: Field, max: usize) -> Self {
        Self::new(
            field,
            format!("{} must be at most {max} characters", field.path()),
        )
    }

    /// Create a validation error for a value outside an allowed set
    #[must_use]
    pub fn not_one_of(field: Field, allowed: &[&str]) -> Self {
        Self::new(
            field,
            format!("{} must be {}", field.path(), allowed.join(" or ")),
        )
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Outcome of one validation pass: empty when valid, otherwise one message
/// per invalid field.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ValidationResult {
    errors: BTreeMap<Field, String>,
}

impl ValidationResult {
    /// Record an error. A second error for the same field replaces the first.
    pub fn push(&mut self, error: ValidationError) {
        self.errors.insert(error.field, error.message);
    }

    /// Check if no field failed
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Number of invalid fields
    #[must_use]
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Check if there are no errors
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Get error for a specific field
    #[must_use]
    pub fn get(&self, field: Field) -> Option<&str> {
        self.errors.get(&field).map(String::as_str)
    }
}

impl FromIterator<ValidationError> for ValidationResult {
    fn from_iter<I: IntoIterator<Item = ValidationError>>(iter: I) -> Self {
        let mut result = Self::default();
        for error in iter {
            result.push(error);
        }
        result
    }
}

/// Trait for validators over some form data
pub trait Validator<T> {
    /// Validate the data and return any errors
    fn validate(&self, data: &T) -> ValidationResult;

    /// Check if data is valid
    fn is_valid(&self, data: &T) -> bool {
        self.validate(data).is_valid()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_message_uses_label() {
        let err = ValidationError::required(Field::FullName);
        assert_eq!(err.message, "Full Name is required");
    }

    #[test]
    fn test_length_messages_use_path() {
        assert_eq!(
            ValidationError::too_short(Field::FullName, 3).message,
            "full name must be at least 3 characters"
        );
        assert_eq!(
            ValidationError::too_long(Field::FullName, 20).message,
            "full name must be at most 20 characters"
        );
    }

    #[test]
    fn test_not_one_of_message() {
        let err = ValidationError::not_one_of(Field::Size, &["S", "M", "L"]);
        assert_eq!(err.message, "size must be S or M or L");
    }

    #[test]
    fn test_result_keeps_one_message_per_field() {
        let result: ValidationResult = [
            ValidationError::required(Field::Size),
            ValidationError::not_one_of(Field::Size, &["S"]),
        ]
        .into_iter()
        .collect();
        assert_eq!(result.len(), 1);
        assert_eq!(result.get(Field::Size), Some("size must be S"));
        assert_eq!(result.get(Field::FullName), None);
    }

    #[test]
    fn test_field_from_key() {
        assert_eq!("fullName".parse::<Field>().ok(), Some(Field::FullName));
        assert_eq!(
            "email".parse::<Field>(),
            Err(OrderError::UnknownField("email".to_string()))
        );
    }
}
