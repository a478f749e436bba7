//! Order form errors
//!
//! Field validation failures are not errors here: they are ordinary values
//! (see [`crate::form::ValidationResult`]) shown next to the offending field.
//! This module covers the remaining failures, which come from wiring the
//! form to a frontend with the wrong field names or topping ids.

use thiserror::Error;

/// Errors raised by the order form core.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum OrderError {
    /// A field-change event named a field the form does not have.
    #[error("unknown form field: {0}")]
    UnknownField(String),

    /// A topping event named a topping that is not in the catalog.
    #[error("unknown topping id: {0}")]
    UnknownTopping(String),

    /// A size string that is not one of the catalog sizes.
    #[error("invalid size: {0:?}")]
    InvalidSize(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(
            OrderError::UnknownField("email".to_string()).to_string(),
            "unknown form field: email"
        );
        assert_eq!(
            OrderError::InvalidSize("X".to_string()).to_string(),
            "invalid size: \"X\""
        );
    }
}
