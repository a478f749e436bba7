//! Order validation.
//!
//! Full name: required, then length within the configured bounds (counted
//! in UTF-16 code units like a browser string, no trimming). Size: required, then one of the catalog
//! codes. Toppings are never validated.

use crate::catalog::Size;
use crate::config::FormConfig;
use crate::draft::OrderDraft;
use crate::form::{Field, ValidationError, ValidationResult, Validator};

/// Validator for [`OrderDraft`] using the bounds from a [`FormConfig`]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OrderValidator {
    min_name_len: usize,
    max_name_len: usize,
}

impl Default for OrderValidator {
    fn default() -> Self {
        Self::new(&FormConfig::default())
    }
}

impl OrderValidator {
    /// Create a validator from form configuration
    #[must_use]
    pub fn new(config: &FormConfig) -> Self {
        Self {
            min_name_len: config.min_name_len,
            max_name_len: config.max_name_len,
        }
    }

    fn check_full_name(&self, full_name: &str) -> Option<ValidationError> {
        if full_name.is_empty() {
            return Some(ValidationError::required(Field::FullName));
        }
        let len = full_name.encode_utf16().count();
        if len < self.min_name_len {
            Some(ValidationError::too_short(Field::FullName, self.min_name_len))
        } else if len > self.max_name_len {
            Some(ValidationError::too_long(Field::FullName, self.max_name_len))
        } else {
            None
        }
    }

    fn check_size(size: &str) -> Option<ValidationError> {
        if size.is_empty() {
            return Some(ValidationError::required(Field::Size));
        }
        if size.parse::<Size>().is_err() {
            let codes: Vec<&str> = Size::all().iter().map(|s| s.code()).collect();
            return Some(ValidationError::not_one_of(Field::Size, &codes));
        }
        None
    }
}

impl Validator<OrderDraft> for OrderValidator {
    fn validate(&self, draft: &OrderDraft) -> ValidationResult {
        [
            self.check_full_name(draft.full_name()),
            Self::check_size(draft.size()),
        ]
        .into_iter()
        .flatten()
        .collect()
    }
}

/// Validate a draft with the default bounds.
#[must_use]
pub fn validate(draft: &OrderDraft) -> ValidationResult {
    OrderValidator::default().validate(draft)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(name: &str, size: &str) -> OrderDraft {
        OrderDraft::new().with_full_name(name).with_size(size)
    }

    #[test]
    fn test_valid_draft() {
        assert!(validate(&draft("Alice Smith", "L")).is_valid());
    }

    #[test]
    fn test_empty_draft_reports_both_fields() {
        let result = validate(&OrderDraft::new());
        assert_eq!(result.len(), 2);
        assert_eq!(result.get(Field::FullName), Some("Full Name is required"));
        assert_eq!(result.get(Field::Size), Some("Size is required"));
    }

    #[test]
    fn test_name_bounds_are_inclusive() {
        assert!(validate(&draft("abc", "S")).is_valid());
        assert!(validate(&draft(&"a".repeat(20), "S")).is_valid());
        assert_eq!(
            validate(&draft("ab", "S")).get(Field::FullName),
            Some("full name must be at least 3 characters")
        );
        assert_eq!(
            validate(&draft(&"a".repeat(21), "S")).get(Field::FullName),
            Some("full name must be at most 20 characters")
        );
    }

    #[test]
    fn test_name_length_counts_utf16_units() {
        // 3 units, 6 bytes
        assert!(validate(&draft("äöü", "M")).is_valid());
        // 2 characters, 4 units
        assert!(validate(&draft("😀😀", "M")).is_valid());
        // 11 characters, 22 units
        assert_eq!(
            validate(&draft(&"😀".repeat(11), "M")).get(Field::FullName),
            Some("full name must be at most 20 characters")
        );
    }

    #[test]
    fn test_name_not_trimmed() {
        assert!(validate(&draft("   ", "M")).is_valid());
    }

    #[test]
    fn test_size_outside_catalog() {
        let result = validate(&draft("Alice", "X"));
        assert_eq!(result.get(Field::Size), Some("size must be S or M or L"));
        assert_eq!(result.get(Field::FullName), None);
    }

    #[test]
    fn test_configured_bounds_change_messages() {
        let config = FormConfig {
            min_name_len: 5,
            max_name_len: 8,
            ..FormConfig::default()
        };
        let validator = OrderValidator::new(&config);
        assert_eq!(
            validator.validate(&draft("Alice Smith", "M")).get(Field::FullName),
            Some("full name must be at most 8 characters")
        );
        assert_eq!(
            validator.validate(&draft("Al", "M")).get(Field::FullName),
            Some("full name must be at least 5 characters")
        );
        assert!(validator.is_valid(&draft("Alice", "M")));
    }
}
