//! # Order Draft
//!
//! The in-progress order held by the form. A draft is never mutated in
//! place: [`OrderDraft::set_field`] returns a new draft with exactly one
//! field replaced, so callers can compare old and new values to decide
//! whether anything needs re-rendering.
//!
//! Every string is accepted here as provisional state. Validation happens
//! only when the order is submitted.

use std::collections::BTreeMap;

use crate::catalog::{Topping, TOPPINGS};
use crate::errors::OrderError;
use crate::form::Field;

/// A single field change
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FieldUpdate {
    /// Replace the full name
    FullName(String),
    /// Replace the size value
    Size(String),
    /// Check or uncheck one topping
    Topping {
        /// Catalog entry being toggled
        topping: &'static Topping,
        /// New checkbox state
        selected: bool,
    },
}

impl FieldUpdate {
    /// Build a topping update from a topping id.
    pub fn topping(id: &str, selected: bool) -> Result<Self, OrderError> {
        let topping =
            Topping::by_id(id).ok_or_else(|| OrderError::UnknownTopping(id.to_string()))?;
        Ok(Self::Topping { topping, selected })
    }

    /// Build an update from a DOM-style `(name, value)` pair.
    ///
    /// `name` is a field key (`fullName`, `size`) or a topping id or label.
    /// Topping values count as checked when they are `"true"` or `"on"`.
    pub fn from_dom(name: &str, value: &str) -> Result<Self, OrderError> {
        if let Ok(field) = name.parse::<Field>() {
            return Ok(match field {
                Field::FullName => Self::FullName(value.to_string()),
                Field::Size => Self::Size(value.to_string()),
            });
        }

        let topping = Topping::by_id(name)
            .or_else(|| Topping::by_label(name))
            .ok_or_else(|| OrderError::UnknownField(name.to_string()))?;
        Ok(Self::Topping {
            topping,
            selected: matches!(value, "true" | "on"),
        })
    }
}

/// In-progress order data
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OrderDraft {
    full_name: String,
    size: String,
    /// One flag per catalog topping, keyed by topping id
    toppings: BTreeMap<&'static str, bool>,
}

impl Default for OrderDraft {
    fn default() -> Self {
        Self {
            full_name: String::new(),
            size: String::new(),
            toppings: TOPPINGS.iter().map(|t| (t.id, false)).collect(),
        }
    }
}

impl OrderDraft {
    /// Create an empty draft
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current full name
    #[must_use]
    pub fn full_name(&self) -> &str {
        &self.full_name
    }

    /// Current size value (may be empty or not a catalog size)
    #[must_use]
    pub fn size(&self) -> &str {
        &self.size
    }

    /// Check whether a topping is selected
    #[must_use]
    pub fn is_selected(&self, topping_id: &str) -> bool {
        self.toppings.get(topping_id).copied().unwrap_or(false)
    }

    /// Topping flags keyed by topping id
    #[must_use]
    pub fn toppings(&self) -> &BTreeMap<&'static str, bool> {
        &self.toppings
    }

    /// Selected toppings in catalog order
    #[must_use]
    pub fn selected_toppings(&self) -> Vec<Topping> {
        TOPPINGS
            .iter()
            .filter(|t| self.is_selected(t.id))
            .copied()
            .collect()
    }

    /// Return a new draft with one field replaced
    #[must_use]
    pub fn set_field(&self, update: FieldUpdate) -> Self {
        let mut next = self.clone();
        match update {
            FieldUpdate::FullName(value) => next.full_name = value,
            FieldUpdate::Size(value) => next.size = value,
            FieldUpdate::Topping { topping, selected } => {
                next.toppings.insert(topping.id, selected);
            }
        }
        next
    }

    /// Builder-style full name replacement
    #[must_use]
    pub fn with_full_name(self, value: impl Into<String>) -> Self {
        self.set_field(FieldUpdate::FullName(value.into()))
    }

    /// Builder-style size replacement
    #[must_use]
    pub fn with_size(self, value: impl Into<String>) -> Self {
        self.set_field(FieldUpdate::Size(value.into()))
    }

    /// Builder-style topping selection by label; unknown labels are ignored
    #[must_use]
    pub fn with_topping(self, label: &str) -> Self {
        match Topping::by_label(label) {
            Some(topping) => self.set_field(FieldUpdate::Topping {
                topping,
                selected: true,
            }),
            None => self,
        }
    }

    /// Check if the submit control should be enabled
    ///
    /// Both required fields must hold something. Whether that something is
    /// valid is decided at submit time.
    #[must_use]
    pub fn can_submit(&self) -> bool {
        !self.full_name.is_empty() && !self.size.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_draft_is_empty() {
        let draft = OrderDraft::new();
        assert_eq!(draft.full_name(), "");
        assert_eq!(draft.size(), "");
        assert_eq!(draft.toppings().len(), TOPPINGS.len());
        assert!(draft.selected_toppings().is_empty());
    }

    #[test]
    fn test_set_field_replaces_only_one_field() {
        let draft = OrderDraft::new().with_size("M").with_topping("Ham");
        let next = draft.set_field(FieldUpdate::FullName("Alice".to_string()));

        assert_eq!(next.full_name(), "Alice");
        assert_eq!(next.size(), "M");
        assert_eq!(next.toppings(), draft.toppings());
        // Original left untouched
        assert_eq!(draft.full_name(), "");
    }

    #[test]
    fn test_topping_toggle() {
        let draft = OrderDraft::new();
        let on = draft.set_field(FieldUpdate::topping("2", true).unwrap());
        assert!(on.is_selected("2"));
        assert_eq!(on.selected_toppings()[0].label, "Green Peppers");

        let off = on.set_field(FieldUpdate::topping("2", false).unwrap());
        assert_eq!(off, draft);
    }

    #[test]
    fn test_unknown_topping_rejected() {
        assert_eq!(
            FieldUpdate::topping("9", true),
            Err(OrderError::UnknownTopping("9".to_string()))
        );
    }

    #[test]
    fn test_from_dom() {
        assert_eq!(
            FieldUpdate::from_dom("fullName", "Al").unwrap(),
            FieldUpdate::FullName("Al".to_string())
        );
        assert_eq!(
            FieldUpdate::from_dom("size", "X").unwrap(),
            FieldUpdate::Size("X".to_string())
        );
        assert!(matches!(
            FieldUpdate::from_dom("Pepperoni", "on").unwrap(),
            FieldUpdate::Topping { selected: true, .. }
        ));
        assert!(matches!(
            FieldUpdate::from_dom("4", "false").unwrap(),
            FieldUpdate::Topping { selected: false, .. }
        ));
        assert_eq!(
            FieldUpdate::from_dom("anchovies", "true"),
            Err(OrderError::UnknownField("anchovies".to_string()))
        );
    }

    #[test]
    fn test_can_submit_requires_both_fields() {
        let draft = OrderDraft::new();
        assert!(!draft.can_submit());
        assert!(!draft.clone().with_full_name("Al").can_submit());
        assert!(!draft.clone().with_size("L").can_submit());
        // Presence only: an invalid pair still enables submit
        assert!(draft.with_full_name("A").with_size("X").can_submit());
    }
}
