//! Validated order produced by a successful submit.

use serde::Serialize;

use crate::catalog::{Size, Topping};
use crate::draft::OrderDraft;
use crate::errors::OrderError;

/// A validated pizza order
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PizzaOrder {
    /// Customer name
    pub full_name: String,
    /// Chosen size
    pub size: Size,
    /// Selected toppings in catalog order
    pub toppings: Vec<Topping>,
}

impl PizzaOrder {
    /// Build an order from a draft.
    ///
    /// Only the size needs converting; callers are expected to have
    /// validated the draft first, so the name is taken as-is.
    pub fn from_draft(draft: &OrderDraft) -> Result<Self, OrderError> {
        Ok(Self {
            full_name: draft.full_name().to_string(),
            size: draft.size().parse()?,
            toppings: draft.selected_toppings(),
        })
    }
}
