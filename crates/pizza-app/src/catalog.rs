//! # Menu Catalog
//!
//! Static reference data for the order form: the topping list and the
//! pizza sizes. None of this is user data; the form only reads it.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::errors::OrderError;

// ============================================================================
// Toppings
// ============================================================================

/// A topping offered on the order form.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct Topping {
    /// Stable identifier, also used as the checkbox name
    pub id: &'static str,
    /// Display label
    pub label: &'static str,
}

/// Every topping the form offers, in display order.
pub static TOPPINGS: [Topping; 5] = [
    Topping {
        id: "1",
        label: "Pepperoni",
    },
    Topping {
        id: "2",
        label: "Green Peppers",
    },
    Topping {
        id: "3",
        label: "Pineapple",
    },
    Topping {
        id: "4",
        label: "Mushrooms",
    },
    Topping {
        id: "5",
        label: "Ham",
    },
];

impl Topping {
    /// Look up a topping by its identifier.
    #[must_use]
    pub fn by_id(id: &str) -> Option<&'static Topping> {
        TOPPINGS.iter().find(|t| t.id == id)
    }

    /// Look up a topping by its display label.
    #[must_use]
    pub fn by_label(label: &str) -> Option<&'static Topping> {
        TOPPINGS.iter().find(|t| t.label == label)
    }
}

// ============================================================================
// Sizes
// ============================================================================

/// Pizza size.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum Size {
    /// "S"
    #[serde(rename = "S")]
    Small,
    /// "M"
    #[serde(rename = "M")]
    Medium,
    /// "L"
    #[serde(rename = "L")]
    Large,
}

impl Size {
    /// Get all sizes in order.
    #[must_use]
    pub fn all() -> &'static [Self] {
        &[Self::Small, Self::Medium, Self::Large]
    }

    /// Form value for this size.
    #[must_use]
    pub fn code(self) -> &'static str {
        match self {
            Self::Small => "S",
            Self::Medium => "M",
            Self::Large => "L",
        }
    }

    /// Get size label for display.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Small => "Small",
            Self::Medium => "Medium",
            Self::Large => "Large",
        }
    }
}

impl FromStr for Size {
    type Err = OrderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::all()
            .iter()
            .copied()
            .find(|size| size.code() == s)
            .ok_or_else(|| OrderError::InvalidSize(s.to_string()))
    }
}

impl fmt::Display for Size {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// One entry of the size selector.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SizeOption {
    /// Submitted value (empty for the placeholder)
    pub value: &'static str,
    /// Display text
    pub label: &'static str,
}

/// Placeholder shown before a size is chosen
pub const SIZE_PLACEHOLDER: &str = "----Choose Size----";

/// Options for the size selector: the empty placeholder, then each size.
#[must_use]
pub fn size_options() -> Vec<SizeOption> {
    std::iter::once(SizeOption {
        value: "",
        label: SIZE_PLACEHOLDER,
    })
    .chain(Size::all().iter().map(|size| SizeOption {
        value: size.code(),
        label: size.label(),
    }))
    .collect()
}
