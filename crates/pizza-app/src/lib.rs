//! # Pizza App
//!
//! Portable headless core for the pizza order form.
//!
//! The form is three cooperating pieces:
//!
//! - **Field state**: [`OrderDraft`], updated immutably one field at a time
//! - **Validator**: [`validate`] / [`OrderValidator`], a pure function from a
//!   draft to field-level error messages
//! - **Submission controller**: [`transition`], which runs submit events
//!   through validation and produces the next [`OrderFormState`]
//!
//! ```text
//! user input → OrderDraft → (submit) → validate → OrderFormState → render
//! ```
//!
//! Nothing here performs I/O. Frontends render [`OrderFormState`] and feed
//! [`OrderEvent`]s back in.

pub mod catalog;
pub mod config;
pub mod controller;
pub mod draft;
pub mod errors;
pub mod form;
pub mod order;
pub mod validation;
pub mod views;

pub use catalog::{size_options, Size, SizeOption, Topping, SIZE_PLACEHOLDER, TOPPINGS};
pub use config::{ConfigError, FormConfig};
pub use controller::{
    transition, OrderCommand, OrderEvent, OrderFormState, SubmitPhase, SubmitStatus,
};
pub use draft::{FieldUpdate, OrderDraft};
pub use errors::OrderError;
pub use form::{Field, ValidationError, ValidationResult, Validator};
pub use order::PizzaOrder;
pub use validation::{validate, OrderValidator};
pub use views::{BannerLevel, StatusBanner};
