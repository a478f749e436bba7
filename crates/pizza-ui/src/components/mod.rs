//! # UI Components
//!
//! Dioxus components for the order form.

mod banner;
mod field_error;
mod order_form;

pub use banner::Banner;
pub use field_error::FieldError;
pub use order_form::OrderForm;
