//! # Pizza UI
//!
//! Dioxus frontend for the pizza order form.
//!
//! All form logic lives in `pizza-app`; the components here render an
//! [`pizza_app::OrderFormState`] and translate DOM events into
//! [`pizza_app::OrderEvent`]s.

pub mod components;

pub use components::{Banner, FieldError, OrderForm};
