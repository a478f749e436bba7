//! # Status Banner Component
//!
//! Success/failure message shown at the top of the form after a submit.

use dioxus::prelude::*;
use pizza_app::StatusBanner;

/// Banner for the last submit attempt
#[component]
pub fn Banner(banner: StatusBanner) -> Element {
    let class = banner.level.css_class();
    let message = banner.message;

    rsx! {
        div { class: class, "{message}" }
    }
}
