//! Field-level validation message.

use dioxus::prelude::*;

/// Error text rendered under an invalid field
#[component]
pub fn FieldError(message: String) -> Element {
    rsx! {
        div { class: "error", "{message}" }
    }
}
