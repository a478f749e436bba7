//! Browser entry point for the pizza order form.

use dioxus::prelude::*;
use pizza_app::FormConfig;
use pizza_ui::OrderForm;
use tracing::{info, warn};

const FORM_CONFIG: &str = include_str!("../order-form.toml");

fn main() {
    init_platform();
    info!("Launching order form");
    dioxus::launch(App);
}

/// Install the panic hook and route tracing to the browser console.
#[cfg(target_arch = "wasm32")]
fn init_platform() {
    console_error_panic_hook::set_once();
    // The launcher may have installed a subscriber already
    let _ = tracing_wasm::try_set_as_global_default();
}

#[cfg(not(target_arch = "wasm32"))]
fn init_platform() {
    // No-op on non-WASM
}

/// Load the embedded form config, falling back to defaults.
fn load_config() -> FormConfig {
    FormConfig::from_toml_str(FORM_CONFIG).unwrap_or_else(|e| {
        warn!(error = %e, "Invalid form config, using defaults");
        FormConfig::default()
    })
}

#[component]
fn App() -> Element {
    let config = use_hook(load_config);

    rsx! {
        OrderForm { config }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_config_is_valid() {
        assert_eq!(
            FormConfig::from_toml_str(FORM_CONFIG),
            Ok(FormConfig::default())
        );
    }
}
