//! OctoFit UI Entry Point
//!
//! Initializes logging and mounts the Leptos app to the DOM.

use leptos::*;
use octofit_ui::App;
use tracing_wasm::WASMLayerConfigBuilder;

fn main() {
    // Initialize WASM tracing
    let config = WASMLayerConfigBuilder::default()
        .set_max_level(tracing::Level::DEBUG)
        .build();
    tracing_wasm::set_as_global_default_with_config(config);

    tracing::info!("Starting OctoFit UI");

    mount_to_body(|| view! { <App /> });
}
