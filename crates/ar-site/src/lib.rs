//! Appliance Repair Center marketing site
//!
//! Leptos application rendered on the server (`ssr`) and hydrated in the
//! browser (`hydrate`). One landing page per brand plus a generic one.

pub mod app;
pub mod browser;
pub mod components;
pub mod pages;

#[cfg(feature = "ssr")]
pub mod fileserv;
#[cfg(feature = "ssr")]
pub mod server;

/// WASM entry point, hydrates the server-rendered page.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    tracing_wasm::set_as_global_default();

    leptos::mount_to_body(app::App);
}
