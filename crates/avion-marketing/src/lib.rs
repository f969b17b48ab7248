//! Avion Capital marketing site
//!
//! A Leptos landing page rendered on the server and hydrated in the browser.

pub mod app;
pub mod components;
pub mod pages;

#[cfg(feature = "ssr")]
pub mod config;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    tracing_wasm::set_as_global_default();

    leptos::mount_to_body(app::App);
}
