//! Auric Engineering Marketing Site
//!
//! Leptos application rendered on the server (`ssr`) and hydrated in the
//! browser (`hydrate`).

pub mod app;
pub mod browser;
pub mod components;
pub mod context;
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
