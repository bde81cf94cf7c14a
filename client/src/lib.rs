//! # client
//!
//! Leptos + WASM frontend for the Strange Stay hotel site.
//!
//! This crate contains pages, components, UI state models, network helpers,
//! and the static site content. The same crate is rendered on the server
//! (`ssr`) and hydrated in the browser (`hydrate`).

pub mod app;
pub mod components;
pub mod content;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install the panic hook and console logger, then hydrate
/// the server-rendered markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
