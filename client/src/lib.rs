//! # client
//!
//! Leptos + WASM front-end for the Sendbox mail screen. The backend that
//! runs the OAuth exchange and dispatches the actual email is a separate
//! service; this crate renders the screen and issues the credentialed
//! exchanges against it from the browser.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: wire up panic + log output, then hydrate the
/// server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
