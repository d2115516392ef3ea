//! # client
//!
//! Leptos + WASM frontend for the repository analyzer.
//!
//! The crate renders results produced by the external analysis backend. It
//! owns the browser session (bearer token + profile), the login/register
//! calls that create it, the route guard that every protected page sits
//! behind, and the GitHub connection-status check on the dashboard.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the server-rendered shell.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
