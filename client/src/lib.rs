//! # compass-client
//!
//! Leptos + WASM frontend for the CoverageCompass welcome site.
//!
//! This crate contains the welcome and callback pages, their components, the
//! static marketing content, presentation state (screen carousel, session
//! status), and the browser-side identity provider client. It is compiled
//! twice: with `hydrate` into the WASM bundle, and with `ssr` into the server.

pub mod app;
pub mod components;
pub mod content;
pub mod identity;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    log::info!("hydrating welcome site");
    leptos::mount::hydrate_body(app::App);
}
