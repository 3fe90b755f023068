//! # mappa-client
//!
//! Leptos + WASM user interface for the Mappa multi-user world client: the
//! instance chat panel, loading screen, media toggle, profile and share
//! menus, and the layout composing them.
//!
//! World simulation, media negotiation and authentication live behind the
//! world services; this crate talks to them through request frames on the
//! realtime socket and a couple of REST endpoints.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the server-rendered shell.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Info).is_err() {
        leptos::logging::warn!("console logger already initialized");
    }
    leptos::mount::hydrate_body(app::App);
}
