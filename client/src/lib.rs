//! # lumina-client
//!
//! Leptos + WASM front-end for the Lumina LMS organization console: a hero
//! page, a static role panel, and an organization settings form gated by a
//! demo login.
//!
//! This crate contains the page, its components, the session and settings
//! state, and the `localStorage` glue. The `server` crate renders it with
//! `leptos_axum` and serves the hydration bundle.

pub mod app;
pub mod components;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install browser logging and hydrate the SSR markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
