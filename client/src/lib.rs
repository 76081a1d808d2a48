//! # client
//!
//! Leptos + WASM frontend for the HomifyMe room rental site.
//!
//! This crate contains pages, components, application state, REST types and
//! the API client. The `server` crate renders it with `ssr`; the browser
//! bundle is built with `hydrate` and takes over the server-rendered markup.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: attach to the server-rendered document.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
