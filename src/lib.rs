//! # internlink
//!
//! Leptos + WASM browser client for the InternLink internship marketplace.
//! The REST backend is an external service; this crate owns the session and
//! authorization layer (credential store, identity exchange, role-gated
//! routing, optimistic bookmark/apply updates) plus the screens around it.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: attach the client to the server-rendered DOM.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(crate::app::App);
}
