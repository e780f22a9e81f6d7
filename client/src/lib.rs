//! # medicare-client
//!
//! Leptos + WASM storefront for the MediCare pharmacy backend.
//!
//! This crate contains the application shell, pages, display panels, the
//! browser `Transport` and the `localStorage`-backed session storage. All
//! backend semantics live in `medicare-api`; this crate only renders them.
//!
//! Browser-only code is gated behind the `csr` feature so the rest of the
//! crate builds and tests natively.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    // Fails only if a logger is already installed.
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::mount_to_body(app::App);
}
