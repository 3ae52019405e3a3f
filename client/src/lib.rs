//! # client
//!
//! Leptos + WASM frontend for the LearnSync learning platform.
//!
//! This crate contains the session state provider, the navigation guard,
//! the HTTP-backed auth collaborator, and the route pages. Browser-only code
//! sits behind the `csr` feature; the rest builds and tests natively.

pub mod app;
pub mod catalog;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install logging and mount the app.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::mount_to_body(app::App);
}
