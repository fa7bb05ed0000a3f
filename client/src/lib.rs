//! # client
//!
//! Leptos + WASM frontend for the textlab dataset workbench. Replaces the
//! plain-JS tab controller with a Rust-native UI layer: tabbed panels, a
//! dataset selector, and preprocess/augment actions posted to the server.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
