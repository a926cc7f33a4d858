//! # client
//!
//! Leptos + WASM frontend for the landing-page builder.
//!
//! This crate contains the block palette (catalog, search, collapsible
//! sections, drag sources), the builder page that hosts it, and the page
//! canvas drop target. Block data and the drag payload format come from the
//! `blocks` crate.

pub mod app;
pub mod components;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
