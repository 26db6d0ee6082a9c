//! AlphaXM - Web, AI & Blockchain Studio Site
//!
//! Landing pages for the AlphaXM consultancy with section-scroll navigation
//! and a simulated contact form, built with Leptos and WebAssembly.

#![recursion_limit = "4096"]

pub mod app;
pub mod core;
pub mod ui;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::*;
    console_error_panic_hook::set_once();
    leptos::mount::hydrate_body(App);
}
