//! # portfolio-client
//!
//! Leptos + WASM frontend for the personal portfolio site.
//!
//! The page itself is static markup; the interesting parts are the persisted
//! light/dark preference (`util::theme_preference`) and the viewport observer
//! that drives scroll-spy navigation and reveal-on-scroll
//! (`util::viewport`, with the browser host in `util::dom_visibility`).

pub mod app;
pub mod components;
pub mod content;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the server-rendered page.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
