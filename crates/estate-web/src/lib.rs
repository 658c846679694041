//! Smart Estate Forecaster Web Frontend
//!
//! Leptos-based WASM page. The valuation runs entirely in the browser:
//! no request leaves the page, the "model" is `estate-core` behind a timer.

mod app;
mod components;
mod noise;
mod pages;

pub use app::App;

use wasm_bindgen::prelude::*;

/// WASM entry point
#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    leptos::mount::mount_to_body(App);
}
