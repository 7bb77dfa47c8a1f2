//! Newspaper Layout Parser Web App (Leptos + WASM)

pub mod api;
mod app;
pub mod components;

use wasm_bindgen::prelude::*;

#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Info) {
        web_sys::console::warn_1(&format!("logger init failed: {}", e).into());
    }
    log::info!("Newspaper Layout Parser starting...");
    leptos::mount::mount_to_body(app::App);
}
