/// Website Unavailable Helper - suggests alternatives when a site fails to load
/// Built with Rust + WASM + Yew

pub mod background;
mod bridge;
pub mod domain;
pub mod error;
pub mod failure_data;
pub mod presenter;
pub mod recorder;
pub mod storage;
pub mod suggestions;
pub mod time_ago;
pub mod ui;

use wasm_bindgen::prelude::*;

// Set up panic hook for better error messages in the browser console
#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::default());
}

// Register the failure and lifecycle listeners in the background service worker
#[wasm_bindgen]
pub fn start_background() {
    background::register_listeners();
}

// Start the Yew app for the popup
#[wasm_bindgen]
pub fn start_popup() {
    yew::Renderer::<ui::popup::App>::new().render();
}

// Re-export the display helpers for JavaScript access
#[wasm_bindgen]
pub fn time_ago(timestamp: Option<f64>, now: f64) -> String {
    time_ago::time_ago(timestamp.map(|t| t as i64), now as i64)
}

#[wasm_bindgen]
pub fn normalize_domain(domain: &str) -> String {
    domain::normalize_domain(domain).to_string()
}
