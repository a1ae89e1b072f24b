//! # client
//!
//! Leptos + WASM frontend for the corkboard todo board. Components render
//! group cards as DOM nodes on a pannable/zoomable canvas driven by the
//! `canvas` crate's gesture engine; persistence goes through the server's
//! REST API, while card positions and the camera stay in browser storage.

pub mod app;
pub mod components;
pub mod net;
pub mod state;
pub mod util;

/// Browser entry point: mount the app into `<body>`.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::mount_to_body(app::App);
}
