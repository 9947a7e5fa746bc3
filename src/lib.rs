//! # you2me
//!
//! Leptos + WASM front-end prototype for the YOU2ME companion-device app.
//! Every screen is a presentational leaf; the only coordination logic is
//! the screen-flow state machine in [`state::session`], driven by events
//! the screens emit and rendered by [`app::App`].
//!
//! Bluetooth scanning and people matching are simulated in [`sim`] with
//! timers and fixed mock data; there is no backend and nothing persists
//! past a reload.

pub mod app;
pub mod components;
pub mod screens;
pub mod sim;
pub mod state;
pub mod util;

/// Browser entry point: set up logging and mount the app to `<body>`.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::mount_to_body(app::App);
}
