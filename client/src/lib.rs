//! # client
//!
//! Leptos + WASM front end for the Bonsai auth flow: login/register tabs, a
//! status message line, and a dashboard shown once a session exists.
//!
//! All decisions live in the `controller` crate. This crate renders its state
//! and carries out its effects in the browser: `gloo-net` for the auth API,
//! `gloo-timers` for delays, `localStorage` for the session record.
//!
//! Browser-only code is gated behind the `csr` feature so the crate still
//! builds and tests natively.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install logging and mount the app.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Debug) {
        log::warn!("console logger already installed: {e}");
    }
    leptos::mount::mount_to_body(app::App);
}
