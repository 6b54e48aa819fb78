//! # bcard-client
//!
//! Leptos + WASM frontend for the business-card directory.
//!
//! This crate contains the "my cards" and "edit user" pages, the card
//! component they render, local page state, REST API helpers and the
//! wire types shared with the bcard API.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod routes;
pub mod state;
pub mod util;

/// Browser entry point: install logging and mount the app into `<body>`.
///
/// The page is rendered entirely client-side; whatever serves `index.html`
/// and the WASM bundle lives outside this crate.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::mount_to_body(app::App);
}
