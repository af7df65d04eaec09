//! Feedback Web Interface
//!
//! Client-rendered frontend for the feedback platform: a customer-facing
//! submission form and an admin analytics dashboard, plus a small server
//! that hosts the page shells and proxies the backend REST API.

#![forbid(unsafe_code)]
#![warn(
    clippy::all,
    clippy::pedantic,
    missing_docs,
    rust_2018_idioms
)]

pub mod app;
pub mod components;
pub mod pages;
pub mod poller;

#[cfg(feature = "ssr")]
pub mod api_client;
#[cfg(feature = "ssr")]
pub mod handlers;
#[cfg(feature = "ssr")]
pub mod routes;
#[cfg(feature = "ssr")]
pub mod server;
#[cfg(feature = "ssr")]
pub mod state;

// Re-export the main functions
#[cfg(feature = "ssr")]
pub use server::build_app;
#[cfg(feature = "ssr")]
pub use state::AppState;

/// Client-side entry point; mounts the application onto the document body
#[cfg(all(target_arch = "wasm32", feature = "csr"))]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    leptos::mount_to_body(app::App);
}
