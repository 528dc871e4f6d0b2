//! # auth-ui
//!
//! Leptos + WASM front end for the authentication service: register, login,
//! forgot-password, and reset-password flows against the auth HTTP API.
//!
//! The crate splits into a transport-independent core and a thin browser
//! layer. `net::normalize` turns any completed HTTP exchange into a uniform
//! payload or a uniform [`net::normalize::ApiError`]; `state::flow` is the
//! per-form state machine sequencing validation, submission, transient
//! alerts, and post-success navigation. Pages and components are
//! presentation only and delegate every decision to those two modules.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;

/// Browser entry point: installs the panic hook, wires `log` to the
/// console, and hydrates the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(crate::app::App);
}
