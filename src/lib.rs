//! # workmanager-client
//!
//! Leptos + WASM frontend for the Work Manager task-tracking application:
//! task capture and listing, analytics, and an admin screen, backed by a
//! REST API.
//!
//! The session subsystem is the structural core: a token-based session kept
//! in browser storage (`storage`), an HTTP gateway that attaches the bearer
//! token and reacts to 401s (`net::client`), an application-wide session
//! context (`state::session`), and a role-aware route guard
//! (`components::route_guard`).

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod storage;
pub mod util;

/// WASM entry point: hydrate the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(crate::app::App);
}
