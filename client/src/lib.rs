//! # client
//!
//! Leptos + WASM frontend for the marketing site.
//!
//! The page is rendered on the server (`ssr`) and hydrated in the browser
//! (`hydrate`). Section behavior lives in plain state structs under
//! [`state`]; components under [`components`] wire DOM events to them. The
//! hero background animation is delegated to the `particles` crate.
//!
//! | Module | Role |
//! |--------|------|
//! | [`app`] | HTML shell, context providers, routing |
//! | [`pages`] | Routed pages |
//! | [`components`] | Section components |
//! | [`state`] | DOM-free controllers for every interactive section |
//! | [`net`] | Chat transport |
//! | [`util`] | Scroll metrics, counters, visibility triggers |
//! | [`content`] | Static copy |

pub mod app;
pub mod components;
pub mod content;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: install logging and hydrate the server-rendered page.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    if let Err(err) = console_log::init_with_level(log::Level::Info) {
        web_sys::console::warn_1(&format!("console logger unavailable: {err}").into());
    }
    leptos::mount::hydrate_body(app::App);
}
