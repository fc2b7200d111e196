//! Client-side interactivity for a static portfolio page.
//!
//! This crate is compiled to WebAssembly and loaded by the page. It provides
//! a persisted light/dark theme, a collapsible mobile menu, scroll-triggered
//! reveal animations, and auto-advancing image carousels. Each component is
//! a small state machine with no DOM dependency; the `dom` adapter (feature
//! `hydrate`) binds them to the page's events.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`carousel`] | Slide index, wraparound and auto-play timer lifecycle |
//! | [`theme`] | Theme resolution and toggling |
//! | [`preference`] | Persistent string preference store |
//! | [`menu`] | Mobile menu open/closed state and scroll lock |
//! | [`reveal`] | One-way reveal markers driven by scroll position |
//! | [`config`] | Page configuration with JSON overrides |
//! | [`error`] | Shared error type |
//! | [`consts`] | Default timings, selectors and marker classes |
//! | `dom` | Browser adapter (feature `hydrate`) |

pub mod carousel;
pub mod config;
pub mod consts;
pub mod error;
pub mod menu;
pub mod preference;
pub mod reveal;
pub mod theme;

#[cfg(feature = "hydrate")]
pub mod dom;

/// Page-load entry point: install logging, then wire every component.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if let Err(err) = console_log::init_with_level(log::Level::Info) {
        web_sys::console::warn_1(&format!("logger not installed: {err}").into());
    }
    if let Err(err) = dom::mount() {
        log::warn!("page not wired: {err}");
    }
}
