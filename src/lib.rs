//! Grim-Repor - Reviving Dead Repositories
//!
//! Marketing site for an AI-powered tool that fixes broken Python
//! dependencies in research repositories, built with Leptos and
//! WebAssembly. The site is purely presentational: a landing page plus
//! a waitlist email-capture form whose state never leaves the browser.

#![recursion_limit = "256"]

pub mod app;
pub mod core;
pub mod ui;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::*;
    console_error_panic_hook::set_once();
    leptos::mount::hydrate_body(App);
}
