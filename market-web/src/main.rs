//! SMP Market - single-page marketplace storefront
//!
//! Client-side rendered Leptos app. Everything remote is a pass-through to
//! the spreadsheet-backed endpoint; see `services/`.

use leptos::prelude::*;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::HtmlElement;

mod app;
mod components;
mod pages;
mod services;
mod state;
mod utils;

use app::App;

#[wasm_bindgen(start)]
pub fn main() {
    // Panic hook for readable errors in the browser console
    console_error_panic_hook::set_once();

    wasm_logger::init(wasm_logger::Config::default());
    log::info!("SMP Market storefront starting...");

    // Hide the loading screen as soon as the WASM module is up
    hide_loading_screen();

    leptos::mount::mount_to_body(|| view! { <App/> });
}

/// Hide the static loading screen shipped in index.html.
fn hide_loading_screen() {
    let Some(document) = web_sys::window().and_then(|window| window.document()) else {
        return;
    };
    let Some(loading_element) = document.get_element_by_id("app-loading") else {
        log::warn!("loading element not found");
        return;
    };
    if let Some(html_element) = loading_element.dyn_ref::<HtmlElement>() {
        let _ = html_element.class_list().add_1("hidden");
    }
    // display:none as backup in case the stylesheet did not load
    let _ = loading_element.set_attribute("style", "display: none !important;");
}
