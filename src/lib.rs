// lib.rs - Root module for the realty_listings library
//
// The same library is compiled twice: with `ssr` for the Actix server
// binary and with `hydrate` into the WASM bundle that takes over the
// server-rendered page.

pub mod web_app;

/// WASM entry point, called by the generated hydration script
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::web_app::App;

    console_error_panic_hook::set_once();
    leptos::mount::hydrate_body(App);
}
