#[cfg(any(feature = "ssr", feature = "hydrate"))]
pub mod app;
pub mod contact;
pub mod content;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::*;
    console_error_panic_hook::set_once();
    // a second init only happens on hot reload
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(App);
}
