pub mod app;
pub mod components;
pub mod nav;

#[cfg(any(feature = "ssr", feature = "hydrate"))]
pub mod logging;
#[cfg(feature = "ssr")]
pub mod server;

#[cfg(test)]
mod test_support;

#[cfg(feature = "hydrate")]
use wasm_bindgen::prelude::*;

#[cfg(feature = "hydrate")]
#[wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    logging::init_console_logging();

    leptos::mount::hydrate_body(app::App);
}
