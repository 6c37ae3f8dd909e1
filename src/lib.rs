// ============================================================================
// BALLONA CREEK BIKE PATH MAP - Yew + Mapbox GL JS
// ============================================================================
// - components: Yew function components (App, MapView, InfoPanel)
// - viewmodels: map lifecycle + hover state, generic over the map surface
// - maps:       surface traits, overlay table, Mapbox implementation
// - models:     datasets, layers, entrance attributes, coordinates
// - views/dom:  popup markup built with web_sys
// ============================================================================

pub mod config;
pub mod models;
pub mod maps;
pub mod viewmodels;
pub mod views;
pub mod dom;
pub mod utils;
pub mod components;

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn main() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();

    wasm_logger::init(wasm_logger::Config::new(config::CONFIG.log_level()));
    log::info!("🚴 Ballona Creek bike path map");

    yew::Renderer::<components::App>::new().render();

    Ok(())
}
