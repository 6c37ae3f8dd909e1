// ============================================================================
// MAPBOX FFI - Bindings to the global `mapboxgl` namespace
// ============================================================================
// Only declarations, no state. index.html loads mapbox-gl.js before the wasm.
// ============================================================================

use wasm_bindgen::prelude::*;

#[wasm_bindgen(js_namespace = mapboxgl)]
extern "C" {
    #[wasm_bindgen(js_name = Map)]
    pub type MapboxMap;

    #[wasm_bindgen(constructor, js_class = "Map", catch)]
    pub fn new(options: &JsValue) -> Result<MapboxMap, JsValue>;

    #[wasm_bindgen(method, js_name = on)]
    pub fn on(this: &MapboxMap, event: &str, handler: &js_sys::Function);

    #[wasm_bindgen(method, js_name = on)]
    pub fn on_layer(this: &MapboxMap, event: &str, layer_id: &str, handler: &js_sys::Function);

    #[wasm_bindgen(method, catch, js_name = addSource)]
    pub fn add_source(this: &MapboxMap, id: &str, source: &JsValue) -> Result<JsValue, JsValue>;

    #[wasm_bindgen(method, catch, js_name = addLayer)]
    pub fn add_layer(this: &MapboxMap, layer: &JsValue) -> Result<JsValue, JsValue>;

    #[wasm_bindgen(method, catch, js_name = addLayer)]
    pub fn add_layer_before(this: &MapboxMap, layer: &JsValue, before_id: &str) -> Result<JsValue, JsValue>;

    #[wasm_bindgen(method, catch, js_name = queryRenderedFeatures)]
    pub fn query_rendered_features(this: &MapboxMap, point: &JsValue, options: &JsValue) -> Result<js_sys::Array, JsValue>;

    #[wasm_bindgen(method, js_name = getCanvas)]
    pub fn get_canvas(this: &MapboxMap) -> web_sys::HtmlElement;

    #[wasm_bindgen(method)]
    pub fn remove(this: &MapboxMap);

    #[wasm_bindgen(js_name = Popup)]
    pub type MapboxPopup;

    #[wasm_bindgen(constructor, js_class = "Popup")]
    pub fn new(options: &JsValue) -> MapboxPopup;

    #[wasm_bindgen(method, js_name = setLngLat)]
    pub fn set_lng_lat(this: &MapboxPopup, lng_lat: &JsValue) -> MapboxPopup;

    #[wasm_bindgen(method, js_name = setDOMContent)]
    pub fn set_dom_content(this: &MapboxPopup, node: &web_sys::Node) -> MapboxPopup;

    #[wasm_bindgen(method, js_name = addTo)]
    pub fn add_to(this: &MapboxPopup, map: &MapboxMap) -> MapboxPopup;

    #[wasm_bindgen(method)]
    pub fn remove(this: &MapboxPopup) -> MapboxPopup;
}
