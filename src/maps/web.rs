use std::cell::RefCell;
use std::rc::{Rc, Weak};

use serde::Serialize;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::HtmlElement;

use crate::config::AppConfig;
use crate::models::{Dataset, FeatureProperties, LngLat, OverlayLayer, PointerEvent, ScreenPoint};
use crate::utils::mapbox_ffi::{MapboxMap, MapboxPopup};
use crate::viewmodels::MapViewModel;
use crate::views::popup::{render_popup, PopupContent};
use super::{MapError, MapPopup, MapSurface, ENTRANCE_LAYER_ID};

type Listener = Closure<dyn FnMut(JsValue)>;

/// Mapbox GL JS map plus the Rust closures it calls back into
pub struct MapboxSurface {
    map: MapboxMap,
    listeners: Vec<Listener>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct MapOptions<'a> {
    style: &'a str,
    center: [f64; 2],
    zoom: f64,
    access_token: &'a str,
}

#[derive(Serialize)]
struct QueryOptions<'a> {
    layers: &'a [&'a str],
}

impl MapboxSurface {
    pub fn create(container: &HtmlElement, config: &AppConfig) -> Result<Self, MapError> {
        if !config.has_access_token() {
            log::warn!("⚠️ MAPBOX_ACCESS_TOKEN is empty, the basemap will not load");
        }

        // Older mapbox-gl builds only read the token from the namespace
        if let Ok(namespace) = js_sys::Reflect::get(&js_sys::global(), &JsValue::from_str("mapboxgl")) {
            if namespace.is_object() {
                let _ = js_sys::Reflect::set(
                    &namespace,
                    &JsValue::from_str("accessToken"),
                    &JsValue::from_str(config.mapbox_token()),
                );
            }
        }

        let options = to_js(&MapOptions {
            style: &config.map_config.style_url,
            center: config.map_config.center.as_array(),
            zoom: config.map_config.zoom,
            access_token: config.mapbox_token(),
        })?;
        js_sys::Reflect::set(&options, &JsValue::from_str("container"), container)
            .map_err(|e| MapError::EngineInit(js_error_message(&e)))?;

        let map = MapboxMap::new(&options).map_err(|e| MapError::EngineInit(js_error_message(&e)))?;

        log::info!("🗺️ Map created ({}, zoom {})", config.map_config.style_url, config.map_config.zoom);
        Ok(Self {
            map,
            listeners: Vec::new(),
        })
    }

    /// Map-wide event (`load`, `error`, ...)
    pub fn on_event<F>(&mut self, event: &str, handler: F)
    where
        F: FnMut(JsValue) + 'static,
    {
        let closure = Listener::new(handler);
        self.map.on(event, closure.as_ref().unchecked_ref());
        self.listeners.push(closure);
    }

    /// Event scoped to one layer (`mouseenter`, `mouseleave`, ...)
    pub fn on_layer_event<F>(&mut self, event: &str, layer_id: &str, handler: F)
    where
        F: FnMut(JsValue) + 'static,
    {
        let closure = Listener::new(handler);
        self.map.on_layer(event, layer_id, closure.as_ref().unchecked_ref());
        self.listeners.push(closure);
    }
}

impl MapSurface for MapboxSurface {
    type Popup = MapboxPopupHandle;

    fn add_source(&mut self, dataset: &Dataset) -> Result<(), MapError> {
        let source = to_js(&dataset.source_object())?;
        self.map
            .add_source(dataset.id, &source)
            .map(|_| ())
            .map_err(|e| registration_error(dataset.id, &e))
    }

    fn add_layer(&mut self, layer: &OverlayLayer) -> Result<(), MapError> {
        let object = to_js(&layer.layer_object())?;
        let result = match layer.before {
            Some(before) => self.map.add_layer_before(&object, before),
            None => self.map.add_layer(&object),
        };
        result.map(|_| ()).map_err(|e| registration_error(layer.id, &e))
    }

    fn query_rendered_features(
        &self,
        point: ScreenPoint,
        layer_ids: &[&str],
    ) -> Result<Vec<FeatureProperties>, MapError> {
        let point = to_js(&point.as_array())?;
        let options = to_js(&QueryOptions { layers: layer_ids })?;
        let features = self
            .map
            .query_rendered_features(&point, &options)
            .map_err(|e| MapError::Query(js_error_message(&e)))?;

        features
            .iter()
            .map(|feature| {
                let properties = js_sys::Reflect::get(&feature, &JsValue::from_str("properties"))
                    .map_err(|e| MapError::Decode(js_error_message(&e)))?;
                if properties.is_undefined() || properties.is_null() {
                    return Ok(FeatureProperties::new());
                }
                serde_wasm_bindgen::from_value(properties).map_err(|e| MapError::Decode(e.to_string()))
            })
            .collect()
    }

    fn set_cursor(&self, cursor: &str) {
        let _ = self.map.get_canvas().style().set_property("cursor", cursor);
    }

    fn create_popup(&self, offset: f64) -> MapboxPopupHandle {
        let options = js_sys::Object::new();
        let _ = js_sys::Reflect::set(&options, &JsValue::from_str("offset"), &JsValue::from_f64(offset));
        MapboxPopupHandle {
            popup: MapboxPopup::new(&options),
        }
    }

    fn open_popup(&self, popup: &mut MapboxPopupHandle) {
        popup.popup.add_to(&self.map);
    }

    fn remove(&mut self) {
        // Map first: once removed it no longer calls into the closures
        self.map.remove();
        self.listeners.clear();
    }
}

pub struct MapboxPopupHandle {
    popup: MapboxPopup,
}

impl MapPopup for MapboxPopupHandle {
    fn set_lng_lat(&mut self, at: LngLat) {
        match to_js(&at.as_array()) {
            Ok(lng_lat) => {
                self.popup.set_lng_lat(&lng_lat);
            }
            Err(e) => log::warn!("⚠️ {}", e),
        }
    }

    fn set_content(&mut self, content: &PopupContent) -> Result<(), MapError> {
        let node = render_popup(content).map_err(|e| MapError::Decode(js_error_message(&e)))?;
        self.popup.set_dom_content(&node);
        Ok(())
    }

    fn remove(&mut self) {
        self.popup.remove();
    }
}

/// A map bound to a container, with its engine callbacks wired to the viewmodel
pub struct MountedMap {
    viewmodel: Rc<RefCell<MapViewModel<MapboxSurface>>>,
}

impl MountedMap {
    pub fn mount(
        container: &HtmlElement,
        config: &AppConfig,
        layers: Vec<OverlayLayer>,
    ) -> Result<Self, MapError> {
        if !container.is_connected() {
            return Err(MapError::ContainerMissing);
        }

        let surface = MapboxSurface::create(container, config)?;
        let viewmodel = Rc::new(RefCell::new(MapViewModel::new(surface, layers, config.popup_offset)));

        {
            let mut vm = viewmodel.borrow_mut();
            let surface = vm.surface_mut();

            let weak = Rc::downgrade(&viewmodel);
            surface.on_event("load", move |_| {
                with_viewmodel(&weak, |vm| {
                    vm.handle_ready();
                });
            });

            let weak = Rc::downgrade(&viewmodel);
            surface.on_layer_event("mouseenter", ENTRANCE_LAYER_ID, move |event| {
                match serde_wasm_bindgen::from_value::<PointerEvent>(event) {
                    Ok(event) => with_viewmodel(&weak, |vm| vm.handle_entrance_enter(event)),
                    Err(e) => log::warn!("⚠️ Unreadable mouseenter event: {}", e),
                }
            });

            let weak = Rc::downgrade(&viewmodel);
            surface.on_layer_event("mouseleave", ENTRANCE_LAYER_ID, move |_| {
                with_viewmodel(&weak, |vm| vm.handle_entrance_leave());
            });

            surface.on_event("error", |event| {
                let message = js_sys::Reflect::get(&event, &JsValue::from_str("error"))
                    .map(|e| js_error_message(&e))
                    .unwrap_or_default();
                log::error!("❌ Mapbox: {}", message);
            });
        }

        Ok(Self { viewmodel })
    }

    pub fn teardown(self) {
        self.viewmodel.borrow_mut().teardown();
    }
}

fn with_viewmodel<F>(weak: &Weak<RefCell<MapViewModel<MapboxSurface>>>, f: F)
where
    F: FnOnce(&mut MapViewModel<MapboxSurface>),
{
    let Some(viewmodel) = weak.upgrade() else {
        return;
    };
    match viewmodel.try_borrow_mut() {
        Ok(mut vm) => f(&mut vm),
        Err(_) => log::warn!("⚠️ Map callback re-entered, dropped"),
    };
}

fn to_js<T: Serialize + ?Sized>(value: &T) -> Result<JsValue, MapError> {
    // json_compatible: maps become plain objects, which is what Mapbox expects
    value
        .serialize(&serde_wasm_bindgen::Serializer::json_compatible())
        .map_err(|e| MapError::Decode(e.to_string()))
}

fn registration_error(id: &str, err: &JsValue) -> MapError {
    MapError::Registration {
        id: id.to_string(),
        reason: js_error_message(err),
    }
}

fn js_error_message(err: &JsValue) -> String {
    err.dyn_ref::<js_sys::Error>()
        .map(|e| String::from(e.message()))
        .or_else(|| err.as_string())
        .unwrap_or_else(|| format!("{:?}", err))
}
