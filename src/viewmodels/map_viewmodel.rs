// ============================================================================
// MAP VIEWMODEL - Lifecycle and hover handling of the map view
// ============================================================================
// Owns the surface and the single reusable popup. Every engine callback
// (load, mouseenter, mouseleave) lands in one of the handle_* methods.
// ============================================================================

use crate::maps::{MapPopup, MapSurface, ENTRANCE_LAYER_ID};
use crate::models::{EntranceAttributes, OverlayLayer, PointerEvent};
use crate::views::popup::PopupContent;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lifecycle {
    /// Surface constructed, waiting for `load`
    Created,
    /// Overlays registered
    Ready,
    /// Surface released; callbacks are ignored
    TornDown,
}

#[derive(Debug, Clone, PartialEq)]
pub enum HoverState {
    Idle,
    Hovering(PopupContent),
}

pub struct MapViewModel<S: MapSurface> {
    surface: S,
    popup: S::Popup,
    layers: Vec<OverlayLayer>,
    lifecycle: Lifecycle,
    hover: HoverState,
}

impl<S: MapSurface> MapViewModel<S> {
    pub fn new(surface: S, layers: Vec<OverlayLayer>, popup_offset: f64) -> Self {
        let popup = surface.create_popup(popup_offset);
        Self {
            surface,
            popup,
            layers,
            lifecycle: Lifecycle::Created,
            hover: HoverState::Idle,
        }
    }

    pub fn lifecycle(&self) -> Lifecycle {
        self.lifecycle
    }

    pub fn hover_state(&self) -> &HoverState {
        &self.hover
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    /// One-time `load` handler: registers every overlay in table order.
    ///
    /// A failed registration is logged and the rest still go in. Returns how
    /// many layers were added.
    pub fn handle_ready(&mut self) -> usize {
        if self.lifecycle != Lifecycle::Created {
            log::debug!("🗺️ Ready signal ignored ({:?})", self.lifecycle);
            return 0;
        }

        let mut added_sources: Vec<&'static str> = Vec::new();
        let mut added = 0;

        for layer in &self.layers {
            if !added_sources.contains(&layer.dataset.id) {
                if let Err(e) = self.surface.add_source(&layer.dataset) {
                    log::error!("❌ {}", e);
                    continue;
                }
                added_sources.push(layer.dataset.id);
            }

            match self.surface.add_layer(layer) {
                Ok(()) => added += 1,
                Err(e) => log::error!("❌ {}", e),
            }
        }

        self.lifecycle = Lifecycle::Ready;
        log::info!("✅ {}/{} overlay layers registered", added, self.layers.len());
        added
    }

    /// Pointer entered the entrance layer
    pub fn handle_entrance_enter(&mut self, event: PointerEvent) {
        if self.lifecycle != Lifecycle::Ready {
            return;
        }

        self.surface.set_cursor("pointer");

        let features = match self.surface.query_rendered_features(event.point, &[ENTRANCE_LAYER_ID]) {
            Ok(features) => features,
            Err(e) => {
                log::warn!("⚠️ {}", e);
                return;
            }
        };

        // First hit in engine order wins
        let Some(feature) = features.first() else {
            log::debug!("No entrance under pointer at ({}, {})", event.point.x, event.point.y);
            return;
        };

        let content = PopupContent::from_attributes(&EntranceAttributes::from_properties(feature));

        self.popup.set_lng_lat(event.lng_lat);
        if let Err(e) = self.popup.set_content(&content) {
            log::warn!("⚠️ Popup content not built: {}", e);
            return;
        }
        self.surface.open_popup(&mut self.popup);

        log::debug!("📍 Hovering entrance '{}'", content.heading);
        self.hover = HoverState::Hovering(content);
    }

    /// Pointer left the entrance layer: dismiss the popup and restore the cursor
    pub fn handle_entrance_leave(&mut self) {
        if self.lifecycle != Lifecycle::Ready {
            return;
        }

        self.surface.set_cursor("");
        if let HoverState::Hovering(_) = self.hover {
            self.popup.remove();
            self.hover = HoverState::Idle;
        }
    }

    /// Releases popup and surface. Safe to call more than once and before `load`.
    pub fn teardown(&mut self) {
        if self.lifecycle == Lifecycle::TornDown {
            return;
        }

        self.popup.remove();
        self.surface.remove();
        self.hover = HoverState::Idle;
        self.lifecycle = Lifecycle::TornDown;
        log::info!("🧹 Map released");
    }
}
