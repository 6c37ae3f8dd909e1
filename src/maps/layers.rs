// ============================================================================
// OVERLAY LAYERS - Fixed draw order of everything added on top of the basemap
// ============================================================================
// Registered once, in this order, on the map's `load` event. Later entries
// draw above earlier ones; `water-depth` is slotted below the style's
// hillshade layer instead.
// ============================================================================

use serde_json::json;

use crate::config::{AppConfig, CONFIG};
use crate::models::{Dataset, OverlayLayer, Paint};

pub const ENTRANCE_LAYER_ID: &str = "entrances-fill";
pub const HILLSHADE_LAYER_ID: &str = "hillshade";

pub const BATHYMETRY_TILESET: &str = "mapbox://mapbox.mapbox-bathymetry-v2";

pub fn overlay_layers(config: &AppConfig) -> Vec<OverlayLayer> {
    vec![
        OverlayLayer {
            id: "water-depth",
            dataset: Dataset::vector("bathymetry", BATHYMETRY_TILESET),
            source_layer: Some("depth"),
            paint: Paint::Fill {
                // Cubic bezier gives a smooth ramp from shallow to deep water
                color: json!([
                    "interpolate",
                    ["cubic-bezier", 0, 0.5, 1, 0.5],
                    ["get", "min_depth"],
                    200,
                    "#78bced",
                    9000,
                    "#15659f"
                ]),
                opacity: None,
            },
            before: Some(HILLSHADE_LAYER_ID),
        },
        OverlayLayer {
            id: "bcw-fill",
            dataset: Dataset::geojson("bcw", config.dataset_url("bcw.geojson")),
            source_layer: None,
            paint: Paint::Fill {
                color: json!("lightblue"),
                opacity: Some(0.2),
            },
            before: None,
        },
        OverlayLayer {
            id: "scag-fill",
            dataset: Dataset::geojson("scag", config.dataset_url("SCAGBikeRoutes_20231020.geojson")),
            source_layer: None,
            paint: Paint::Line {
                color: "darkgreen",
                width: 0.1,
            },
            before: None,
        },
        OverlayLayer {
            id: "creekpath-fill",
            dataset: Dataset::geojson("creekpath", config.dataset_url("creekpath.geojson")),
            source_layer: None,
            paint: Paint::Line {
                color: "#15cc09",
                width: 2.0,
            },
            before: None,
        },
        OverlayLayer {
            id: ENTRANCE_LAYER_ID,
            dataset: Dataset::geojson("entrances", config.dataset_url("entrances.geojson")),
            source_layer: None,
            paint: Paint::Circle {
                color: "#ffff00",
                radius: 4.0,
                stroke_color: "#333333",
                stroke_width: 2.0,
            },
            before: None,
        },
    ]
}

lazy_static::lazy_static! {
    pub static ref OVERLAY_LAYERS: Vec<OverlayLayer> = overlay_layers(&CONFIG);
}
