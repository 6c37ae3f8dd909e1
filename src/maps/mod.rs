// Map rendering: the surface abstraction, the overlay table and the Mapbox implementation

pub mod traits;
pub mod layers;

#[cfg(target_arch = "wasm32")]
pub mod web;

#[cfg(test)]
pub mod fake;

pub use traits::{MapPopup, MapSurface};
pub use layers::{ENTRANCE_LAYER_ID, OVERLAY_LAYERS};

/// Map error
#[derive(Debug, Clone, PartialEq)]
pub enum MapError {
    /// The container element is not attached yet
    ContainerMissing,
    /// Mapbox refused to construct the map (bad token, no WebGL, ...)
    EngineInit(String),
    /// addSource / addLayer threw
    Registration { id: String, reason: String },
    Query(String),
    /// A JS value did not have the expected shape
    Decode(String),
}

impl std::fmt::Display for MapError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MapError::ContainerMissing => write!(f, "Map container is not attached"),
            MapError::EngineInit(msg) => write!(f, "Map engine failed to initialize: {}", msg),
            MapError::Registration { id, reason } => write!(f, "Could not register '{}': {}", id, reason),
            MapError::Query(msg) => write!(f, "Feature query failed: {}", msg),
            MapError::Decode(msg) => write!(f, "Unexpected value from map engine: {}", msg),
        }
    }
}

impl std::error::Error for MapError {}
