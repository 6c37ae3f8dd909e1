use serde_json::{json, Value};

/// Static geographic dataset backing one overlay layer
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    pub id: &'static str,
    pub kind: DatasetKind,
}

#[derive(Debug, Clone, PartialEq)]
pub enum DatasetKind {
    /// GeoJSON document served next to the page
    GeoJson { url: String },
    /// Mapbox-hosted vector tileset
    Vector { url: String },
}

impl Dataset {
    pub fn geojson(id: &'static str, url: impl Into<String>) -> Self {
        Self {
            id,
            kind: DatasetKind::GeoJson { url: url.into() },
        }
    }

    pub fn vector(id: &'static str, url: impl Into<String>) -> Self {
        Self {
            id,
            kind: DatasetKind::Vector { url: url.into() },
        }
    }

    /// Source object for `map.addSource(id, ..)`
    pub fn source_object(&self) -> Value {
        match &self.kind {
            // Mapbox fetches the document itself when `data` is a URL
            DatasetKind::GeoJson { url } => json!({ "type": "geojson", "data": url }),
            DatasetKind::Vector { url } => json!({ "type": "vector", "url": url }),
        }
    }
}
