use serde::{Deserialize, Serialize};

/// Geographic coordinate, Mapbox order (lng first)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LngLat {
    pub lng: f64,
    pub lat: f64,
}

impl LngLat {
    pub fn as_array(&self) -> [f64; 2] {
        [self.lng, self.lat]
    }
}

/// Pixel position inside the map canvas
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScreenPoint {
    pub x: f64,
    pub y: f64,
}

impl ScreenPoint {
    pub fn as_array(&self) -> [f64; 2] {
        [self.x, self.y]
    }
}

/// The parts of a Mapbox `MapMouseEvent` the hover handler needs
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct PointerEvent {
    pub point: ScreenPoint,
    #[serde(rename = "lngLat")]
    pub lng_lat: LngLat,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pointer_event_reads_mapbox_field_names() {
        let raw = serde_json::json!({
            "type": "mouseenter",
            "point": { "x": 120.5, "y": 48.0 },
            "lngLat": { "lng": -118.39, "lat": 34.01 },
        });

        let event: PointerEvent = serde_json::from_value(raw).unwrap();
        assert_eq!(event.point.as_array(), [120.5, 48.0]);
        assert_eq!(event.lng_lat, LngLat { lng: -118.39, lat: 34.01 });
    }
}
