use serde_json::{json, Map, Value};

use super::Dataset;

/// Draw type of an overlay layer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawType {
    Fill,
    Line,
    Circle,
}

impl DrawType {
    pub fn as_str(&self) -> &'static str {
        match self {
            DrawType::Fill => "fill",
            DrawType::Line => "line",
            DrawType::Circle => "circle",
        }
    }
}

/// Paint properties, one variant per draw type
#[derive(Debug, Clone, PartialEq)]
pub enum Paint {
    Fill {
        /// Plain color or a Mapbox style expression
        color: Value,
        opacity: Option<f64>,
    },
    Line {
        color: &'static str,
        width: f64,
    },
    Circle {
        color: &'static str,
        radius: f64,
        stroke_color: &'static str,
        stroke_width: f64,
    },
}

impl Paint {
    pub fn draw_type(&self) -> DrawType {
        match self {
            Paint::Fill { .. } => DrawType::Fill,
            Paint::Line { .. } => DrawType::Line,
            Paint::Circle { .. } => DrawType::Circle,
        }
    }

    pub fn to_json(&self) -> Value {
        match self {
            Paint::Fill { color, opacity } => {
                let mut paint = Map::new();
                if let Some(opacity) = opacity {
                    paint.insert("fill-opacity".to_string(), json!(opacity));
                }
                paint.insert("fill-color".to_string(), color.clone());
                Value::Object(paint)
            }
            Paint::Line { color, width } => json!({
                "line-color": color,
                "line-width": width,
            }),
            Paint::Circle { color, radius, stroke_color, stroke_width } => json!({
                "circle-color": color,
                "circle-radius": radius,
                "circle-stroke-color": stroke_color,
                "circle-stroke-width": stroke_width,
            }),
        }
    }
}

/// One rendering rule: a dataset drawn with a fixed style
#[derive(Debug, Clone, PartialEq)]
pub struct OverlayLayer {
    pub id: &'static str,
    pub dataset: Dataset,
    pub source_layer: Option<&'static str>,
    pub paint: Paint,
    /// Existing layer this one is inserted below; `None` appends on top
    pub before: Option<&'static str>,
}

impl OverlayLayer {
    pub fn draw_type(&self) -> DrawType {
        self.paint.draw_type()
    }

    /// Layer object for `map.addLayer(..)`
    pub fn layer_object(&self) -> Value {
        let mut layer = Map::new();
        layer.insert("id".to_string(), json!(self.id));
        layer.insert("type".to_string(), json!(self.draw_type().as_str()));
        layer.insert("source".to_string(), json!(self.dataset.id));
        if let Some(source_layer) = self.source_layer {
            layer.insert("source-layer".to_string(), json!(source_layer));
            layer.insert("layout".to_string(), json!({}));
        }
        layer.insert("paint".to_string(), self.paint.to_json());
        Value::Object(layer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn circle_layer_object() {
        let layer = OverlayLayer {
            id: "entrances-fill",
            dataset: Dataset::geojson("entrances", "data/entrances.geojson"),
            source_layer: None,
            paint: Paint::Circle {
                color: "#ffff00",
                radius: 4.0,
                stroke_color: "#333333",
                stroke_width: 2.0,
            },
            before: None,
        };

        assert_eq!(
            layer.layer_object(),
            json!({
                "id": "entrances-fill",
                "type": "circle",
                "source": "entrances",
                "paint": {
                    "circle-color": "#ffff00",
                    "circle-radius": 4.0,
                    "circle-stroke-color": "#333333",
                    "circle-stroke-width": 2.0,
                },
            })
        );
    }

    #[test]
    fn fill_without_opacity_omits_key() {
        let paint = Paint::Fill { color: json!("lightblue"), opacity: None };
        assert_eq!(paint.to_json(), json!({ "fill-color": "lightblue" }));
        assert_eq!(paint.draw_type(), DrawType::Fill);
    }

    #[test]
    fn vector_layer_carries_source_layer() {
        let layer = OverlayLayer {
            id: "water-depth",
            dataset: Dataset::vector("bathymetry", "mapbox://mapbox.mapbox-bathymetry-v2"),
            source_layer: Some("depth"),
            paint: Paint::Fill { color: json!("#78bced"), opacity: None },
            before: Some("hillshade"),
        };

        let object = layer.layer_object();
        assert_eq!(object["source-layer"], "depth");
        assert_eq!(object["source"], "bathymetry");
        // `before` is an addLayer argument, not part of the layer object
        assert!(object.get("before").is_none());
    }
}
