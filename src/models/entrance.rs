use serde_json::{Map, Value};

/// Raw `properties` object of a rendered feature
pub type FeatureProperties = Map<String, Value>;

/// Attributes of a hovered entrance marker. Any of them may be absent.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EntranceAttributes {
    pub entrance_name: Option<String>,
    pub ada: Option<String>,
    pub description: Option<String>,
}

impl EntranceAttributes {
    pub fn from_properties(properties: &FeatureProperties) -> Self {
        Self {
            entrance_name: text_attribute(properties, "entrance_name"),
            ada: text_attribute(properties, "ada"),
            description: text_attribute(properties, "description"),
        }
    }
}

// Strings and numbers render as text; null, booleans and nested values render as nothing
fn text_attribute(properties: &FeatureProperties, key: &str) -> Option<String> {
    match properties.get(key)? {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}
