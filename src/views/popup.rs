// ============================================================================
// ENTRANCE POPUP - Presentational block shown on hover
// ============================================================================
//
//   <div class="popup">
//     <h3 class="route-name">{name}</h3>
//     <div class="route-metric-row">
//       <h4 class="row-title">Accessibility</h4>
//       <div class="row-value">{ada}</div>
//     </div>
//     <p class="route-city">Serves {description}</p>
//   </div>
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::dom::ElementBuilder;
use crate::models::EntranceAttributes;

pub const ACCESSIBILITY_LABEL: &str = "Accessibility";

/// Text of the three slots. Missing attributes are blank, never a placeholder.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PopupContent {
    pub heading: String,
    pub accessibility: String,
    pub serves: String,
}

impl PopupContent {
    pub fn from_attributes(attrs: &EntranceAttributes) -> Self {
        Self {
            heading: attrs.entrance_name.clone().unwrap_or_default(),
            accessibility: attrs.ada.clone().unwrap_or_default(),
            serves: format!("Serves {}", attrs.description.as_deref().unwrap_or_default()),
        }
    }
}

/// Builds the detached DOM node handed to `Popup.setDOMContent`
pub fn render_popup(content: &PopupContent) -> Result<Element, JsValue> {
    let row = ElementBuilder::new("div")?
        .class("route-metric-row")
        .child(ElementBuilder::new("h4")?.class("row-title").text(ACCESSIBILITY_LABEL).build())?
        .child(ElementBuilder::new("div")?.class("row-value").text(&content.accessibility).build())?
        .build();

    Ok(ElementBuilder::new("div")?
        .class("popup")
        .child(ElementBuilder::new("h3")?.class("route-name").text(&content.heading).build())?
        .child(row)?
        .child(ElementBuilder::new("p")?.class("route-city").text(&content.serves).build())?
        .build())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_attributes_fill_each_slot() {
        let content = PopupContent::from_attributes(&EntranceAttributes {
            entrance_name: Some("Overland Ave".to_string()),
            ada: Some("Yes - ramp".to_string()),
            description: Some("Overland Ave and the West LA area".to_string()),
        });

        assert_eq!(
            content,
            PopupContent {
                heading: "Overland Ave".to_string(),
                accessibility: "Yes - ramp".to_string(),
                serves: "Serves Overland Ave and the West LA area".to_string(),
            }
        );
    }

    #[test]
    fn missing_fields_render_blank() {
        let content = PopupContent::from_attributes(&EntranceAttributes::default());

        assert_eq!(content.heading, "");
        assert_eq!(content.accessibility, "");
        assert_eq!(content.serves, "Serves ");
    }
}
