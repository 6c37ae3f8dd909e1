// ============================================================================
// ELEMENT HELPERS - Thin wrappers over web_sys DOM calls
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::{Document, Element};

pub fn document() -> Option<Document> {
    web_sys::window()?.document()
}

pub fn create_element(tag: &str) -> Result<Element, JsValue> {
    document()
        .ok_or_else(|| JsValue::from_str("No document"))
        .and_then(|doc| doc.create_element(tag))
}

/// Replaces every class on the element
pub fn set_class_name(element: &Element, class: &str) {
    element.set_class_name(class);
}

/// Text is inserted as a text node, never parsed as markup
pub fn set_text_content(element: &Element, text: &str) {
    element.set_text_content(Some(text));
}

pub fn append_child(parent: &Element, child: &Element) -> Result<(), JsValue> {
    parent.append_child(child).map(|_| ())
}
