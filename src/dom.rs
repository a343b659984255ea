use wasm_bindgen::JsCast;
use web_sys::{Document, Element};

/// Collects every element matching `selector` into a Vec, skipping nodes
/// that are not elements.
pub(crate) fn query_all(document: &Document, selector: &str) -> Vec<Element> {
    let mut found = Vec::new();
    if let Ok(list) = document.query_selector_all(selector) {
        for i in 0..list.length() {
            if let Some(node) = list.get(i) {
                if let Ok(element) = node.dyn_into::<Element>() {
                    found.push(element);
                }
            }
        }
    }
    found
}

pub(crate) fn set_class(element: &Element, class: &str, on: bool) {
    let list = element.class_list();
    let _ = if on {
        list.add_1(class)
    } else {
        list.remove_1(class)
    };
}
