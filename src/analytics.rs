use log::debug;
use serde::Serialize;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys;
use web_sys::{Document, Event};

use crate::config;

#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize)]
#[serde(rename_all = "lowercase")]
pub(crate) enum CtaType {
    Whatsapp,
    Call,
}

/// Record pushed onto the `dataLayer` queue for every tracked click.
#[derive(Clone, PartialEq, Eq, Debug, Serialize)]
pub(crate) struct CtaEvent {
    pub event: &'static str,
    pub cta_type: CtaType,
    pub cta_location: String,
    pub cta_id: String,
}

impl CtaEvent {
    pub(crate) fn from_id(id: &str) -> CtaEvent {
        let cta_type = if id.contains("whatsapp") {
            CtaType::Whatsapp
        } else {
            CtaType::Call
        };
        let cta_location = id
            .strip_prefix("cta_whatsapp_")
            .or_else(|| id.strip_prefix("cta_call_"))
            .unwrap_or(id)
            .to_string();
        CtaEvent {
            event: "cta_click",
            cta_type,
            cta_location,
            cta_id: id.to_string(),
        }
    }
}

/// Pushes through the queue's own `push` property: Tag Manager swaps the
/// plain array push for its interceptor once it loads, and both must see
/// the event.
fn push_to_data_layer(event: &CtaEvent) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let Ok(queue) = js_sys::Reflect::get(window.as_ref(), &JsValue::from_str("dataLayer")) else {
        return;
    };
    if queue.is_undefined() || queue.is_null() {
        return;
    }
    let Ok(push) = js_sys::Reflect::get(&queue, &JsValue::from_str("push")) else {
        return;
    };
    let Some(push) = push.dyn_ref::<js_sys::Function>() else {
        return;
    };
    let Ok(record) = serde_wasm_bindgen::to_value(event) else {
        return;
    };
    let _ = push.call1(&queue, &record);
}

/// Attaches click tracking to every present CTA element; absent ids are
/// skipped individually. Every click emits a fresh event.
pub fn mount(document: &Document) {
    let mut wired = 0usize;
    for id in config::CTA_IDS {
        let Some(element) = document.get_element_by_id(id) else {
            continue;
        };
        let on_click = Closure::wrap(Box::new(move |_: Event| {
            push_to_data_layer(&CtaEvent::from_id(id));
        }) as Box<dyn FnMut(Event)>);
        let _ = element.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref());
        on_click.forget();
        wired += 1;
    }
    debug!("cta tracking attached to {wired} elements");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn call_cta_event_shape() {
        let event = CtaEvent::from_id("cta_call_hero");
        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "event": "cta_click",
                "cta_type": "call",
                "cta_location": "hero",
                "cta_id": "cta_call_hero",
            })
        );
    }

    #[test]
    fn whatsapp_ids_classify_by_substring() {
        let event = CtaEvent::from_id("cta_whatsapp_contact_main");
        assert_eq!(event.cta_type, CtaType::Whatsapp);
        assert_eq!(event.cta_location, "contact_main");
        assert_eq!(event.cta_id, "cta_whatsapp_contact_main");
    }

    #[test]
    fn unknown_prefix_keeps_full_id_as_location() {
        let event = CtaEvent::from_id("book_test_drive");
        assert_eq!(event.cta_type, CtaType::Call);
        assert_eq!(event.cta_location, "book_test_drive");
    }

    #[test]
    fn every_configured_id_classifies_cleanly() {
        for id in config::CTA_IDS {
            let event = CtaEvent::from_id(id);
            assert_eq!(event.event, "cta_click");
            assert!(!event.cta_location.starts_with("cta_"));
        }
    }
}
