use log::debug;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{
    Document, Element, Event, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition,
};

use crate::dom;

/// Smooth-scrolls in-page anchor clicks. A bare `#` href and fragments
/// with no matching element keep their default browser behavior.
pub fn mount(document: &Document) {
    let anchors = dom::query_all(document, r##"a[href^="#"]"##);
    if anchors.is_empty() {
        debug!("anchor scroller skipped: no fragment links");
        return;
    }

    let document = document.clone();
    let on_click = Closure::wrap(Box::new(move |event: Event| {
        let Some(href) = event
            .current_target()
            .and_then(|target| target.dyn_into::<Element>().ok())
            .and_then(|anchor| anchor.get_attribute("href"))
        else {
            return;
        };
        if href == "#" {
            return;
        }
        let Some(fragment) = href.strip_prefix('#') else {
            return;
        };
        let Some(target) = document.get_element_by_id(fragment) else {
            return;
        };
        event.prevent_default();
        let options = ScrollIntoViewOptions::new();
        options.set_behavior(ScrollBehavior::Smooth);
        options.set_block(ScrollLogicalPosition::Start);
        target.scroll_into_view_with_scroll_into_view_options(&options);
    }) as Box<dyn FnMut(Event)>);

    for anchor in &anchors {
        let _ = anchor.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref());
    }
    on_click.forget();
}
