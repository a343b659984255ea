use std::cell::Cell;
use std::rc::Rc;

use log::debug;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{AddEventListenerOptions, Document, Element, Window};

use crate::{config, dom};

pub(crate) fn past_threshold(scroll_y: f64) -> bool {
    scroll_y > config::SCROLL_THRESHOLD_PX
}

fn sync(window: &Window, header: &Element) {
    let scroll_y = window.scroll_y().unwrap_or(0.0);
    dom::set_class(header, "is-scrolled", past_threshold(scroll_y));
}

/// Keeps the `is-scrolled` class on `#header` in step with the scroll
/// offset, recomputing at most once per animation frame.
pub fn mount(window: &Window, document: &Document) {
    let Some(header) = document.get_element_by_id("header") else {
        debug!("header watcher skipped: #header missing");
        return;
    };

    // Correct state immediately, e.g. when the page restores mid-scroll.
    sync(window, &header);

    // One pending frame at a time; the flag coalesces bursts of scroll
    // events, the frame callback itself clears it.
    let ticking = Rc::new(Cell::new(false));

    let on_frame = {
        let ticking = ticking.clone();
        let window = window.clone();
        let header = header.clone();
        Closure::wrap(Box::new(move || {
            sync(&window, &header);
            ticking.set(false);
        }) as Box<dyn FnMut()>)
    };

    let on_scroll = {
        let window = window.clone();
        Closure::wrap(Box::new(move || {
            if !ticking.get() {
                ticking.set(true);
                if window
                    .request_animation_frame(on_frame.as_ref().unchecked_ref())
                    .is_err()
                {
                    ticking.set(false);
                }
            }
        }) as Box<dyn FnMut()>)
    };

    let options = AddEventListenerOptions::new();
    options.set_passive(true);
    let _ = window.add_event_listener_with_callback_and_add_event_listener_options(
        "scroll",
        on_scroll.as_ref().unchecked_ref(),
        &options,
    );
    on_scroll.forget();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn threshold_boundary_sits_at_50px() {
        assert!(!past_threshold(0.0));
        assert!(!past_threshold(49.0));
        assert!(!past_threshold(50.0));
        assert!(past_threshold(51.0));
    }
}
