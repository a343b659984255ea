use log::debug;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys;
use web_sys::{
    Document, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit,
};

use crate::{config, dom};

/// Tags reveal targets with the hidden base class and flips each one to
/// `is-visible` the first time it crosses into view. Revealed elements are
/// unobserved, so the transition never reverses.
pub fn mount(document: &Document) {
    let targets = dom::query_all(document, config::REVEAL_SELECTOR);
    if targets.is_empty() {
        debug!("reveal skipped: no targets");
        return;
    }

    let on_intersect = Closure::wrap(Box::new(
        move |entries: js_sys::Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let entry: IntersectionObserverEntry = entry.unchecked_into();
                if entry.is_intersecting() {
                    let target = entry.target();
                    let _ = target.class_list().add_1("is-visible");
                    observer.unobserve(&target);
                }
            }
        },
    )
        as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>);

    let options = IntersectionObserverInit::new();
    options.set_root_margin(config::REVEAL_ROOT_MARGIN);
    options.set_threshold(&JsValue::from_f64(config::REVEAL_THRESHOLD));

    let Ok(observer) =
        IntersectionObserver::new_with_options(on_intersect.as_ref().unchecked_ref(), &options)
    else {
        debug!("reveal skipped: observer unavailable");
        return;
    };
    on_intersect.forget();

    for target in &targets {
        let _ = target.class_list().add_1("reveal");
        observer.observe(target);
    }
    debug!("reveal observing {} elements", targets.len());
}
