use log::debug;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::js_sys;
use web_sys::{
    Document, Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit,
};

use crate::{config, dom};

/// Picks the winning section among simultaneously intersecting ones: the
/// topmost by bounding-rect top, delivery order breaking exact ties.
pub(crate) fn pick_topmost(candidates: &[(String, f64)]) -> Option<&str> {
    let mut best: Option<(&str, f64)> = None;
    for (id, top) in candidates {
        match best {
            Some((_, best_top)) if *top >= best_top => {}
            _ => best = Some((id, *top)),
        }
    }
    best.map(|(id, _)| id)
}

fn highlight(links: &[Element], id: &str) {
    let target = format!("#{id}");
    for link in links {
        let matches = link.get_attribute("href").as_deref() == Some(target.as_str());
        dom::set_class(link, "is-active", matches);
    }
}

/// Marks the nav link of whichever section currently spans the vertical
/// center line of the viewport.
pub fn mount(document: &Document) {
    let sections = dom::query_all(document, "section[id]");
    let links = dom::query_all(document, ".header__nav-link");
    if sections.is_empty() || links.is_empty() {
        debug!("active-section watcher skipped: nothing to observe");
        return;
    }

    let on_intersect = Closure::wrap(Box::new(
        move |entries: js_sys::Array, _: IntersectionObserver| {
            let mut candidates: Vec<(String, f64)> = Vec::new();
            for entry in entries.iter() {
                let entry: IntersectionObserverEntry = entry.unchecked_into();
                if !entry.is_intersecting() {
                    continue;
                }
                let target = entry.target();
                if let Some(id) = target.get_attribute("id") {
                    candidates.push((id, entry.bounding_client_rect().top()));
                }
            }
            if let Some(active) = pick_topmost(&candidates) {
                highlight(&links, active);
            }
        },
    )
        as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>);

    let options = IntersectionObserverInit::new();
    options.set_root_margin(config::ACTIVE_SECTION_ROOT_MARGIN);

    let Ok(observer) =
        IntersectionObserver::new_with_options(on_intersect.as_ref().unchecked_ref(), &options)
    else {
        debug!("active-section watcher skipped: observer unavailable");
        return;
    };
    on_intersect.forget();

    for section in &sections {
        observer.observe(section);
    }
    debug!("active-section watcher observing {} sections", sections.len());
}

#[cfg(test)]
mod tests {
    use super::*;

    fn c(id: &str, top: f64) -> (String, f64) {
        (id.to_string(), top)
    }

    #[test]
    fn empty_delivery_selects_nothing() {
        assert_eq!(pick_topmost(&[]), None);
    }

    #[test]
    fn single_candidate_wins() {
        assert_eq!(pick_topmost(&[c("services", 120.0)]), Some("services"));
    }

    #[test]
    fn topmost_section_wins_regardless_of_delivery_order() {
        let delivered = [c("contact", 300.0), c("hero", -40.0), c("faq", 90.0)];
        assert_eq!(pick_topmost(&delivered), Some("hero"));
    }

    #[test]
    fn exact_tie_keeps_first_delivered() {
        let delivered = [c("a", 10.0), c("b", 10.0)];
        assert_eq!(pick_topmost(&delivered), Some("a"));
    }
}
