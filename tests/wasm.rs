//! Browser-side wiring tests; run with `wasm-pack test --headless`.
#![cfg(target_arch = "wasm32")]

use std::cell::Cell;
use std::rc::Rc;

use gloo_timers::future::TimeoutFuture;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_test::*;
use web_sys::js_sys;
use web_sys::{Document, HtmlElement, KeyboardEvent, KeyboardEventInit, Window};

use bindalbah_frontend::{accordion, analytics, header, install_namespace, menu, reveal, utils};

wasm_bindgen_test_configure!(run_in_browser);

fn window() -> Window {
    web_sys::window().unwrap()
}

fn document() -> Document {
    window().document().unwrap()
}

fn set_body(html: &str) {
    document().body().unwrap().set_inner_html(html);
}

fn click(id: &str) {
    document()
        .get_element_by_id(id)
        .unwrap()
        .dyn_into::<HtmlElement>()
        .unwrap()
        .click();
}

fn aria_expanded(id: &str) -> Option<String> {
    document()
        .get_element_by_id(id)?
        .get_attribute("aria-expanded")
}

#[wasm_bindgen_test]
fn menu_projection_keeps_attribute_and_class_in_step() {
    set_body(
        r##"<header id="header">
              <button id="menu-toggle" aria-expanded="false">Menu</button>
              <nav id="header-nav"><a href="#services">Services</a></nav>
            </header>"##,
    );
    let menu = menu::Menu::mount(&document()).expect("menu elements present");

    menu.toggle();
    let nav = document().get_element_by_id("header-nav").unwrap();
    assert_eq!(aria_expanded("menu-toggle").as_deref(), Some("true"));
    assert!(nav.class_list().contains("is-open"));
    let overflow = document()
        .body()
        .unwrap()
        .style()
        .get_property_value("overflow")
        .unwrap();
    assert_eq!(overflow, "hidden");

    menu.close();
    assert_eq!(aria_expanded("menu-toggle").as_deref(), Some("false"));
    assert!(!nav.class_list().contains("is-open"));
    let overflow = document()
        .body()
        .unwrap()
        .style()
        .get_property_value("overflow")
        .unwrap();
    assert_eq!(overflow, "");
}

#[wasm_bindgen_test]
fn nav_link_click_closes_menu() {
    set_body(
        r##"<button id="menu-toggle" aria-expanded="false">Menu</button>
            <nav id="header-nav"><a id="nav-link" href="#faq">FAQ</a></nav>"##,
    );
    let menu = menu::Menu::mount(&document()).expect("menu elements present");
    menu.toggle();
    assert!(menu.is_open());

    click("nav-link");
    assert!(!menu.is_open());
    assert_eq!(aria_expanded("menu-toggle").as_deref(), Some("false"));
}

#[wasm_bindgen_test]
fn accordion_keeps_at_most_one_item_open() {
    set_body(
        r##"<div class="faq__item">
              <button id="q1" class="faq__question">One?</button>
              <div class="faq__answer">First.</div>
            </div>
            <div class="faq__item">
              <button id="q2" class="faq__question">Two?</button>
              <div class="faq__answer">Second.</div>
            </div>"##,
    );
    accordion::mount(&document());

    assert_eq!(aria_expanded("q1").as_deref(), Some("false"));
    assert_eq!(aria_expanded("q2").as_deref(), Some("false"));

    click("q1");
    assert_eq!(aria_expanded("q1").as_deref(), Some("true"));
    assert_eq!(aria_expanded("q2").as_deref(), Some("false"));

    click("q2");
    assert_eq!(aria_expanded("q1").as_deref(), Some("false"));
    assert_eq!(aria_expanded("q2").as_deref(), Some("true"));

    click("q2");
    assert_eq!(aria_expanded("q1").as_deref(), Some("false"));
    assert_eq!(aria_expanded("q2").as_deref(), Some("false"));
}

#[wasm_bindgen_test]
fn space_key_activates_question() {
    set_body(
        r##"<div class="faq__item">
              <button id="q1" class="faq__question">One?</button>
              <div class="faq__answer">First.</div>
            </div>"##,
    );
    accordion::mount(&document());

    let init = KeyboardEventInit::new();
    init.set_key(" ");
    let event = KeyboardEvent::new_with_keyboard_event_init_dict("keydown", &init).unwrap();
    let question = document().get_element_by_id("q1").unwrap();
    question.dispatch_event(&event).unwrap();

    assert_eq!(aria_expanded("q1").as_deref(), Some("true"));
}

#[wasm_bindgen_test]
async fn debounce_runs_only_the_last_call() {
    let runs = Rc::new(Cell::new(0u32));
    let last = Rc::new(Cell::new(0u32));

    let mut debouncer = utils::Debouncer::new(30);
    for i in 1..=3u32 {
        let runs = runs.clone();
        let last = last.clone();
        debouncer.bounce(move || {
            runs.set(runs.get() + 1);
            last.set(i);
        });
    }
    TimeoutFuture::new(120).await;

    assert_eq!(runs.get(), 1);
    assert_eq!(last.get(), 3);
}

#[wasm_bindgen_test]
async fn cancelled_debounce_never_fires() {
    let runs = Rc::new(Cell::new(0u32));
    let mut debouncer = utils::Debouncer::new(10);
    {
        let runs = runs.clone();
        debouncer.bounce(move || runs.set(runs.get() + 1));
    }
    debouncer.cancel();
    TimeoutFuture::new(60).await;
    assert_eq!(runs.get(), 0);
}

#[wasm_bindgen_test]
fn cta_click_pushes_one_event_to_data_layer() {
    let queue = js_sys::Array::new();
    js_sys::Reflect::set(
        window().as_ref(),
        &JsValue::from_str("dataLayer"),
        queue.as_ref(),
    )
    .unwrap();
    set_body(r##"<button id="cta_call_hero">Call us</button>"##);
    analytics::mount(&document());

    click("cta_call_hero");

    assert_eq!(queue.length(), 1);
    let record = queue.get(0);
    let field = |name: &str| {
        js_sys::Reflect::get(&record, &JsValue::from_str(name))
            .unwrap()
            .as_string()
            .unwrap()
    };
    assert_eq!(field("event"), "cta_click");
    assert_eq!(field("cta_type"), "call");
    assert_eq!(field("cta_location"), "hero");
    assert_eq!(field("cta_id"), "cta_call_hero");
}

#[wasm_bindgen_test]
fn header_mount_syncs_initial_state() {
    set_body(r##"<header id="header"></header>"##);
    header::mount(&window(), &document());

    let header_el = document().get_element_by_id("header").unwrap();
    assert!(!header_el.class_list().contains("is-scrolled"));
}

#[wasm_bindgen_test]
fn reveal_targets_get_base_class() {
    set_body(r##"<div id="card" class="card"></div>"##);
    reveal::mount(&document());

    let card = document().get_element_by_id("card").unwrap();
    assert!(card.class_list().contains("reveal"));
}

#[wasm_bindgen_test]
fn namespace_exposes_utilities() {
    install_namespace(&window(), None);

    let namespace =
        js_sys::Reflect::get(window().as_ref(), &JsValue::from_str("BinDalbah")).unwrap();
    let validate = js_sys::Reflect::get(&namespace, &JsValue::from_str("validatePhone"))
        .unwrap()
        .dyn_into::<js_sys::Function>()
        .unwrap();

    let ok = validate
        .call1(&JsValue::NULL, &JsValue::from_str("0512345678"))
        .unwrap();
    assert_eq!(ok.as_bool(), Some(true));

    let bad = validate
        .call1(&JsValue::NULL, &JsValue::from_str("12345678"))
        .unwrap();
    assert_eq!(bad.as_bool(), Some(false));

    let debounce = js_sys::Reflect::get(&namespace, &JsValue::from_str("debounce")).unwrap();
    assert!(debounce.is_function());
}
