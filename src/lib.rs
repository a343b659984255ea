use std::rc::Rc;

use log::info;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::wasm_bindgen;
use wasm_bindgen::JsValue;
use web_sys::js_sys;
use web_sys::Window;

pub mod accordion;
pub mod analytics;
pub mod anchors;
pub mod config;
mod dom;
pub mod header;
pub mod menu;
pub mod reveal;
pub mod sections;
pub mod utils;

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(config::log_level());

    info!("starting site interactions");

    let Some(window) = web_sys::window() else {
        return;
    };
    let Some(document) = window.document() else {
        return;
    };

    // Each controller mounts independently; a missing element disables
    // only its own feature.
    let menu = menu::Menu::mount(&document);
    accordion::mount(&document);
    header::mount(&window, &document);
    reveal::mount(&document);
    analytics::mount(&document);
    anchors::mount(&document);
    sections::mount(&document);

    install_namespace(&window, menu);
}

/// Exposes `validatePhone`, `debounce`, `closeMenu` and `toggleMenu` on
/// `window.BinDalbah` for scripts loaded after this one. The menu entries
/// are no-ops when the menu controller did not mount.
pub fn install_namespace(window: &Window, menu: Option<Rc<menu::Menu>>) {
    let namespace = js_sys::Object::new();

    let validate = Closure::wrap(Box::new(|phone: JsValue| -> bool {
        phone
            .as_string()
            .map(|phone| utils::validate_phone(&phone))
            .unwrap_or(false)
    }) as Box<dyn Fn(JsValue) -> bool>);
    set(&namespace, "validatePhone", validate.as_ref());
    validate.forget();

    let debounce = Closure::wrap(Box::new(|f: js_sys::Function, wait_ms: u32| -> JsValue {
        utils::debounced(f, wait_ms)
    }) as Box<dyn Fn(js_sys::Function, u32) -> JsValue>);
    set(&namespace, "debounce", debounce.as_ref());
    debounce.forget();

    let close = {
        let menu = menu.clone();
        Closure::wrap(Box::new(move || {
            if let Some(menu) = &menu {
                menu.close();
            }
        }) as Box<dyn Fn()>)
    };
    set(&namespace, "closeMenu", close.as_ref());
    close.forget();

    let toggle = Closure::wrap(Box::new(move || {
        if let Some(menu) = &menu {
            menu.toggle();
        }
    }) as Box<dyn Fn()>);
    set(&namespace, "toggleMenu", toggle.as_ref());
    toggle.forget();

    let _ = js_sys::Reflect::set(
        window.as_ref(),
        &JsValue::from_str(config::NAMESPACE),
        &namespace,
    );
}

fn set(namespace: &js_sys::Object, name: &str, value: &JsValue) {
    let _ = js_sys::Reflect::set(namespace.as_ref(), &JsValue::from_str(name), value);
}
