use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use once_cell::sync::Lazy;
use regex::Regex;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsValue;
use web_sys::js_sys;

/// Saudi mobile numbers: optional leading zero, then 5 and eight digits.
static PHONE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(05|5)[0-9]{8}$").expect("phone pattern compiles"));

/// Checks a phone number after stripping whitespace. Returns false rather
/// than signaling failure, so callers can feed it raw form input.
pub fn validate_phone(phone: &str) -> bool {
    let compact: String = phone.chars().filter(|c| !c.is_whitespace()).collect();
    PHONE_RE.is_match(&compact)
}

/// Trailing-edge debouncer owning its pending timer, so a later call can
/// cancel an earlier one and only the last call in a window ever runs.
pub struct Debouncer {
    wait_ms: u32,
    pending: Option<Timeout>,
}

impl Debouncer {
    pub fn new(wait_ms: u32) -> Self {
        Self {
            wait_ms,
            pending: None,
        }
    }

    /// Schedules `f` after the wait; dropping the previous handle cancels
    /// any call still pending.
    pub fn bounce<F: FnOnce() + 'static>(&mut self, f: F) {
        self.pending = Some(Timeout::new(self.wait_ms, f));
    }

    pub fn cancel(&mut self) {
        self.pending = None;
    }
}

/// JS-facing wrapper: returns a function that forwards the latest call's
/// arguments to `f` once calls stop arriving for `wait_ms`.
pub(crate) fn debounced(f: js_sys::Function, wait_ms: u32) -> JsValue {
    let debouncer = Rc::new(RefCell::new(Debouncer::new(wait_ms)));
    let wrapper = Closure::wrap(Box::new(move |a: JsValue, b: JsValue, c: JsValue| {
        let f = f.clone();
        debouncer.borrow_mut().bounce(move || {
            let _ = f.call3(&JsValue::NULL, &a, &b, &c);
        });
    }) as Box<dyn FnMut(JsValue, JsValue, JsValue)>);
    let function = wrapper.as_ref().clone();
    wrapper.forget();
    function
}
