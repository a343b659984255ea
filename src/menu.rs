use std::cell::Cell;
use std::rc::Rc;

use log::debug;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event, HtmlElement, KeyboardEvent, Node};

use crate::dom;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub(crate) enum MenuState {
    Open,
    Closed,
}

/// Everything the DOM learns about the menu. All three fields derive from
/// the same state value, so attribute and class can never disagree.
pub(crate) struct MenuProjection {
    pub aria_expanded: bool,
    pub nav_open: bool,
    pub scroll_locked: bool,
}

impl MenuState {
    pub(crate) fn toggled(self) -> MenuState {
        match self {
            MenuState::Open => MenuState::Closed,
            MenuState::Closed => MenuState::Open,
        }
    }

    pub(crate) fn projection(self) -> MenuProjection {
        let open = self == MenuState::Open;
        MenuProjection {
            aria_expanded: open,
            nav_open: open,
            scroll_locked: open,
        }
    }
}

/// Mobile navigation controller. Holds the open/closed state and projects
/// it onto the trigger button, the nav container and the body scroll lock.
pub struct Menu {
    state: Cell<MenuState>,
    trigger: HtmlElement,
    nav: Element,
    document: Document,
}

impl Menu {
    /// Wires the controller, or returns None when the trigger or the nav
    /// container is missing so the whole feature stays inert.
    pub fn mount(document: &Document) -> Option<Rc<Menu>> {
        let trigger = document
            .get_element_by_id("menu-toggle")?
            .dyn_into::<HtmlElement>()
            .ok()?;
        let nav = document.get_element_by_id("header-nav")?;

        let menu = Rc::new(Menu {
            state: Cell::new(MenuState::Closed),
            trigger,
            nav,
            document: document.clone(),
        });
        wire(&menu);
        Some(menu)
    }

    pub fn is_open(&self) -> bool {
        self.state.get() == MenuState::Open
    }

    pub fn toggle(&self) {
        self.apply(self.state.get().toggled());
    }

    pub fn close(&self) {
        self.apply(MenuState::Closed);
    }

    fn apply(&self, next: MenuState) {
        self.state.set(next);
        let projection = next.projection();
        let _ = self.trigger.set_attribute(
            "aria-expanded",
            if projection.aria_expanded { "true" } else { "false" },
        );
        dom::set_class(&self.nav, "is-open", projection.nav_open);
        if let Some(body) = self.document.body() {
            let style = body.style();
            if projection.scroll_locked {
                let _ = style.set_property("overflow", "hidden");
            } else {
                let _ = style.remove_property("overflow");
            }
        }
    }
}

fn wire(menu: &Rc<Menu>) {
    {
        let menu_for_toggle = menu.clone();
        let on_toggle = Closure::wrap(Box::new(move |_: Event| {
            menu_for_toggle.toggle();
        }) as Box<dyn FnMut(Event)>);
        let _ = menu
            .trigger
            .add_event_listener_with_callback("click", on_toggle.as_ref().unchecked_ref());
        on_toggle.forget();
    }

    // Any nav link click closes the menu.
    if let Ok(links) = menu.nav.query_selector_all("a") {
        let close = {
            let menu = menu.clone();
            Closure::wrap(Box::new(move |_: Event| {
                menu.close();
            }) as Box<dyn FnMut(Event)>)
        };
        for i in 0..links.length() {
            if let Some(link) = links.get(i) {
                let _ = link
                    .add_event_listener_with_callback("click", close.as_ref().unchecked_ref());
            }
        }
        close.forget();
    }

    // Escape closes and hands keyboard focus back to the trigger.
    {
        let menu_for_keys = menu.clone();
        let on_keydown = Closure::wrap(Box::new(move |event: KeyboardEvent| {
            if event.key() == "Escape" && menu_for_keys.is_open() {
                menu_for_keys.close();
                let _ = menu_for_keys.trigger.focus();
            }
        }) as Box<dyn FnMut(KeyboardEvent)>);
        let _ = menu
            .document
            .add_event_listener_with_callback("keydown", on_keydown.as_ref().unchecked_ref());
        on_keydown.forget();
    }

    // Clicking outside both the trigger and the nav closes the menu.
    {
        let menu_for_clicks = menu.clone();
        let on_click = Closure::wrap(Box::new(move |event: Event| {
            if !menu_for_clicks.is_open() {
                return;
            }
            let Some(target) = event.target() else { return };
            let Some(node) = target.dyn_ref::<Node>() else {
                return;
            };
            if !menu_for_clicks.nav.contains(Some(node))
                && !menu_for_clicks.trigger.contains(Some(node))
            {
                menu_for_clicks.close();
            }
        }) as Box<dyn FnMut(Event)>);
        let _ = menu
            .document
            .add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref());
        on_click.forget();
    }

    debug!("menu controller mounted");
}
