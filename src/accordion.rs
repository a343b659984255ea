use std::cell::RefCell;
use std::rc::Rc;

use log::debug;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event, KeyboardEvent};

use crate::dom;

/// Single-open accordion rule: activating the open item closes it,
/// activating any other item moves the single open slot there.
#[derive(Default)]
pub(crate) struct AccordionState {
    open: Option<usize>,
}

impl AccordionState {
    pub(crate) fn activate(&mut self, index: usize) {
        self.open = if self.open == Some(index) {
            None
        } else {
            Some(index)
        };
    }

    pub(crate) fn is_expanded(&self, index: usize) -> bool {
        self.open == Some(index)
    }

    pub(crate) fn expanded_count(&self) -> usize {
        usize::from(self.open.is_some())
    }
}

/// Wires every `.faq__item` that carries both a question and an answer.
/// Items missing either nested element are skipped individually.
pub fn mount(document: &Document) {
    let mut questions: Vec<Element> = Vec::new();
    for item in dom::query_all(document, ".faq__item") {
        let question = item.query_selector(".faq__question").ok().flatten();
        let answer = item.query_selector(".faq__answer").ok().flatten();
        let (Some(question), Some(_answer)) = (question, answer) else {
            continue;
        };
        // Explicitly collapsed on load.
        let _ = question.set_attribute("aria-expanded", "false");
        questions.push(question);
    }
    if questions.is_empty() {
        debug!("accordion skipped: no complete faq items");
        return;
    }

    let questions = Rc::new(questions);
    let state = Rc::new(RefCell::new(AccordionState::default()));

    for (index, question) in questions.iter().enumerate() {
        let on_click = {
            let state = state.clone();
            let questions = questions.clone();
            Closure::wrap(Box::new(move |_: Event| {
                activate(&state, &questions, index);
            }) as Box<dyn FnMut(Event)>)
        };
        let _ = question
            .add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref());
        on_click.forget();

        // Enter and Space route into the same activation path as click;
        // preventing default keeps Space from scrolling the page.
        let on_keydown = {
            let state = state.clone();
            let questions = questions.clone();
            Closure::wrap(Box::new(move |event: KeyboardEvent| {
                let key = event.key();
                if key == "Enter" || key == " " {
                    event.prevent_default();
                    activate(&state, &questions, index);
                }
            }) as Box<dyn FnMut(KeyboardEvent)>)
        };
        let _ = question
            .add_event_listener_with_callback("keydown", on_keydown.as_ref().unchecked_ref());
        on_keydown.forget();
    }

    debug!("accordion mounted with {} items", questions.len());
}

fn activate(state: &RefCell<AccordionState>, questions: &[Element], index: usize) {
    let mut state = state.borrow_mut();
    state.activate(index);
    for (i, question) in questions.iter().enumerate() {
        let _ = question.set_attribute(
            "aria-expanded",
            if state.is_expanded(i) { "true" } else { "false" },
        );
    }
}
