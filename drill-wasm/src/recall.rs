use std::cell::RefCell;
use std::rc::Rc;

use drill_core::recall::RecallOutcome;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Event, HtmlElement, HtmlInputElement};

use crate::modal::{self, Tone};
use crate::speech;
use crate::state::State;
use crate::utils::{element, set_text};

pub fn mount(state: &Rc<RefCell<State>>) -> Result<(), JsValue> {
    let doc = state.borrow().document.clone();
    set_text(&doc, "numCity", &state.borrow().curriculum.city);

    if let Some(btn) = element::<HtmlElement>(&doc, "numListen") {
        let st = state.clone();
        let onclick = Closure::<dyn FnMut()>::wrap(Box::new(move || {
            let s = st.borrow();
            if !speech::available(&s.window) {
                return;
            }
            let hint = &s.recall.number().spoken_hint;
            if let Err(e) = speech::speak(&s.window, hint, 1.0, 1.0, None) {
                log::warn!("speech failed: {e:?}");
            }
        }));
        btn.set_onclick(Some(onclick.as_ref().unchecked_ref()));
        onclick.forget();
    }

    if let Some(btn) = element::<HtmlElement>(&doc, "numShow") {
        let st = state.clone();
        let onclick = Closure::<dyn FnMut()>::wrap(Box::new(move || {
            let s = st.borrow();
            modal::show(
                &s.document,
                "Emergency Number",
                &format!("The number is: {}", s.recall.number().display),
                Tone::Info,
            );
        }));
        btn.set_onclick(Some(onclick.as_ref().unchecked_ref()));
        onclick.forget();
    }

    if let Some(form) = doc.get_element_by_id("numForm") {
        let st = state.clone();
        let onsubmit = Closure::<dyn FnMut(Event)>::wrap(Box::new(move |e: Event| {
            e.prevent_default();
            let s = st.borrow();
            let input = element::<HtmlInputElement>(&s.document, "numInput")
                .map(|i| i.value())
                .unwrap_or_default();
            match s.recall.check(&input) {
                RecallOutcome::Correct => modal::show(
                    &s.document,
                    "Correct!",
                    &format!(
                        "You remembered! {} is the number for the {} Fire Brigade.",
                        s.recall.number().display,
                        s.curriculum.city
                    ),
                    Tone::Success,
                ),
                RecallOutcome::Incorrect => modal::show(
                    &s.document,
                    "Try Again",
                    "That's not quite right. Listen to the hint or peek at the number, then try again!",
                    Tone::Error,
                ),
            }
        }));
        form.add_event_listener_with_callback("submit", onsubmit.as_ref().unchecked_ref())?;
        onsubmit.forget();
    }
    Ok(())
}
