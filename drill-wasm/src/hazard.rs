use std::cell::RefCell;
use std::rc::Rc;

use drill_core::hazard::HazardOutcome;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Element, Event, HtmlButtonElement, HtmlElement};

use crate::modal::{self, Tone};
use crate::state::State;
use crate::utils::{element, html_escape};

fn render(s: &State) {
    let doc = &s.document;
    if let Some(list) = doc.get_element_by_id("hazardList") {
        let submitted = s.hazards.is_submitted();
        let mut html = String::new();
        for h in s.hazards.hazards() {
            let class = if submitted {
                "hazard checked"
            } else if s.hazards.is_selected(h.id) {
                "hazard selected"
            } else {
                "hazard"
            };
            html.push_str(&format!(
                "<button type=\"button\" class=\"{}\" data-id=\"{}\"><span class=\"icon\">{}</span><span>{}</span>{}</button>",
                class,
                h.id,
                html_escape(&h.icon),
                html_escape(&h.label),
                if submitted { "<span class=\"tick\">✓</span>" } else { "" }
            ));
        }
        list.set_inner_html(&html);
    }
    if let Some(btn) = element::<HtmlButtonElement>(doc, "hazardCheck") {
        btn.set_hidden(s.hazards.is_submitted());
        btn.set_disabled(!s.hazards.can_submit());
    }
    if let Some(btn) = element::<HtmlElement>(doc, "hazardReset") {
        btn.set_hidden(!s.hazards.is_submitted());
    }
}

fn clicked_id(e: &Event) -> Option<u32> {
    let target = e.target()?.dyn_into::<Element>().ok()?;
    let item = target.closest("[data-id]").ok()??;
    item.get_attribute("data-id")?.parse().ok()
}

pub fn mount(state: &Rc<RefCell<State>>) -> Result<(), JsValue> {
    let doc = state.borrow().document.clone();

    if let Some(list) = doc.get_element_by_id("hazardList") {
        let st = state.clone();
        let onclick = Closure::<dyn FnMut(Event)>::wrap(Box::new(move |e: Event| {
            let Some(id) = clicked_id(&e) else {
                return;
            };
            let mut s = st.borrow_mut();
            match s.hazards.toggle(id) {
                Ok(t) => log::debug!("hazard {id}: {t:?}"),
                Err(err) => log::warn!("{err}"),
            }
            render(&s);
        }));
        list.add_event_listener_with_callback("click", onclick.as_ref().unchecked_ref())?;
        onclick.forget();
    }

    if let Some(btn) = element::<HtmlElement>(&doc, "hazardCheck") {
        let st = state.clone();
        let onclick = Closure::<dyn FnMut()>::wrap(Box::new(move || {
            let mut s = st.borrow_mut();
            match s.hazards.submit() {
                Ok(HazardOutcome::Success) => modal::show(
                    &s.document,
                    "Great Job!",
                    "You spotted all the fire dangers! Always tell an adult if you see these things.",
                    Tone::Success,
                ),
                Ok(HazardOutcome::Retry) => modal::show(
                    &s.document,
                    "Almost there!",
                    "Look closely! There are more dangers hidden in the list.",
                    Tone::Info,
                ),
                Err(err) => log::debug!("hazard submit refused: {err}"),
            }
            render(&s);
        }));
        btn.set_onclick(Some(onclick.as_ref().unchecked_ref()));
        onclick.forget();
    }

    if let Some(btn) = element::<HtmlElement>(&doc, "hazardReset") {
        let st = state.clone();
        let onclick = Closure::<dyn FnMut()>::wrap(Box::new(move || {
            let mut s = st.borrow_mut();
            s.hazards.reset();
            render(&s);
        }));
        btn.set_onclick(Some(onclick.as_ref().unchecked_ref()));
        onclick.forget();
    }

    render(&state.borrow());
    Ok(())
}
