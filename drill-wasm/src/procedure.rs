use std::cell::RefCell;
use std::rc::Rc;

use drill_core::procedure::PlayOutcome;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::HtmlButtonElement;

use crate::speech;
use crate::state::{State, with_state};
use crate::utils::{element, html_escape, set_hidden};

fn render(s: &State) {
    set_hidden(&s.document, "sdrSteps", !s.procedure.steps_visible());
    if let Some(btn) = element::<HtmlButtonElement>(&s.document, "sdrPlay") {
        let playing = s.procedure.is_playing();
        btn.set_disabled(playing);
        btn.set_text_content(Some(if playing {
            "Listening..."
        } else {
            "🔊 Play the Song & Learn"
        }));
    }
}

fn render_steps(s: &State) {
    let Some(el) = s.document.get_element_by_id("sdrSteps") else {
        return;
    };
    let mut html = String::new();
    for (i, step) in s.procedure.steps().iter().enumerate() {
        html.push_str(&format!(
            "<div class=\"step step-{}\"><div class=\"icon\">{}</div><h3>{}</h3><p>{}</p></div>",
            i,
            html_escape(&step.icon),
            html_escape(&step.title),
            html_escape(&step.caption)
        ));
    }
    el.set_inner_html(&html);
}

pub fn mount(state: &Rc<RefCell<State>>) -> Result<(), JsValue> {
    let doc = state.borrow().document.clone();

    // One onend handler serves every utterance.
    let onend = Closure::<dyn FnMut()>::wrap(Box::new(move || {
        with_state(|s| {
            s.procedure.narration_finished();
            render(s);
        });
    }));
    let onend_fn: js_sys::Function = onend.as_ref().unchecked_ref::<js_sys::Function>().clone();
    onend.forget();

    if let Some(btn) = element::<HtmlButtonElement>(&doc, "sdrPlay") {
        let st = state.clone();
        let onclick = Closure::<dyn FnMut()>::wrap(Box::new(move || {
            let mut s = st.borrow_mut();
            let available = speech::available(&s.window);
            match s.procedure.play(available) {
                PlayOutcome::Narrate(req) => {
                    if let Err(e) =
                        speech::speak(&s.window, &req.text, req.rate, req.pitch, Some(&onend_fn))
                    {
                        log::warn!("speech failed: {e:?}");
                        s.procedure.narration_finished();
                    }
                }
                PlayOutcome::RevealedSilently => log::info!("speech unavailable; showing steps only"),
                PlayOutcome::Ignored => {}
            }
            render(&s);
        }));
        btn.set_onclick(Some(onclick.as_ref().unchecked_ref()));
        onclick.forget();
    }

    let s = state.borrow();
    render_steps(&s);
    render(&s);
    Ok(())
}
