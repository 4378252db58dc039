use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, HtmlElement};

use crate::utils::{element, set_hidden, set_text};

#[derive(Clone, Copy, Debug)]
pub enum Tone {
    Success,
    Error,
    Info,
}

impl Tone {
    fn class(self) -> &'static str {
        match self {
            Tone::Success => "modal success",
            Tone::Error => "modal error",
            Tone::Info => "modal info",
        }
    }
}

/// Pop the shared dialog with `title` and `message`.
pub fn show(document: &Document, title: &str, message: &str, tone: Tone) {
    let Some(modal) = element::<HtmlElement>(document, "modal") else {
        return;
    };
    set_text(document, "modalTitle", title);
    set_text(document, "modalMessage", message);
    if let Some(card) = document.get_element_by_id("modalCard") {
        card.set_class_name(tone.class());
    }
    modal.set_hidden(false);
}

/// Wire the dialog's dismiss button. Called once at mount.
pub fn attach(document: &Document) {
    let Some(btn) = element::<HtmlElement>(document, "modalOk") else {
        return;
    };
    let doc = document.clone();
    let onclick = Closure::<dyn FnMut()>::wrap(Box::new(move || {
        set_hidden(&doc, "modal", true);
    }));
    btn.set_onclick(Some(onclick.as_ref().unchecked_ref()));
    onclick.forget();
}
