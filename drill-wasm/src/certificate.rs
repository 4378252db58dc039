use std::cell::RefCell;
use std::rc::Rc;

use certificate_core::{ExportFormat, export_certificate};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, HtmlButtonElement, HtmlInputElement};

use crate::constants::CERTIFICATE_FILE;
use crate::export;
use crate::state::State;
use crate::utils::element;

const BUTTONS: [(&str, ExportFormat); 2] =
    [("certPng", ExportFormat::Png), ("certPdf", ExportFormat::Pdf)];

fn entered_name(document: &Document) -> String {
    element::<HtmlInputElement>(document, "certName")
        .map(|i| i.value())
        .unwrap_or_default()
}

/// Download buttons stay disabled until a name is typed.
fn sync_buttons(document: &Document) {
    let empty = entered_name(document).is_empty();
    for (id, _) in BUTTONS {
        if let Some(btn) = element::<HtmlButtonElement>(document, id) {
            btn.set_disabled(empty);
        }
    }
}

pub fn mount(state: &Rc<RefCell<State>>) -> Result<(), JsValue> {
    let doc = state.borrow().document.clone();

    if let Some(input) = element::<HtmlInputElement>(&doc, "certName") {
        let d = doc.clone();
        let oninput = Closure::<dyn FnMut()>::wrap(Box::new(move || sync_buttons(&d)));
        input.set_oninput(Some(oninput.as_ref().unchecked_ref()));
        oninput.forget();
    }

    for (id, format) in BUTTONS {
        let Some(btn) = element::<HtmlButtonElement>(&doc, id) else {
            continue;
        };
        let st = state.clone();
        let this = btn.clone();
        let onclick = Closure::<dyn FnMut()>::wrap(Box::new(move || {
            let s = st.borrow();
            let name = entered_name(&s.document);
            export::run(&s.window, &s.document, Some(&this), CERTIFICATE_FILE, format, || {
                export_certificate(&name, fonts::font(), format)
            });
            sync_buttons(&s.document);
        }));
        btn.set_onclick(Some(onclick.as_ref().unchecked_ref()));
        onclick.forget();
    }

    sync_buttons(&doc);
    Ok(())
}
