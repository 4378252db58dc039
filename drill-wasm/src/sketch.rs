use std::cell::RefCell;
use std::rc::Rc;

use certificate_core::{ExportFormat, exit_map_svg, export_svg};
use drill_core::payload::log_submission;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{
    CanvasRenderingContext2d, Document, HtmlButtonElement, HtmlCanvasElement, PointerEvent,
};

use crate::canvas::pen_segment;
use crate::constants::{EXIT_MAP_FILE, NAVY, SKETCH_LINE_WIDTH};
use crate::export;
use crate::state::{State, Surface};
use crate::utils::{element, event_canvas_coords, now_ms};

pub fn init_surface(document: &Document, width: f64, height: f64) -> Option<Surface> {
    let canvas = element::<HtmlCanvasElement>(document, "sketchCanvas")?;
    canvas.set_width(width as u32);
    canvas.set_height(height as u32);
    let ctx = canvas
        .get_context("2d")
        .ok()
        .flatten()?
        .dyn_into::<CanvasRenderingContext2d>()
        .ok()?;
    Some(Surface { canvas, ctx })
}

fn listen(
    canvas: &HtmlCanvasElement,
    event: &str,
    handler: impl FnMut(PointerEvent) + 'static,
) -> Result<(), JsValue> {
    let closure = Closure::<dyn FnMut(PointerEvent)>::wrap(Box::new(handler));
    canvas.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

fn attach_pointer(state: &Rc<RefCell<State>>, canvas: &HtmlCanvasElement) -> Result<(), JsValue> {
    let st = state.clone();
    listen(canvas, "pointerdown", move |e: PointerEvent| {
        let mut s = st.borrow_mut();
        let Some(surface) = &s.sketch_surface else {
            return;
        };
        let _ = surface.canvas.set_pointer_capture(e.pointer_id());
        let pt = event_canvas_coords(&e, &surface.canvas);
        s.sketch.pointer_down(pt, now_ms());
    })?;

    let st = state.clone();
    listen(canvas, "pointermove", move |e: PointerEvent| {
        let mut s = st.borrow_mut();
        if !s.sketch.is_drawing() {
            return;
        }
        let Some(surface) = s.sketch_surface.clone() else {
            return;
        };
        let pt = event_canvas_coords(&e, &surface.canvas);
        if s.sketch.pointer_move(pt, now_ms())
            && let Some((a, b)) = s.sketch.last_segment()
        {
            pen_segment(&surface.ctx, a, b, NAVY, SKETCH_LINE_WIDTH);
        }
    })?;

    for event in ["pointerup", "pointercancel"] {
        let st = state.clone();
        listen(canvas, event, move |e: PointerEvent| {
            let mut s = st.borrow_mut();
            if let Some(surface) = &s.sketch_surface {
                let _ = surface.canvas.release_pointer_capture(e.pointer_id());
            }
            if s.sketch.pointer_up() {
                log::debug!("stroke {} sealed", s.sketch.strokes().len());
            }
        })?;
    }
    Ok(())
}

fn export_map(s: &State, button: Option<&HtmlButtonElement>, format: ExportFormat) {
    let payload = s.sketch.export(now_ms());
    log_submission(&payload);
    let (w, h) = (s.curriculum.drawing.width, s.curriculum.drawing.height);
    let svg = exit_map_svg(s.sketch.strokes(), w as u32, h as u32);
    export::run(&s.window, &s.document, button, EXIT_MAP_FILE, format, || {
        export_svg(&svg, w as u32, h as u32, fonts::font(), format)
    });
}

pub fn mount(state: &Rc<RefCell<State>>) -> Result<(), JsValue> {
    let (doc, canvas) = {
        let s = state.borrow();
        (
            s.document.clone(),
            s.sketch_surface.as_ref().map(|m| m.canvas.clone()),
        )
    };
    if let Some(canvas) = &canvas {
        attach_pointer(state, canvas)?;
    }

    if let Some(btn) = element::<HtmlButtonElement>(&doc, "sketchClear") {
        let st = state.clone();
        let onclick = Closure::<dyn FnMut()>::wrap(Box::new(move || {
            let mut s = st.borrow_mut();
            if let Some(surface) = &s.sketch_surface {
                let (w, h) = (surface.canvas.width() as f64, surface.canvas.height() as f64);
                surface.ctx.clear_rect(0.0, 0.0, w, h);
            }
            s.sketch.clear(now_ms());
        }));
        btn.set_onclick(Some(onclick.as_ref().unchecked_ref()));
        onclick.forget();
    }

    for (id, format) in [("sketchPng", ExportFormat::Png), ("sketchPdf", ExportFormat::Pdf)] {
        let Some(btn) = element::<HtmlButtonElement>(&doc, id) else {
            continue;
        };
        let st = state.clone();
        let this = btn.clone();
        let onclick = Closure::<dyn FnMut()>::wrap(Box::new(move || {
            export_map(&st.borrow(), Some(&this), format);
        }));
        btn.set_onclick(Some(onclick.as_ref().unchecked_ref()));
        onclick.forget();
    }
    Ok(())
}
