use std::f64::consts::TAU;

use drill_core::{Point, Rect};
use wasm_bindgen::prelude::*;
use web_sys::CanvasRenderingContext2d;

// Non-deprecated helpers to set canvas styles via property assignment.
pub fn set_fill_style(ctx: &CanvasRenderingContext2d, color: &str) {
    let _ = js_sys::Reflect::set(
        ctx.as_ref(),
        &JsValue::from_str("fillStyle"),
        &JsValue::from_str(color),
    );
}

pub fn set_stroke_style(ctx: &CanvasRenderingContext2d, color: &str) {
    let _ = js_sys::Reflect::set(
        ctx.as_ref(),
        &JsValue::from_str("strokeStyle"),
        &JsValue::from_str(color),
    );
}

pub fn fill_rect(ctx: &CanvasRenderingContext2d, r: &Rect, color: &str) {
    set_fill_style(ctx, color);
    ctx.fill_rect(r.x, r.y, r.w, r.h);
}

pub fn fill_circle(ctx: &CanvasRenderingContext2d, c: Point, radius: f64, color: &str) {
    ctx.begin_path();
    let _ = ctx.arc(c.x, c.y, radius, 0.0, TAU);
    set_fill_style(ctx, color);
    ctx.fill();
    ctx.close_path();
}

pub fn label(ctx: &CanvasRenderingContext2d, text: &str, x: f64, y: f64, color: &str) {
    set_fill_style(ctx, color);
    ctx.set_font("12px sans-serif");
    let _ = ctx.fill_text(text, x, y);
}

/// Straight segment with the sketch pen settings.
pub fn pen_segment(ctx: &CanvasRenderingContext2d, a: Point, b: Point, color: &str, width: f64) {
    set_stroke_style(ctx, color);
    ctx.set_line_width(width);
    ctx.set_line_cap("round");
    ctx.set_line_join("round");
    ctx.begin_path();
    ctx.move_to(a.x, a.y);
    ctx.line_to(b.x, b.y);
    ctx.stroke();
}
