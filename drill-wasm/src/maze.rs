use std::cell::RefCell;
use std::rc::Rc;

use drill_core::{MazeStatus, MoveOutcome};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, Document, HtmlCanvasElement, HtmlElement, PointerEvent};

use crate::canvas::{fill_circle, fill_rect, label, set_fill_style};
use crate::constants::{CREAM, GOLD, GREEN, NAVY, PLAYER_RADIUS, RED};
use crate::state::{State, Surface};
use crate::utils::{element, event_canvas_coords, now_ms, set_hidden, set_text};

pub fn init_surface(document: &Document, width: f64, height: f64) -> Option<Surface> {
    let canvas = element::<HtmlCanvasElement>(document, "mazeCanvas")?;
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

fn draw(s: &State) {
    let Some(surface) = &s.maze_surface else {
        return;
    };
    let ctx = &surface.ctx;
    let layout = s.maze.layout();
    set_fill_style(ctx, CREAM);
    ctx.fill_rect(0.0, 0.0, layout.width, layout.height);

    let start = &layout.start_zone;
    fill_rect(ctx, start, GOLD);
    label(ctx, "START", start.x + 10.0, start.y + 35.0, "#000");

    let goal = &layout.goal;
    fill_rect(ctx, goal, GREEN);
    label(ctx, "TRUCK", goal.x + 10.0, goal.y + 35.0, "#fff");

    for obstacle in &layout.obstacles {
        fill_rect(ctx, obstacle, RED);
    }
    fill_circle(ctx, s.maze.player(), PLAYER_RADIUS, NAVY);
}

fn update_overlay(s: &State) {
    let doc = &s.document;
    let (title, class) = match s.maze.status() {
        MazeStatus::Playing => {
            set_hidden(doc, "mazeOverlay", true);
            return;
        }
        MazeStatus::Won => ("You Made It!", "won"),
        MazeStatus::Lost => ("Ouch! Hot Zone!", "lost"),
    };
    set_text(doc, "mazeOverlayTitle", title);
    if let Some(el) = doc.get_element_by_id("mazeOverlayTitle") {
        el.set_class_name(class);
    }
    set_hidden(doc, "mazeOverlay", false);
}

pub fn mount(state: &Rc<RefCell<State>>) -> Result<(), JsValue> {
    let (doc, canvas) = {
        let s = state.borrow();
        (s.document.clone(), s.maze_surface.as_ref().map(|m| m.canvas.clone()))
    };

    if let Some(canvas) = canvas {
        let st = state.clone();
        let onpointerdown =
            Closure::<dyn FnMut(PointerEvent)>::wrap(Box::new(move |e: PointerEvent| {
                let mut s = st.borrow_mut();
                let Some(surface) = &s.maze_surface else {
                    return;
                };
                let pt = event_canvas_coords(&e, &surface.canvas);
                match s.maze.click(pt, now_ms()) {
                    MoveOutcome::Ignored => return,
                    MoveOutcome::ReachedGoal(payload) => log::info!(
                        "maze solved in {} ms with {} moves",
                        payload.client_elapsed_time_ms,
                        payload_moves(&s)
                    ),
                    MoveOutcome::Moved | MoveOutcome::HitObstacle => {}
                }
                draw(&s);
                update_overlay(&s);
            }));
        canvas.add_event_listener_with_callback(
            "pointerdown",
            onpointerdown.as_ref().unchecked_ref(),
        )?;
        onpointerdown.forget();
    }

    if let Some(btn) = element::<HtmlElement>(&doc, "mazeReset") {
        let st = state.clone();
        let onclick = Closure::<dyn FnMut()>::wrap(Box::new(move || {
            let mut s = st.borrow_mut();
            s.maze.reset(now_ms());
            draw(&s);
            update_overlay(&s);
        }));
        btn.set_onclick(Some(onclick.as_ref().unchecked_ref()));
        onclick.forget();
    }

    let s = state.borrow();
    draw(&s);
    update_overlay(&s);
    Ok(())
}

fn payload_moves(s: &State) -> usize {
    s.maze.path().len().saturating_sub(1)
}
