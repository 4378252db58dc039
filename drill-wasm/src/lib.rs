//! Browser runtime for the fire safety drill.
//!
//! `start` loads the built-in curriculum, builds one session per chapter and wires the
//! page's DOM events to them. All game rules live in `drill-core`; this crate
//! only translates events, draws, speaks and downloads.

use std::cell::RefCell;
use std::rc::Rc;

use drill_core::hazard::HazardPicker;
use drill_core::procedure::ProcedureAnimator;
use drill_core::recall::NumberRecall;
use drill_core::{Curriculum, MazeSession, SketchSession};
use log::LevelFilter;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Window};

mod canvas;
mod certificate;
mod constants;
mod export;
mod hazard;
mod logger;
mod matching;
mod maze;
mod modal;
mod procedure;
mod recall;
mod sketch;
mod speech;
mod state;
mod utils;

use state::{STATE, State};
use utils::now_ms;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
    logger::init(LevelFilter::Info);

    let window = web_sys::window().ok_or("no window")?;
    let document = window.document().ok_or("no document")?;
    let curriculum = Curriculum::builtin().map_err(|e| JsValue::from_str(&e.to_string()))?;
    mount(window, document, curriculum)
}

fn mount(window: Window, document: Document, curriculum: Curriculum) -> Result<(), JsValue> {
    let now = now_ms();
    let maze_surface = maze::init_surface(&document, curriculum.maze.width, curriculum.maze.height);
    let sketch_surface = sketch::init_surface(
        &document,
        curriculum.drawing.width,
        curriculum.drawing.height,
    );
    let state = Rc::new(RefCell::new(State {
        hazards: HazardPicker::new(curriculum.hazards.clone()),
        procedure: ProcedureAnimator::new(curriculum.procedure.clone()),
        recall: NumberRecall::new(curriculum.emergency.clone()),
        maze: MazeSession::new(curriculum.maze.clone(), now),
        maze_surface,
        board: matching::shuffled_board(&curriculum.matching_items),
        sketch: SketchSession::new(curriculum.drawing.challenge_id, now),
        sketch_surface,
        window,
        document,
        curriculum,
    }));
    STATE.with(|st| st.replace(Some(state.clone())));

    modal::attach(&state.borrow().document);
    hazard::mount(&state)?;
    procedure::mount(&state)?;
    recall::mount(&state)?;
    maze::mount(&state)?;
    matching::mount(&state)?;
    sketch::mount(&state)?;
    certificate::mount(&state)?;
    log::info!("fire safety drill ready ({})", state.borrow().curriculum.city);
    Ok(())
}
