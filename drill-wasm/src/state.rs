use std::cell::RefCell;
use std::rc::Rc;

use drill_core::hazard::HazardPicker;
use drill_core::matching::MatchingBoard;
use drill_core::procedure::ProcedureAnimator;
use drill_core::recall::NumberRecall;
use drill_core::{Curriculum, MazeSession, SketchSession};
use web_sys::{CanvasRenderingContext2d, Document, HtmlCanvasElement, Window};

/// A canvas together with its 2D context.
#[derive(Clone)]
pub struct Surface {
    pub canvas: HtmlCanvasElement,
    pub ctx: CanvasRenderingContext2d,
}

/// Runtime state shared by the DOM callbacks. Each chapter owns its own
/// session; nothing flows between them.
pub struct State {
    pub window: Window,
    pub document: Document,
    pub curriculum: Curriculum,
    pub hazards: HazardPicker,
    pub procedure: ProcedureAnimator,
    pub recall: NumberRecall,
    pub maze: MazeSession,
    pub maze_surface: Option<Surface>,
    pub board: MatchingBoard,
    pub sketch: SketchSession,
    pub sketch_surface: Option<Surface>,
}

/// Thread local storage for the single runtime state instance.
thread_local! {
    pub static STATE: RefCell<Option<Rc<RefCell<State>>>> = const { RefCell::new(None) };
}

/// Run `f` on the mounted state, if any.
pub fn with_state<R>(f: impl FnOnce(&mut State) -> R) -> Option<R> {
    STATE.with(|st| {
        let rc = st.borrow().as_ref()?.clone();
        let mut s = rc.borrow_mut();
        Some(f(&mut s))
    })
}
