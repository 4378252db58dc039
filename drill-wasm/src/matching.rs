use std::cell::RefCell;
use std::rc::Rc;

use drill_core::content::MatchItem;
use drill_core::matching::MatchingBoard;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{DragEvent, Element, Event};

use crate::state::State;
use crate::utils::{html_escape, set_hidden};

/// Fresh shuffled board; the seed comes from the browser's `Math.random`.
pub fn shuffled_board(catalog: &[MatchItem]) -> MatchingBoard {
    let seed = (js_sys::Math::random() * (1u64 << 53) as f64) as u64;
    let mut rng = SmallRng::seed_from_u64(seed);
    MatchingBoard::new(catalog, &mut rng)
}

fn render(s: &State) {
    let Some(grid) = s.document.get_element_by_id("tileGrid") else {
        return;
    };
    let mut html = String::new();
    for (i, tile) in s.board.tiles().iter().enumerate() {
        let class = if s.board.is_slot_matched(i) {
            "tile matched"
        } else {
            "tile"
        };
        html.push_str(&format!(
            "<div class=\"{}\" draggable=\"true\" data-index=\"{}\" data-instance=\"{}\"><span class=\"emoji\">{}</span><span class=\"label\">{}</span></div>",
            class,
            i,
            tile.instance_id,
            html_escape(&tile.item.emoji),
            html_escape(&tile.item.label)
        ));
    }
    grid.set_inner_html(&html);
    set_hidden(&s.document, "matchDone", !s.board.is_complete());
}

fn tile_index(e: &Event) -> Option<usize> {
    let target = e.target()?.dyn_into::<Element>().ok()?;
    let tile = target.closest("[data-index]").ok()??;
    tile.get_attribute("data-index")?.parse().ok()
}

pub fn mount(state: &Rc<RefCell<State>>) -> Result<(), JsValue> {
    let Some(grid) = state.borrow().document.get_element_by_id("tileGrid") else {
        return Ok(());
    };

    // Listeners sit on the grid so they survive re-rendering the tiles.
    {
        let st = state.clone();
        let ondragstart = Closure::<dyn FnMut(DragEvent)>::wrap(Box::new(move |e: DragEvent| {
            let Some(idx) = tile_index(&e) else {
                return;
            };
            if let Err(err) = st.borrow_mut().board.begin_drag(idx) {
                log::warn!("{err}");
                return;
            }
            if let Some(dt) = e.data_transfer() {
                dt.set_effect_allowed("move");
                // Firefox only starts a drag when data is set
                let _ = dt.set_data("text/plain", &idx.to_string());
            }
        }));
        grid.add_event_listener_with_callback("dragstart", ondragstart.as_ref().unchecked_ref())?;
        ondragstart.forget();
    }
    {
        let ondragover = Closure::<dyn FnMut(DragEvent)>::wrap(Box::new(move |e: DragEvent| {
            e.prevent_default();
            if let Some(dt) = e.data_transfer() {
                dt.set_drop_effect("move");
            }
        }));
        grid.add_event_listener_with_callback("dragover", ondragover.as_ref().unchecked_ref())?;
        ondragover.forget();
    }
    {
        let st = state.clone();
        let ondrop = Closure::<dyn FnMut(DragEvent)>::wrap(Box::new(move |e: DragEvent| {
            e.prevent_default();
            let Some(target) = tile_index(&e) else {
                return;
            };
            let mut s = st.borrow_mut();
            match s.board.drop_on(target) {
                Ok(true) => log::info!("matching board solved"),
                Ok(false) => {}
                Err(err) => log::warn!("{err}"),
            }
            render(&s);
        }));
        grid.add_event_listener_with_callback("drop", ondrop.as_ref().unchecked_ref())?;
        ondrop.forget();
    }
    {
        let st = state.clone();
        let ondragend = Closure::<dyn FnMut(DragEvent)>::wrap(Box::new(move |_e: DragEvent| {
            st.borrow_mut().board.end_drag();
        }));
        grid.add_event_listener_with_callback("dragend", ondragend.as_ref().unchecked_ref())?;
        ondragend.forget();
    }

    render(&state.borrow());
    Ok(())
}
