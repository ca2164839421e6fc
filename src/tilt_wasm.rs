//! WASM driver for tilt-on-hover cards

use tracing::{debug, info, warn};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, MouseEvent};

use crate::core::tilt::{Tilt, HOVER_TRANSITION, LEAVE_TRANSITION, REST_TRANSFORM};

/// Bind every `.tilt-card`. Skipped on touch (coarse pointer) devices.
pub fn bind(max_deg: f32) -> Result<(), JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let document = window.document().ok_or_else(|| JsValue::from_str("no document"))?;

    let touch = window
        .match_media("(pointer: coarse)")?
        .map(|query| query.matches())
        .unwrap_or(false);
    if touch {
        debug!("Coarse pointer, tilt cards disabled");
        return Ok(());
    }

    let cards = document.query_selector_all(".tilt-card")?;
    let mut bound = 0;
    for i in 0..cards.length() {
        let Some(card) = cards.item(i).and_then(|node| node.dyn_into::<HtmlElement>().ok()) else {
            continue;
        };
        bind_card(card, max_deg)?;
        bound += 1;
    }

    info!(cards = bound, "Tilt cards bound");
    Ok(())
}

fn bind_card(card: HtmlElement, max_deg: f32) -> Result<(), JsValue> {
    let target = card.clone();
    let on_move = Closure::wrap(Box::new(move |e: MouseEvent| {
        let rect = target.get_bounding_client_rect();
        let tilt = Tilt::from_pointer(
            (e.client_x() as f64 - rect.left()) as f32,
            (e.client_y() as f64 - rect.top()) as f32,
            rect.width() as f32,
            rect.height() as f32,
            max_deg,
        );
        apply(&target, &tilt.hover_transform(), HOVER_TRANSITION);
    }) as Box<dyn FnMut(MouseEvent)>);
    card.add_event_listener_with_callback("mousemove", on_move.as_ref().unchecked_ref())?;
    on_move.forget();

    let target = card.clone();
    let on_leave = Closure::wrap(Box::new(move |_: MouseEvent| {
        apply(&target, REST_TRANSFORM, LEAVE_TRANSITION);
    }) as Box<dyn FnMut(MouseEvent)>);
    card.add_event_listener_with_callback("mouseleave", on_leave.as_ref().unchecked_ref())?;
    on_leave.forget();

    Ok(())
}

fn apply(card: &HtmlElement, transform: &str, transition: &str) {
    let style = card.style();
    let result = style
        .set_property("transform", transform)
        .and_then(|_| style.set_property("transition", transition));
    if let Err(e) = result {
        warn!(?e, "Failed to set card transform");
    }
}
