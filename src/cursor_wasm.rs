//! WASM driver for the cursor glow

use std::cell::RefCell;
use std::rc::Rc;
use tracing::{debug, info, warn};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{EventTarget, HtmlElement, MouseEvent};

use crate::core::cursor::{position, GlowEvent, GlowStyle, HOVER_SELECTOR};

/// Make `.cursor-glow` follow the pointer. Skipped on coarse pointers.
pub fn bind() -> Result<(), JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let document = window.document().ok_or_else(|| JsValue::from_str("no document"))?;

    let touch = window
        .match_media("(pointer: coarse)")?
        .map(|query| query.matches())
        .unwrap_or(false);
    if touch {
        debug!("Coarse pointer, cursor glow disabled");
        return Ok(());
    }
    let Some(glow) = document
        .query_selector(".cursor-glow")?
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
    else {
        debug!("No .cursor-glow element, skipping");
        return Ok(());
    };

    let target = glow.clone();
    let on_move = Closure::wrap(Box::new(move |e: MouseEvent| {
        let (left, top) = position(e.client_x(), e.client_y());
        let style = target.style();
        let result = style
            .set_property("left", &left)
            .and_then(|_| style.set_property("top", &top));
        if let Err(e) = result {
            warn!(?e, "Failed to move cursor glow");
        }
    }) as Box<dyn FnMut(MouseEvent)>);
    document.add_event_listener_with_callback("mousemove", on_move.as_ref().unchecked_ref())?;
    on_move.forget();

    let state = Rc::new(RefCell::new(GlowStyle::default()));
    listen(&document, "mousedown", &glow, &state, GlowEvent::Press)?;
    listen(&document, "mouseup", &glow, &state, GlowEvent::Release)?;

    let hover = document.query_selector_all(HOVER_SELECTOR)?;
    for i in 0..hover.length() {
        let Some(el) = hover.item(i).and_then(|node| node.dyn_into::<EventTarget>().ok()) else {
            continue;
        };
        listen(&el, "mouseenter", &glow, &state, GlowEvent::Enter)?;
        listen(&el, "mouseleave", &glow, &state, GlowEvent::Leave)?;
    }

    info!(hover_targets = hover.length(), "Cursor glow bound");
    Ok(())
}

fn listen(
    source: &EventTarget,
    event_name: &str,
    glow: &HtmlElement,
    state: &Rc<RefCell<GlowStyle>>,
    event: GlowEvent,
) -> Result<(), JsValue> {
    let glow = glow.clone();
    let state = state.clone();
    let callback = Closure::wrap(Box::new(move || {
        let mut style = state.borrow_mut();
        style.apply(event);
        apply(&glow, &style);
    }) as Box<dyn FnMut()>);
    source.add_event_listener_with_callback(event_name, callback.as_ref().unchecked_ref())?;
    callback.forget();
    Ok(())
}

fn apply(glow: &HtmlElement, glow_style: &GlowStyle) {
    let css = glow.style();
    let size = glow_style.size();
    let result = css
        .set_property("width", &size)
        .and_then(|_| css.set_property("height", &size))
        .and_then(|_| css.set_property("transform", &glow_style.transform()))
        .and_then(|_| css.set_property("background", glow_style.background));
    if let Err(e) = result {
        warn!(?e, "Failed to style cursor glow");
    }
}
