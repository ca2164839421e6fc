//! WASM driver for the hero typewriter effect
//!
//! Writes each step into `.typed-text`, toggles the `typing` class on
//! `.cursor` and chains the next step with `setTimeout`.

use std::cell::RefCell;
use std::rc::Rc;
use tracing::{debug, error, info, warn};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, Window};

use crate::core::{Typewriter, TypewriterConfig};

struct TypingDriver {
    typewriter: Typewriter,
    text: Element,
    caret: Option<Element>,
}

impl TypingDriver {
    /// Apply one step to the DOM, returning the delay until the next
    fn step(&mut self) -> u32 {
        let step = self.typewriter.step();
        self.text.set_text_content(Some(&step.text));

        if let Some(caret) = &self.caret {
            let classes = caret.class_list();
            let result = if step.typing {
                classes.add_1("typing")
            } else {
                classes.remove_1("typing")
            };
            if let Err(e) = result {
                warn!(?e, "Failed to toggle caret class");
            }
        }
        step.delay_ms
    }
}

/// Start typing into `.typed-text`. No-op if the element is missing.
///
/// A `data-typewriter` JSON object on the element replaces `config`
/// (missing fields keep their defaults). A `data-phrases` JSON array
/// then overrides just the phrases.
pub fn start(mut config: TypewriterConfig) -> Result<(), JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let document = window.document().ok_or_else(|| JsValue::from_str("no document"))?;

    let Some(text) = document.query_selector(".typed-text")? else {
        debug!("No .typed-text element, typewriter disabled");
        return Ok(());
    };
    let caret = document.query_selector(".cursor")?;

    if let Some(json) = text.get_attribute("data-typewriter") {
        match TypewriterConfig::from_json(&json) {
            Ok(parsed) => config = parsed,
            Err(e) => warn!(error = %e, "Invalid data-typewriter, using defaults"),
        }
    }
    if let Some(json) = text.get_attribute("data-phrases") {
        match serde_json::from_str::<Vec<String>>(&json) {
            Ok(phrases) => config.phrases = phrases,
            Err(e) => warn!(error = %e, "Invalid data-phrases, keeping configured phrases"),
        }
    }

    let Some(typewriter) = Typewriter::new(config) else {
        debug!("No phrases, typewriter disabled");
        return Ok(());
    };

    let delay = typewriter.config().start_delay();
    info!(phrases = typewriter.config().phrases.len(), "Typewriter started");

    let driver = Rc::new(RefCell::new(TypingDriver {
        typewriter,
        text,
        caret,
    }));
    schedule(&window, driver, delay)
}

fn schedule(window: &Window, driver: Rc<RefCell<TypingDriver>>, delay_ms: u32) -> Result<(), JsValue> {
    let window_clone = window.clone();
    let callback = Closure::once_into_js(move || {
        let next = driver.borrow_mut().step();
        if let Err(e) = schedule(&window_clone, driver, next) {
            error!(?e, "Failed to schedule typewriter step");
        }
    });

    window.set_timeout_with_callback_and_timeout_and_arguments_0(
        callback.unchecked_ref::<js_sys::Function>(),
        delay_ms as i32,
    )?;
    Ok(())
}
