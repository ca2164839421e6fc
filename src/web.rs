//! WASM entry points
//!
//! Starts the particle background on `#bg-canvas` (if the page has one)
//! and binds the page effects. `stopBackground()` tears the background
//! down.

use std::cell::RefCell;
use tracing::{debug, error, info, warn};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

use crate::app::FieldApp;
use crate::core::{FieldConfig, StopHandle, Ticker, TypewriterConfig, MAX_TILT_DEG};
use crate::{cursor_wasm, reveal_wasm, tilt_wasm, typing_wasm};

/// Canvas element the background draws into
const CANVAS_ID: &str = "bg-canvas";

/// Running background: stop flag plus the eframe runner that owns the canvas
struct Background {
    stop: StopHandle,
    runner: eframe::WebRunner,
}

thread_local! {
    static BACKGROUND: RefCell<Option<Background>> = const { RefCell::new(None) };
}

#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();

    // Initialize tracing for browser console
    tracing_wasm::set_as_global_default();

    if let Err(e) = typing_wasm::start(TypewriterConfig::default()) {
        error!(?e, "Typewriter failed to start");
    }
    if let Err(e) = tilt_wasm::bind(MAX_TILT_DEG) {
        error!(?e, "Tilt cards failed to bind");
    }
    if let Err(e) = reveal_wasm::bind() {
        error!(?e, "Scroll reveal failed to bind");
    }
    if let Err(e) = cursor_wasm::bind() {
        error!(?e, "Cursor glow failed to bind");
    }

    wasm_bindgen_futures::spawn_local(async {
        if let Err(e) = start_background().await {
            error!(?e, "Particle background failed to start");
        }
    });
}

/// Stop the particle frame loop and release the canvas
#[wasm_bindgen(js_name = stopBackground)]
pub fn stop_background() {
    let background = BACKGROUND.with(|slot| slot.borrow_mut().take());
    if let Some(background) = background {
        background.stop.stop();
        background.runner.destroy();
        info!("Particle background stopped");
    }
}

async fn start_background() -> Result<(), JsValue> {
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| JsValue::from_str("no document"))?;

    // A page without the canvas simply has no background
    let Some(element) = document.get_element_by_id(CANVAS_ID) else {
        debug!(id = CANVAS_ID, "No background canvas, skipping");
        return Ok(());
    };
    let canvas = element.dyn_into::<web_sys::HtmlCanvasElement>()?;

    let config = match canvas.get_attribute("data-field-config") {
        Some(json) => FieldConfig::from_json(&json).unwrap_or_else(|e| {
            warn!(error = %e, "Invalid data-field-config, using defaults");
            FieldConfig::default()
        }),
        None => FieldConfig::default(),
    };

    let ticker = Ticker::new();
    let stop = ticker.stop_handle();
    let runner = eframe::WebRunner::new();

    BACKGROUND.with(|slot| {
        *slot.borrow_mut() = Some(Background {
            stop,
            runner: runner.clone(),
        })
    });

    let started = runner
        .start(
            canvas,
            eframe::WebOptions::default(),
            Box::new(move |cc| Ok(Box::new(FieldApp::new(cc, config, ticker)))),
        )
        .await;
    if let Err(e) = started {
        // Failed start leaves nothing for stopBackground() to tear down
        if let Some(background) = BACKGROUND.with(|slot| slot.borrow_mut().take()) {
            background.stop.stop();
        }
        return Err(e);
    }

    info!("Particle background started");
    Ok(())
}
