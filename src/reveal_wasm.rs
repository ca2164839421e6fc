//! WASM driver for scroll reveal, skill bars and the navbar style

use tracing::{debug, info, warn};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, Window};

use crate::core::reveal::{progress_width, scroll_update, RevealTarget, SKILLS_CLASS};

struct RevealPage {
    window: Window,
    sections: Vec<Element>,
    bars: Vec<HtmlElement>,
    navbar: Option<Element>,
}

impl RevealPage {
    fn check(&self) {
        let viewport_height = self
            .window
            .inner_height()
            .ok()
            .and_then(|h| h.as_f64())
            .unwrap_or(0.0);
        let scroll_y = self.window.scroll_y().unwrap_or(0.0);

        let targets: Vec<RevealTarget> = self
            .sections
            .iter()
            .map(|el| RevealTarget {
                top: el.get_bounding_client_rect().top(),
                fills_progress: el.class_list().contains(SKILLS_CLASS),
            })
            .collect();
        let update = scroll_update(&targets, viewport_height, scroll_y);

        for &i in &update.revealed {
            if let Err(e) = self.sections[i].class_list().add_1("active") {
                warn!(?e, "Failed to activate reveal section");
            }
        }

        if update.fill_progress {
            for bar in &self.bars {
                let attr = bar.get_attribute("data-width");
                if let Some(width) = progress_width(attr.as_deref()) {
                    if let Err(e) = bar.style().set_property("width", width) {
                        warn!(?e, "Failed to set progress width");
                    }
                }
            }
        }

        if let Some(navbar) = &self.navbar {
            let classes = navbar.class_list();
            let result = if update.navbar_scrolled {
                classes.add_1("scrolled")
            } else {
                classes.remove_1("scrolled")
            };
            if let Err(e) = result {
                warn!(?e, "Failed to toggle navbar class");
            }
        }
    }
}

/// Watch scrolling and run one check immediately for the initial viewport
pub fn bind() -> Result<(), JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let document = window.document().ok_or_else(|| JsValue::from_str("no document"))?;

    let page = RevealPage {
        sections: select_all(&document, ".reveal")?,
        bars: select_all(&document, ".progress")?,
        navbar: document.query_selector(".navbar")?,
        window: window.clone(),
    };
    if page.sections.is_empty() && page.navbar.is_none() {
        debug!("Nothing to reveal, scroll driver disabled");
        return Ok(());
    }
    info!(sections = page.sections.len(), bars = page.bars.len(), "Scroll reveal bound");

    page.check();
    let on_scroll = Closure::wrap(Box::new(move || page.check()) as Box<dyn FnMut()>);
    window.add_event_listener_with_callback("scroll", on_scroll.as_ref().unchecked_ref())?;
    on_scroll.forget();
    Ok(())
}

fn select_all<T: JsCast>(document: &Document, selector: &str) -> Result<Vec<T>, JsValue> {
    let nodes = document.query_selector_all(selector)?;
    Ok((0..nodes.length())
        .filter_map(|i| nodes.item(i).and_then(|node| node.dyn_into::<T>().ok()))
        .collect())
}
