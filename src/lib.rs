//! Particle network background for a portfolio page
//!
//! - `core`: particle field, renderer, frame ticker and the page effect
//!   state (typewriter, tilt, scroll reveal, cursor glow); platform-agnostic,
//!   shared by the browser build and the CLI
//! - `settings`: `FIELD_*` run settings for the headless runner
//! - browser (`wasm` feature): eframe app drawing the field on `#bg-canvas`,
//!   plus DOM drivers for the page effects

pub mod core;
pub mod settings;
pub mod time;

#[cfg(all(target_arch = "wasm32", feature = "wasm"))]
mod app;
#[cfg(all(target_arch = "wasm32", feature = "wasm"))]
mod cursor_wasm;
#[cfg(all(target_arch = "wasm32", feature = "wasm"))]
mod painter;
#[cfg(all(target_arch = "wasm32", feature = "wasm"))]
mod reveal_wasm;
#[cfg(all(target_arch = "wasm32", feature = "wasm"))]
mod theme;
#[cfg(all(target_arch = "wasm32", feature = "wasm"))]
mod tilt_wasm;
#[cfg(all(target_arch = "wasm32", feature = "wasm"))]
mod typing_wasm;
#[cfg(all(target_arch = "wasm32", feature = "wasm"))]
mod web;

#[cfg(all(target_arch = "wasm32", feature = "wasm"))]
pub use web::{main, stop_background};
