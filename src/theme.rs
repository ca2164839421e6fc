//! Transparent egui theme for the page background
//!
//! The canvas sits behind the page content, so every egui fill is
//! transparent and the only visible output is the particle network.

use egui::Color32;

use crate::core::Rgb;

pub mod colors {
    /// eframe clear color: fully transparent so the page background shows through
    pub const CLEAR: [f32; 4] = [0.0, 0.0, 0.0, 0.0];
}

/// Particle/line color with an opacity in [0..1]
pub fn with_alpha(color: Rgb, alpha: f32) -> egui::Color32 {
    let a = (alpha.clamp(0.0, 1.0) * 255.0).round() as u8;
    Color32::from_rgba_unmultiplied(color.r, color.g, color.b, a)
}

/// Visuals with no backgrounds, borders or shadows
pub fn background_visuals() -> egui::Visuals {
    let mut visuals = egui::Visuals::dark();

    visuals.panel_fill = Color32::TRANSPARENT;
    visuals.window_fill = Color32::TRANSPARENT;
    visuals.extreme_bg_color = Color32::TRANSPARENT;
    visuals.faint_bg_color = Color32::TRANSPARENT;

    // No shadows - flat design
    visuals.window_shadow = egui::Shadow::NONE;
    visuals.popup_shadow = egui::Shadow::NONE;

    visuals
}
