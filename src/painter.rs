//! egui painter adapter for the particle renderer

use crate::core::{Point, Rgb, Surface};
use crate::theme::with_alpha;

/// Draws into an egui layer in screen coordinates (points == CSS px)
pub struct EguiSurface<'a> {
    painter: &'a egui::Painter,
}

impl<'a> EguiSurface<'a> {
    pub fn new(painter: &'a egui::Painter) -> Self {
        Self { painter }
    }
}

#[inline]
fn pos(p: Point) -> egui::Pos2 {
    egui::pos2(p.x, p.y)
}

impl Surface for EguiSurface<'_> {
    // eframe sizes the canvas backing store from its CSS box
    fn set_size(&mut self, _width: f32, _height: f32) {}

    // eframe clears every frame with App::clear_color
    fn clear(&mut self, _width: f32, _height: f32) {}

    fn fill_circle(&mut self, center: Point, radius: f32, color: Rgb, alpha: f32) {
        self.painter.circle_filled(pos(center), radius, with_alpha(color, alpha));
    }

    fn stroke_line(&mut self, from: Point, to: Point, width: f32, color: Rgb, alpha: f32) {
        self.painter.line_segment(
            [pos(from), pos(to)],
            egui::Stroke::new(width, with_alpha(color, alpha)),
        );
    }
}
