//! Particle field renderer
//!
//! Owns the field, its config and the random source. The drawing surface
//! is borrowed per call so the same renderer works with egui's per-frame
//! painter and with a long-lived recording surface.

use rand::Rng;
use tracing::{debug, trace};

use super::config::FieldConfig;
use super::field::ParticleField;
use super::proximity::links;
use super::surface::Surface;

/// What one `render` call drew
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FrameStats {
    pub particles: usize,
    pub lines: usize,
}

/// Drifting, interconnected point cloud
pub struct FieldRenderer<R: Rng> {
    config: FieldConfig,
    rng: R,
    field: ParticleField,
}

impl<R: Rng> FieldRenderer<R> {
    /// Create a renderer with an empty field. Call [`resize`](Self::resize)
    /// once the surface dimensions are known.
    pub fn new(config: FieldConfig, rng: R) -> Self {
        Self {
            config,
            rng,
            field: ParticleField::new(),
        }
    }

    /// Match the surface to the viewport and rebuild the field.
    ///
    /// Always re-randomizes, even for unchanged dimensions.
    pub fn resize<S: Surface + ?Sized>(&mut self, surface: &mut S, width: f32, height: f32) {
        debug!(width, height, "Resizing particle surface");
        surface.set_size(width, height);
        self.rebuild_field(width, height);
    }

    /// Replace the whole field with freshly sampled particles
    pub fn rebuild_field(&mut self, width: f32, height: f32) {
        self.field = ParticleField::random(&mut self.rng, width, height, &self.config);
    }

    /// Move every particle one frame, reflecting off the bounds
    pub fn advance(&mut self) {
        self.field.advance();
    }

    /// Clear the surface, draw particles, then the proximity lines
    pub fn render<S: Surface + ?Sized>(&self, surface: &mut S) -> FrameStats {
        let particles = self.field.particles();
        surface.clear(self.field.width(), self.field.height());

        for p in particles {
            surface.fill_circle(p.pos, p.radius, p.color, p.alpha);
        }

        let mut lines = 0;
        for link in links(particles, self.config.link_distance) {
            surface.stroke_line(
                particles[link.a].pos,
                particles[link.b].pos,
                self.config.line_width,
                self.config.line_color,
                link.alpha,
            );
            lines += 1;
        }

        let stats = FrameStats {
            particles: particles.len(),
            lines,
        };
        trace!(particles = stats.particles, lines = stats.lines, "Frame rendered");
        stats
    }

    /// One update-and-render cycle
    pub fn tick<S: Surface + ?Sized>(&mut self, surface: &mut S) -> FrameStats {
        self.advance();
        self.render(surface)
    }

    pub fn field(&self) -> &ParticleField {
        &self.field
    }

    /// Replace the field directly (bypasses random construction)
    pub fn set_field(&mut self, field: ParticleField) {
        self.field = field;
    }

    pub fn config(&self) -> &FieldConfig {
        &self.config
    }
}
