//! Drawing surface abstraction
//!
//! The renderer only needs four primitives. The browser implements them on
//! top of an egui painter; tests and the CLI use [`RecordingSurface`].

use super::particle::{Point, Rgb};

/// A 2D drawing target for the particle field
pub trait Surface {
    /// Match the backing store to the viewport. No-op where the host sizes it.
    fn set_size(&mut self, width: f32, height: f32);

    /// Clear the `[0,width] x [0,height]` area
    fn clear(&mut self, width: f32, height: f32);

    /// Filled circle with the given opacity [0..1]
    fn fill_circle(&mut self, center: Point, radius: f32, color: Rgb, alpha: f32);

    /// Straight line segment with the given opacity [0..1]
    fn stroke_line(&mut self, from: Point, to: Point, width: f32, color: Rgb, alpha: f32);
}

/// A recorded draw call
#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
    SetSize { width: f32, height: f32 },
    Clear { width: f32, height: f32 },
    Circle { center: Point, radius: f32, color: Rgb, alpha: f32 },
    Line { from: Point, to: Point, width: f32, color: Rgb, alpha: f32 },
}

/// Surface that records every call instead of drawing.
///
/// Keeps only the most recent frame: `clear` drops earlier commands.
#[derive(Debug, Default)]
pub struct RecordingSurface {
    commands: Vec<DrawCommand>,
    size: (f32, f32),
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Last size passed to `set_size`
    pub fn size(&self) -> (f32, f32) {
        self.size
    }

    pub fn circles(&self) -> impl Iterator<Item = &DrawCommand> {
        self.commands.iter().filter(|c| matches!(c, DrawCommand::Circle { .. }))
    }

    pub fn lines(&self) -> impl Iterator<Item = &DrawCommand> {
        self.commands.iter().filter(|c| matches!(c, DrawCommand::Line { .. }))
    }
}

impl Surface for RecordingSurface {
    fn set_size(&mut self, width: f32, height: f32) {
        self.size = (width, height);
        self.commands.push(DrawCommand::SetSize { width, height });
    }

    fn clear(&mut self, width: f32, height: f32) {
        self.commands.clear();
        self.commands.push(DrawCommand::Clear { width, height });
    }

    fn fill_circle(&mut self, center: Point, radius: f32, color: Rgb, alpha: f32) {
        self.commands.push(DrawCommand::Circle { center, radius, color, alpha });
    }

    fn stroke_line(&mut self, from: Point, to: Point, width: f32, color: Rgb, alpha: f32) {
        self.commands.push(DrawCommand::Line { from, to, width, color, alpha });
    }
}
