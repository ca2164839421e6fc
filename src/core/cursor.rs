//! Cursor glow state
//!
//! A soft radial glow follows the pointer. It shrinks and brightens while
//! a button is held and grows with a cyan tint over interactive elements.

/// Elements that enlarge the glow on hover
pub const HOVER_SELECTOR: &str = "a, button, .tilt-card, .btn, .social-icon, input, textarea";

pub const IDLE_SIZE_PX: u32 = 40;
pub const HOVER_SIZE_PX: u32 = 70;
pub const PRESSED_SCALE: f32 = 0.7;

pub const IDLE_BACKGROUND: &str =
    "radial-gradient(circle, rgba(139, 92, 246, 0.4) 0%, rgba(0,0,0,0) 70%)";
pub const PRESSED_BACKGROUND: &str =
    "radial-gradient(circle, rgba(139, 92, 246, 0.8) 0%, rgba(0,0,0,0) 60%)";
pub const HOVER_BACKGROUND: &str =
    "radial-gradient(circle, rgba(6, 182, 212, 0.3) 0%, rgba(0,0,0,0) 70%)";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GlowEvent {
    Press,
    Release,
    Enter,
    Leave,
}

/// Current inline style of the glow element.
///
/// Each event overwrites only the properties it owns, so the last event
/// decides the background (pressing over a link turns it violet again).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GlowStyle {
    pub size_px: u32,
    pub scale: f32,
    pub background: &'static str,
}

impl Default for GlowStyle {
    fn default() -> Self {
        Self {
            size_px: IDLE_SIZE_PX,
            scale: 1.0,
            background: IDLE_BACKGROUND,
        }
    }
}

impl GlowStyle {
    pub fn apply(&mut self, event: GlowEvent) {
        match event {
            GlowEvent::Press => {
                self.scale = PRESSED_SCALE;
                self.background = PRESSED_BACKGROUND;
            }
            GlowEvent::Release => {
                self.scale = 1.0;
                self.background = IDLE_BACKGROUND;
            }
            GlowEvent::Enter => {
                self.size_px = HOVER_SIZE_PX;
                self.background = HOVER_BACKGROUND;
            }
            GlowEvent::Leave => {
                self.size_px = IDLE_SIZE_PX;
                self.background = IDLE_BACKGROUND;
            }
        }
    }

    /// CSS `transform`, centered on the pointer
    pub fn transform(&self) -> String {
        format!("translate(-50%, -50%) scale({})", self.scale)
    }

    /// CSS length for both `width` and `height`
    pub fn size(&self) -> String {
        format!("{}px", self.size_px)
    }
}

/// CSS `left`/`top` for a pointer at client coordinates
pub fn position(client_x: i32, client_y: i32) -> (String, String) {
    (format!("{client_x}px"), format!("{client_y}px"))
}
