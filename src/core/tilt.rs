//! 3D hover tilt for cards
//!
//! Maps the pointer position inside a card to X/Y rotations and the CSS
//! transform strings applied on hover and on leave.

/// Largest rotation at a card corner (degrees)
pub const MAX_TILT_DEG: f32 = 12.0;

/// Transition while the pointer moves over the card
pub const HOVER_TRANSITION: &str = "transform 0.1s ease";
/// Transition back to rest when the pointer leaves
pub const LEAVE_TRANSITION: &str = "transform 0.6s cubic-bezier(0.2, 0.8, 0.2, 1)";
/// Resting transform
pub const REST_TRANSFORM: &str = "perspective(1000px) rotateX(0deg) rotateY(0deg) scale3d(1, 1, 1)";

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Tilt {
    pub rotate_x: f32,
    pub rotate_y: f32,
}

impl Tilt {
    /// Tilt for a pointer at `(x, y)` relative to a `width x height` card's
    /// top-left corner. Degenerate card sizes give no tilt.
    pub fn from_pointer(x: f32, y: f32, width: f32, height: f32, max_deg: f32) -> Self {
        let valid = |v: f32| v.is_finite() && v > 0.0;
        if !valid(width) || !valid(height) || !x.is_finite() || !y.is_finite() {
            return Self::default();
        }

        let center_x = width / 2.0;
        let center_y = height / 2.0;
        Self {
            rotate_x: ((y - center_y) / center_y) * -max_deg,
            rotate_y: ((x - center_x) / center_x) * max_deg,
        }
    }

    /// CSS transform for the hovered card
    pub fn hover_transform(&self) -> String {
        format!(
            "perspective(1000px) rotateX({}deg) rotateY({}deg) scale3d(1.02, 1.02, 1.02)",
            self.rotate_x, self.rotate_y
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_center_is_flat() {
        let tilt = Tilt::from_pointer(150.0, 100.0, 300.0, 200.0, MAX_TILT_DEG);
        assert_eq!(tilt.rotate_x, 0.0);
        assert_eq!(tilt.rotate_y, 0.0);
    }

    #[test]
    fn test_corners_reach_max() {
        // Top-left: top edge tips toward the viewer, left edge away
        let tilt = Tilt::from_pointer(0.0, 0.0, 300.0, 200.0, MAX_TILT_DEG);
        assert_eq!(tilt.rotate_x, 12.0);
        assert_eq!(tilt.rotate_y, -12.0);

        let tilt = Tilt::from_pointer(300.0, 200.0, 300.0, 200.0, MAX_TILT_DEG);
        assert_eq!(tilt.rotate_x, -12.0);
        assert_eq!(tilt.rotate_y, 12.0);
    }

    #[test]
    fn test_degenerate_card() {
        assert_eq!(Tilt::from_pointer(5.0, 5.0, 0.0, 100.0, MAX_TILT_DEG), Tilt::default());
        assert_eq!(Tilt::from_pointer(f32::NAN, 5.0, 100.0, 100.0, MAX_TILT_DEG), Tilt::default());
    }

    #[test]
    fn test_transform_strings() {
        let tilt = Tilt { rotate_x: 6.0, rotate_y: -3.5 };
        assert_eq!(
            tilt.hover_transform(),
            "perspective(1000px) rotateX(6deg) rotateY(-3.5deg) scale3d(1.02, 1.02, 1.02)"
        );
        assert!(REST_TRANSFORM.contains("rotateX(0deg)"));
    }
}
