//! Particle data - a single drifting point of the background network
//!
//! Platform-agnostic (no WASM deps). Colors are plain RGB triples so the
//! same data can be drawn by egui or recorded headless.

use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::config::{ConfigError, FieldConfig};

/// 2D point / vector in surface units (CSS pixels in the browser)
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another point
    #[inline]
    pub fn distance(self, other: Point) -> f32 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }
}

/// Opaque RGB color, serialized as `#rrggbb`
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse `#rrggbb` (leading `#` optional)
    pub fn from_hex(hex: &str) -> Result<Self, ConfigError> {
        let digits = hex.strip_prefix('#').unwrap_or(hex);
        if digits.len() != 6 || !digits.is_ascii() {
            return Err(ConfigError::InvalidColor(hex.to_string()));
        }
        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&digits[range], 16)
                .map_err(|_| ConfigError::InvalidColor(hex.to_string()))
        };
        Ok(Self {
            r: channel(0..2)?,
            g: channel(2..4)?,
            b: channel(4..6)?,
        })
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl TryFrom<String> for Rgb {
    type Error = ConfigError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Rgb::from_hex(&value)
    }
}

impl From<Rgb> for String {
    fn from(color: Rgb) -> Self {
        color.to_string()
    }
}

/// A single animated point: position, velocity, radius and a fixed color
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Particle {
    pub pos: Point,
    pub vel: Point,
    pub radius: f32,
    pub color: Rgb,
    /// Fill opacity [0..1]
    pub alpha: f32,
}

impl Particle {
    /// Stationary white particle at `(x, y)`
    pub fn at(x: f32, y: f32) -> Self {
        Self {
            pos: Point::new(x, y),
            vel: Point::default(),
            radius: 1.0,
            color: Rgb::new(255, 255, 255),
            alpha: 1.0,
        }
    }

    /// Draw a fresh particle inside `[0,width) x [0,height)`.
    ///
    /// Every attribute is sampled independently from `rng`.
    pub fn random<R: Rng + ?Sized>(rng: &mut R, width: f32, height: f32, config: &FieldConfig) -> Self {
        let x = rng.gen::<f32>() * width;
        let y = rng.gen::<f32>() * height;
        let vx = (rng.gen::<f32>() - 0.5) * 2.0 * config.max_speed;
        let vy = (rng.gen::<f32>() - 0.5) * 2.0 * config.max_speed;
        let radius = config.radius_min + rng.gen::<f32>() * config.radius_span;

        let color = if config.palette.is_empty() {
            config.line_color
        } else {
            config.palette[rng.gen_range(0..config.palette.len())]
        };
        let alpha = config.alpha_min + rng.gen::<f32>() * config.alpha_span;

        Self {
            pos: Point::new(x, y),
            vel: Point::new(vx, vy),
            radius,
            color,
            alpha,
        }
    }

    /// Move by one frame's velocity, then reflect off the `[0,width] x [0,height]` box.
    ///
    /// The reflection flips the velocity sign after the crossing, so a particle
    /// may stay outside the box for one frame. Position is never clamped.
    #[inline]
    pub fn step(&mut self, width: f32, height: f32) {
        self.pos.x += self.vel.x;
        self.pos.y += self.vel.y;

        if self.pos.x < 0.0 || self.pos.x > width {
            self.vel.x = -self.vel.x;
        }
        if self.pos.y < 0.0 || self.pos.y > height {
            self.vel.y = -self.vel.y;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_random_particle_attributes() {
        let config = FieldConfig::default();
        let mut rng = StdRng::seed_from_u64(7);

        for _ in 0..500 {
            let p = Particle::random(&mut rng, 800.0, 600.0, &config);
            assert!(p.pos.x >= 0.0 && p.pos.x < 800.0);
            assert!(p.pos.y >= 0.0 && p.pos.y < 600.0);
            assert!(p.vel.x >= -0.3 && p.vel.x < 0.3);
            assert!(p.vel.y >= -0.3 && p.vel.y < 0.3);
            assert!(p.radius >= 0.5 && p.radius <= 2.5);
            assert!(p.alpha >= 0.3 && p.alpha <= 0.6);
            assert!(config.palette.contains(&p.color));
        }
    }

    #[test]
    fn test_step_reflects_after_crossing() {
        let mut p = Particle::at(0.1, 50.0);
        p.vel = Point::new(-0.3, 0.2);

        p.step(100.0, 100.0);
        // Crossed the left edge: stays outside for this frame, velocity flipped
        assert!(p.pos.x < 0.0);
        assert_eq!(p.vel.x, 0.3);
        assert_eq!(p.vel.y, 0.2);

        p.step(100.0, 100.0);
        assert!(p.pos.x > 0.0);
        assert_eq!(p.vel.x, 0.3);
    }

    #[test]
    fn test_step_reflects_on_height_not_width() {
        // Tall-and-narrow: y=150 is inside height but outside width
        let mut p = Particle::at(10.0, 150.0);
        p.vel = Point::new(0.0, 0.1);
        p.step(100.0, 200.0);
        assert_eq!(p.vel.y, 0.1);

        let mut p = Particle::at(10.0, 199.95);
        p.vel = Point::new(0.0, 0.1);
        p.step(100.0, 200.0);
        assert_eq!(p.vel.y, -0.1);
    }

    #[test]
    fn test_hex_colors() {
        assert_eq!(Rgb::from_hex("#8b5cf6").unwrap(), Rgb::new(0x8b, 0x5c, 0xf6));
        assert_eq!(Rgb::from_hex("06B6D4").unwrap(), Rgb::new(0x06, 0xb6, 0xd4));
        assert_eq!(Rgb::new(0x3b, 0x82, 0xf6).to_string(), "#3b82f6");

        assert!(Rgb::from_hex("#fff").is_err());
        assert!(Rgb::from_hex("#gg0000").is_err());
        assert!(Rgb::from_hex("#ééé").is_err());
    }

    #[test]
    fn test_distance() {
        assert_eq!(Point::new(0.0, 0.0).distance(Point::new(3.0, 4.0)), 5.0);
        assert_eq!(Point::new(1.0, 1.0).distance(Point::new(1.0, 1.0)), 0.0);
    }
}
