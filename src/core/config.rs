//! Particle field configuration
//!
//! Every field has a default matching the stock background, so an empty
//! JSON object (or no config at all) yields the standard look.

use serde::{Deserialize, Serialize};
use std::path::Path;

use super::particle::Rgb;

/// Result type for configuration loading
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Errors that can occur while loading or validating a [`FieldConfig`]
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid color: {0:?} (expected #rrggbb)")]
    InvalidColor(String),

    #[error("Palette must contain at least one color")]
    EmptyPalette,

    #[error("{field} must be {requirement}, got {value}")]
    OutOfRange {
        field: &'static str,
        requirement: &'static str,
        value: f32,
    },

    #[error("Invalid config JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),
}

/// Tunables for particle count, motion, looks and proximity lines
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldConfig {
    /// Particle count when the surface is wider than `breakpoint`
    pub desktop_count: usize,
    /// Particle count at or below `breakpoint`
    pub mobile_count: usize,
    /// Width (px) separating the two count tiers
    pub breakpoint: f32,
    /// Velocity components are drawn from `[-max_speed, max_speed)` (px/frame)
    pub max_speed: f32,
    pub radius_min: f32,
    pub radius_span: f32,
    pub alpha_min: f32,
    pub alpha_span: f32,
    /// Particle fill colors, picked uniformly
    pub palette: Vec<Rgb>,
    /// Pairs closer than this are connected
    pub link_distance: f32,
    pub line_width: f32,
    pub line_color: Rgb,
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            desktop_count: 120,
            mobile_count: 60,
            breakpoint: 768.0,
            max_speed: 0.3,
            radius_min: 0.5,
            radius_span: 2.0,
            alpha_min: 0.3,
            alpha_span: 0.3,
            palette: vec![
                Rgb::new(0x3b, 0x82, 0xf6), // blue
                Rgb::new(0x8b, 0x5c, 0xf6), // violet
                Rgb::new(0x06, 0xb6, 0xd4), // cyan
            ],
            link_distance: 120.0,
            line_width: 0.5,
            line_color: Rgb::new(0x8b, 0x5c, 0xf6),
        }
    }
}

impl FieldConfig {
    /// Parse and validate a JSON config. Missing fields take their defaults.
    pub fn from_json(json: &str) -> ConfigResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read a JSON config file
    pub fn from_path(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json(&text)
    }

    /// Particle count for a surface of the given width
    pub fn count_for_width(&self, width: f32) -> usize {
        if width > self.breakpoint {
            self.desktop_count
        } else {
            self.mobile_count
        }
    }

    pub fn validate(&self) -> ConfigResult<()> {
        if self.palette.is_empty() {
            return Err(ConfigError::EmptyPalette);
        }

        let positive = [
            ("link_distance", self.link_distance),
            ("line_width", self.line_width),
        ];
        for (field, value) in positive {
            if !(value.is_finite() && value > 0.0) {
                return Err(ConfigError::OutOfRange { field, requirement: "> 0", value });
            }
        }

        let non_negative = [
            ("breakpoint", self.breakpoint),
            ("max_speed", self.max_speed),
            ("radius_min", self.radius_min),
            ("radius_span", self.radius_span),
            ("alpha_min", self.alpha_min),
            ("alpha_span", self.alpha_span),
        ];
        for (field, value) in non_negative {
            if !(value.is_finite() && value >= 0.0) {
                return Err(ConfigError::OutOfRange { field, requirement: ">= 0", value });
            }
        }

        let max_alpha = self.alpha_min + self.alpha_span;
        if max_alpha > 1.0 {
            return Err(ConfigError::OutOfRange {
                field: "alpha_min + alpha_span",
                requirement: "<= 1",
                value: max_alpha,
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = FieldConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.count_for_width(1000.0), 120);
        assert_eq!(config.count_for_width(768.0), 60);
        assert_eq!(config.count_for_width(500.0), 60);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config = FieldConfig::from_json(r##"{"desktop_count": 200, "line_color": "#ffffff"}"##).unwrap();
        assert_eq!(config.desktop_count, 200);
        assert_eq!(config.mobile_count, 60);
        assert_eq!(config.line_color, Rgb::new(255, 255, 255));
        assert_eq!(config.palette.len(), 3);

        assert_eq!(FieldConfig::from_json("{}").unwrap(), FieldConfig::default());
    }

    #[test]
    fn test_json_roundtrip_keeps_hex_colors() {
        let json = serde_json::to_string(&FieldConfig::default()).unwrap();
        assert!(json.contains(r##""line_color":"#8b5cf6""##));
        assert_eq!(FieldConfig::from_json(&json).unwrap(), FieldConfig::default());
    }

    #[test]
    fn test_invalid_configs() {
        assert!(matches!(
            FieldConfig::from_json(r#"{"palette": []}"#),
            Err(ConfigError::EmptyPalette)
        ));
        assert!(matches!(
            FieldConfig::from_json(r#"{"link_distance": 0}"#),
            Err(ConfigError::OutOfRange { field: "link_distance", .. })
        ));
        assert!(matches!(
            FieldConfig::from_json(r#"{"max_speed": -1.0}"#),
            Err(ConfigError::OutOfRange { field: "max_speed", .. })
        ));
        assert!(matches!(
            FieldConfig::from_json(r#"{"alpha_min": 0.8, "alpha_span": 0.5}"#),
            Err(ConfigError::OutOfRange { .. })
        ));
        // Bad hex surfaces through serde as a JSON error
        assert!(matches!(
            FieldConfig::from_json(r#"{"line_color": "violet"}"#),
            Err(ConfigError::Json(_))
        ));
        assert!(matches!(FieldConfig::from_json("not json"), Err(ConfigError::Json(_))));
    }

    #[test]
    fn test_missing_file() {
        assert!(matches!(
            FieldConfig::from_path("/nonexistent/field-config.json"),
            Err(ConfigError::Io(_))
        ));
    }
}
