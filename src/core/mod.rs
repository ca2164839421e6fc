//! Platform-agnostic core module - shared between WASM background and CLI

pub mod config;
pub mod cursor;
pub mod field;
pub mod particle;
pub mod proximity;
pub mod renderer;
pub mod reveal;
pub mod surface;
pub mod ticker;
pub mod tilt;
pub mod typewriter;

pub use config::{ConfigError, ConfigResult, FieldConfig};
pub use cursor::{GlowEvent, GlowStyle};
pub use field::ParticleField;
pub use particle::{Particle, Point, Rgb};
pub use proximity::{line_alpha, links, Link};
pub use renderer::{FieldRenderer, FrameStats};
pub use reveal::{scroll_update, RevealTarget, ScrollUpdate};
pub use surface::{DrawCommand, RecordingSurface, Surface};
pub use ticker::{StopHandle, TickOutcome, Ticker};
pub use tilt::{Tilt, MAX_TILT_DEG};
pub use typewriter::{TypeStep, Typewriter, TypewriterConfig};
