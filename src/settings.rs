//! Run settings for the headless runner, read from `FIELD_*` variables

use std::str::FromStr;
use std::time::Duration;

use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum SettingsError {
    #[error("{key}={raw:?}: {reason}")]
    Parse {
        key: &'static str,
        raw: String,
        reason: String,
    },

    #[error("FIELD_FPS={0} does not give a usable frame period")]
    FrameRate(f64),
}

/// Everything the runner needs besides the field config itself
#[derive(Clone, Debug, PartialEq)]
pub struct RunSettings {
    pub config_path: Option<String>,
    pub width: f32,
    pub height: f32,
    pub seed: Option<u64>,
    pub target_fps: f64,
    pub frame_period: Duration,
    pub max_frames: Option<u64>,
}

impl RunSettings {
    pub fn from_env() -> Result<Self, SettingsError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build settings from any key lookup; unset keys take their defaults
    pub fn from_lookup<F>(lookup: F) -> Result<Self, SettingsError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let target_fps = parse_or(&lookup, "FIELD_FPS", 60.0)?;
        Ok(Self {
            config_path: lookup("FIELD_CONFIG"),
            width: parse_or(&lookup, "FIELD_WIDTH", 1280.0)?,
            height: parse_or(&lookup, "FIELD_HEIGHT", 720.0)?,
            seed: parse_opt(&lookup, "FIELD_SEED")?,
            target_fps,
            frame_period: frame_period(target_fps)?,
            max_frames: parse_opt(&lookup, "FIELD_FRAMES")?,
        })
    }
}

/// Interval between frames at `fps`.
///
/// Rejects rates whose period is zero, negative, or too large for a
/// `Duration`, since a timer cannot run on either.
pub fn frame_period(fps: f64) -> Result<Duration, SettingsError> {
    if !(fps.is_finite() && fps > 0.0) {
        return Err(SettingsError::FrameRate(fps));
    }
    match Duration::try_from_secs_f64(1.0 / fps) {
        Ok(period) if !period.is_zero() => Ok(period),
        _ => Err(SettingsError::FrameRate(fps)),
    }
}

fn parse_opt<F, T>(lookup: &F, key: &'static str) -> Result<Option<T>, SettingsError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse()
            .map(Some)
            .map_err(|e: T::Err| SettingsError::Parse {
                key,
                reason: e.to_string(),
                raw,
            }),
        None => Ok(None),
    }
}

fn parse_or<F, T>(lookup: &F, key: &'static str, default: T) -> Result<T, SettingsError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: std::fmt::Display,
{
    Ok(parse_opt(lookup, key)?.unwrap_or(default))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn settings(vars: &[(&str, &str)]) -> Result<RunSettings, SettingsError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        RunSettings::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let s = settings(&[]).unwrap();
        assert_eq!(s.config_path, None);
        assert_eq!((s.width, s.height), (1280.0, 720.0));
        assert_eq!(s.seed, None);
        assert_eq!(s.target_fps, 60.0);
        assert_eq!(s.max_frames, None);
        assert!((s.frame_period.as_secs_f64() - 1.0 / 60.0).abs() < 1e-9);
    }

    #[test]
    fn test_overrides() {
        let s = settings(&[
            ("FIELD_CONFIG", "field.json"),
            ("FIELD_WIDTH", " 500 "),
            ("FIELD_SEED", "7"),
            ("FIELD_FPS", "30"),
            ("FIELD_FRAMES", "0"),
        ])
        .unwrap();
        assert_eq!(s.config_path.as_deref(), Some("field.json"));
        assert_eq!(s.width, 500.0);
        assert_eq!(s.seed, Some(7));
        assert!((s.frame_period.as_secs_f64() - 1.0 / 30.0).abs() < 1e-9);
        assert_eq!(s.max_frames, Some(0));
    }

    #[test]
    fn test_unparsable_value() {
        let err = settings(&[("FIELD_HEIGHT", "tall")]).unwrap_err();
        assert!(matches!(err, SettingsError::Parse { key: "FIELD_HEIGHT", .. }));

        let err = settings(&[("FIELD_FRAMES", "-1")]).unwrap_err();
        assert!(matches!(err, SettingsError::Parse { key: "FIELD_FRAMES", .. }));
    }

    #[test]
    fn test_unusable_frame_rates() {
        for fps in [0.0, -5.0, f64::NAN, f64::INFINITY, 1e10, 1e-30] {
            assert!(frame_period(fps).is_err(), "fps {fps} accepted");
        }
        assert!(settings(&[("FIELD_FPS", "1e10")]).is_err());
        assert!(settings(&[("FIELD_FPS", "1e-30")]).is_err());
    }

    #[test]
    fn test_frame_period_extremes_that_still_work() {
        assert_eq!(frame_period(1.0).unwrap(), Duration::from_secs(1));
        assert!(frame_period(1e6).unwrap() >= Duration::from_nanos(1));
    }
}
