//! Startup configuration.
//!
//! Settings are read from a JSON file once at process start and resolved into
//! an immutable [`Config`] that is passed by reference into the physics and
//! animation layers; there is no process-wide singleton. Every key except
//! `scale_factor` has a default matching the values the companion shipped
//! with, so a minimal config file is just `{"scale_factor": 0.2}`.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use serde::Deserialize;

use crate::constants::{
    DEFAULT_ACCELERATION, DEFAULT_AIR_RESISTANCE, DEFAULT_ANIMATION_INTERVAL_MS,
    DEFAULT_FRAME_COUNT, DEFAULT_FRICTION, DEFAULT_GRAVITY, DEFAULT_GROUND_OFFSET,
    DEFAULT_JUMP_FORCE, DEFAULT_TICKS_PER_SECOND,
};
use crate::vector::Vec2;

/// Errors surfaced while loading or validating configuration.
///
/// All of these are fatal at startup; the simulation never runs with a
/// partially resolved configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The config file could not be read.
    #[error("failed to read config file: {0}")]
    Read(#[from] std::io::Error),
    /// The config file is not valid JSON for the expected shape.
    #[error("failed to parse config file: {0}")]
    Parse(#[from] serde_json::Error),
    /// A required key is absent.
    #[error("required config key `{0}` is missing")]
    MissingKey(&'static str),
    /// A key is present but outside its allowed range.
    #[error("config key `{key}` has invalid value {value}: must be {requirement}")]
    InvalidValue {
        /// Dotted path of the offending key.
        key: &'static str,
        /// The rejected value.
        value: f64,
        /// Human-readable description of the allowed range.
        requirement: &'static str,
    },
}

/// Tunable physics settings, before per-character scaling is applied.
#[derive(Debug, Clone, PartialEq)]
pub struct PhysicsSettings {
    /// Horizontal control acceleration per tick.
    pub acceleration: f64,
    /// Fraction of velocity lost per grounded tick, in `[0, 1]`.
    pub friction: f64,
    /// Fraction of velocity lost per airborne tick, in `[0, 1]`.
    pub air_resistance: f64,
    /// Per-tick gravity vector, typically `(0, g)` with g positive (down).
    pub gravity: Vec2,
    /// Jump impulse vector, typically `(0, -j)`.
    pub jump_force: Vec2,
    /// Offset added to the computed ground line, in pixels.
    pub ground_offset: f64,
}

impl Default for PhysicsSettings {
    fn default() -> Self {
        Self {
            acceleration: DEFAULT_ACCELERATION,
            friction: DEFAULT_FRICTION,
            air_resistance: DEFAULT_AIR_RESISTANCE,
            gravity: Vec2::new(0.0, DEFAULT_GRAVITY),
            jump_force: Vec2::new(0.0, DEFAULT_JUMP_FORCE),
            ground_offset: DEFAULT_GROUND_OFFSET,
        }
    }
}

/// Fully resolved, immutable configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Global sprite scale; physics constants scale with it.
    pub scale_factor: f64,
    /// Physics tick rate in ticks per second.
    pub ticks_per_second: f64,
    /// Interval between animation ticks in milliseconds.
    pub animation_interval_ms: u64,
    /// Number of frames in each animation set.
    pub frame_count: usize,
    /// Physics tunables.
    pub physics: PhysicsSettings,
    /// Dialog message strings consumed by the (external) dialog layer.
    pub messages: Vec<String>,
}

impl Config {
    /// Builds a configuration from defaults and the given scale factor.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] when `scale_factor` is not
    /// positive.
    pub fn with_scale(scale_factor: f64) -> Result<Self, ConfigError> {
        RawConfig {
            scale_factor: Some(scale_factor),
            ..RawConfig::default()
        }
        .resolve()
    }

    /// Loads and resolves configuration from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Read`] when the file cannot be opened,
    /// [`ConfigError::Parse`] on malformed JSON, and the validation errors
    /// described on [`RawConfig::resolve`].
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let file = File::open(path)?;
        Self::from_reader(BufReader::new(file))
    }

    /// Parses and resolves configuration from a JSON reader.
    ///
    /// # Errors
    ///
    /// Same conditions as [`Config::load`], minus file-open failures.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, ConfigError> {
        let raw: RawConfig = serde_json::from_reader(reader)?;
        raw.resolve()
    }
}

/// Serde mirror of the JSON file; every key optional so defaults can fill in.
#[derive(Debug, Default, Deserialize)]
struct RawConfig {
    scale_factor: Option<f64>,
    ticks_per_second: Option<f64>,
    animation_interval_ms: Option<u64>,
    frame_count: Option<usize>,
    #[serde(default)]
    physics: RawPhysics,
    #[serde(default)]
    messages: Vec<String>,
}

#[derive(Debug, Default, Deserialize)]
struct RawPhysics {
    acceleration: Option<f64>,
    friction: Option<f64>,
    air_resistance: Option<f64>,
    gravity: Option<Vec2>,
    jump_force: Option<Vec2>,
    ground_offset: Option<f64>,
}

impl RawConfig {
    /// Applies defaults and validates ranges.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingKey`] when `scale_factor` is absent and
    /// [`ConfigError::InvalidValue`] for out-of-range values.
    fn resolve(self) -> Result<Config, ConfigError> {
        let scale_factor = self
            .scale_factor
            .ok_or(ConfigError::MissingKey("scale_factor"))?;
        require_positive("scale_factor", scale_factor)?;

        let ticks_per_second = self.ticks_per_second.unwrap_or(DEFAULT_TICKS_PER_SECOND);
        require_positive("ticks_per_second", ticks_per_second)?;

        let defaults = PhysicsSettings::default();
        let physics = PhysicsSettings {
            acceleration: self.physics.acceleration.unwrap_or(defaults.acceleration),
            friction: self.physics.friction.unwrap_or(defaults.friction),
            air_resistance: self
                .physics
                .air_resistance
                .unwrap_or(defaults.air_resistance),
            gravity: self.physics.gravity.unwrap_or(defaults.gravity),
            jump_force: self.physics.jump_force.unwrap_or(defaults.jump_force),
            ground_offset: self.physics.ground_offset.unwrap_or(defaults.ground_offset),
        };
        require_fraction("physics.friction", physics.friction)?;
        require_fraction("physics.air_resistance", physics.air_resistance)?;

        let frame_count = self.frame_count.unwrap_or(DEFAULT_FRAME_COUNT);
        if frame_count == 0 {
            return Err(ConfigError::InvalidValue {
                key: "frame_count",
                value: 0.0,
                requirement: "at least 1",
            });
        }

        Ok(Config {
            scale_factor,
            ticks_per_second,
            animation_interval_ms: self
                .animation_interval_ms
                .unwrap_or(DEFAULT_ANIMATION_INTERVAL_MS),
            frame_count,
            physics,
            messages: self.messages,
        })
    }
}

fn require_positive(key: &'static str, value: f64) -> Result<(), ConfigError> {
    if value > 0.0 && value.is_finite() {
        Ok(())
    } else {
        Err(ConfigError::InvalidValue {
            key,
            value,
            requirement: "a positive, finite number",
        })
    }
}

fn require_fraction(key: &'static str, value: f64) -> Result<(), ConfigError> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(ConfigError::InvalidValue {
            key,
            value,
            requirement: "within [0, 1]",
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn minimal_config_resolves_with_defaults() {
        let config = Config::from_reader(r#"{"scale_factor": 0.2}"#.as_bytes())
            .expect("minimal config should resolve");
        assert!((config.scale_factor - 0.2).abs() < f64::EPSILON);
        assert!((config.ticks_per_second - DEFAULT_TICKS_PER_SECOND).abs() < f64::EPSILON);
        assert_eq!(config.physics, PhysicsSettings::default());
        assert!(config.messages.is_empty());
    }

    #[test]
    fn missing_scale_factor_is_fatal() {
        let err = Config::from_reader(br#"{"ticks_per_second": 30}"#.as_slice())
            .expect_err("scale_factor is required");
        assert!(matches!(err, ConfigError::MissingKey("scale_factor")));
    }

    #[test]
    fn friction_outside_unit_interval_is_rejected() {
        let json = r#"{"scale_factor": 1.0, "physics": {"friction": 1.5}}"#;
        let err = Config::from_reader(json.as_bytes()).expect_err("friction must be a fraction");
        assert!(matches!(
            err,
            ConfigError::InvalidValue {
                key: "physics.friction",
                ..
            }
        ));
    }

    #[test]
    fn nested_physics_group_overrides_defaults() {
        let json = r#"{
            "scale_factor": 0.5,
            "physics": {"gravity": [0.0, 2.0], "air_resistance": 0.05},
            "messages": ["hello"]
        }"#;
        let config = Config::from_reader(json.as_bytes()).expect("valid config");
        assert_eq!(config.physics.gravity, Vec2::new(0.0, 2.0));
        assert!((config.physics.air_resistance - 0.05).abs() < f64::EPSILON);
        assert!((config.physics.friction - DEFAULT_FRICTION).abs() < f64::EPSILON);
        assert_eq!(config.messages, vec!["hello".to_owned()]);
    }
}
