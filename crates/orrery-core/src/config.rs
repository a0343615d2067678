//! Navigation configuration
//!
//! All tunables for transitions, free flight, the world boundary, the manual
//! orbit controller and key bindings. Every field has a default so a partial
//! TOML file (or none at all) is valid.

use bevy_math::Vec3;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use thiserror::Error;

use crate::boundary::BoundarySpec;
use crate::flight::{FlightSettings, FreeFlight};
use crate::input::KeyBindings;
use crate::transition::TransitionSettings;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read navigation config: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Failed to parse navigation config: {0}")]
    ParseError(#[from] toml::de::Error),
    #[error("Failed to serialize navigation config: {0}")]
    SerializeError(#[from] toml::ser::Error),
    #[error("Invalid navigation config: {field} {reason}")]
    Invalid { field: &'static str, reason: String },
}

/// Top-level navigation configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NavigationConfig {
    #[serde(default)]
    pub transition: TransitionConfig,
    #[serde(default)]
    pub flight: FlightConfig,
    #[serde(default)]
    pub boundary: BoundarySpec,
    #[serde(default)]
    pub orbit: OrbitConfig,
    #[serde(default)]
    pub keys: KeyBindings,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransitionConfig {
    /// Length of a fly-to in milliseconds
    #[serde(default = "default_duration_ms")]
    pub duration_ms: u64,
    /// Final camera position relative to the target
    #[serde(default = "default_offset")]
    pub offset: Vec3,
}

impl Default for TransitionConfig {
    fn default() -> Self {
        Self {
            duration_ms: default_duration_ms(),
            offset: default_offset(),
        }
    }
}

fn default_duration_ms() -> u64 {
    2000
}

fn default_offset() -> Vec3 {
    Vec3::new(20.0, 15.0, 50.0)
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlightConfig {
    /// Free-flight speed in world units per second
    #[serde(default = "default_base_speed")]
    pub base_speed: f32,
    /// Multiplier while the boost key is held
    #[serde(default = "default_boost_factor")]
    pub boost_factor: f32,
    /// Upper bound on the frame step, in seconds
    #[serde(default = "default_max_frame_secs")]
    pub max_frame_secs: f32,
}

impl Default for FlightConfig {
    fn default() -> Self {
        Self {
            base_speed: default_base_speed(),
            boost_factor: default_boost_factor(),
            max_frame_secs: default_max_frame_secs(),
        }
    }
}

fn default_base_speed() -> f32 {
    80.0
}

fn default_boost_factor() -> f32 {
    2.2
}

fn default_max_frame_secs() -> f32 {
    0.05 // 50 ms
}

/// Constants for the manual orbit controller living in the render layer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrbitConfig {
    #[serde(default = "default_rotate_speed")]
    pub rotate_speed: f32,
    #[serde(default = "default_pan_speed")]
    pub pan_speed: f32,
    #[serde(default = "default_zoom_speed")]
    pub zoom_speed: f32,
    /// Closest the camera may orbit its look-at target
    #[serde(default = "default_min_distance")]
    pub min_distance: f32,
    /// Farthest the camera may orbit its look-at target
    #[serde(default = "default_max_distance")]
    pub max_distance: f32,
}

impl Default for OrbitConfig {
    fn default() -> Self {
        Self {
            rotate_speed: default_rotate_speed(),
            pan_speed: default_pan_speed(),
            zoom_speed: default_zoom_speed(),
            min_distance: default_min_distance(),
            max_distance: default_max_distance(),
        }
    }
}

fn default_rotate_speed() -> f32 {
    0.4
}

fn default_pan_speed() -> f32 {
    0.8
}

fn default_zoom_speed() -> f32 {
    0.8
}

fn default_min_distance() -> f32 {
    20.0
}

fn default_max_distance() -> f32 {
    400.0
}

impl NavigationConfig {
    /// Load and validate from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// Load and validate from a TOML string
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: NavigationConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Reject values that would make navigation misbehave
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.transition.duration_ms == 0 {
            return Err(invalid("transition.duration_ms", "must be greater than zero"));
        }
        if !self.transition.offset.is_finite() {
            return Err(invalid("transition.offset", "must be finite"));
        }

        positive("flight.base_speed", self.flight.base_speed)?;
        positive("flight.max_frame_secs", self.flight.max_frame_secs)?;
        if !self.flight.boost_factor.is_finite() || self.flight.boost_factor < 1.0 {
            return Err(invalid("flight.boost_factor", "must be at least 1.0"));
        }

        positive("boundary.movement_radius", self.boundary.movement_radius)?;
        positive("boundary.max_look_at_offset", self.boundary.max_look_at_offset)?;

        positive("orbit.rotate_speed", self.orbit.rotate_speed)?;
        positive("orbit.pan_speed", self.orbit.pan_speed)?;
        positive("orbit.zoom_speed", self.orbit.zoom_speed)?;
        positive("orbit.min_distance", self.orbit.min_distance)?;
        positive("orbit.max_distance", self.orbit.max_distance)?;
        if self.orbit.min_distance > self.orbit.max_distance {
            return Err(invalid(
                "orbit.min_distance",
                format!(
                    "({}) exceeds orbit.max_distance ({})",
                    self.orbit.min_distance, self.orbit.max_distance
                ),
            ));
        }

        if let Some(key) = self.keys.all_keys().find(|k| k.trim().is_empty()) {
            return Err(invalid("keys", format!("contains an empty key name {key:?}")));
        }

        Ok(())
    }

    pub fn transition_settings(&self) -> TransitionSettings {
        TransitionSettings {
            duration: Duration::from_millis(self.transition.duration_ms),
            offset: self.transition.offset,
        }
    }

    pub fn flight_settings(&self) -> FlightSettings {
        FlightSettings {
            base_speed: self.flight.base_speed,
            boost_factor: self.flight.boost_factor,
            max_frame_secs: self.flight.max_frame_secs,
        }
    }

    pub fn free_flight(&self) -> FreeFlight {
        FreeFlight::new(self.flight_settings(), self.boundary)
    }
}

fn invalid(field: &'static str, reason: impl Into<String>) -> ConfigError {
    ConfigError::Invalid {
        field,
        reason: reason.into(),
    }
}

fn positive(field: &'static str, value: f32) -> Result<(), ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(invalid(field, format!("must be a positive number, got {value}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = NavigationConfig::from_toml("").unwrap();
        assert_eq!(config, NavigationConfig::default());
        assert_eq!(config.transition.duration_ms, 2000);
        assert_eq!(config.transition.offset, Vec3::new(20.0, 15.0, 50.0));
        assert_eq!(config.boundary.movement_radius, 290.0);
        assert_eq!(config.boundary.max_look_at_offset, 600.0);
        assert_eq!(config.orbit.min_distance, 20.0);
        assert_eq!(config.orbit.max_distance, 400.0);
    }

    #[test]
    fn test_partial_override() {
        let toml = r#"
[transition]
offset = [0.0, 5.0, 30.0]

[boundary]
movement_radius = 500.0

[keys]
forward = ["i"]
"#;
        let config = NavigationConfig::from_toml(toml).unwrap();
        assert_eq!(config.transition.duration_ms, 2000);
        assert_eq!(config.transition.offset, Vec3::new(0.0, 5.0, 30.0));
        assert_eq!(config.boundary.movement_radius, 500.0);
        assert_eq!(config.boundary.max_look_at_offset, 600.0);
        assert_eq!(config.keys.forward, vec!["i".to_string()]);
        assert_eq!(config.keys.backward, KeyBindings::default().backward);
    }

    #[test]
    fn test_rejects_invalid_values() {
        let cases = [
            "[transition]\nduration_ms = 0",
            "[flight]\nbase_speed = -1.0",
            "[flight]\nboost_factor = 0.5",
            "[boundary]\nmovement_radius = 0.0",
            "[orbit]\nmin_distance = 500.0\nmax_distance = 400.0",
            "[keys]\nboost = [\"\"]",
        ];
        for case in cases {
            match NavigationConfig::from_toml(case) {
                Err(ConfigError::Invalid { .. }) => {}
                other => panic!("expected invalid config for {case:?}, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_parse_error() {
        assert!(matches!(
            NavigationConfig::from_toml("[transition\nduration_ms = 1"),
            Err(ConfigError::ParseError(_))
        ));
    }

    #[test]
    fn test_file_round_trip() {
        let mut config = NavigationConfig::default();
        config.flight.base_speed = 120.0;
        config.orbit.max_distance = 1000.0;

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("navigation.toml");
        std::fs::write(&path, config.to_toml().unwrap()).unwrap();

        let loaded = NavigationConfig::from_file(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = NavigationConfig::from_file(&dir.path().join("absent.toml"));
        assert!(matches!(result, Err(ConfigError::IoError(_))));
    }

    #[test]
    fn test_derived_settings() {
        let config = NavigationConfig::default();
        let transition = config.transition_settings();
        assert_eq!(transition.duration, Duration::from_secs(2));
        assert_eq!(config.flight_settings(), FlightSettings::default());
        assert_eq!(config.free_flight().boundary, BoundarySpec::default());
    }
}
