//! Movement configuration.
//!
//! Tuning values for the controller, set once when the controller is built.
//! Only `invert_y` may change afterwards, through
//! [`PlayerController::set_inversion`](super::PlayerController::set_inversion).

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Default force magnitude applied at full stick deflection.
pub const DEFAULT_SPEED: f32 = 5.0;

/// Default speed ceiling above which no more force is applied (m/s).
pub const DEFAULT_MAX_VELOCITY: f32 = 10.0;

/// Default look speed in radians per unit of look input.
pub const DEFAULT_LOOK_SPEED: f32 = 0.002;

/// Default per-step blend toward a standstill when there is no move input.
pub const DEFAULT_DAMPING: f32 = 0.1;

/// Default camera pitch limit (radians, symmetric).
pub const DEFAULT_PITCH_LIMIT: f32 = 0.5;

/// Controller tuning.
///
/// # Example
///
/// ```ignore
/// use first_person_engine::player::MovementConfig;
///
/// let config = MovementConfig {
///     speed: 8.0,
///     invert_y: true,
///     ..MovementConfig::default()
/// };
/// config.validate()?;
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MovementConfig {
    /// Force magnitude per unit of move input (newtons).
    pub speed: f32,

    /// Speed at or above which movement force stops being applied (m/s).
    pub max_velocity: f32,

    /// Radians of rotation per unit of look input.
    pub look_speed: f32,

    /// Invert vertical look.
    pub invert_y: bool,

    /// Fraction of horizontal velocity removed per fixed step while idle.
    /// Not scaled by the step length, so the effective damping depends on
    /// the physics tick rate.
    pub damping: f32,

    /// Camera pitch is clamped to `[-pitch_limit, pitch_limit]` radians.
    pub pitch_limit: f32,
}

impl Default for MovementConfig {
    fn default() -> Self {
        Self {
            speed: DEFAULT_SPEED,
            max_velocity: DEFAULT_MAX_VELOCITY,
            look_speed: DEFAULT_LOOK_SPEED,
            invert_y: false,
            damping: DEFAULT_DAMPING,
            pitch_limit: DEFAULT_PITCH_LIMIT,
        }
    }
}

impl MovementConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a config from JSON. Missing fields take their defaults.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a JSON config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&text)
    }

    /// Check every numeric field is in range.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive = [
            ("speed", self.speed),
            ("max_velocity", self.max_velocity),
            ("look_speed", self.look_speed),
            ("pitch_limit", self.pitch_limit),
        ];
        for (field, value) in positive {
            // NaN fails this comparison too
            if !(value > 0.0) {
                return Err(ConfigError::NonPositive { field, value });
            }
        }

        if !(self.damping > 0.0 && self.damping <= 1.0) {
            return Err(ConfigError::DampingOutOfRange(self.damping));
        }

        Ok(())
    }

    /// `-1` when vertical look is inverted, `+1` otherwise.
    #[inline]
    pub fn inversion_sign(&self) -> i32 {
        if self.invert_y { -1 } else { 1 }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_values() {
        let config = MovementConfig::default();
        assert_eq!(config.speed, 5.0);
        assert_eq!(config.max_velocity, 10.0);
        assert_eq!(config.look_speed, 0.002);
        assert!(!config.invert_y);
        assert_eq!(config.damping, 0.1);
        assert_eq!(config.pitch_limit, 0.5);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_inversion_sign() {
        let mut config = MovementConfig::default();
        assert_eq!(config.inversion_sign(), 1);
        config.invert_y = true;
        assert_eq!(config.inversion_sign(), -1);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config = MovementConfig::from_json_str(r#"{ "speed": 8.0, "invert_y": true }"#).unwrap();
        assert_eq!(config.speed, 8.0);
        assert!(config.invert_y);
        assert_eq!(config.max_velocity, DEFAULT_MAX_VELOCITY);
    }

    #[test]
    fn test_rejects_non_positive() {
        let err = MovementConfig::from_json_str(r#"{ "max_velocity": 0.0 }"#).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::NonPositive { field: "max_velocity", .. }
        ));

        let config = MovementConfig {
            look_speed: -1.0,
            ..MovementConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_nan() {
        let config = MovementConfig {
            speed: f32::NAN,
            ..MovementConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::NonPositive { field: "speed", .. })
        ));
    }

    #[test]
    fn test_damping_range() {
        for damping in [0.0, -0.1, 1.5] {
            let config = MovementConfig {
                damping,
                ..MovementConfig::default()
            };
            assert!(matches!(
                config.validate(),
                Err(ConfigError::DampingOutOfRange(_))
            ));
        }

        let config = MovementConfig {
            damping: 1.0,
            ..MovementConfig::default()
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_roundtrip_through_json() {
        let config = MovementConfig {
            speed: 7.5,
            invert_y: true,
            ..MovementConfig::default()
        };
        let json = serde_json::to_string(&config).unwrap();
        assert_eq!(MovementConfig::from_json_str(&json).unwrap(), config);
    }
}
