//! Game configuration
//!
//! Every tunable lives here with a default from [`crate::consts`]. Configs can
//! be loaded from JSON; missing fields fall back to the defaults.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::*;

/// Errors raised while loading or validating a [`GameConfig`]
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid config value for `{field}`: {reason}")]
    Invalid { field: &'static str, reason: String },
}

/// Size of the drawing surface the game is laid out on
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Surface {
    pub width: f32,
    pub height: f32,
}

impl Default for Surface {
    fn default() -> Self {
        Self {
            width: SURFACE_WIDTH,
            height: SURFACE_HEIGHT,
        }
    }
}

impl Surface {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// Audio preferences
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AudioSettings {
    /// Master volume (0.0 - 1.0)
    pub master_volume: f32,
    /// Sound effects volume (0.0 - 1.0)
    pub sfx_volume: f32,
    pub muted: bool,
}

impl Default for AudioSettings {
    fn default() -> Self {
        Self {
            master_volume: 0.8,
            sfx_volume: 1.0,
            muted: false,
        }
    }
}

/// All tunable game parameters
///
/// Speeds are per update step, not per second: the driver runs the
/// simulation at a fixed [`TICK_DT`].
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub surface: Surface,

    // === Layout ===
    pub platform_width_multiplier: f32,
    pub platform_gap_multiplier: f32,
    pub ground_height_multiplier: f32,

    // === Player ===
    pub player_width: f32,
    pub player_height: f32,
    pub player_walk_speed: f32,
    pub leg_animation_speed: f32,
    pub player_fall_speed: f32,
    pub player_rotation_speed: f32,

    // === Stick ===
    pub stick_growth_speed: f32,
    /// Radians per step
    pub stick_fall_speed: f32,

    pub audio: AudioSettings,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            surface: Surface::default(),

            platform_width_multiplier: PLATFORM_WIDTH_MULTIPLIER,
            platform_gap_multiplier: PLATFORM_GAP_MULTIPLIER,
            ground_height_multiplier: GROUND_HEIGHT_MULTIPLIER,

            player_width: PLAYER_WIDTH,
            player_height: PLAYER_HEIGHT,
            player_walk_speed: PLAYER_WALK_SPEED,
            leg_animation_speed: LEG_ANIMATION_SPEED,
            player_fall_speed: PLAYER_FALL_SPEED,
            player_rotation_speed: PLAYER_ROTATION_SPEED,

            stick_growth_speed: STICK_GROWTH_SPEED,
            stick_fall_speed: STICK_FALL_SPEED,

            audio: AudioSettings::default(),
        }
    }
}

impl GameConfig {
    /// Parse and validate a JSON config
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a JSON config file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let config = Self::from_json_str(&json)?;
        log::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Width of the two starting platforms
    pub fn platform_width(&self) -> f32 {
        self.surface.width * self.platform_width_multiplier
    }

    /// Gap between the two starting platforms
    pub fn platform_gap(&self) -> f32 {
        self.surface.width * self.platform_gap_multiplier
    }

    /// The line platforms sit on and the player stands on
    pub fn ground_y(&self) -> f32 {
        self.surface.height * self.ground_height_multiplier
    }

    /// Check that the config describes a playable game
    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive = [
            ("surface.width", self.surface.width),
            ("surface.height", self.surface.height),
            ("player_width", self.player_width),
            ("player_height", self.player_height),
            ("player_walk_speed", self.player_walk_speed),
            ("player_fall_speed", self.player_fall_speed),
            ("stick_growth_speed", self.stick_growth_speed),
            ("stick_fall_speed", self.stick_fall_speed),
        ];
        for (field, value) in positive {
            if !(value.is_finite() && value > 0.0) {
                return Err(invalid(field, format!("must be a positive number, got {value}")));
            }
        }

        let non_negative = [
            ("leg_animation_speed", self.leg_animation_speed),
            ("player_rotation_speed", self.player_rotation_speed),
        ];
        for (field, value) in non_negative {
            if !(value.is_finite() && value >= 0.0) {
                return Err(invalid(field, format!("must not be negative, got {value}")));
            }
        }

        let fractions = [
            ("platform_width_multiplier", self.platform_width_multiplier),
            ("platform_gap_multiplier", self.platform_gap_multiplier),
            ("ground_height_multiplier", self.ground_height_multiplier),
        ];
        for (field, value) in fractions {
            if !(value > 0.0 && value <= 1.0) {
                return Err(invalid(field, format!("must be in (0, 1], got {value}")));
            }
        }

        let layout_width = 2.0 * self.platform_width() + self.platform_gap();
        if layout_width > self.surface.width {
            return Err(invalid(
                "platform_gap_multiplier",
                format!(
                    "starting platforms span {layout_width} but the surface is only {} wide",
                    self.surface.width
                ),
            ));
        }

        for (field, value) in [
            ("audio.master_volume", self.audio.master_volume),
            ("audio.sfx_volume", self.audio.sfx_volume),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(invalid(field, format!("must be in [0, 1], got {value}")));
            }
        }

        Ok(())
    }
}

fn invalid(field: &'static str, reason: String) -> ConfigError {
    ConfigError::Invalid { field, reason }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = GameConfig::default();
        assert!(config.validate().is_ok());
        assert!((config.platform_width() - 100.0).abs() < 0.0001);
        assert!((config.platform_gap() - 50.0).abs() < 0.0001);
        assert!((config.ground_y() - 560.0).abs() < 0.0001);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config =
            GameConfig::from_json_str(r#"{ "stick_growth_speed": 2.5, "audio": { "muted": true } }"#)
                .unwrap();
        assert_eq!(config.stick_growth_speed, 2.5);
        assert!(config.audio.muted);
        assert_eq!(config.audio.master_volume, 0.8);
        assert_eq!(config.player_walk_speed, PLAYER_WALK_SPEED);
    }

    #[test]
    fn test_malformed_json_is_parse_error() {
        let err = GameConfig::from_json_str("{ not json").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_rejects_non_positive_speed() {
        let err = GameConfig::from_json_str(r#"{ "player_walk_speed": 0.0 }"#).unwrap_err();
        match err {
            ConfigError::Invalid { field, .. } => assert_eq!(field, "player_walk_speed"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_rejects_layout_wider_than_surface() {
        let config = GameConfig {
            platform_width_multiplier: 0.5,
            platform_gap_multiplier: 0.2,
            ..GameConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::Invalid {
                field: "platform_gap_multiplier",
                ..
            })
        ));
    }

    #[test]
    fn test_rejects_out_of_range_volume() {
        let mut config = GameConfig::default();
        config.audio.sfx_volume = 1.5;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = GameConfig::load("/definitely/not/here.json").unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }
}
