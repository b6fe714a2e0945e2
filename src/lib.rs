//! Stick Bridge - a one-button timing game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (state machine, update step, landing test, level generation)
//! - `config`: Tunable game parameters, loadable from JSON
//! - `driver`: Fixed-timestep frame driver and presentation interface
//! - `audio`: Sound cue routing
//! - `autopilot`: Demo-mode player

pub mod audio;
pub mod autopilot;
pub mod config;
pub mod driver;
pub mod sim;

pub use config::{AudioSettings, ConfigError, GameConfig, Surface};
pub use driver::{Driver, Presenter};

/// Game configuration constants
pub mod consts {
    /// Fixed driver timestep (60 Hz, one update step per tick)
    pub const TICK_DT: f32 = 1.0 / 60.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;
    /// Longest host frame the driver will catch up on (seconds)
    pub const MAX_FRAME_DT: f32 = 0.1;

    /// Default drawing surface size
    pub const SURFACE_WIDTH: f32 = 500.0;
    pub const SURFACE_HEIGHT: f32 = 800.0;

    /// Initial layout, as fractions of the surface size
    pub const PLATFORM_WIDTH_MULTIPLIER: f32 = 0.2;
    pub const PLATFORM_GAP_MULTIPLIER: f32 = 0.1;
    pub const GROUND_HEIGHT_MULTIPLIER: f32 = 0.7;

    /// Player defaults (per tick)
    pub const PLAYER_WIDTH: f32 = 20.0;
    pub const PLAYER_HEIGHT: f32 = 40.0;
    pub const PLAYER_WALK_SPEED: f32 = 4.0;
    pub const LEG_ANIMATION_SPEED: f32 = 0.3;
    pub const PLAYER_FALL_SPEED: f32 = 8.0;
    pub const PLAYER_ROTATION_SPEED: f32 = 0.1;

    /// Stick defaults (per tick)
    pub const STICK_GROWTH_SPEED: f32 = 5.0;
    /// Radians per tick
    pub const STICK_FALL_SPEED: f32 = 0.1;

    /// Distance below the surface bottom at which a falling player is gone
    pub const FALL_OUT_MARGIN: f32 = 100.0;

    /// Generated gap = (GAP_MIN + roll * GAP_JITTER) * previous width, roll in [0, 1)
    pub const GAP_MIN: f32 = 0.15;
    pub const GAP_JITTER: f32 = 0.1;
}

/// Wrap an angle into [0, 2π)
#[inline]
pub fn wrap_turn(angle: f32) -> f32 {
    let wrapped = angle.rem_euclid(std::f32::consts::TAU);
    // rem_euclid can round up to exactly TAU for tiny negative inputs
    if wrapped >= std::f32::consts::TAU {
        0.0
    } else {
        wrapped
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::TAU;

    #[test]
    fn test_wrap_turn() {
        assert_eq!(wrap_turn(0.0), 0.0);
        assert!((wrap_turn(TAU + 0.5) - 0.5).abs() < 1e-5);
        assert!((wrap_turn(-0.5) - (TAU - 0.5)).abs() < 1e-5);
        assert!(wrap_turn(-1e-9) < TAU);
    }
}
