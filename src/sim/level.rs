//! Platform generation
//!
//! Each new platform copies the width of the last one and sits a randomized
//! gap to its right. The roll is the only randomness in the simulation.

use rand::Rng;

use super::state::Platform;
use crate::consts::{GAP_JITTER, GAP_MIN};

/// Gap that follows `last` for a roll in [0, 1)
pub fn gap_after(last: &Platform, roll: f32) -> f32 {
    debug_assert!((0.0..1.0).contains(&roll), "gap roll out of range: {roll}");
    (roll * GAP_JITTER + GAP_MIN) * last.width
}

/// Platform following `last` for a given roll in [0, 1)
pub fn platform_after(last: &Platform, roll: f32) -> Platform {
    Platform::new(last.right() + gap_after(last, roll), last.width)
}

/// Generate the platform following `last`, drawing the gap from `rng`
pub fn generate_platform<R: Rng + ?Sized>(last: &Platform, rng: &mut R) -> Platform {
    let roll: f32 = rng.random();
    platform_after(last, roll)
}
