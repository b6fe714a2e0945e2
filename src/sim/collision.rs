//! Stick landing test
//!
//! Decides, once per drop, whether the flat stick's far end rests on the
//! target platform.

use serde::Serialize;

use super::state::Platform;

/// Outcome of a stick landing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Landing {
    /// The stick end lies on the target platform (edges included)
    Bridged,
    /// The stick end falls short of the target's left edge
    Short,
    /// The stick end reaches past the target's right edge
    Overshot,
}

impl Landing {
    pub fn is_success(&self) -> bool {
        matches!(self, Landing::Bridged)
    }
}

/// Evaluate where a stick ending at `stick_end` lands relative to `target`
///
/// Success iff `target.x <= stick_end <= target.x + target.width`.
pub fn evaluate_landing(stick_end: f32, target: &Platform) -> Landing {
    if stick_end < target.x {
        Landing::Short
    } else if stick_end > target.right() {
        Landing::Overshot
    } else {
        Landing::Bridged
    }
}
