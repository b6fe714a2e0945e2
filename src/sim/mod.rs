//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed per-step increments only
//! - Seeded RNG only
//! - No rendering, audio or platform dependencies

pub mod collision;
pub mod level;
pub mod phase;
pub mod state;
pub mod tick;

pub use collision::{Landing, evaluate_landing};
pub use level::{gap_after, generate_platform, platform_after};
pub use phase::{GamePhase, StickAction};
pub use state::{GameEvent, GameState, Platform, Player, Stick};
pub use tick::tick;
