//! Game phases and the legal transitions between them

use serde::Serialize;

/// What the stick is doing while the player is in control
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum StickAction {
    /// Upright and waiting for input
    #[default]
    Resting,
    /// Activation held, stick extending
    Growing,
    /// Released, stick rotating toward flat
    Falling,
}

/// Current phase of the game
///
/// Walk targets ride along with the walking phases, so a target exists
/// exactly while the player is walking toward it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub enum GamePhase {
    /// Start screen, nothing simulated
    Idle,
    /// Player stands on a platform and works the stick
    Playing { stick: StickAction },
    /// Stick bridged the gap, walking to its end
    Walking { target_x: f32 },
    /// Stick missed, walking to its end before dropping
    WalkingToFall { target_x: f32 },
    /// Dropping off the end of the stick
    Falling,
    /// Run ended
    GameOver,
}

impl GamePhase {
    /// Whether `next` may follow `self`
    pub fn can_transition_to(&self, next: &GamePhase) -> bool {
        use GamePhase::*;
        matches!(
            (self, next),
            (Idle, Playing { stick: StickAction::Resting })
                | (
                    Playing { stick: StickAction::Resting },
                    Playing { stick: StickAction::Growing }
                )
                | (
                    Playing { stick: StickAction::Growing },
                    Playing { stick: StickAction::Falling }
                )
                | (
                    Playing { stick: StickAction::Falling },
                    Walking { .. } | WalkingToFall { .. }
                )
                | (Walking { .. }, Playing { stick: StickAction::Resting })
                | (WalkingToFall { .. }, Falling)
                | (Falling, GameOver)
        )
    }

    /// Walk target, if the player is walking
    pub fn walk_target(&self) -> Option<f32> {
        match *self {
            GamePhase::Walking { target_x } | GamePhase::WalkingToFall { target_x } => {
                Some(target_x)
            }
            _ => None,
        }
    }

    pub fn is_walking(&self) -> bool {
        self.walk_target().is_some()
    }

    pub fn name(&self) -> &'static str {
        match self {
            GamePhase::Idle => "idle",
            GamePhase::Playing { .. } => "playing",
            GamePhase::Walking { .. } => "walking",
            GamePhase::WalkingToFall { .. } => "walking-to-fall",
            GamePhase::Falling => "falling",
            GamePhase::GameOver => "game-over",
        }
    }
}
