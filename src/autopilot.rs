//! Demo-mode player
//!
//! Holds the button while the stick rests and lets go once it is long enough
//! to reach the middle of the next platform, give or take a random aim error.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use crate::audio::AudioOut;
use crate::driver::{Driver, Presenter};
use crate::sim::{GamePhase, GameState, StickAction};

/// Input the autopilot wants to send
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Press,
    Release,
}

pub struct Autopilot {
    rng: Pcg32,
    /// Max aim error as a fraction of the target platform's width
    aim_error: f32,
    /// Stick length being aimed for in the current attempt
    aim: Option<f32>,
}

impl Autopilot {
    pub fn new(seed: u64, aim_error: f32) -> Self {
        Self {
            rng: Pcg32::seed_from_u64(seed),
            aim_error: aim_error.max(0.0),
            aim: None,
        }
    }

    /// Decide the input for this frame
    pub fn decide(&mut self, state: &GameState) -> Option<Action> {
        match state.phase {
            GamePhase::Playing {
                stick: StickAction::Resting,
            } => {
                self.aim = Some(self.pick_aim(state));
                Some(Action::Press)
            }
            GamePhase::Playing {
                stick: StickAction::Growing,
            } => {
                // The button may have been pressed by someone else
                let aim = match self.aim {
                    Some(aim) => aim,
                    None => {
                        let aim = self.pick_aim(state);
                        self.aim = Some(aim);
                        aim
                    }
                };
                // Let go when the stick is within half a growth step of the aim
                let half_step = state.config.stick_growth_speed / 2.0;
                if state.stick.length + half_step >= aim {
                    self.aim = None;
                    Some(Action::Release)
                } else {
                    None
                }
            }
            _ => None,
        }
    }

    /// Decide and feed the result straight into `driver`
    pub fn apply<P: Presenter, A: AudioOut>(&mut self, driver: &mut Driver<P, A>) -> Option<Action> {
        let action = self.decide(driver.state());
        match action {
            Some(Action::Press) => driver.press(),
            Some(Action::Release) => driver.release(),
            None => {}
        }
        action
    }

    fn pick_aim(&mut self, state: &GameState) -> f32 {
        let target = state.target_platform();
        let centre = target.x + target.width / 2.0;
        let error = if self.aim_error > 0.0 {
            self.rng.random_range(-1.0f32..=1.0) * self.aim_error * target.width
        } else {
            0.0
        };
        let aim = (centre + error - state.stick.base_x).max(0.0);
        log::debug!(
            "Autopilot aiming for length {:.1} (target centre {:.1})",
            aim,
            centre
        );
        aim
    }
}
