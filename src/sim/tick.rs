//! Fixed-step simulation tick
//!
//! One call advances the game by one step. Speeds are per call, so the caller
//! decides how fast the game runs (see `driver`).

use std::f32::consts::FRAC_PI_2;

use super::collision::evaluate_landing;
use super::level::generate_platform;
use super::phase::{GamePhase, StickAction};
use super::state::{GameEvent, GameState};
use crate::consts::FALL_OUT_MARGIN;
use crate::wrap_turn;

/// Advance the game state by one step
///
/// Returns `false` exactly once, on the step that ends the run. Idle and
/// finished games are left untouched and report `true`.
pub fn tick(state: &mut GameState) -> bool {
    let keep_running = match state.phase {
        GamePhase::Idle | GamePhase::GameOver => return true,
        GamePhase::Playing { stick } => {
            match stick {
                StickAction::Resting => {}
                StickAction::Growing => state.stick.length += state.config.stick_growth_speed,
                StickAction::Falling => drop_stick(state),
            }
            true
        }
        GamePhase::Walking { target_x } => {
            walk(state, target_x, false);
            true
        }
        GamePhase::WalkingToFall { target_x } => {
            walk(state, target_x, true);
            true
        }
        GamePhase::Falling => fall(state),
    };

    state.ticks += 1;

    #[cfg(debug_assertions)]
    state.assert_invariants();

    keep_running
}

/// Rotate the released stick; on touchdown decide the walk
fn drop_stick(state: &mut GameState) {
    let stick = &mut state.stick;
    stick.angle += stick.fall_speed;
    if stick.angle < FRAC_PI_2 {
        return;
    }
    stick.angle = FRAC_PI_2;
    let stick_end = stick.end();

    let target = *state.target_platform();
    let landing = evaluate_landing(stick_end, &target);
    state.emit(GameEvent::StickLanded { stick_end, landing });

    if landing.is_success() {
        log::info!(
            "Stick landed at {:.1} on platform [{:.1}, {:.1}]",
            stick_end,
            target.x,
            target.right()
        );
        state.transition(GamePhase::Walking {
            target_x: stick_end,
        });
    } else {
        log::info!(
            "Stick missed ({:?}) at {:.1}, platform [{:.1}, {:.1}]",
            landing,
            stick_end,
            target.x,
            target.right()
        );
        state.transition(GamePhase::WalkingToFall {
            target_x: stick_end,
        });
        state.emit(GameEvent::Fall);
    }
}

/// Walk toward the stick end, then either cross or drop
fn walk(state: &mut GameState, target_x: f32, doomed: bool) {
    let player = &mut state.player;
    player.leg_angle = wrap_turn(player.leg_angle + player.leg_speed);
    if !player.step_toward(target_x) {
        return;
    }

    if doomed {
        player.fall_speed = state.config.player_fall_speed;
        state.transition(GamePhase::Falling);
        state.emit(GameEvent::Scream);
    } else {
        cross(state);
    }
}

/// The player arrived on the next platform
fn cross(state: &mut GameState) {
    let last = state.platforms[state.platforms.len() - 1];
    let platform = generate_platform(&last, &mut state.rng);
    state.platforms.push(platform);
    state.current += 1;

    state.stick.reset(state.player.pos.x);
    state.transition(GamePhase::Playing {
        stick: StickAction::Resting,
    });
    state.score += 1;

    state.emit(GameEvent::PlatformSpawned { platform });
    state.emit(GameEvent::ScoreChanged { score: state.score });
    let standing = state.standing_platform();
    log::info!(
        "Crossed to platform {} at [{:.1}, {:.1}], score {}; next platform at {:.1}",
        state.current,
        standing.x,
        standing.right(),
        state.score,
        platform.x
    );
}

/// Drop and spin the player; ends the run once off screen
fn fall(state: &mut GameState) -> bool {
    let player = &mut state.player;
    player.pos.y += player.fall_speed;
    player.rotation += state.config.player_rotation_speed;

    if player.pos.y <= state.config.surface.height + FALL_OUT_MARGIN {
        return true;
    }

    state.transition(GamePhase::GameOver);
    state.emit(GameEvent::GameOver { score: state.score });
    state.emit(GameEvent::ScoreChanged { score: state.score });
    log::info!("Game over, score {}", state.score);
    false
}
