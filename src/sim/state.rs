//! Game state and core simulation types
//!
//! Everything the update step reads and mutates lives here. A `GameState` is
//! built fresh for every run and thrown away on restart.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::Serialize;

use super::collision::Landing;
use super::phase::{GamePhase, StickAction};
use crate::config::GameConfig;

/// A platform the player can stand on
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Platform {
    /// Left edge
    pub x: f32,
    pub width: f32,
}

impl Platform {
    pub fn new(x: f32, width: f32) -> Self {
        Self { x, width }
    }

    /// Right edge
    pub fn right(&self) -> f32 {
        self.x + self.width
    }
}

/// The stick figure
#[derive(Debug, Clone, Serialize)]
pub struct Player {
    /// x: centre of the feet, y: the ground line under them
    pub pos: Vec2,
    pub width: f32,
    pub height: f32,
    pub walk_speed: f32,
    /// Leg swing angle in [0, 2π), animation only
    pub leg_angle: f32,
    pub leg_speed: f32,
    /// Current drop speed, zero until the player falls
    pub fall_speed: f32,
    /// Body rotation, accumulates only while falling
    pub rotation: f32,
}

impl Player {
    pub fn new(x: f32, ground_y: f32, config: &GameConfig) -> Self {
        Self {
            pos: Vec2::new(x, ground_y),
            width: config.player_width,
            height: config.player_height,
            walk_speed: config.player_walk_speed,
            leg_angle: 0.0,
            leg_speed: config.leg_animation_speed,
            fall_speed: 0.0,
            rotation: 0.0,
        }
    }

    /// Move toward `target_x` by at most one walk step
    ///
    /// Returns true once the player stands exactly on the target.
    pub fn step_toward(&mut self, target_x: f32) -> bool {
        let dx = target_x - self.pos.x;
        if dx.abs() > self.walk_speed {
            self.pos.x += self.walk_speed * dx.signum();
            false
        } else {
            self.pos.x = target_x;
            true
        }
    }
}

/// The bridging stick, anchored where the player stands
#[derive(Debug, Clone, Serialize)]
pub struct Stick {
    pub length: f32,
    /// 0 = upright, π/2 = flat
    pub angle: f32,
    /// Radians per step while dropping
    pub fall_speed: f32,
    pub base_x: f32,
}

impl Stick {
    pub fn new(base_x: f32, fall_speed: f32) -> Self {
        Self {
            length: 0.0,
            angle: 0.0,
            fall_speed,
            base_x,
        }
    }

    /// Fresh upright stick for the next attempt
    pub fn reset(&mut self, base_x: f32) {
        self.length = 0.0;
        self.angle = 0.0;
        self.base_x = base_x;
    }

    /// Where the stick reaches once flat
    pub fn end(&self) -> f32 {
        self.base_x + self.length
    }
}

/// Notifications produced by the simulation for audio and UI
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub enum GameEvent {
    /// Run began
    Started,
    /// Stick finished dropping
    StickLanded { stick_end: f32, landing: Landing },
    /// Stick missed (fall cue)
    Fall,
    /// Player stepped off the stick (scream cue)
    Scream,
    /// New platform appended after a crossing
    PlatformSpawned { platform: Platform },
    ScoreChanged { score: u32 },
    /// Run ended with the final score
    GameOver { score: u32 },
}

/// Complete game state (deterministic for a given seed and input sequence)
#[derive(Debug, Clone, Serialize)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    pub config: GameConfig,
    pub phase: GamePhase,
    pub player: Player,
    pub stick: Stick,
    /// Append-only; never fewer than two
    pub platforms: Vec<Platform>,
    /// Index of the platform the player currently stands on
    pub current: usize,
    pub score: u32,
    /// Update steps that advanced the simulation
    pub ticks: u64,
    #[serde(skip)]
    pub(crate) rng: Pcg32,
    /// Events raised since the last drain
    #[serde(skip)]
    pub events: Vec<GameEvent>,
}

impl GameState {
    /// Lay out a new run on the configured surface, waiting in `Idle`
    pub fn new(config: GameConfig, seed: u64) -> Self {
        let platform_width = config.platform_width();
        let platform_gap = config.platform_gap();
        let ground_y = config.ground_y();
        let start_x = platform_width / 2.0;

        let platforms = vec![
            Platform::new(0.0, platform_width),
            Platform::new(platform_width + platform_gap, platform_width),
        ];

        Self {
            seed,
            player: Player::new(start_x, ground_y, &config),
            stick: Stick::new(start_x, config.stick_fall_speed),
            platforms,
            current: 0,
            score: 0,
            ticks: 0,
            phase: GamePhase::Idle,
            rng: Pcg32::seed_from_u64(seed),
            events: Vec::new(),
            config,
        }
    }

    /// Leave the start screen and hand control to the player
    pub fn start(&mut self) {
        self.transition(GamePhase::Playing {
            stick: StickAction::Resting,
        });
        self.emit(GameEvent::Started);
        self.emit(GameEvent::ScoreChanged { score: self.score });
        log::info!("Run started with seed {}", self.seed);
    }

    /// Activation input went down: start growing the stick
    ///
    /// Ignored unless the player is standing with an upright stick.
    pub fn activate_pressed(&mut self) {
        if matches!(
            self.phase,
            GamePhase::Playing {
                stick: StickAction::Resting
            }
        ) {
            self.transition(GamePhase::Playing {
                stick: StickAction::Growing,
            });
        }
    }

    /// Activation input went up: drop the stick if it was growing
    pub fn activate_released(&mut self) {
        if self.is_growing() {
            self.transition(GamePhase::Playing {
                stick: StickAction::Falling,
            });
        }
    }

    pub fn is_growing(&self) -> bool {
        matches!(
            self.phase,
            GamePhase::Playing {
                stick: StickAction::Growing
            }
        )
    }

    pub fn stick_falling(&self) -> bool {
        matches!(
            self.phase,
            GamePhase::Playing {
                stick: StickAction::Falling
            }
        )
    }

    /// Where the player is walking to, if anywhere
    pub fn walk_target(&self) -> Option<f32> {
        self.phase.walk_target()
    }

    /// Platform the player stands on
    pub fn standing_platform(&self) -> &Platform {
        &self.platforms[self.current]
    }

    /// Platform the stick has to reach
    pub fn target_platform(&self) -> &Platform {
        assert!(
            self.current + 1 < self.platforms.len(),
            "no platform after index {} ({} platforms)",
            self.current,
            self.platforms.len()
        );
        &self.platforms[self.current + 1]
    }

    /// Move to `next`, panicking on a transition the state machine forbids
    pub fn transition(&mut self, next: GamePhase) {
        assert!(
            self.phase.can_transition_to(&next),
            "illegal phase transition {:?} -> {:?}",
            self.phase,
            next
        );
        if self.phase.name() != next.name() {
            log::debug!("Phase {} -> {}", self.phase.name(), next.name());
        }
        self.phase = next;
    }

    pub(crate) fn emit(&mut self, event: GameEvent) {
        self.events.push(event);
    }

    /// Take all events raised since the last drain
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    /// Fail fast if the model was corrupted
    pub fn assert_invariants(&self) {
        assert!(
            self.platforms.len() >= 2,
            "platform sequence has {} entries",
            self.platforms.len()
        );
        assert!(self.current + 1 < self.platforms.len());
        // Platforms are append-only, so only the newest pair can be wrong
        let newest = self.platforms.len() - 1;
        let (before, last) = (&self.platforms[newest - 1], &self.platforms[newest]);
        assert!(
            last.x > before.right(),
            "platforms overlap: {before:?} then {last:?}"
        );
        assert!(self.stick.length >= 0.0, "negative stick length {}", self.stick.length);
        assert!(
            (0.0..=std::f32::consts::FRAC_PI_2).contains(&self.stick.angle),
            "stick angle {} outside [0, π/2]",
            self.stick.angle
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state_layout() {
        let state = GameState::new(GameConfig::default(), 1);
        assert_eq!(state.phase, GamePhase::Idle);
        assert_eq!(state.platforms.len(), 2);
        assert_eq!(state.platforms[0], Platform::new(0.0, 100.0));
        assert_eq!(state.platforms[1], Platform::new(150.0, 100.0));
        assert_eq!(state.player.pos, Vec2::new(50.0, 560.0));
        assert_eq!(state.stick.base_x, 50.0);
        assert_eq!(state.stick.length, 0.0);
        assert_eq!(state.score, 0);
        assert_eq!(state.walk_target(), None);
        state.assert_invariants();
    }

    #[test]
    fn test_start_emits_score() {
        let mut state = GameState::new(GameConfig::default(), 1);
        state.start();
        assert_eq!(
            state.phase,
            GamePhase::Playing {
                stick: StickAction::Resting
            }
        );
        assert_eq!(
            state.drain_events(),
            vec![GameEvent::Started, GameEvent::ScoreChanged { score: 0 }]
        );
        assert!(state.events.is_empty());
    }

    #[test]
    fn test_press_and_release() {
        let mut state = GameState::new(GameConfig::default(), 1);

        // Not playing yet
        state.activate_pressed();
        assert_eq!(state.phase, GamePhase::Idle);

        state.start();
        state.activate_released();
        assert!(!state.stick_falling());

        state.activate_pressed();
        assert!(state.is_growing());
        assert!(!state.stick_falling());

        state.activate_released();
        assert!(!state.is_growing());
        assert!(state.stick_falling());

        // A second press while dropping is ignored
        state.activate_pressed();
        assert!(state.stick_falling());
        assert!(!state.is_growing());
    }

    #[test]
    fn test_player_step_toward_snaps() {
        let mut player = Player::new(50.0, 0.0, &GameConfig::default());
        assert!(!player.step_toward(60.0));
        assert_eq!(player.pos.x, 54.0);
        assert!(!player.step_toward(60.0));
        assert_eq!(player.pos.x, 58.0);
        assert!(player.step_toward(60.0));
        assert_eq!(player.pos.x, 60.0);
    }

    #[test]
    #[should_panic(expected = "illegal phase transition")]
    fn test_illegal_transition_panics() {
        let mut state = GameState::new(GameConfig::default(), 1);
        state.transition(GamePhase::Falling);
    }

    #[test]
    #[should_panic(expected = "platform sequence")]
    fn test_truncated_platforms_fail_fast() {
        let mut state = GameState::new(GameConfig::default(), 1);
        state.platforms.truncate(1);
        state.assert_invariants();
    }

    #[test]
    #[should_panic(expected = "negative stick length")]
    fn test_negative_stick_fails_fast() {
        let mut state = GameState::new(GameConfig::default(), 1);
        state.stick.length = -1.0;
        state.assert_invariants();
    }

    #[test]
    #[should_panic(expected = "outside [0, π/2]")]
    fn test_overrotated_stick_fails_fast() {
        let mut state = GameState::new(GameConfig::default(), 1);
        state.stick.angle = std::f32::consts::FRAC_PI_2 + 0.01;
        state.assert_invariants();
    }

    #[test]
    #[should_panic(expected = "platforms overlap")]
    fn test_overlapping_newest_platform_fails_fast() {
        let mut state = GameState::new(GameConfig::default(), 1);
        state.platforms.push(Platform::new(200.0, 50.0));
        state.assert_invariants();
    }

    #[test]
    fn test_standing_platform_follows_current() {
        let mut state = GameState::new(GameConfig::default(), 1);
        assert_eq!(*state.standing_platform(), Platform::new(0.0, 100.0));
        state.platforms.push(Platform::new(300.0, 80.0));
        state.current = 1;
        assert_eq!(*state.standing_platform(), Platform::new(150.0, 100.0));
        assert_eq!(*state.target_platform(), Platform::new(300.0, 80.0));
    }
}
