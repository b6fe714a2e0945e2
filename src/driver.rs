//! Frame driver
//!
//! Owns the game between runs, paces update steps at [`TICK_DT`] whatever the
//! host frame rate is, and fans simulation events out to the presentation and
//! audio collaborators.

use crate::audio::{AudioManager, AudioOut};
use crate::config::{ConfigError, GameConfig, Surface};
use crate::consts::{MAX_FRAME_DT, MAX_SUBSTEPS, TICK_DT};
use crate::sim::{GameEvent, GamePhase, GameState, tick};

/// Presentation collaborator: draws the game and updates UI text
pub trait Presenter {
    /// Draw the current state; called once per frame while the run continues
    fn present(&mut self, state: &GameState);

    /// Score, start and game-over notifications
    fn on_event(&mut self, _event: &GameEvent) {}
}

/// Drives a [`GameState`] from host frame callbacks
pub struct Driver<P: Presenter, A: AudioOut> {
    config: GameConfig,
    state: GameState,
    presenter: P,
    audio: AudioManager<A>,
    accumulator: f32,
    running: bool,
}

impl<P: Presenter, A: AudioOut> Driver<P, A> {
    /// New driver sitting on the start screen
    pub fn new(config: GameConfig, presenter: P, audio_out: A) -> Self {
        let audio = AudioManager::new(audio_out, &config.audio);
        Self {
            state: GameState::new(config.clone(), 0),
            config,
            presenter,
            audio,
            accumulator: 0.0,
            running: false,
        }
    }

    /// Begin a fresh run (also used for restart)
    pub fn start(&mut self, seed: u64) {
        self.state = GameState::new(self.config.clone(), seed);
        self.state.start();
        self.accumulator = 0.0;
        self.running = true;
        self.dispatch_events();
        self.presenter.present(&self.state);
    }

    /// Stop calling the simulation; the state is left as is
    pub fn stop(&mut self) {
        if self.running {
            log::info!("Driver stopped at tick {}", self.state.ticks);
        }
        self.running = false;
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn presenter(&self) -> &P {
        &self.presenter
    }

    pub fn audio(&self) -> &AudioManager<A> {
        &self.audio
    }

    /// Activation input down
    pub fn press(&mut self) {
        self.state.activate_pressed();
    }

    /// Activation input up
    pub fn release(&mut self) {
        self.state.activate_released();
    }

    /// Surface size changed; the layout only follows while on the start screen
    ///
    /// A surface the game cannot be laid out on (a minimised window, say) is
    /// rejected and the previous size stays in effect.
    pub fn resize(&mut self, surface: Surface) -> Result<(), ConfigError> {
        let config = GameConfig {
            surface,
            ..self.config.clone()
        };
        if let Err(err) = config.validate() {
            log::warn!(
                "Ignoring resize to {}x{}: {err}",
                surface.width,
                surface.height
            );
            return Err(err);
        }

        self.config = config;
        if self.state.phase == GamePhase::Idle {
            self.state = GameState::new(self.config.clone(), self.state.seed);
            log::debug!("Relaid idle game for {}x{}", surface.width, surface.height);
        }
        Ok(())
    }

    /// Host frame callback with the time since the previous frame (seconds)
    ///
    /// Runs as many fixed steps as the elapsed time covers, then presents.
    /// Returns `false` once the run has ended or the driver is stopped.
    pub fn frame(&mut self, dt: f32) -> bool {
        if !self.running {
            return false;
        }

        // A bogus clock reading counts as no time passing
        let dt = if dt.is_finite() { dt } else { 0.0 };
        self.accumulator += dt.clamp(0.0, MAX_FRAME_DT);

        let mut substeps = 0;
        while self.accumulator >= TICK_DT && substeps < MAX_SUBSTEPS {
            self.accumulator -= TICK_DT;
            substeps += 1;
            if !self.step() {
                return false;
            }
        }

        self.presenter.present(&self.state);
        true
    }

    /// Exactly one update step, bypassing the clock
    pub fn step(&mut self) -> bool {
        if !self.running {
            return false;
        }
        let keep_going = tick(&mut self.state);
        self.dispatch_events();
        if !keep_going {
            self.running = false;
            log::info!(
                "Run over after {} ticks with score {}",
                self.state.ticks,
                self.state.score
            );
        }
        keep_going
    }

    fn dispatch_events(&mut self) {
        for event in self.state.drain_events() {
            self.audio.handle(&event);
            self.presenter.on_event(&event);
        }
    }
}
