//! Audio cue routing
//!
//! The simulation only raises events. The manager maps them to sound effects
//! at the configured volume and hands them to an output backend.

use crate::config::AudioSettings;
use crate::sim::GameEvent;

/// Sound effect types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundEffect {
    /// Stick missed the platform
    Fall,
    /// Player steps off into the void
    Scream,
}

impl SoundEffect {
    /// Effect cued by a simulation event, if any
    pub fn for_event(event: &GameEvent) -> Option<Self> {
        match event {
            GameEvent::Fall => Some(SoundEffect::Fall),
            GameEvent::Scream => Some(SoundEffect::Scream),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            SoundEffect::Fall => "fall",
            SoundEffect::Scream => "scream",
        }
    }
}

/// Something that can actually make noise
pub trait AudioOut {
    /// Fire-and-forget playback at `volume` (0.0 - 1.0)
    fn play(&mut self, effect: SoundEffect, volume: f32);
}

/// Backend that writes cues to the log (headless runs)
#[derive(Debug, Default)]
pub struct LogAudio;

impl AudioOut for LogAudio {
    fn play(&mut self, effect: SoundEffect, volume: f32) {
        log::info!("Sound: {} (volume {:.2})", effect.name(), volume);
    }
}

/// Audio manager for the game
pub struct AudioManager<O: AudioOut> {
    out: O,
    master_volume: f32,
    sfx_volume: f32,
    muted: bool,
}

impl<O: AudioOut> AudioManager<O> {
    pub fn new(out: O, settings: &AudioSettings) -> Self {
        Self {
            out,
            master_volume: settings.master_volume.clamp(0.0, 1.0),
            sfx_volume: settings.sfx_volume.clamp(0.0, 1.0),
            muted: settings.muted,
        }
    }

    /// Set master volume (0.0 - 1.0)
    pub fn set_master_volume(&mut self, vol: f32) {
        self.master_volume = vol.clamp(0.0, 1.0);
    }

    /// Set SFX volume (0.0 - 1.0)
    pub fn set_sfx_volume(&mut self, vol: f32) {
        self.sfx_volume = vol.clamp(0.0, 1.0);
    }

    /// Mute/unmute all audio
    pub fn set_muted(&mut self, muted: bool) {
        self.muted = muted;
    }

    /// Get effective volume
    fn effective_volume(&self) -> f32 {
        if self.muted {
            0.0
        } else {
            self.master_volume * self.sfx_volume
        }
    }

    /// Play a sound effect
    pub fn play(&mut self, effect: SoundEffect) {
        let vol = self.effective_volume();
        if vol <= 0.0 {
            return;
        }
        self.out.play(effect, vol);
    }

    /// Play whatever `event` cues
    pub fn handle(&mut self, event: &GameEvent) {
        if let Some(effect) = SoundEffect::for_event(event) {
            self.play(effect);
        }
    }

    pub fn output(&self) -> &O {
        &self.out
    }
}
