//! Procedural sound cues
//!
//! Game events map to short oscillator tone sequences - no external files
//! needed. Playing the tones is left to the platform audio backend.

use serde::{Deserialize, Serialize};

use crate::sim::GameEvent;

/// Quietest volume a tone is ever started at (exponential ramps cannot hit 0)
pub const MIN_TONE_VOLUME: f32 = 0.0001;

/// Sound effect types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SoundEffect {
    /// Snake ate food - quick ascending blip
    Eat,
    /// Snake hit itself - falling tone pair
    GameOver,
}

impl SoundEffect {
    pub fn for_event(event: &GameEvent) -> Self {
        match event {
            GameEvent::FoodEaten { .. } => SoundEffect::Eat,
            GameEvent::GameOver { .. } => SoundEffect::GameOver,
        }
    }
}

/// Oscillator shape
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Waveform {
    Square,
    Sawtooth,
}

/// One tone with a simple decay envelope
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Tone {
    pub frequency_hz: f32,
    pub duration_ms: u32,
    pub waveform: Waveform,
    /// Start volume, decays to silence over the duration
    pub volume: f32,
    /// Offset from the moment the effect is triggered
    pub delay_ms: u32,
}

impl Tone {
    const fn new(
        frequency_hz: f32,
        duration_ms: u32,
        waveform: Waveform,
        volume: f32,
        delay_ms: u32,
    ) -> Self {
        Self {
            frequency_hz,
            duration_ms,
            waveform,
            volume,
            delay_ms,
        }
    }

    /// When the tone has fully decayed, relative to the trigger
    pub fn end_ms(&self) -> u32 {
        self.delay_ms + self.duration_ms
    }
}

const EAT_TONES: [Tone; 2] = [
    Tone::new(650.0, 70, Waveform::Square, 0.08, 0),
    Tone::new(820.0, 80, Waveform::Square, 0.08, 60),
];

const GAME_OVER_TONES: [Tone; 2] = [
    Tone::new(300.0, 250, Waveform::Sawtooth, 0.1, 0),
    Tone::new(180.0, 350, Waveform::Sawtooth, 0.1, 200),
];

/// Audio manager for the game
#[derive(Debug, Clone)]
pub struct AudioManager {
    enabled: bool,
    master_volume: f32,
}

impl Default for AudioManager {
    fn default() -> Self {
        Self::new()
    }
}

impl AudioManager {
    pub fn new() -> Self {
        Self {
            enabled: true,
            master_volume: 1.0,
        }
    }

    /// Build from player settings
    pub fn from_settings(settings: &crate::Settings) -> Self {
        let mut audio = Self::new();
        audio.set_enabled(settings.sound_enabled);
        audio.set_master_volume(settings.master_volume);
        audio
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Set master volume (0.0 - 1.0)
    pub fn set_master_volume(&mut self, vol: f32) {
        self.master_volume = vol.clamp(0.0, 1.0);
    }

    /// Tones for an effect, scaled by master volume. Empty when muted.
    pub fn tones(&self, effect: SoundEffect) -> Vec<Tone> {
        if !self.enabled || self.master_volume <= 0.0 {
            return Vec::new();
        }

        let base: &[Tone] = match effect {
            SoundEffect::Eat => &EAT_TONES,
            SoundEffect::GameOver => &GAME_OVER_TONES,
        };

        base.iter()
            .map(|tone| Tone {
                volume: (tone.volume * self.master_volume).max(MIN_TONE_VOLUME),
                ..*tone
            })
            .collect()
    }

    /// Tones to play in response to a core event
    pub fn cues_for(&self, event: &GameEvent) -> Vec<Tone> {
        let effect = SoundEffect::for_event(event);
        log::trace!("Sound cue {:?}", effect);
        self.tones(effect)
    }
}
