//! Game settings and preferences
//!
//! Plain data with JSON encode/decode; where the JSON comes from is up to the
//! platform layer.

use serde::{Deserialize, Serialize};

use crate::clamp_tick_interval;
use crate::consts::DEFAULT_TICK_INTERVAL_MS;

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Gameplay ===
    /// Logic tick period in ms (lower is faster)
    pub tick_interval_ms: f64,

    // === Audio ===
    /// Sound effects on/off
    pub sound_enabled: bool,
    /// Master volume (0.0 - 1.0)
    pub master_volume: f32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            tick_interval_ms: DEFAULT_TICK_INTERVAL_MS,
            sound_enabled: true,
            master_volume: 1.0,
        }
    }
}

impl Settings {
    /// Decode settings, normalizing out-of-range values
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let mut settings: Settings = serde_json::from_str(json)?;
        settings.tick_interval_ms =
            clamp_tick_interval(settings.tick_interval_ms).unwrap_or(DEFAULT_TICK_INTERVAL_MS);
        settings.master_volume = settings.master_volume.clamp(0.0, 1.0);
        Ok(settings)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Decode settings or fall back to defaults
    pub fn from_json_or_default(json: &str) -> Self {
        match Self::from_json(json) {
            Ok(settings) => {
                log::info!("Loaded settings");
                settings
            }
            Err(e) => {
                log::warn!("Bad settings ({}), using defaults", e);
                Self::default()
            }
        }
    }

    /// Set the tick period; non-finite values are ignored, the rest clamped
    pub fn set_tick_interval_ms(&mut self, ms: f64) {
        if let Some(ms) = clamp_tick_interval(ms) {
            self.tick_interval_ms = ms;
        }
    }

    /// Apply raw text from a speed slider. Returns false if it was not a number.
    pub fn apply_speed_input(&mut self, raw: &str) -> bool {
        match raw.trim().parse::<f64>() {
            Ok(ms) if ms.is_finite() => {
                self.set_tick_interval_ms(ms);
                true
            }
            _ => false,
        }
    }

    /// Effective effect volume (0 when muted)
    pub fn effective_volume(&self) -> f32 {
        if self.sound_enabled {
            self.master_volume.clamp(0.0, 1.0)
        } else {
            0.0
        }
    }
}
