//! Timing and input settings
//!
//! Loaded from an optional JSON file at startup; any missing field keeps its
//! default. Lane count and difficulty pacing are fixed and live in `consts`.

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::ConfigError;
use crate::consts::*;

/// Game settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Timing ===
    /// Main simulation tick period (ms)
    pub tick_ms: u64,
    /// Knob sampling period (ms)
    pub sample_ms: u64,
    /// Attract-screen gesture poll period (ms)
    pub attract_poll_ms: u64,
    /// Power-on delay before the first attract screen (ms)
    pub startup_delay_ms: u64,
    /// Time the score stays on screen (ms)
    pub game_over_delay_ms: u64,

    // === Input ===
    /// Normalized knob travel needed to start a round
    pub start_threshold: f32,
    /// Full-scale raw reading of the input source
    pub max_raw_value: u16,

    // === Run ===
    /// RNG seed; a random one is drawn when unset
    pub seed: Option<u64>,
    /// Silence all tunes
    pub muted: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            tick_ms: TICK_MS,
            sample_ms: SAMPLE_MS,
            attract_poll_ms: ATTRACT_POLL_MS,
            startup_delay_ms: STARTUP_DELAY_MS,
            game_over_delay_ms: GAME_OVER_DELAY_MS,

            start_threshold: START_THRESHOLD,
            max_raw_value: MAX_RAW_VALUE,

            seed: None,
            muted: false,
        }
    }
}

impl Settings {
    /// Parse settings from a JSON document
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let settings: Self = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Load settings from a JSON file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let settings = Self::from_json(&json)?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    /// Check construction-time preconditions
    pub fn validate(&self) -> Result<(), ConfigError> {
        let periods = [
            ("tick_ms", self.tick_ms),
            ("sample_ms", self.sample_ms),
            ("attract_poll_ms", self.attract_poll_ms),
        ];
        for (name, value) in periods {
            if value == 0 {
                return Err(ConfigError::ZeroPeriod { name });
            }
        }
        if !(0.0..1.0).contains(&self.start_threshold) {
            return Err(ConfigError::Threshold(self.start_threshold));
        }
        if self.max_raw_value == 0 {
            return Err(ConfigError::ZeroRawRange);
        }
        Ok(())
    }

    /// Seed to use for this run (drawn fresh when not configured)
    pub fn resolved_seed(&self) -> u64 {
        self.seed.unwrap_or_else(rand::random)
    }

    pub fn tick_period(&self) -> Duration {
        Duration::from_millis(self.tick_ms)
    }

    pub fn sample_period(&self) -> Duration {
        Duration::from_millis(self.sample_ms)
    }

    pub fn attract_poll_period(&self) -> Duration {
        Duration::from_millis(self.attract_poll_ms)
    }

    pub fn startup_delay(&self) -> Duration {
        Duration::from_millis(self.startup_delay_ms)
    }

    pub fn game_over_delay(&self) -> Duration {
        Duration::from_millis(self.game_over_delay_ms)
    }
}
