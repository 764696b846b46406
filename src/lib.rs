//! Sweet Runner - a one-knob lane dodging game for a 16x2 character display
//!
//! Core modules:
//! - `sim`: Fixed-tick simulation (obstacles, difficulty, collisions, phases)
//! - `renderer`: Character display layout and sprite tables
//! - `audio`: Tunes and the sound sink seam
//! - `platform`: Terminal front-end for native play
//! - `settings`: Timing and input configuration

pub mod audio;
pub mod error;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use error::ConfigError;
pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    /// Lanes across the display (one per character column)
    pub const COLUMN_COUNT: usize = 16;
    /// Display rows: obstacles approach on row 0, the runner lives on row 1
    pub const ROW_COUNT: usize = 2;
    pub const PLAYER_ROW: usize = 1;

    /// Main simulation tick period
    pub const TICK_MS: u64 = 150;
    /// Knob sampling period (independent of the tick)
    pub const SAMPLE_MS: u64 = 150;
    /// Start-gesture poll period on the attract screen
    pub const ATTRACT_POLL_MS: u64 = 500;
    /// Delay between power-on and the first attract screen
    pub const STARTUP_DELAY_MS: u64 = 3000;
    /// How long the score stays up before returning to attract
    pub const GAME_OVER_DELAY_MS: u64 = 1500;

    /// Knob travel (normalized) needed to start a round
    pub const START_THRESHOLD: f32 = 0.2;
    /// Full-scale reading of a 10-bit ADC
    pub const MAX_RAW_VALUE: u16 = 1023;

    /// Ticks between difficulty steps
    pub const LEVEL_PERIOD: u32 = 40;
    pub const INITIAL_BLOCK_PERIOD: u32 = 5;
    pub const INITIAL_BLOCKS_PER_SPAWN: u32 = 1;

    /// Obstacle animation length; an obstacle is removed when its age hits this
    pub const OBSTACLE_LIFETIME: u8 = 11;
    /// First age at which an obstacle overlaps the runner's row
    pub const LETHAL_FROM_AGE: u8 = 5;

    /// Maximum events fired per pump before missed periods are dropped
    pub const MAX_CATCHUP_EVENTS: u32 = 8;
}

/// Clamp a normalized value to [0, 1]
#[inline]
pub fn clamp_unit(value: f32) -> f32 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, 1.0)
    }
}
