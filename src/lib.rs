//! Tilt Dodge - steer a ball by tilting the device and survive the waves
//!
//! Core modules:
//! - `sim`: Simulation (entities, pursuit, waves, collisions, session state)
//! - `engine`: Fixed-interval game loop with lifecycle controls
//! - `renderer`: Render boundary (canvas trait, frame snapshots, HUD)
//! - `platform`: Clock and tilt input plumbing
//! - `settings`: Data-driven configuration

pub mod engine;
pub mod error;
pub mod highscores;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use engine::Game;
pub use error::{ConfigError, GameError};
pub use highscores::HighScores;
pub use settings::Settings;

use serde::{Deserialize, Serialize};

/// Game configuration constants
pub mod consts {
    /// Loop interval in milliseconds (~60 Hz)
    pub const TICK_INTERVAL_MS: u64 = 16;

    /// Player ball defaults
    pub const PLAYER_RADIUS: u32 = 10;
    pub const PLAYER_START_X: f32 = 50.0;
    pub const PLAYER_START_Y: f32 = 50.0;
    /// Velocity multiplier applied on every update
    pub const DEFAULT_DELTA: f32 = 3.0;

    /// Enemy defaults (before wave scaling)
    pub const ENEMY_BASE_RADIUS: u32 = 50;
    /// Per-axis step in pixels per tick
    pub const ENEMY_BASE_SPEED: f32 = 6.0;
    pub const ENEMY_START_X: f32 = 100.0;
    pub const ENEMY_START_Y: f32 = 100.0;

    /// Wave timing
    pub const BASE_WAVE_DURATION_MS: u64 = 10_000;
    pub const WAVE_DURATION_STEP_MS: u64 = 500;
    pub const MAX_WAVE_DURATION_CUT_MS: u64 = 7_000;
    pub const MIN_WAVE_DURATION_MS: u64 = 3_000;
    /// Bonus per wave index when a wave is survived
    pub const WAVE_BONUS: u64 = 100;

    /// Survival score interval
    pub const SCORE_INTERVAL_MS: u64 = 1_000;

    /// Accelerometer to velocity multiplier
    pub const TILT_SENSITIVITY: f32 = 1.5;
}

/// RGBA color tag carried by every ball
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const RED: Color = Color::rgb(255, 0, 0);
    pub const BLUE: Color = Color::rgb(0, 0, 255);
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const BLACK: Color = Color::rgb(0, 0, 0);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Unpack a packed `0xAARRGGBB` value
    pub const fn from_argb(argb: u32) -> Self {
        Self {
            a: (argb >> 24) as u8,
            r: (argb >> 16) as u8,
            g: (argb >> 8) as u8,
            b: argb as u8,
        }
    }

    pub const fn to_argb(self) -> u32 {
        ((self.a as u32) << 24) | ((self.r as u32) << 16) | ((self.g as u32) << 8) | self.b as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_argb_packing() {
        let c = Color::from_argb(0xFF12_3456);
        assert_eq!(c, Color { r: 0x12, g: 0x34, b: 0x56, a: 0xFF });
        assert_eq!(c.to_argb(), 0xFF12_3456);
        assert_eq!(Color::BLUE.to_argb(), 0xFF00_00FF);
    }
}
