//! Game settings
//!
//! Loaded from an optional JSON file; every field falls back to its default.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::Color;
use crate::consts::*;
use crate::error::ConfigError;

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Screen ===
    pub screen_width: u32,
    pub screen_height: u32,

    // === Loop ===
    /// Delay between ticks in milliseconds
    pub tick_interval_ms: u64,

    // === Controls ===
    /// Accelerometer reading to velocity multiplier
    pub tilt_sensitivity: f32,

    // === Player ===
    pub player_radius: u32,
    /// Player ball color
    pub player_skin: Color,

    /// Fixed RNG seed for reproducible spawns (random when absent)
    pub seed: Option<u64>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            screen_width: 1080,
            screen_height: 1920,
            tick_interval_ms: TICK_INTERVAL_MS,
            tilt_sensitivity: TILT_SENSITIVITY,
            player_radius: PLAYER_RADIUS,
            player_skin: Color::RED,
            seed: None,
        }
    }
}

impl Settings {
    /// Read and validate settings from a JSON file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let json = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let settings: Settings = serde_json::from_str(&json).map_err(|source| ConfigError::Json {
            path: path.to_path_buf(),
            source,
        })?;
        settings.validate()?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    /// Reject settings the simulation cannot run with
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.screen_width == 0 || self.screen_height == 0 {
            return Err(ConfigError::Invalid(format!(
                "screen {}x{} has a zero dimension",
                self.screen_width, self.screen_height
            )));
        }
        if self.player_radius == 0 {
            return Err(ConfigError::Invalid("player_radius must be at least 1".into()));
        }
        let diameter = self.player_radius.saturating_mul(2);
        if diameter > self.screen_width || diameter > self.screen_height {
            return Err(ConfigError::Invalid(format!(
                "screen {}x{} cannot fit a player of radius {}",
                self.screen_width, self.screen_height, self.player_radius
            )));
        }
        if self.tick_interval_ms == 0 {
            return Err(ConfigError::Invalid("tick_interval_ms must be positive".into()));
        }
        if !self.tilt_sensitivity.is_finite() || self.tilt_sensitivity == 0.0 {
            return Err(ConfigError::Invalid(
                "tilt_sensitivity must be finite and non-zero".into(),
            ));
        }
        Ok(())
    }

    /// Configured seed, or a fresh random one
    pub fn seed_or_random(&self) -> u64 {
        self.seed.unwrap_or_else(rand::random)
    }
}
