//! Error types for construction and configuration
//!
//! The simulation itself never fails: collisions end a session through a normal
//! phase transition. Only geometry validation, config loading and spawning the
//! loop thread can go wrong.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while building or driving a game
#[derive(Debug, Error)]
pub enum GameError {
    #[error("invalid screen bounds {width}x{height}: both dimensions must be non-zero")]
    InvalidBounds { width: u32, height: u32 },

    #[error("invalid radius {radius}: must be at least 1 pixel")]
    InvalidRadius { radius: u32 },

    #[error("screen {width}x{height} cannot fit a ball of radius {radius}")]
    ScreenTooSmall { width: u32, height: u32, radius: u32 },

    #[error("failed to spawn game loop thread")]
    Spawn(#[source] io::Error),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Errors raised while loading [`Settings`](crate::Settings)
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to parse config {path}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid config: {0}")]
    Invalid(String),
}
