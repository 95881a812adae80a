//! Simulation module
//!
//! All gameplay logic lives here. Nothing in this module touches threads,
//! clocks or rendering backends:
//! - Time comes in as a millisecond timestamp per tick
//! - Randomness comes from the session's seeded RNG
//! - Enemies are updated in roster order

pub mod collision;
pub mod enemy;
pub mod entity;
pub mod events;
pub mod state;
pub mod tick;
pub mod wave;

pub use collision::{circles_overlap, collides};
pub use enemy::Enemy;
pub use entity::{Bille, Bounds, Entity};
pub use events::{GameEvent, ScoreListener};
pub use state::{GamePhase, GameState};
pub use tick::{TickInput, start_next_wave, tick};
pub use wave::{Edge, WaveSpec, spawn_enemies, spawn_point, wave_duration_ms};
