//! Platform abstraction layer
//!
//! Handles the host-facing edges of the game:
//! - Time (monotonic millisecond clock, injectable for tests)
//! - Input (tilt velocity written from the sensor thread)

pub mod input;
pub mod time;

pub use input::TiltInput;
pub use time::{Clock, ManualClock, SystemClock};
