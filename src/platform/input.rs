//! Tilt input mailbox
//!
//! The sensor callback and the game loop run on different threads. Instead of
//! sharing the player ball, the sensor writes the latest velocity into a single
//! atomic word and the loop takes it at the start of each tick. Last writer
//! wins; readings in between ticks are simply superseded.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};

use glam::Vec2;

use crate::consts::TILT_SENSITIVITY;

#[derive(Debug, Default)]
struct Mailbox {
    /// `vx` bits in the high half, `vy` bits in the low half
    packed: AtomicU64,
    fresh: AtomicBool,
}

/// Cloneable handle to the player's velocity input
#[derive(Debug, Clone)]
pub struct TiltInput {
    mailbox: Arc<Mailbox>,
    sensitivity: f32,
}

impl Default for TiltInput {
    fn default() -> Self {
        Self::new(TILT_SENSITIVITY)
    }
}

impl TiltInput {
    pub fn new(sensitivity: f32) -> Self {
        Self {
            mailbox: Arc::new(Mailbox::default()),
            sensitivity,
        }
    }

    pub fn sensitivity(&self) -> f32 {
        self.sensitivity
    }

    /// Publish a velocity for the next tick
    pub fn set_velocity(&self, vx: f32, vy: f32) {
        let packed = ((vx.to_bits() as u64) << 32) | vy.to_bits() as u64;
        self.mailbox.packed.store(packed, Ordering::Release);
        self.mailbox.fresh.store(true, Ordering::Release);
    }

    /// Map a raw accelerometer reading to a velocity
    ///
    /// Tilting right reports negative x, so x is flipped; y is taken as is.
    pub fn on_accelerometer(&self, ax: f32, ay: f32) {
        self.set_velocity(-ax * self.sensitivity, ay * self.sensitivity);
    }

    /// Take the newest velocity if one arrived since the last call
    pub fn take(&self) -> Option<Vec2> {
        if !self.mailbox.fresh.swap(false, Ordering::AcqRel) {
            return None;
        }
        let packed = self.mailbox.packed.load(Ordering::Acquire);
        let vx = f32::from_bits((packed >> 32) as u32);
        let vy = f32::from_bits(packed as u32);
        Some(Vec2::new(vx, vy))
    }
}
