//! Circular bodies and screen bounds
//!
//! `Bille` is the base body shared by the player and enemies. Its update
//! integrates velocity and keeps the whole circle on screen.

use glam::Vec2;

use crate::Color;
use crate::consts::*;
use crate::error::GameError;
use crate::renderer::Canvas;

/// Screen dimensions in pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bounds {
    width: u32,
    height: u32,
}

impl Bounds {
    /// Rejects zero-sized screens
    pub fn new(width: u32, height: u32) -> Result<Self, GameError> {
        if width == 0 || height == 0 {
            return Err(GameError::InvalidBounds { width, height });
        }
        Ok(Self { width, height })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Whether a circle of `radius` fits inside with room to spare
    pub fn fits(&self, radius: u32) -> bool {
        radius.saturating_mul(2) <= self.width && radius.saturating_mul(2) <= self.height
    }
}

/// Anything the render pass can draw
pub trait Entity {
    fn body(&self) -> &Bille;

    fn draw(&self, canvas: &mut dyn Canvas) {
        let body = self.body();
        canvas.draw_circle(body.pos, body.radius as f32, body.color);
    }
}

/// A ball: position, velocity, radius, color
#[derive(Debug, Clone, PartialEq)]
pub struct Bille {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: u32,
    pub color: Color,
    /// Velocity multiplier applied on each update
    pub delta: f32,
}

impl Bille {
    /// Red ball at the default start position
    pub fn new(radius: u32) -> Result<Self, GameError> {
        if radius == 0 {
            return Err(GameError::InvalidRadius { radius });
        }
        Ok(Self::with_radius(radius))
    }

    /// The player's ball with default radius
    pub fn player() -> Self {
        Self::with_radius(PLAYER_RADIUS)
    }

    pub(crate) fn with_radius(radius: u32) -> Self {
        Self {
            pos: Vec2::new(PLAYER_START_X, PLAYER_START_Y),
            vel: Vec2::ZERO,
            radius,
            color: Color::RED,
            delta: DEFAULT_DELTA,
        }
    }

    pub fn set_position(&mut self, x: f32, y: f32) {
        self.pos = Vec2::new(x, y);
    }

    pub fn set_velocity(&mut self, vx: f32, vy: f32) {
        self.vel = Vec2::new(vx, vy);
    }

    /// Integrate velocity, then clamp the circle inside the screen
    pub fn update(&mut self, bounds: Bounds) {
        self.pos += self.vel * self.delta;

        let r = self.radius as f32;
        let w = bounds.width() as f32;
        let h = bounds.height() as f32;

        if self.pos.x - r < 0.0 {
            self.pos.x = r;
        } else if self.pos.x + r > w {
            self.pos.x = w - r;
        }

        if self.pos.y - r < 0.0 {
            self.pos.y = r;
        } else if self.pos.y + r > h {
            self.pos.y = h - r;
        }
    }
}

impl Entity for Bille {
    fn body(&self) -> &Bille {
        self
    }
}
