//! Render boundary
//!
//! The game never talks to a graphics API. It hands a [`Frame`] snapshot to
//! whatever implements [`Canvas`]: a platform surface, or the in-memory
//! [`DrawList`] used by tests and the headless runner.

pub mod draw_list;
pub mod frame;

pub use draw_list::{DrawCommand, DrawList};
pub use frame::Frame;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::Color;

/// Horizontal anchor for overlay text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TextAlign {
    #[default]
    Left,
    Center,
    Right,
}

/// Text paint settings
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TextStyle {
    pub color: Color,
    pub size: f32,
    pub align: TextAlign,
}

impl Default for TextStyle {
    fn default() -> Self {
        Self {
            color: Color::BLACK,
            size: 30.0,
            align: TextAlign::Left,
        }
    }
}

/// A surface that can draw one batch at a time
///
/// Callers bracket every batch with `begin_frame` / `present`. When
/// `begin_frame` returns false the surface is unavailable and the frame is
/// dropped without calling `present`.
pub trait Canvas {
    fn begin_frame(&mut self) -> bool;
    fn clear(&mut self, color: Color);
    fn draw_circle(&mut self, center: Vec2, radius: f32, color: Color);
    fn draw_text(&mut self, text: &str, pos: Vec2, style: &TextStyle);
    fn present(&mut self);
}
