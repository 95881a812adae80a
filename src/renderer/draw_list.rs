//! In-memory canvas that records draw calls

use glam::Vec2;

use super::{Canvas, TextStyle};
use crate::Color;

/// A recorded draw call
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Clear(Color),
    Circle { center: Vec2, radius: f32, color: Color },
    Text { text: String, pos: Vec2, style: TextStyle },
    Present,
}

/// Canvas that keeps the most recent frame's commands
#[derive(Debug, Clone)]
pub struct DrawList {
    commands: Vec<DrawCommand>,
    presented: u64,
    available: bool,
}

impl Default for DrawList {
    fn default() -> Self {
        Self {
            commands: Vec::new(),
            presented: 0,
            available: true,
        }
    }
}

impl DrawList {
    /// A surface that is not ready yet; every frame is refused
    pub fn unavailable() -> Self {
        Self {
            available: false,
            ..Self::default()
        }
    }

    pub fn set_available(&mut self, available: bool) {
        self.available = available;
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn frames_presented(&self) -> u64 {
        self.presented
    }

    pub fn contains_text(&self, needle: &str) -> bool {
        self.commands
            .iter()
            .any(|c| matches!(c, DrawCommand::Text { text, .. } if text == needle))
    }

    /// Number of circles in the current frame
    pub fn circle_count(&self) -> usize {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Circle { .. }))
            .count()
    }
}

impl Canvas for DrawList {
    fn begin_frame(&mut self) -> bool {
        if !self.available {
            return false;
        }
        self.commands.clear();
        true
    }

    fn clear(&mut self, color: Color) {
        self.commands.push(DrawCommand::Clear(color));
    }

    fn draw_circle(&mut self, center: Vec2, radius: f32, color: Color) {
        self.commands.push(DrawCommand::Circle { center, radius, color });
    }

    fn draw_text(&mut self, text: &str, pos: Vec2, style: &TextStyle) {
        self.commands.push(DrawCommand::Text {
            text: text.to_string(),
            pos,
            style: *style,
        });
    }

    fn present(&mut self) {
        self.commands.push(DrawCommand::Present);
        self.presented += 1;
    }
}
