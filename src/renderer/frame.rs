//! Immutable render snapshot

use glam::Vec2;

use super::{Canvas, TextStyle};
use crate::Color;
use crate::sim::{Bille, Enemy, Entity, GamePhase, GameState};

/// HUD text inset from the left and bottom edges
const HUD_MARGIN: f32 = 20.0;
/// Vertical distance between HUD lines
const HUD_LINE_SPACING: f32 = 40.0;

/// Everything the render pass needs, copied out under the session lock
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    pub player: Bille,
    pub enemies: Vec<Enemy>,
    pub wave: u32,
    pub score: u64,
    pub phase: GamePhase,
    /// Whole seconds left in the wave (not shown when <= 0)
    pub time_left_secs: i64,
    pub screen_width: u32,
    pub screen_height: u32,
}

impl Frame {
    pub fn capture(state: &GameState, now_ms: u64) -> Self {
        Self {
            player: state.player.clone(),
            enemies: state.enemies().to_vec(),
            wave: state.wave().index,
            score: state.score(),
            phase: state.phase(),
            time_left_secs: state.time_left_secs(now_ms),
            screen_width: state.bounds().width(),
            screen_height: state.bounds().height(),
        }
    }

    /// Overlay lines with their baseline positions
    pub fn hud_lines(&self) -> Vec<(String, Vec2)> {
        let bottom = self.screen_height as f32 - HUD_MARGIN;
        let mut lines = vec![(format!("Wave: {}", self.wave), Vec2::new(HUD_MARGIN, bottom))];
        if self.time_left_secs > 0 {
            lines.push((
                format!("Time left: {}s", self.time_left_secs),
                Vec2::new(HUD_MARGIN, bottom - HUD_LINE_SPACING),
            ));
        }
        lines
    }

    /// Draw one full batch. Returns false if the canvas refused the frame.
    pub fn draw(&self, canvas: &mut dyn Canvas) -> bool {
        if !canvas.begin_frame() {
            return false;
        }

        canvas.clear(Color::WHITE);

        let entities = std::iter::once(&self.player as &dyn Entity)
            .chain(self.enemies.iter().map(|e| e as &dyn Entity));
        for entity in entities {
            entity.draw(canvas);
        }

        let style = TextStyle::default();
        for (text, pos) in self.hud_lines() {
            canvas.draw_text(&text, pos, &style);
        }

        canvas.present();
        true
    }
}
