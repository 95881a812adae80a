//! Outbound score notifications

use std::sync::mpsc::Sender;

use serde::{Deserialize, Serialize};

/// Something the session reports to the outside world
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    ScoreUpdated(u64),
    GameOver(u64),
}

/// Receives score notifications from inside the tick
///
/// Calls happen while the session lock is held: implementations must return
/// quickly and must not call back into the engine.
pub trait ScoreListener {
    fn on_score_updated(&mut self, score: u64);
    fn on_game_over(&mut self, final_score: u64);
}

/// Ignore everything
impl ScoreListener for () {
    fn on_score_updated(&mut self, _score: u64) {}
    fn on_game_over(&mut self, _final_score: u64) {}
}

/// Record events in order (handy for tests and replays)
impl ScoreListener for Vec<GameEvent> {
    fn on_score_updated(&mut self, score: u64) {
        self.push(GameEvent::ScoreUpdated(score));
    }

    fn on_game_over(&mut self, final_score: u64) {
        self.push(GameEvent::GameOver(final_score));
    }
}

/// Forward to another thread; a hung-up receiver is not an error for the game
impl ScoreListener for Sender<GameEvent> {
    fn on_score_updated(&mut self, score: u64) {
        let _ = self.send(GameEvent::ScoreUpdated(score));
    }

    fn on_game_over(&mut self, final_score: u64) {
        if self.send(GameEvent::GameOver(final_score)).is_err() {
            log::warn!("Game over at {} but nobody is listening", final_score);
        }
    }
}
