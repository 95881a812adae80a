//! Session state
//!
//! Everything one playthrough needs lives here. The engine owns a single
//! `GameState` behind its lock and is the only mutator.

use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::enemy::Enemy;
use super::entity::{Bille, Bounds};
use super::events::ScoreListener;
use super::wave::WaveSpec;
use crate::error::GameError;

/// Current phase of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Constructed, never started
    Idle,
    /// Ticks advance the simulation
    Running,
    /// Frozen until resumed
    Paused,
    /// A collision ended the run; only `start` leaves this phase
    GameOver,
}

/// Complete session state
#[derive(Debug, Clone)]
pub struct GameState {
    /// Player ball; persists across waves and restarts
    pub player: Bille,
    pub(crate) enemies: Vec<Enemy>,
    pub(crate) bounds: Bounds,
    pub(crate) phase: GamePhase,
    pub(crate) score: u64,
    /// Current wave parameters (index 0 before the first start)
    pub(crate) wave: WaveSpec,
    pub(crate) wave_started_ms: u64,
    /// Last time the survival point was awarded
    pub(crate) score_clock_ms: u64,
    pub(crate) paused_at_ms: Option<u64>,
    /// Ticks simulated since the last start
    pub(crate) time_ticks: u64,
    pub(crate) rng: Pcg32,
}

impl GameState {
    /// Create an idle session with the default player
    pub fn new(bounds: Bounds, seed: u64) -> Result<Self, GameError> {
        Self::with_player(bounds, Bille::player(), seed)
    }

    pub fn with_player(bounds: Bounds, player: Bille, seed: u64) -> Result<Self, GameError> {
        check_fit(bounds, player.radius)?;
        Ok(Self {
            player,
            enemies: Vec::new(),
            bounds,
            phase: GamePhase::Idle,
            score: 0,
            wave: WaveSpec::for_wave(0),
            wave_started_ms: 0,
            score_clock_ms: 0,
            paused_at_ms: None,
            time_ticks: 0,
            rng: Pcg32::seed_from_u64(seed),
        })
    }

    /// Reset score, timers and enemies, then enter wave 1
    pub fn start(&mut self, now_ms: u64, listener: &mut dyn ScoreListener) {
        self.score = 0;
        self.score_clock_ms = now_ms;
        self.wave_started_ms = now_ms;
        self.wave = WaveSpec::for_wave(0);
        self.enemies.clear();
        self.paused_at_ms = None;
        self.time_ticks = 0;
        super::tick::start_next_wave(self, now_ms, listener);
        self.phase = GamePhase::Running;
        log::info!(
            "Session started on {}x{} screen",
            self.bounds.width(),
            self.bounds.height()
        );
    }

    /// Freeze the session. Returns false if it was not running.
    pub fn pause(&mut self, now_ms: u64) -> bool {
        if self.phase != GamePhase::Running {
            return false;
        }
        self.phase = GamePhase::Paused;
        self.paused_at_ms = Some(now_ms);
        true
    }

    /// Continue a paused session with its timers shifted past the pause.
    /// Returns false (and does nothing) unless the session was paused.
    pub fn resume(&mut self, now_ms: u64) -> bool {
        if self.phase != GamePhase::Paused {
            return false;
        }
        if let Some(paused_at) = self.paused_at_ms.take() {
            let frozen = now_ms.saturating_sub(paused_at);
            self.wave_started_ms += frozen;
            self.score_clock_ms += frozen;
        }
        self.phase = GamePhase::Running;
        true
    }

    /// Change the screen size; the player must still fit
    pub fn resize(&mut self, bounds: Bounds) -> Result<(), GameError> {
        check_fit(bounds, self.player.radius)?;
        self.bounds = bounds;
        Ok(())
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn is_running(&self) -> bool {
        self.phase == GamePhase::Running
    }

    pub fn score(&self) -> u64 {
        self.score
    }

    pub fn wave(&self) -> &WaveSpec {
        &self.wave
    }

    pub fn enemies(&self) -> &[Enemy] {
        &self.enemies
    }

    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    pub fn time_ticks(&self) -> u64 {
        self.time_ticks
    }

    /// Whole seconds left in the current wave; may be zero or negative
    pub fn time_left_secs(&self, now_ms: u64) -> i64 {
        let now_ms = self.paused_at_ms.unwrap_or(now_ms);
        let elapsed = now_ms as i64 - self.wave_started_ms as i64;
        (self.wave.duration_ms as i64 - elapsed) / 1000
    }
}

fn check_fit(bounds: Bounds, radius: u32) -> Result<(), GameError> {
    if radius == 0 {
        return Err(GameError::InvalidRadius { radius });
    }
    if !bounds.fits(radius) {
        return Err(GameError::ScreenTooSmall {
            width: bounds.width(),
            height: bounds.height(),
            radius,
        });
    }
    Ok(())
}
