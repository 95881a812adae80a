//! High score leaderboard
//!
//! Tracks the top 10 finished sessions in memory. Storing it is up to the host.

use serde::{Deserialize, Serialize};

/// Maximum number of high scores to keep
pub const MAX_HIGH_SCORES: usize = 10;

/// A single high score entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HighScoreEntry {
    /// Final score
    pub score: u64,
    /// Wave reached
    pub wave: u32,
    /// Unix timestamp (ms) when achieved
    pub timestamp_ms: u64,
}

/// High score leaderboard, best first
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct HighScores {
    pub entries: Vec<HighScoreEntry>,
}

impl HighScores {
    pub fn new() -> Self {
        Self::default()
    }

    /// Index a score would be inserted at, below any equal scores.
    /// Zero-point sessions are never recorded.
    fn slot_for(&self, score: u64) -> Option<usize> {
        if score == 0 {
            return None;
        }
        let slot = self.entries.partition_point(|e| e.score >= score);
        (slot < MAX_HIGH_SCORES).then_some(slot)
    }

    pub fn qualifies(&self, score: u64) -> bool {
        self.slot_for(score).is_some()
    }

    /// 1-indexed rank a score would get
    pub fn potential_rank(&self, score: u64) -> Option<usize> {
        self.slot_for(score).map(|slot| slot + 1)
    }

    /// Record a finished session and return its rank
    pub fn add_score(&mut self, score: u64, wave: u32, timestamp_ms: u64) -> Option<usize> {
        let slot = self.slot_for(score)?;
        self.entries.insert(
            slot,
            HighScoreEntry {
                score,
                wave,
                timestamp_ms,
            },
        );
        self.entries.truncate(MAX_HIGH_SCORES);
        log::debug!("Wave {} session with {} points ranked #{}", wave, score, slot + 1);
        Some(slot + 1)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Best score so far
    pub fn top_score(&self) -> Option<u64> {
        self.entries.first().map(|e| e.score)
    }
}
