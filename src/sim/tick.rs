//! Per-tick simulation step
//!
//! Wave expiry, survival scoring, movement and collision all happen here, in
//! that order, once per loop interval.

use glam::Vec2;

use super::collision::circles_overlap;
use super::events::ScoreListener;
use super::state::{GamePhase, GameState};
use super::wave::{WaveSpec, spawn_enemies};
use crate::consts::*;

/// Inputs sampled for a single tick
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Latest tilt velocity, if the sensor reported since the last tick
    pub tilt: Option<Vec2>,
}

/// Advance the session to `now_ms`
///
/// Does nothing unless the session is running, so ticks that race with a
/// pause or arrive after game over leave the state untouched.
pub fn tick(state: &mut GameState, input: &TickInput, now_ms: u64, listener: &mut dyn ScoreListener) {
    if state.phase != GamePhase::Running {
        return;
    }

    state.time_ticks += 1;

    if let Some(tilt) = input.tilt {
        state.player.vel = tilt;
    }

    // Surviving the wave pays a bonus and brings the next one immediately
    if now_ms.saturating_sub(state.wave_started_ms) > state.wave.duration_ms {
        state.score += state.wave.index as u64 * WAVE_BONUS;
        log::info!(
            "Wave {} survived, score {}",
            state.wave.index,
            state.score
        );
        listener.on_score_updated(state.score);
        start_next_wave(state, now_ms, listener);
    }

    if now_ms.saturating_sub(state.score_clock_ms) > SCORE_INTERVAL_MS {
        state.score += 1;
        state.score_clock_ms = now_ms;
        listener.on_score_updated(state.score);
    }

    state.player.update(state.bounds);

    let player = &state.player;
    let mut hit = None;
    for (i, enemy) in state.enemies.iter_mut().enumerate() {
        enemy.update(player);
        if circles_overlap(enemy.pos(), enemy.radius(), player.pos, player.radius) {
            hit = Some(i);
            break;
        }
    }

    if let Some(i) = hit {
        state.phase = GamePhase::GameOver;
        log::info!(
            "Game over: enemy {} caught the player in wave {} with score {}",
            i,
            state.wave.index,
            state.score
        );
        listener.on_game_over(state.score);
    }
}

/// Replace the enemy roster with the next, harder wave
pub fn start_next_wave(state: &mut GameState, now_ms: u64, listener: &mut dyn ScoreListener) {
    let spec = WaveSpec::for_wave(state.wave.index + 1);
    state.wave = spec;
    state.wave_started_ms = now_ms;

    listener.on_score_updated(state.score);

    state.enemies = spawn_enemies(&spec, state.bounds, &mut state.rng);
    log::info!(
        "Wave {}: {} enemies for {}ms",
        spec.index,
        spec.enemy_count,
        spec.duration_ms
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::{Bounds, GameEvent};
    use proptest::prelude::*;

    fn centered_session(seed: u64) -> GameState {
        let mut state = GameState::new(Bounds::new(1000, 1000).unwrap(), seed).unwrap();
        state.start(0, &mut ());
        state.player.set_position(500.0, 500.0);
        state
    }

    #[test]
    fn test_idle_session_does_not_tick() {
        let mut state = GameState::new(Bounds::new(1000, 1000).unwrap(), 3).unwrap();
        let mut events = Vec::new();
        tick(&mut state, &TickInput::default(), 5_000, &mut events);
        assert_eq!(state.time_ticks(), 0);
        assert!(events.is_empty());
    }

    #[test]
    fn test_survival_point_each_second() {
        let mut state = centered_session(1);
        let mut events = Vec::new();

        tick(&mut state, &TickInput::default(), 1_000, &mut events);
        assert_eq!(state.score(), 0, "exactly one second is not enough");

        tick(&mut state, &TickInput::default(), 1_001, &mut events);
        assert_eq!(state.score(), 1);
        assert_eq!(events, vec![GameEvent::ScoreUpdated(1)]);

        tick(&mut state, &TickInput::default(), 2_001, &mut events);
        assert_eq!(state.score(), 1);
    }

    #[test]
    fn test_wave_one_to_two_scenario() {
        let mut state = centered_session(2024);
        let mut events = Vec::new();

        for second in 1..=9 {
            tick(&mut state, &TickInput::default(), second * 1_001, &mut events);
        }
        assert_eq!(state.score(), 9);
        assert_eq!(state.wave().index, 1);

        tick(&mut state, &TickInput::default(), 9_501, &mut events);
        assert_eq!(state.phase(), GamePhase::Running);
        assert_eq!(state.wave().index, 2);
        assert_eq!(state.score(), 9 + 100);
        assert_eq!(state.enemies().len(), 3);
        assert!(state.enemies().iter().all(|e| e.radius() == 60));
        assert_eq!(state.wave_started_ms, 9_501);
        assert_eq!(state.wave().duration_ms, 9_000);
        // Bonus notification, then the wave-start refresh
        assert_eq!(
            &events[events.len() - 2..],
            &[GameEvent::ScoreUpdated(109), GameEvent::ScoreUpdated(109)]
        );
    }

    #[test]
    fn test_tilt_moves_player() {
        let mut state = centered_session(5);
        let input = TickInput {
            tilt: Some(Vec2::new(1.5, -3.0)),
        };
        tick(&mut state, &input, 16, &mut ());
        assert_eq!(state.player.vel, Vec2::new(1.5, -3.0));
        assert_eq!(state.player.pos, Vec2::new(504.5, 491.0));

        // No new reading: keep drifting with the last velocity
        tick(&mut state, &TickInput::default(), 32, &mut ());
        assert_eq!(state.player.pos, Vec2::new(509.0, 482.0));
    }

    #[test]
    fn test_collision_ends_game_and_freezes() {
        let mut state = centered_session(9);
        let mut events = Vec::new();
        let target = state.player.pos;
        state.enemies[0].body_mut().pos = target + Vec2::new(40.0, 0.0);

        tick(&mut state, &TickInput::default(), 16, &mut events);
        assert_eq!(state.phase(), GamePhase::GameOver);
        assert_eq!(events.last(), Some(&GameEvent::GameOver(0)));

        let frozen = state.clone();
        for t in 1..50 {
            tick(&mut state, &TickInput { tilt: Some(Vec2::ONE) }, 16 + t * 5_000, &mut events);
        }
        assert_eq!(state.score(), frozen.score());
        assert_eq!(state.player, frozen.player);
        assert_eq!(state.enemies(), frozen.enemies());
        assert_eq!(state.time_ticks(), frozen.time_ticks());
        assert_eq!(events.len(), 1);
    }

    #[test]
    fn test_giant_enemy_ends_game() {
        let mut state = centered_session(17);
        state.enemies[0].body_mut().radius = u32::MAX;

        tick(&mut state, &TickInput::default(), 16, &mut ());
        assert_eq!(state.phase(), GamePhase::GameOver);
    }

    #[test]
    fn test_first_hit_stops_enemy_scan() {
        let mut state = centered_session(11);
        let target = state.player.pos;
        state.enemies[0].body_mut().pos = target;
        let second_before = state.enemies[1].pos();

        tick(&mut state, &TickInput::default(), 16, &mut ());
        assert_eq!(state.phase(), GamePhase::GameOver);
        assert_eq!(state.enemies[1].pos(), second_before);
    }

    #[test]
    fn test_restart_after_game_over() {
        let mut state = centered_session(13);
        state.score = 42;
        let target = state.player.pos;
        state.enemies[0].body_mut().pos = target;
        tick(&mut state, &TickInput::default(), 16, &mut ());
        assert_eq!(state.phase(), GamePhase::GameOver);

        state.start(10_000, &mut ());
        assert_eq!(state.phase(), GamePhase::Running);
        assert_eq!(state.score(), 0);
        assert_eq!(state.wave().index, 1);
        assert_eq!(state.player.pos, target, "player persists across restarts");
    }

    proptest! {
        #[test]
        fn prop_score_never_decreases(
            seed in any::<u64>(),
            steps in proptest::collection::vec((1u64..3_000, -5.0f32..5.0, -5.0f32..5.0), 1..200),
        ) {
            let mut state = GameState::new(Bounds::new(900, 1600).unwrap(), seed).unwrap();
            state.start(0, &mut ());
            let mut now = 0;
            let mut last = state.score();
            for (dt, vx, vy) in steps {
                now += dt;
                let input = TickInput { tilt: Some(Vec2::new(vx, vy)) };
                tick(&mut state, &input, now, &mut ());
                prop_assert!(state.score() >= last);
                last = state.score();
            }
        }
    }
}
