//! Wave director: difficulty curve and off-screen spawning

use glam::Vec2;
use rand::Rng;

use super::enemy::Enemy;
use super::entity::Bounds;
use crate::consts::*;

/// Difficulty parameters derived from a wave index
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WaveSpec {
    pub index: u32,
    pub duration_ms: u64,
    pub enemy_count: usize,
    pub speed_factor: f32,
    pub size_factor: f32,
}

impl WaveSpec {
    pub fn for_wave(index: u32) -> Self {
        Self {
            index,
            duration_ms: wave_duration_ms(index),
            enemy_count: index as usize + 1,
            speed_factor: 1.0 + index as f32 * 0.2,
            size_factor: 1.0 + index as f32 * 0.1,
        }
    }

    /// `base * size_factor` in whole pixels, computed exactly in integers
    pub fn scaled_radius(&self, base: u32) -> u32 {
        base * (10 + self.index) / 10
    }
}

/// Wave length: 10s shrinking by 0.5s per wave, floored at 3s
pub fn wave_duration_ms(index: u32) -> u64 {
    let cut = (index as u64 * WAVE_DURATION_STEP_MS).min(MAX_WAVE_DURATION_CUT_MS);
    BASE_WAVE_DURATION_MS
        .saturating_sub(cut)
        .max(MIN_WAVE_DURATION_MS)
}

/// Screen edge an enemy enters from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Edge {
    Top,
    Right,
    Bottom,
    Left,
}

impl Edge {
    pub const ALL: [Edge; 4] = [Edge::Top, Edge::Right, Edge::Bottom, Edge::Left];

    pub fn random(rng: &mut impl Rng) -> Self {
        Self::ALL[rng.random_range(0..Self::ALL.len())]
    }
}

/// Spawn position just beyond `edge`, `along` pixels down that edge
pub fn spawn_point(edge: Edge, along: f32, bounds: Bounds, radius: u32) -> Vec2 {
    let r = radius as f32;
    let w = bounds.width() as f32;
    let h = bounds.height() as f32;
    match edge {
        Edge::Top => Vec2::new(along, -r),
        Edge::Right => Vec2::new(w + r, along),
        Edge::Bottom => Vec2::new(along, h + r),
        Edge::Left => Vec2::new(-r, along),
    }
}

/// Build the full enemy roster for a wave
///
/// Enemies are pushed off-screen by their base radius, then scaled for the
/// wave, so larger late-wave enemies may straddle the edge when they appear.
pub fn spawn_enemies(spec: &WaveSpec, bounds: Bounds, rng: &mut impl Rng) -> Vec<Enemy> {
    (0..spec.enemy_count)
        .map(|_| {
            let mut enemy = Enemy::new();
            let edge = Edge::random(rng);
            let extent = match edge {
                Edge::Top | Edge::Bottom => bounds.width(),
                Edge::Right | Edge::Left => bounds.height(),
            };
            let along = rng.random_range(0..=extent) as f32;

            let body = enemy.body_mut();
            body.pos = spawn_point(edge, along, bounds, body.radius);
            body.vel *= spec.speed_factor;
            body.radius = spec.scaled_radius(body.radius);
            enemy
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::Entity;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_wave_formula() {
        for (wave, duration, count) in [(1, 9500, 2), (5, 7500, 6), (14, 3000, 15), (20, 3000, 21)] {
            let spec = WaveSpec::for_wave(wave);
            assert_eq!(spec.duration_ms, duration, "wave {wave}");
            assert_eq!(spec.enemy_count, count, "wave {wave}");
        }
        assert_eq!(wave_duration_ms(13), 3500);
    }

    #[test]
    fn test_scaling_factors() {
        let spec = WaveSpec::for_wave(5);
        assert!((spec.speed_factor - 2.0).abs() < 1e-6);
        assert!((spec.size_factor - 1.5).abs() < 1e-6);
        assert_eq!(spec.scaled_radius(50), 75);
        assert_eq!(WaveSpec::for_wave(1).scaled_radius(50), 55);
    }

    #[test]
    fn test_spawn_points_sit_outside_edges() {
        let bounds = Bounds::new(800, 600).unwrap();
        assert_eq!(spawn_point(Edge::Top, 10.0, bounds, 50), Vec2::new(10.0, -50.0));
        assert_eq!(spawn_point(Edge::Right, 20.0, bounds, 50), Vec2::new(850.0, 20.0));
        assert_eq!(spawn_point(Edge::Bottom, 30.0, bounds, 50), Vec2::new(30.0, 650.0));
        assert_eq!(spawn_point(Edge::Left, 40.0, bounds, 50), Vec2::new(-50.0, 40.0));
    }

    #[test]
    fn test_spawned_roster_is_scaled() {
        let bounds = Bounds::new(1000, 700).unwrap();
        let spec = WaveSpec::for_wave(3);
        let mut rng = Pcg32::seed_from_u64(7);
        let enemies = spawn_enemies(&spec, bounds, &mut rng);

        assert_eq!(enemies.len(), 4);
        for enemy in &enemies {
            let body = enemy.body();
            assert_eq!(body.radius, 65);
            assert!((body.vel.x - 6.0 * 1.6).abs() < 1e-4);
            assert!((body.vel.y - 6.0 * 1.6).abs() < 1e-4);

            let p = body.pos;
            let on_top_or_bottom = (p.y == -50.0 || p.y == 750.0) && (0.0..=1000.0).contains(&p.x);
            let on_left_or_right = (p.x == -50.0 || p.x == 1050.0) && (0.0..=700.0).contains(&p.y);
            assert!(on_top_or_bottom || on_left_or_right, "unexpected spawn at {p}");
        }
    }

    #[test]
    fn test_edges_are_all_reachable() {
        let mut rng = Pcg32::seed_from_u64(42);
        let mut seen = [false; 4];
        for _ in 0..200 {
            let edge = Edge::random(&mut rng);
            let i = Edge::ALL.iter().position(|e| *e == edge).unwrap();
            seen[i] = true;
        }
        assert_eq!(seen, [true; 4]);
    }
}
