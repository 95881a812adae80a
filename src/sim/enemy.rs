//! Pursuing enemy balls

use glam::Vec2;

use super::entity::{Bille, Entity};
use crate::Color;
use crate::consts::*;

/// An enemy that chases a target ball
///
/// The target is never stored: the session lends the player for each update.
/// Velocity components are used as per-axis step sizes rather than as a
/// direction vector, and the enemy is never clamped to the screen.
#[derive(Debug, Clone, PartialEq)]
pub struct Enemy {
    body: Bille,
}

impl Default for Enemy {
    fn default() -> Self {
        Self::new()
    }
}

impl Enemy {
    pub fn new() -> Self {
        Self {
            body: Bille {
                pos: Vec2::new(ENEMY_START_X, ENEMY_START_Y),
                vel: Vec2::splat(ENEMY_BASE_SPEED),
                radius: ENEMY_BASE_RADIUS,
                color: Color::BLUE,
                delta: DEFAULT_DELTA,
            },
        }
    }

    pub fn body_mut(&mut self) -> &mut Bille {
        &mut self.body
    }

    pub fn pos(&self) -> Vec2 {
        self.body.pos
    }

    pub fn radius(&self) -> u32 {
        self.body.radius
    }

    /// Step toward `target` unless already in contact
    pub fn update(&mut self, target: &Bille) {
        let to_target = target.pos - self.body.pos;
        let contact = self.body.radius as f32 + target.radius as f32;

        if to_target.length() <= contact {
            return;
        }

        let step = self.body.vel;
        let pos = &mut self.body.pos;
        if to_target.x.abs() > step.x {
            if pos.x < target.pos.x {
                pos.x += step.x;
            } else {
                pos.x -= step.x;
            }
        }
        if to_target.y.abs() > step.y {
            if pos.y < target.pos.y {
                pos.y += step.y;
            } else {
                pos.y -= step.y;
            }
        }
    }
}

impl Entity for Enemy {
    fn body(&self) -> &Bille {
        &self.body
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn target_at(x: f32, y: f32) -> Bille {
        let mut player = Bille::player();
        player.set_position(x, y);
        player
    }

    #[test]
    fn test_defaults() {
        let enemy = Enemy::new();
        assert_eq!(enemy.pos(), Vec2::new(100.0, 100.0));
        assert_eq!(enemy.radius(), 50);
        assert_eq!(enemy.body().vel, Vec2::splat(6.0));
        assert_eq!(enemy.body().color, Color::BLUE);
    }

    #[test]
    fn test_steps_per_axis_toward_target() {
        let target = target_at(500.0, 20.0);
        let mut enemy = Enemy::new();
        enemy.update(&target);
        assert_eq!(enemy.pos(), Vec2::new(106.0, 94.0));
    }

    #[test]
    fn test_axis_within_step_holds_still() {
        let target = target_at(500.0, 103.0);
        let mut enemy = Enemy::new();
        enemy.update(&target);
        assert_eq!(enemy.pos(), Vec2::new(106.0, 100.0));
    }

    #[test]
    fn test_stops_at_contact() {
        // Exactly radius sum away: no movement
        let target = target_at(160.0, 100.0);
        let mut enemy = Enemy::new();
        enemy.update(&target);
        assert_eq!(enemy.pos(), Vec2::new(100.0, 100.0));
    }

    #[test]
    fn test_step_keeps_velocity_sign() {
        let target = target_at(500.0, 20.0);
        let mut enemy = Enemy::new();
        enemy.body_mut().set_velocity(-6.0, -6.0);
        enemy.update(&target);
        assert_eq!(enemy.pos(), Vec2::new(94.0, 106.0));
    }

    #[test]
    fn test_huge_radius_counts_as_contact() {
        let target = target_at(5_000.0, 5_000.0);
        let mut enemy = Enemy::new();
        enemy.body_mut().radius = u32::MAX;
        enemy.update(&target);
        assert_eq!(enemy.pos(), Vec2::new(100.0, 100.0));
    }

    #[test]
    fn test_not_clamped_off_screen() {
        let target = target_at(50.0, 50.0);
        let mut enemy = Enemy::new();
        enemy.body_mut().set_position(-500.0, -500.0);
        enemy.update(&target);
        assert_eq!(enemy.pos(), Vec2::new(-494.0, -494.0));
    }

    proptest! {
        #[test]
        fn prop_converges_without_overshoot(
            tx in -2000.0f32..2000.0,
            ty in -2000.0f32..2000.0,
            ex in -2000.0f32..2000.0,
            ey in -2000.0f32..2000.0,
            speed in 1.0f32..12.0,
        ) {
            let target = target_at(tx, ty);
            let mut enemy = Enemy::new();
            enemy.body_mut().set_position(ex, ey);
            enemy.body_mut().set_velocity(speed, speed);
            let contact = enemy.radius() as f32 + target.radius as f32;

            let mut dist = (target.pos - enemy.pos()).length();
            let mut steps = 0;
            while dist > contact {
                enemy.update(&target);
                let next = (target.pos - enemy.pos()).length();
                prop_assert!(next < dist, "distance grew from {} to {}", dist, next);
                dist = next;
                steps += 1;
                prop_assert!(steps < 10_000);
            }

            let settled = enemy.pos();
            for _ in 0..5 {
                enemy.update(&target);
                prop_assert_eq!(enemy.pos(), settled);
            }
        }
    }
}
