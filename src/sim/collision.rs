//! Circle overlap test
//!
//! Works on squared distances so the hot path never takes a square root.

use glam::Vec2;

use super::entity::Entity;

/// True when two circles strictly overlap; touching edges do not count
#[inline]
pub fn circles_overlap(a: Vec2, a_radius: u32, b: Vec2, b_radius: u32) -> bool {
    let reach = a_radius as f32 + b_radius as f32;
    a.distance_squared(b) < reach * reach
}

/// Overlap test between two entities
pub fn collides(a: &dyn Entity, b: &dyn Entity) -> bool {
    let (a, b) = (a.body(), b.body());
    circles_overlap(a.pos, a.radius, b.pos, b.radius)
}
