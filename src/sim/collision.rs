//! Collision and vector helpers
//!
//! Everything in the simulation is a circle, so contact reduces to a
//! center-distance check. The helpers here are pure and allocation free.

use glam::Vec2;

/// Check whether two circles touch or overlap
///
/// Touching edges count as contact, so a zero-gap pair reports `true`.
#[inline]
pub fn circles_overlap(a: Vec2, a_radius: f32, b: Vec2, b_radius: f32) -> bool {
    let reach = a_radius + b_radius;
    a.distance_squared(b) <= reach * reach
}

/// Clamp each component of `v` into `[-limit, limit]`
#[inline]
pub fn clamp_components(v: Vec2, limit: f32) -> Vec2 {
    v.clamp(Vec2::splat(-limit), Vec2::splat(limit))
}

/// Rotate a vector by 90° counter-clockwise (swap components, negate one)
#[inline]
pub fn rotate_quarter(v: Vec2) -> Vec2 {
    Vec2::new(-v.y, v.x)
}

/// Clockwise rotation in degrees, in (0, 360], for a unit facing vector
///
/// Screen space has +y pointing down; straight up (0, -1) comes out as 360°.
/// `acos` alone only covers half the circle; the x sign picks the half.
pub fn facing_rotation_degrees(facing: Vec2) -> f32 {
    let y = facing.y.clamp(-1.0, 1.0);
    if facing.x > 0.0 {
        (-y).acos().to_degrees()
    } else {
        180.0 + y.acos().to_degrees()
    }
}
