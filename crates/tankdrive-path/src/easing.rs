//! Scalar easing and angle helpers.

use std::f32::consts::{PI, TAU};

use glam::Vec3;

/// Hermite smoothstep: 0 below `edge0`, 1 above `edge1`, cubic in between.
pub fn smoothstep(edge0: f32, edge1: f32, x: f32) -> f32 {
    let t = ((x - edge0) / (edge1 - edge0)).clamp(0.0, 1.0);
    t * t * (3.0 - 2.0 * t)
}

/// Fold an angle into [-π, π).
pub fn wrap_angle(angle: f32) -> f32 {
    (angle + PI).rem_euclid(TAU) - PI
}

/// Heading of a travel direction in the ground plane.
///
/// Counter-clockwise seen from above: +X is 0, -Z is π/2.
pub fn heading_from_direction(direction: Vec3) -> f32 {
    (-direction.z).atan2(direction.x)
}
