//! Motion of a single tank along the scene path.
//!
//! Plain value state advanced by the caller once per tick. The path is
//! passed in on every call so several followers can share one path.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use tankdrive_core::constants::{HEADING_SMOOTHING, WHEEL_RADIUS};
use tankdrive_path::easing::{heading_from_direction, wrap_angle};
use tankdrive_path::Curve;

/// Path progress, wheel spin and smoothed heading of one tank.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MotionState {
    /// Path parameter.
    t: f32,
    /// Accumulated wheel spin, consumed as degrees by the composer.
    wheel_rotation_deg: f32,
    /// Low-pass filtered heading (radians). Not folded, so it stays continuous.
    heading: f32,
}

impl MotionState {
    /// Start at the beginning of the path.
    pub fn new<C: Curve + ?Sized>(path: &C) -> Self {
        Self::starting_at(path, 0.0)
    }

    /// Start at parameter `t`, facing along the path.
    pub fn starting_at<C: Curve + ?Sized>(path: &C, t: f32) -> Self {
        let t = path.wrap_parameter(t).t;
        Self {
            t,
            wheel_rotation_deg: 0.0,
            heading: heading_from_direction(path.sample(t).direction),
        }
    }

    /// Move `speed * dt` along the path and spin the wheels by the distance covered.
    ///
    /// Returns true when the parameter wrapped (rectangle) or restarted (Bézier).
    pub fn advance<C: Curve + ?Sized>(&mut self, path: &C, dt: f32, speed: f32) -> bool {
        let progress = speed * dt;
        let step = path.wrap_parameter(self.t + progress);
        self.t = step.t;

        let distance = progress * path.approximate_length();
        self.wheel_rotation_deg += distance / WHEEL_RADIUS;

        step.wrapped
    }

    /// Position at the current parameter.
    pub fn position<C: Curve + ?Sized>(&self, path: &C) -> Vec3 {
        path.sample(self.t).position
    }

    /// Unfiltered heading at the current parameter.
    pub fn raw_heading<C: Curve + ?Sized>(&self, path: &C) -> f32 {
        heading_from_direction(path.sample(self.t).direction)
    }

    /// Pull the smoothed heading toward the path heading. Returns the new value.
    pub fn update_heading<C: Curve + ?Sized>(&mut self, path: &C) -> f32 {
        let target = self.raw_heading(path);
        self.steer_towards(target)
    }

    /// Move the smoothed heading a fixed fraction of the shortest turn to `target`.
    pub fn steer_towards(&mut self, target: f32) -> f32 {
        let delta = wrap_angle(target - self.heading);
        self.heading += delta * HEADING_SMOOTHING;
        self.heading
    }

    /// Return to `t` with the wheels at rest and the heading re-seeded from the path.
    pub fn reset<C: Curve + ?Sized>(&mut self, path: &C, t: f32) {
        *self = Self::starting_at(path, t);
    }

    pub fn parameter(&self) -> f32 {
        self.t
    }

    pub fn heading(&self) -> f32 {
        self.heading
    }

    pub fn wheel_rotation_deg(&self) -> f32 {
        self.wheel_rotation_deg
    }
}
