//! The capability shared by every path shape.

use glam::Vec3;

/// A point on a path together with its unit travel direction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PathSample {
    pub position: Vec3,
    /// Unit vector, or zero when the path is degenerate at this point.
    pub direction: Vec3,
}

/// Result of moving the path parameter forward.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParameterStep {
    pub t: f32,
    /// True when the parameter wrapped or restarted.
    pub wrapped: bool,
}

/// Maps a normalized parameter `t` to a point on a path.
pub trait Curve {
    /// Position at `t` without any easing.
    fn position(&self, t: f32) -> Vec3;

    /// Position and travel direction at `t`, as used for driving.
    fn sample(&self, t: f32) -> PathSample;

    /// Bring an advanced parameter back into the path's domain.
    fn wrap_parameter(&self, t: f32) -> ParameterStep;

    /// Length used to convert parameter progress into distance travelled.
    fn approximate_length(&self) -> f32;
}
