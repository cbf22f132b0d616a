//! Cubic Bézier path.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use tankdrive_core::constants::BEZIER_CONTROL_POINTS;

use crate::curve::{Curve, ParameterStep, PathSample};

/// Open cubic Bézier curve through P0 and P3, shaped by P1 and P2.
///
/// Evaluation does not clamp `t`: values outside [0, 1] extrapolate the
/// polynomial.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CubicBezier {
    p0: Vec3,
    p1: Vec3,
    p2: Vec3,
    p3: Vec3,
}

impl Default for CubicBezier {
    fn default() -> Self {
        Self::from_points(BEZIER_CONTROL_POINTS)
    }
}

impl CubicBezier {
    pub fn new(p0: Vec3, p1: Vec3, p2: Vec3, p3: Vec3) -> Self {
        Self { p0, p1, p2, p3 }
    }

    pub fn from_points(points: [Vec3; 4]) -> Self {
        Self::new(points[0], points[1], points[2], points[3])
    }

    /// Replace all four control points at once.
    pub fn set_control_points(&mut self, points: [Vec3; 4]) {
        *self = Self::from_points(points);
    }

    pub fn control_points(&self) -> [Vec3; 4] {
        [self.p0, self.p1, self.p2, self.p3]
    }

    pub fn p0(&self) -> Vec3 {
        self.p0
    }

    pub fn p1(&self) -> Vec3 {
        self.p1
    }

    pub fn p2(&self) -> Vec3 {
        self.p2
    }

    pub fn p3(&self) -> Vec3 {
        self.p3
    }

    /// First derivative with respect to `t`.
    pub fn tangent(&self, t: f32) -> Vec3 {
        let u = 1.0 - t;
        3.0 * u * u * (self.p1 - self.p0)
            + 6.0 * u * t * (self.p2 - self.p1)
            + 3.0 * t * t * (self.p3 - self.p2)
    }
}

impl Curve for CubicBezier {
    fn position(&self, t: f32) -> Vec3 {
        let u = 1.0 - t;
        let uu = u * u;
        let tt = t * t;

        uu * u * self.p0 + 3.0 * uu * t * self.p1 + 3.0 * u * tt * self.p2 + tt * t * self.p3
    }

    fn sample(&self, t: f32) -> PathSample {
        let tangent = self.tangent(t);
        // Coincident control points zero the tangent at the ends.
        let direction = if tangent.length_squared() > f32::EPSILON {
            tangent.normalize()
        } else {
            (self.p3 - self.p0).normalize_or_zero()
        };
        PathSample {
            position: self.position(t),
            direction,
        }
    }

    /// Restarts at 0 past the end; negative values are pulled up to 0.
    fn wrap_parameter(&self, t: f32) -> ParameterStep {
        if t > 1.0 {
            ParameterStep {
                t: 0.0,
                wrapped: true,
            }
        } else {
            ParameterStep {
                t: t.max(0.0),
                wrapped: false,
            }
        }
    }

    /// Chord length P0 → P3, not the arc length.
    fn approximate_length(&self) -> f32 {
        self.p0.distance(self.p3)
    }
}
