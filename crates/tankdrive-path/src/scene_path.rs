//! Configuration-selectable path.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use tankdrive_core::enums::PathKind;

use crate::bezier::CubicBezier;
use crate::curve::{Curve, ParameterStep, PathSample};
use crate::rectangle::RectanglePath;

/// The path the scene drives on, chosen at configuration time.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum ScenePath {
    Rectangle(RectanglePath),
    Bezier(CubicBezier),
}

impl Default for ScenePath {
    fn default() -> Self {
        ScenePath::Rectangle(RectanglePath::default())
    }
}

impl ScenePath {
    pub fn kind(&self) -> PathKind {
        match self {
            ScenePath::Rectangle(_) => PathKind::Rectangle,
            ScenePath::Bezier(_) => PathKind::Bezier,
        }
    }

    /// Replace the Bézier control points. Returns false for rectangular paths.
    pub fn set_control_points(&mut self, points: [Vec3; 4]) -> bool {
        match self {
            ScenePath::Bezier(curve) => {
                curve.set_control_points(points);
                true
            }
            ScenePath::Rectangle(_) => false,
        }
    }

    fn as_curve(&self) -> &dyn Curve {
        match self {
            ScenePath::Rectangle(path) => path,
            ScenePath::Bezier(curve) => curve,
        }
    }
}

impl Curve for ScenePath {
    fn position(&self, t: f32) -> Vec3 {
        self.as_curve().position(t)
    }

    fn sample(&self, t: f32) -> PathSample {
        self.as_curve().sample(t)
    }

    fn wrap_parameter(&self, t: f32) -> ParameterStep {
        self.as_curve().wrap_parameter(t)
    }

    fn approximate_length(&self) -> f32 {
        self.as_curve().approximate_length()
    }
}
