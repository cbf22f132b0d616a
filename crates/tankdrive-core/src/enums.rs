//! Enumeration types used throughout the scene.

use serde::{Deserialize, Serialize};

/// Which camera preset drives the view matrix.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CameraId {
    /// Oblique view from the front-right of the course.
    #[default]
    Front,
    /// Overhead view looking down the course.
    Top,
}

/// Shape of the path the tank follows.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum PathKind {
    /// Closed four-segment loop with eased corners.
    #[default]
    Rectangle,
    /// Open cubic Bézier curve, restarted from P0 after reaching P3.
    Bezier,
}

/// Articulated tank part.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Joint {
    /// Turret yaw around the body's up axis.
    Turret,
    /// Gun tilt around the turret's lateral axis.
    Gun,
}
