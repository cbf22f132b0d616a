//! Closed four-segment path with eased corners.
//!
//! The parameter range [0, 1) is split into four equal segments, one per
//! edge. Driving samples ease each edge with a smoothstep so the tank slows
//! into and out of every corner.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use tankdrive_core::constants::*;

use crate::curve::{Curve, ParameterStep, PathSample};
use crate::easing::smoothstep;

/// Closed quadrilateral walked c0 → c1 → c2 → c3 → c0.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RectanglePath {
    corners: [Vec3; 4],
}

impl Default for RectanglePath {
    fn default() -> Self {
        Self::new(RECT_CORNERS)
    }
}

impl RectanglePath {
    pub fn new(corners: [Vec3; 4]) -> Self {
        Self { corners }
    }

    pub fn corners(&self) -> [Vec3; 4] {
        self.corners
    }

    /// Split `t` into a segment index and the fraction along that segment.
    fn locate(t: f32) -> (Option<usize>, f32) {
        let scaled = t * RECT_SEGMENTS;
        let floor = scaled.floor();
        let fraction = scaled - floor;
        let segment = (0.0..RECT_SEGMENTS).contains(&floor).then_some(floor as usize);
        (segment, fraction)
    }

    /// Start and end corner of an edge.
    fn edge(&self, segment: usize) -> (Vec3, Vec3) {
        (self.corners[segment], self.corners[(segment + 1) % 4])
    }
}

impl Curve for RectanglePath {
    fn position(&self, t: f32) -> Vec3 {
        match Self::locate(t) {
            (Some(segment), fraction) => {
                let (start, end) = self.edge(segment);
                start.lerp(end, fraction)
            }
            (None, _) => self.corners[0],
        }
    }

    /// The look-ahead sample wraps within the edge. Once the eased fraction
    /// passes 0.99 (about 85% of the raw edge fraction) the direction points
    /// back toward the edge start.
    fn sample(&self, t: f32) -> PathSample {
        let (segment, fraction) = Self::locate(t);
        let Some(segment) = segment else {
            return PathSample {
                position: self.corners[0],
                direction: (self.corners[1] - self.corners[0]).normalize_or_zero(),
            };
        };

        let (start, end) = self.edge(segment);
        let eased = smoothstep(CORNER_EASE_EDGE0, CORNER_EASE_EDGE1, fraction);
        let ahead = (eased + DIRECTION_PROBE_STEP) % 1.0;

        let position = start.lerp(end, eased);
        let next = start.lerp(end, ahead);
        PathSample {
            position,
            direction: (next - position).normalize_or_zero(),
        }
    }

    fn wrap_parameter(&self, t: f32) -> ParameterStep {
        let wrapped = t.rem_euclid(1.0);
        ParameterStep {
            t: wrapped,
            wrapped: !(0.0..1.0).contains(&t),
        }
    }

    /// Perimeter of the quadrilateral.
    fn approximate_length(&self) -> f32 {
        (0..4)
            .map(|segment| {
                let (start, end) = self.edge(segment);
                start.distance(end)
            })
            .sum()
    }
}
