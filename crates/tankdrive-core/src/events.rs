//! Events emitted by the simulation for UI feedback and logging.

use serde::{Deserialize, Serialize};

use crate::enums::{CameraId, Joint};

/// Something noteworthy that happened during a tick.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum SceneEvent {
    /// A tank's path parameter wrapped (rectangle) or restarted (Bézier).
    LapCompleted { tank_id: u32 },
    /// An articulation reached a bound and reversed direction.
    JointReversed {
        tank_id: u32,
        joint: Joint,
        angle: f32,
    },
    /// The simulation was reset from the control panel.
    SimulationReset,
    /// The active camera changed.
    CameraChanged { camera: CameraId },
}
