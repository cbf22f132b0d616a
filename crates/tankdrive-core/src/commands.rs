//! Control panel commands sent from the UI to the simulation.
//!
//! Commands are queued and applied at the next tick boundary.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::enums::CameraId;
use crate::types::MaterialSettings;

/// All possible control panel actions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ControlCommand {
    // --- Simulation ---
    /// Return motion, articulation and drive controls to their initial values.
    ResetSimulation,

    // --- Drive ---
    /// Start or stop driving along the path.
    SetDriving { enabled: bool },
    /// Set the drive speed (path parameter per second).
    SetDriveSpeed { speed: f32 },
    /// Replace the Bézier control points (ignored on rectangular paths).
    SetControlPoints { points: [Vec3; 4] },

    // --- Turret ---
    /// Enable or disable turret oscillation.
    SetTurretAnimation { enabled: bool },
    /// Set the turret oscillation speed (degrees per tick).
    SetTurretSpeed { speed: f32 },
    /// Set the turret angle by hand, suspending oscillation until reset.
    SetTurretAngle { degrees: f32 },

    // --- Gun ---
    /// Enable or disable gun tilt oscillation.
    SetGunAnimation { enabled: bool },
    /// Set the gun oscillation speed (degrees per tick).
    SetGunSpeed { speed: f32 },
    /// Set the gun angle by hand, suspending oscillation until reset.
    SetGunAngle { degrees: f32 },

    // --- Presentation ---
    SelectCamera { camera: CameraId },
    SetMaterial { settings: MaterialSettings },
    SetEnvironmentMapping { enabled: bool },
    SetReflectivity { reflectivity: f32 },
}
