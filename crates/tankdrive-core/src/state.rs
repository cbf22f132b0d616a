//! Scene snapshot: the complete visible state handed to the renderer each tick.

use glam::{Mat4, Vec3};
use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::events::SceneEvent;
use crate::types::{EnvironmentSettings, MaterialSettings, SimTime};

/// Complete scene state broadcast after each tick.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SceneSnapshot {
    pub time: SimTime,
    pub path: PathKind,
    pub controls: ControlPanelView,
    pub tanks: Vec<TankView>,
    pub camera: CameraView,
    pub material: MaterialSettings,
    pub environment: EnvironmentView,
    pub events: Vec<SceneEvent>,
}

/// User-adjustable drive and animation parameters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ControlPanelView {
    pub driving: bool,
    pub drive_speed: f32,
    pub turret_speed: f32,
    pub gun_speed: f32,
}

/// One tank as the renderer needs it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TankView {
    pub tank_id: u32,
    /// Current path parameter.
    pub parameter: f32,
    pub position: Vec3,
    /// Smoothed heading (radians, counter-clockwise from +X seen from above).
    pub heading: f32,
    /// Accumulated wheel spin (degrees).
    pub wheel_rotation_deg: f32,
    pub turret: JointView,
    pub gun: JointView,
    pub transforms: PartTransforms,
}

/// Articulation state for display.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct JointView {
    /// Current angle (degrees).
    pub angle: f32,
    /// +1 or -1.
    pub direction: i8,
    pub enabled: bool,
    pub manual_override: bool,
}

/// Model matrices for every tank part.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PartTransforms {
    pub body: Mat4,
    pub wheels: Vec<Mat4>,
    pub turret: Mat4,
    pub gun: Mat4,
}

/// Active camera matrices.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct CameraView {
    pub active: CameraId,
    pub position: Vec3,
    pub view: Mat4,
    pub projection: Mat4,
}

/// Environment mapping and lighting parameters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct EnvironmentView {
    pub settings: EnvironmentSettings,
    pub light_position: Vec3,
    pub light_color: Vec3,
}
