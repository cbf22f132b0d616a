//! Scene composition: model matrices for every tank part and the camera rig.
//!
//! Pure functions over motion and articulation state. The renderer multiplies
//! these with the camera matrices; nothing here touches GPU state.

use glam::{Mat4, Vec3};

use tankdrive_core::constants::*;
use tankdrive_core::enums::CameraId;
use tankdrive_core::state::{CameraView, PartTransforms};

/// Pose of one tank for a single frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TankPose {
    pub position: Vec3,
    /// Smoothed heading (radians).
    pub heading: f32,
    pub wheel_rotation_deg: f32,
    pub turret_deg: f32,
    pub gun_deg: f32,
}

/// Build the body, wheel, turret and gun matrices for a pose.
///
/// Wheels, turret and gun are parented to the body; the gun is parented to
/// the turret.
pub fn compose_tank(pose: &TankPose) -> PartTransforms {
    let body = Mat4::from_translation(pose.position)
        * Mat4::from_rotation_y(pose.heading)
        * Mat4::from_rotation_y(MODEL_ALIGNMENT_DEG.to_radians());

    let wheel_spin = Mat4::from_rotation_x(pose.wheel_rotation_deg.to_radians());
    let wheels = WHEEL_OFFSETS
        .iter()
        .map(|offset| body * Mat4::from_translation(*offset) * wheel_spin)
        .collect();

    let turret = body * Mat4::from_rotation_y(pose.turret_deg.to_radians());
    let gun = turret * Mat4::from_rotation_x(pose.gun_deg.to_radians());

    PartTransforms {
        body,
        wheels,
        turret,
        gun,
    }
}

/// Selects between the fixed camera presets.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct CameraRig {
    active: CameraId,
}

impl CameraRig {
    pub fn new(active: CameraId) -> Self {
        Self { active }
    }

    pub fn active(&self) -> CameraId {
        self.active
    }

    /// Switch presets. Returns true if the camera changed.
    pub fn select(&mut self, camera: CameraId) -> bool {
        let changed = self.active != camera;
        self.active = camera;
        changed
    }

    /// Position and look direction of a preset.
    pub fn preset(camera: CameraId) -> (Vec3, Vec3) {
        match camera {
            CameraId::Front => (FRONT_CAMERA_POSITION, FRONT_CAMERA_FORWARD),
            CameraId::Top => (TOP_CAMERA_POSITION, TOP_CAMERA_FORWARD),
        }
    }

    pub fn view_matrix(&self) -> Mat4 {
        let (position, forward) = Self::preset(self.active);
        Mat4::look_to_rh(position, forward.normalize(), Vec3::Y)
    }

    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh_gl(
            CAMERA_FOV_DEG.to_radians(),
            CAMERA_ASPECT,
            CAMERA_NEAR,
            CAMERA_FAR,
        )
    }

    pub fn view(&self) -> CameraView {
        CameraView {
            active: self.active,
            position: Self::preset(self.active).0,
            view: self.view_matrix(),
            projection: self.projection_matrix(),
        }
    }
}
