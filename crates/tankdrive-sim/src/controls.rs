//! Control panel parameters shared by every tank in the scene.

use tankdrive_core::constants::*;
use tankdrive_core::state::ControlPanelView;

/// Drive toggle and animation speeds set from the UI.
///
/// Setters clamp to the slider ranges the panel exposes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ControlPanel {
    pub driving: bool,
    drive_speed: f32,
    turret_speed: f32,
    gun_speed: f32,
}

impl Default for ControlPanel {
    fn default() -> Self {
        Self {
            driving: false,
            drive_speed: DRIVE_SPEED_DEFAULT,
            turret_speed: TURRET_SPEED_DEFAULT,
            gun_speed: GUN_SPEED_DEFAULT,
        }
    }
}

impl ControlPanel {
    pub fn set_drive_speed(&mut self, speed: f32) {
        self.drive_speed = speed.clamp(DRIVE_SPEED_MIN, DRIVE_SPEED_MAX);
    }

    pub fn set_turret_speed(&mut self, speed: f32) {
        self.turret_speed = speed.clamp(TURRET_SPEED_MIN, TURRET_SPEED_MAX);
    }

    pub fn set_gun_speed(&mut self, speed: f32) {
        self.gun_speed = speed.clamp(GUN_SPEED_MIN, GUN_SPEED_MAX);
    }

    pub fn drive_speed(&self) -> f32 {
        self.drive_speed
    }

    pub fn turret_speed(&self) -> f32 {
        self.turret_speed
    }

    pub fn gun_speed(&self) -> f32 {
        self.gun_speed
    }

    pub fn view(&self) -> ControlPanelView {
        ControlPanelView {
            driving: self.driving,
            drive_speed: self.drive_speed,
            turret_speed: self.turret_speed,
            gun_speed: self.gun_speed,
        }
    }
}
