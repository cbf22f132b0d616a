//! Fundamental simulation and presentation types.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::constants::*;

/// Simulation time tracking.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SimTime {
    /// Current tick number (increments by 1 each tick).
    pub tick: u64,
    /// Elapsed simulation time in seconds.
    pub elapsed_secs: f64,
}

impl SimTime {
    /// Seconds per tick.
    pub fn dt(&self) -> f32 {
        DT
    }

    /// Advance by one tick.
    pub fn advance(&mut self) {
        self.tick += 1;
        self.elapsed_secs += f64::from(self.dt());
    }
}

/// Surface material toggles forwarded to the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MaterialSettings {
    /// Fall back to the material colours when a mesh has no texture.
    pub use_material: bool,
    pub use_kd: bool,
    /// Diffuse colour.
    pub kd: Vec3,
    pub use_ks: bool,
    /// Specular colour.
    pub ks: Vec3,
    pub use_shininess: bool,
    pub shininess: f32,
    pub use_roughness: bool,
    pub roughness: f32,
}

impl Default for MaterialSettings {
    fn default() -> Self {
        Self {
            use_material: true,
            use_kd: true,
            kd: DEFAULT_KD,
            use_ks: true,
            ks: DEFAULT_KS,
            use_shininess: true,
            shininess: DEFAULT_SHININESS,
            use_roughness: true,
            roughness: DEFAULT_ROUGHNESS,
        }
    }
}

impl MaterialSettings {
    /// Clamp every scalar to the range the control panel allows.
    ///
    /// The default shininess sits below the slider minimum; it is only
    /// raised once the value is edited through a command.
    pub fn clamped(self) -> Self {
        Self {
            kd: self.kd.clamp(Vec3::ZERO, Vec3::ONE),
            ks: self.ks.clamp(Vec3::ZERO, Vec3::ONE),
            shininess: self.shininess.clamp(SHININESS_MIN, SHININESS_MAX),
            roughness: self.roughness.clamp(0.0, 1.0),
            ..self
        }
    }
}

/// Environment (cubemap reflection) settings.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EnvironmentSettings {
    pub enabled: bool,
    /// Blend factor between lit colour and cubemap reflection (0..1).
    pub reflectivity: f32,
}

impl Default for EnvironmentSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            reflectivity: DEFAULT_REFLECTIVITY,
        }
    }
}
