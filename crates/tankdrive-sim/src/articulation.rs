//! Bounded, self-reversing angle oscillators for the turret and gun.

use serde::{Deserialize, Serialize};

use tankdrive_core::constants::{GUN_LIMIT_DEG, TURRET_LIMIT_DEG};
use tankdrive_core::state::JointView;

/// Range an articulation oscillates within.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ArticulationLimits {
    pub lower: f32,
    pub upper: f32,
    /// Angle is stored as whole degrees, truncated toward zero after each change.
    pub integral: bool,
}

impl ArticulationLimits {
    pub const TURRET: Self = Self {
        lower: -TURRET_LIMIT_DEG,
        upper: TURRET_LIMIT_DEG,
        integral: true,
    };

    pub const GUN: Self = Self {
        lower: -GUN_LIMIT_DEG,
        upper: GUN_LIMIT_DEG,
        integral: false,
    };

    fn quantize(&self, angle: f32) -> f32 {
        if self.integral {
            angle.trunc()
        } else {
            angle
        }
    }
}

/// Oscillator state.
///
/// The direction only flips once a bound is reached or crossed; the angle is
/// never clamped, so a large speed can overshoot a bound by up to one step.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Articulation {
    angle: f32,
    direction: i8,
    enabled: bool,
    manual_override: bool,
    limits: ArticulationLimits,
}

impl Articulation {
    pub fn new(limits: ArticulationLimits) -> Self {
        Self {
            angle: 0.0,
            direction: 1,
            enabled: false,
            manual_override: false,
            limits,
        }
    }

    /// Step by `speed` degrees in the current direction.
    ///
    /// No-op unless enabled and not manually overridden. Returns true when the
    /// direction flipped.
    pub fn tick(&mut self, speed: f32) -> bool {
        if !self.enabled || self.manual_override {
            return false;
        }

        self.angle = self
            .limits
            .quantize(self.angle + f32::from(self.direction) * speed);

        let previous = self.direction;
        if self.angle >= self.limits.upper {
            self.direction = -1;
        } else if self.angle <= self.limits.lower {
            self.direction = 1;
        }
        self.direction != previous
    }

    /// Angle 0, direction +1, animation off, override cleared.
    pub fn reset(&mut self) {
        *self = Self::new(self.limits);
    }

    /// Write the angle directly and suspend oscillation until `reset`.
    pub fn set_manual(&mut self, angle: f32) {
        self.manual_override = true;
        self.angle = self.limits.quantize(angle);
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    pub fn angle(&self) -> f32 {
        self.angle
    }

    pub fn direction(&self) -> i8 {
        self.direction
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn is_manual(&self) -> bool {
        self.manual_override
    }

    pub fn limits(&self) -> ArticulationLimits {
        self.limits
    }

    pub fn view(&self) -> JointView {
        JointView {
            angle: self.angle,
            direction: self.direction,
            enabled: self.enabled,
            manual_override: self.manual_override,
        }
    }
}

/// Turret yaw component.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Turret(pub Articulation);

impl Default for Turret {
    fn default() -> Self {
        Self(Articulation::new(ArticulationLimits::TURRET))
    }
}

/// Gun tilt component.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Gun(pub Articulation);

impl Default for Gun {
    fn default() -> Self {
        Self(Articulation::new(ArticulationLimits::GUN))
    }
}
