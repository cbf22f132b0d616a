//! Scene constants and tuning parameters.

use glam::Vec3;

/// Fixed simulated time step in seconds (16 ms), independent of wall-clock frame time.
pub const DT: f32 = 0.016;

/// Nominal tick duration in milliseconds.
pub const TICK_MILLIS: u64 = 16;

// --- Paths ---

/// Default rectangle corners, walked in order c0 → c1 → c2 → c3 → c0.
pub const RECT_CORNERS: [Vec3; 4] = [
    Vec3::new(0.0, 0.0, 0.0),
    Vec3::new(10.0, 0.0, 0.0),
    Vec3::new(10.0, 0.0, 10.0),
    Vec3::new(0.0, 0.0, 10.0),
];

/// Default cubic Bézier control points P0..P3.
pub const BEZIER_CONTROL_POINTS: [Vec3; 4] = [
    Vec3::new(0.0, 0.0, 0.0),
    Vec3::new(5.0, 5.0, 0.0),
    Vec3::new(10.0, -5.0, 0.0),
    Vec3::new(15.0, 0.0, 0.0),
];

/// Number of linear segments on the rectangular path.
pub const RECT_SEGMENTS: f32 = 4.0;

/// Smoothstep input range applied to the raw segment fraction.
/// Fractions below the lower edge or above the upper edge saturate.
pub const CORNER_EASE_EDGE0: f32 = 0.1;
pub const CORNER_EASE_EDGE1: f32 = 0.9;

/// Parameter offset of the look-ahead sample used to derive heading.
pub const DIRECTION_PROBE_STEP: f32 = 0.01;

// --- Motion ---

/// Low-pass coefficient for heading smoothing (fraction of the delta applied per tick).
pub const HEADING_SMOOTHING: f32 = 0.1;

/// Wheel radius in scene units. Never zero.
pub const WHEEL_RADIUS: f32 = 0.02;

/// Default drive speed (path parameter per second).
pub const DRIVE_SPEED_DEFAULT: f32 = 0.01;
pub const DRIVE_SPEED_MIN: f32 = 0.01;
pub const DRIVE_SPEED_MAX: f32 = 0.3;

// --- Articulation ---

/// Turret yaw bound in degrees (symmetric).
pub const TURRET_LIMIT_DEG: f32 = 30.0;

/// Turret oscillation speed (degrees per tick).
pub const TURRET_SPEED_DEFAULT: f32 = 1.0;
pub const TURRET_SPEED_MIN: f32 = 1.0;
pub const TURRET_SPEED_MAX: f32 = 10.0;

/// Gun tilt bound in degrees (symmetric).
pub const GUN_LIMIT_DEG: f32 = 20.0;

/// Gun oscillation speed (degrees per tick).
pub const GUN_SPEED_DEFAULT: f32 = 1.0;
pub const GUN_SPEED_MIN: f32 = 0.5;
pub const GUN_SPEED_MAX: f32 = 5.0;

// --- Model layout ---

/// Yaw applied after the heading rotation: the body mesh faces -Z in model space.
pub const MODEL_ALIGNMENT_DEG: f32 = 90.0;

/// Wheel pair offsets relative to the body origin.
pub const WHEEL_OFFSETS: [Vec3; 3] = [
    Vec3::new(-0.7, -1.6, -3.5),
    Vec3::new(-0.7, -1.6, -0.5),
    Vec3::new(-0.7, -1.6, 2.5),
];

// --- Cameras ---

pub const FRONT_CAMERA_POSITION: Vec3 = Vec3::new(18.0, 3.0, 22.0);
pub const FRONT_CAMERA_FORWARD: Vec3 = Vec3::new(-1.0, 0.0, -1.0);

pub const TOP_CAMERA_POSITION: Vec3 = Vec3::new(5.0, 20.0, -8.0);
pub const TOP_CAMERA_FORWARD: Vec3 = Vec3::new(0.0, -1.0, 1.0);

/// Vertical field of view in degrees.
pub const CAMERA_FOV_DEG: f32 = 80.0;
pub const CAMERA_ASPECT: f32 = 1.0;
pub const CAMERA_NEAR: f32 = 0.1;
pub const CAMERA_FAR: f32 = 30.0;

// --- Lighting & materials ---

pub const LIGHT_POSITION: Vec3 = Vec3::new(5.0, 5.0, 5.0);
pub const LIGHT_COLOR: Vec3 = Vec3::new(1.0, 1.0, 1.0);

pub const DEFAULT_KD: Vec3 = Vec3::new(0.8, 0.8, 0.8);
pub const DEFAULT_KS: Vec3 = Vec3::new(0.1, 0.1, 0.1);
pub const DEFAULT_SHININESS: f32 = 0.0;
pub const DEFAULT_ROUGHNESS: f32 = 0.5;

pub const SHININESS_MIN: f32 = 1.0;
pub const SHININESS_MAX: f32 = 128.0;

pub const DEFAULT_REFLECTIVITY: f32 = 0.5;

// --- Input ---

/// Key code that selects the front camera.
pub const KEY_FRONT_CAMERA: i32 = 49;

/// Key code that selects the top camera.
pub const KEY_TOP_CAMERA: i32 = 50;
