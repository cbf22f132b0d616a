//! Path evaluation for TANKDRIVE.
//!
//! Maps a normalized path parameter to a position and heading direction.
//! Pure functions over plain data; no ECS or renderer dependency.

pub mod bezier;
pub mod curve;
pub mod easing;
pub mod rectangle;
pub mod scene_path;

pub use bezier::CubicBezier;
pub use curve::{Curve, ParameterStep, PathSample};
pub use rectangle::RectanglePath;
pub use scene_path::ScenePath;
pub use tankdrive_core as core;

#[cfg(test)]
mod tests;
