//! Simulation engine for TANKDRIVE.
//!
//! Owns the hecs world of tanks, advances motion and articulation at a fixed
//! step, and produces `SceneSnapshot`s for the renderer.

pub mod articulation;
pub mod composer;
pub mod controls;
pub mod engine;
pub mod input;
pub mod motion;
pub mod systems;
pub mod world_setup;

pub use engine::{SceneConfig, SceneEngine};
pub use tankdrive_core as core;
pub use tankdrive_path as path;
