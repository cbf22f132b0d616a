//! TANKDRIVE headless runner.
//!
//! Wires the scene engine to a fixed-rate game loop thread, a JSON scene
//! config, and a JSON-lines control panel on stdin/stdout.

pub mod args;
pub mod config;
pub mod game_loop;
pub mod panel;
pub mod state;

pub use tankdrive_core as core;
