//! Core types and definitions for the TANKDRIVE scene.
//!
//! This crate defines the vocabulary shared across all other crates:
//! components, commands, input events, snapshots, scene events, and constants.
//! It has no dependency on any renderer or runtime framework.

pub mod commands;
pub mod components;
pub mod constants;
pub mod enums;
pub mod events;
pub mod input;
pub mod state;
pub mod types;
