//! ECS components for hecs entities.
//!
//! Components are plain data structs with no methods.
//! Scene logic lives in systems and in the sim crate's state types.

use serde::{Deserialize, Serialize};

/// Marks an entity as a tank driven along the scene path.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Tank {
    /// Stable identifier reported in snapshots and events.
    pub tank_id: u32,
    /// Path parameter the tank starts from (and returns to on reset).
    pub start_parameter: f32,
}
