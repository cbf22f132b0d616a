//! Raw window input events.
//!
//! The window layer records these instead of mutating scene state from
//! callbacks; the engine drains them once per tick.

use serde::{Deserialize, Serialize};

/// A single keyboard or mouse event.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum InputEvent {
    KeyPressed { key: i32, mods: i32 },
    KeyReleased { key: i32, mods: i32 },
    MouseMoved { x: f64, y: f64 },
    MouseButtonPressed { button: i32, mods: i32 },
    MouseButtonReleased { button: i32, mods: i32 },
}
