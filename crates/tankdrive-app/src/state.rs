//! Messages shared between the stdin reader and the game loop thread.

use tankdrive_core::commands::ControlCommand;
use tankdrive_core::input::InputEvent;

/// Commands sent to the game loop thread.
#[derive(Debug)]
pub enum GameLoopCommand {
    /// A control panel command to forward to the scene engine.
    Control(ControlCommand),
    /// A raw input event to forward to the scene engine.
    Input(InputEvent),
    /// Shut down the game loop thread gracefully.
    Shutdown,
}
