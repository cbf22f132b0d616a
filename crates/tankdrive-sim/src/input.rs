//! Translation of raw window input into control commands.

use tracing::debug;

use tankdrive_core::commands::ControlCommand;
use tankdrive_core::constants::{KEY_FRONT_CAMERA, KEY_TOP_CAMERA};
use tankdrive_core::enums::CameraId;
use tankdrive_core::input::InputEvent;

/// Map an input event to the command it triggers, if any.
pub fn translate(event: &InputEvent) -> Option<ControlCommand> {
    match *event {
        InputEvent::KeyPressed {
            key: KEY_FRONT_CAMERA,
            ..
        } => Some(ControlCommand::SelectCamera {
            camera: CameraId::Front,
        }),
        InputEvent::KeyPressed {
            key: KEY_TOP_CAMERA,
            ..
        } => Some(ControlCommand::SelectCamera {
            camera: CameraId::Top,
        }),
        unbound => {
            debug!(event = ?unbound, "unbound input");
            None
        }
    }
}
