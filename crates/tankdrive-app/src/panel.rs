//! JSON-lines control panel protocol.

use serde::Deserialize;

use tankdrive_core::commands::ControlCommand;
use tankdrive_core::input::InputEvent;

use crate::state::GameLoopCommand;

/// One line from the control panel: either a command or a raw input event.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum PanelMessage {
    Command(ControlCommand),
    Input(InputEvent),
}

impl From<PanelMessage> for GameLoopCommand {
    fn from(message: PanelMessage) -> Self {
        match message {
            PanelMessage::Command(command) => GameLoopCommand::Control(command),
            PanelMessage::Input(event) => GameLoopCommand::Input(event),
        }
    }
}

/// Parse one line. Blank lines yield `None`.
pub fn parse_line(line: &str) -> Result<Option<PanelMessage>, serde_json::Error> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }
    serde_json::from_str(line).map(Some)
}
