//! Player command wire format.
//!
//! Embedded players are driven through the YouTube iframe API, which accepts
//! JSON messages posted into the player frame.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A command sent to one embedded player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlayerCommand {
    Play,
    Pause,
}

/// The postMessage envelope understood by the iframe API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandMessage {
    pub event: String,
    pub func: String,
    pub args: String,
}

impl PlayerCommand {
    /// Iframe API function name.
    pub fn func(self) -> &'static str {
        match self {
            PlayerCommand::Play => "playVideo",
            PlayerCommand::Pause => "pauseVideo",
        }
    }

    pub fn envelope(self) -> CommandMessage {
        CommandMessage {
            event: "command".to_string(),
            func: self.func().to_string(),
            args: String::new(),
        }
    }

    /// Serialized message, e.g. `{"event":"command","func":"playVideo","args":""}`.
    pub fn to_message(self) -> String {
        format!(
            r#"{{"event":"command","func":"{}","args":""}}"#,
            self.func()
        )
    }
}

impl fmt::Display for PlayerCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlayerCommand::Play => write!(f, "play"),
            PlayerCommand::Pause => write!(f, "pause"),
        }
    }
}
