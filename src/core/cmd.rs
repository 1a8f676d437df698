use serde::{Deserialize, Serialize};

use crate::domain::language::LanguagePair;

/// UI (TUI) specific sub-commands executed by the host/runtime
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum TuiCommand {
    // Rendering is driven by AppRunner after every processed step, so only
    // host-level terminal changes go through here.
    Resize { width: u16, height: u16 },
}

/// Elm-like command definitions
/// Represents side effects (network calls, audio playback, file I/O, clipboard)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Cmd {
    // Gateway calls; completion is reported back as a ServiceMsg
    Translate {
        text: String,
        source: String,
        target: String,
    },
    Speak {
        text: String,
        language: String,
    },

    // Persist the in-memory language pair
    SaveLanguages(LanguagePair),

    // Clipboard
    CopyToClipboard(String),
    ReadClipboard,

    // UI-related commands
    Tui(TuiCommand),

    // Logging related
    LogError {
        message: String,
    },
    LogInfo {
        message: String,
    },
}

impl Cmd {
    /// Human-readable name used in execution logs
    pub fn name(&self) -> String {
        match self {
            Cmd::Translate { .. } => "Translate".to_string(),
            Cmd::Speak { .. } => "Speak".to_string(),
            Cmd::SaveLanguages(..) => "SaveLanguages".to_string(),
            Cmd::CopyToClipboard(..) => "CopyToClipboard".to_string(),
            Cmd::ReadClipboard => "ReadClipboard".to_string(),
            Cmd::Tui(TuiCommand::Resize { .. }) => "Tui(Resize)".to_string(),
            Cmd::LogError { .. } => "LogError".to_string(),
            Cmd::LogInfo { .. } => "LogInfo".to_string(),
        }
    }
}
