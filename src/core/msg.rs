use serde::{Deserialize, Serialize};

pub mod editor;
pub mod language;
pub mod service;
pub mod system;

use editor::EditorMsg;
use language::LanguageMsg;
use service::ServiceMsg;
use system::SystemMsg;

/// Domain messages representing application intent
/// These are processed by the update function and represent pure domain events
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Msg {
    // System operations (delegated to SystemState)
    System(SystemMsg),

    // Input buffer editing
    Editor(EditorMsg),

    // Language pair selection, prompt and swap
    Language(LanguageMsg),

    // Translate / speak requests and their completions
    Service(ServiceMsg),
}

impl Msg {
    /// Helper to exclude frequent messages during debugging
    pub fn is_frequent(&self) -> bool {
        match self {
            Msg::Editor(editor_msg) => editor_msg.is_frequent(),
            _ => false,
        }
    }
}
