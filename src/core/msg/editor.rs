use crossterm::event::KeyEvent;
use serde::{Deserialize, Serialize};

use crate::domain::editing::EditOp;

/// Messages that edit the input buffer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum EditorMsg {
    /// Editor operation handled by the binding layer
    Apply(EditOp),
    /// Unbound key, delegated to the text area engine
    Key(KeyEvent),

    // Clipboard passthrough
    Copy,
    Cut,
    Paste,
    /// Text read back from the clipboard; lands wherever focus is on arrival
    ClipboardText(String),
}

impl EditorMsg {
    /// Plain typing produces one message per key press
    pub fn is_frequent(&self) -> bool {
        matches!(self, EditorMsg::Key(_))
    }
}
