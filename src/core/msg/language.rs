use crossterm::event::KeyEvent;
use serde::{Deserialize, Serialize};

use crate::domain::language::LanguageSide;

/// Messages for the language pair
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum LanguageMsg {
    // Language prompt popup
    OpenPrompt(LanguageSide),
    PromptKey(KeyEvent),
    PromptPaste(String),
    SubmitPrompt,
    CancelPrompt,

    /// Set one side to a display name or code
    Change { side: LanguageSide, code: String },
    /// Exchange the codes and the contents of both buffers
    Swap,
}
