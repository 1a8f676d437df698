use std::collections::HashMap;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use derive_deref::{Deref, DerefMut};
use serde::{de::Deserializer, Deserialize, Serialize};
use strum::Display;

use crate::domain::editing::EditOp;

/// Everything a key can be bound to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
pub enum Action {
    Translate,
    Speak,
    InsertNewline,
    Swap,
    ChangeSourceLanguage,
    ChangeTargetLanguage,
    MoveLineStart,
    MoveLineEnd,
    MoveBufferStart,
    MoveBufferEnd,
    DeleteToLineStart,
    DeleteWordBackward,
    SelectAll,
    Undo,
    Copy,
    Cut,
    Paste,
    Quit,
}

impl Action {
    /// The buffer operation behind an editing action
    pub fn edit_op(self) -> Option<EditOp> {
        let op = match self {
            Action::InsertNewline => EditOp::InsertNewline,
            Action::MoveLineStart => EditOp::MoveLineStart,
            Action::MoveLineEnd => EditOp::MoveLineEnd,
            Action::MoveBufferStart => EditOp::MoveBufferStart,
            Action::MoveBufferEnd => EditOp::MoveBufferEnd,
            Action::DeleteToLineStart => EditOp::DeleteToLineStart,
            Action::DeleteWordBackward => EditOp::DeleteWordBackward,
            Action::SelectAll => EditOp::SelectAll,
            Action::Undo => EditOp::Undo,
            _ => return None,
        };
        Some(op)
    }
}

/// Key -> action table. Keys are stored normalized (code and modifiers only).
#[derive(Clone, Debug, Default, Deref, DerefMut)]
pub struct KeyBindings(pub HashMap<KeyEvent, Action>);

impl<'de> Deserialize<'de> for KeyBindings {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let parsed_map = HashMap::<String, Action>::deserialize(deserializer)?;

        let keybindings = parsed_map
            .into_iter()
            .map(|(key_str, action)| {
                parse_key_event(&key_str)
                    .map(|key| (key, action))
                    .map_err(serde::de::Error::custom)
            })
            .collect::<Result<_, _>>()?;

        Ok(KeyBindings(keybindings))
    }
}

/// Parses `<ctrl-enter>`, `<f5>`, `<alt-backspace>`, `<ctrl-a>` and the like.
/// The surrounding angle brackets are optional.
pub fn parse_key_event(raw: &str) -> Result<KeyEvent, String> {
    let trimmed = raw.trim();
    let inner = trimmed
        .strip_prefix('<')
        .and_then(|s| s.strip_suffix('>'))
        .unwrap_or(trimmed);
    if inner.is_empty() {
        return Err(format!("Empty key binding: {raw}"));
    }

    let lowered = inner.to_ascii_lowercase();
    let (modifiers, key) = parse_modifiers(&lowered);
    let code = parse_key_code(key).ok_or_else(|| format!("Unable to parse key `{raw}`"))?;

    // Shifted letters arrive as upper-case chars from crossterm
    let code = match code {
        KeyCode::Char(c) if modifiers.contains(KeyModifiers::SHIFT) => {
            KeyCode::Char(c.to_ascii_uppercase())
        }
        other => other,
    };
    Ok(KeyEvent::new(code, modifiers))
}

fn parse_modifiers(raw: &str) -> (KeyModifiers, &str) {
    let mut modifiers = KeyModifiers::empty();
    let mut current = raw;

    loop {
        let rest = if let Some(rest) = current.strip_prefix("ctrl-") {
            modifiers.insert(KeyModifiers::CONTROL);
            rest
        } else if let Some(rest) = current.strip_prefix("alt-") {
            modifiers.insert(KeyModifiers::ALT);
            rest
        } else if let Some(rest) = current.strip_prefix("shift-") {
            modifiers.insert(KeyModifiers::SHIFT);
            rest
        } else {
            break;
        };
        current = rest;
    }

    (modifiers, current)
}

fn parse_key_code(raw: &str) -> Option<KeyCode> {
    let code = match raw {
        "esc" | "escape" => KeyCode::Esc,
        "enter" | "return" => KeyCode::Enter,
        "left" => KeyCode::Left,
        "right" => KeyCode::Right,
        "up" => KeyCode::Up,
        "down" => KeyCode::Down,
        "home" => KeyCode::Home,
        "end" => KeyCode::End,
        "pageup" => KeyCode::PageUp,
        "pagedown" => KeyCode::PageDown,
        "backtab" => KeyCode::BackTab,
        "backspace" => KeyCode::Backspace,
        "delete" | "del" => KeyCode::Delete,
        "insert" => KeyCode::Insert,
        "tab" => KeyCode::Tab,
        "space" => KeyCode::Char(' '),
        "hyphen" | "minus" => KeyCode::Char('-'),
        other => {
            if let Some(n) = other.strip_prefix('f').and_then(|n| n.parse::<u8>().ok()) {
                if (1..=12).contains(&n) {
                    return Some(KeyCode::F(n));
                }
            }
            let mut chars = other.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) => KeyCode::Char(c),
                _ => return None,
            }
        }
    };
    Some(code)
}

/// Inverse of [`parse_key_event`], used for hints and logs.
pub fn key_event_to_string(key: &KeyEvent) -> String {
    let code = match key.code {
        KeyCode::Backspace => "backspace".to_string(),
        KeyCode::Enter => "enter".to_string(),
        KeyCode::Left => "left".to_string(),
        KeyCode::Right => "right".to_string(),
        KeyCode::Up => "up".to_string(),
        KeyCode::Down => "down".to_string(),
        KeyCode::Home => "home".to_string(),
        KeyCode::End => "end".to_string(),
        KeyCode::PageUp => "pageup".to_string(),
        KeyCode::PageDown => "pagedown".to_string(),
        KeyCode::Tab => "tab".to_string(),
        KeyCode::BackTab => "backtab".to_string(),
        KeyCode::Delete => "delete".to_string(),
        KeyCode::Insert => "insert".to_string(),
        KeyCode::F(n) => format!("f{n}"),
        KeyCode::Char(' ') => "space".to_string(),
        KeyCode::Char('-') => "hyphen".to_string(),
        KeyCode::Char(c) => c.to_ascii_lowercase().to_string(),
        KeyCode::Esc => "esc".to_string(),
        _ => "unknown".to_string(),
    };

    let mut parts = Vec::new();
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        parts.push("ctrl".to_string());
    }
    if key.modifiers.contains(KeyModifiers::SHIFT) {
        parts.push("shift".to_string());
    }
    if key.modifiers.contains(KeyModifiers::ALT) {
        parts.push("alt".to_string());
    }
    parts.push(code);

    format!("<{}>", parts.join("-"))
}
