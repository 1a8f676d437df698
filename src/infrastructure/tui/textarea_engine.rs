use crossterm::event::{Event, KeyEvent};
use tui_textarea::{CursorMove, TextArea};

use crate::core::textarea_engine::TextAreaEngine;
use crate::domain::text_buffer::{BufferSnapshot, CursorPosition, TextSelection};

/// Production engine based on tui-textarea. It constructs a temporary TextArea,
/// hydrates it from the given snapshot, applies keys, then extracts the new snapshot.
pub struct TuiTextAreaEngine;

impl TuiTextAreaEngine {
    /// Fresh TextArea holding the snapshot's lines, cursor and selection.
    pub fn restore_textarea_from_snapshot(snapshot: &BufferSnapshot) -> TextArea<'static> {
        let mut textarea = TextArea::new(snapshot.lines.clone());
        match &snapshot.selection {
            Some(selection) => Self::restore_selection(&mut textarea, selection),
            None => jump(&mut textarea, snapshot.cursor),
        }
        textarea
    }

    fn extract_cursor_position(textarea: &TextArea<'_>) -> CursorPosition {
        let (line, column) = textarea.cursor();
        CursorPosition::new(line, column)
    }

    /// tui-textarea reports the range in document order; the end that is not
    /// under the cursor is the anchor.
    fn extract_selection(textarea: &TextArea<'_>) -> Option<TextSelection> {
        let cursor = Self::extract_cursor_position(textarea);
        textarea.selection_range().map(|((sr, sc), (er, ec))| {
            let start = CursorPosition::new(sr, sc);
            let end = CursorPosition::new(er, ec);
            let anchor = if cursor == start { end } else { start };
            TextSelection::new(anchor, cursor)
        })
    }

    fn restore_selection(textarea: &mut TextArea<'_>, selection: &TextSelection) {
        jump(textarea, selection.anchor);
        textarea.start_selection();
        jump(textarea, selection.active);
    }
}

fn jump(textarea: &mut TextArea<'_>, position: CursorPosition) {
    let row = u16::try_from(position.line).unwrap_or(u16::MAX);
    let col = u16::try_from(position.column).unwrap_or(u16::MAX);
    textarea.move_cursor(CursorMove::Jump(row, col));
}

impl TextAreaEngine for TuiTextAreaEngine {
    fn apply_keys(&self, snapshot: &BufferSnapshot, keys: &[KeyEvent]) -> BufferSnapshot {
        let mut textarea = Self::restore_textarea_from_snapshot(snapshot);
        for key in keys {
            textarea.input(Event::Key(*key));
        }
        BufferSnapshot {
            lines: textarea.lines().to_vec(),
            cursor: Self::extract_cursor_position(&textarea),
            selection: Self::extract_selection(&textarea),
        }
    }
}
